// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Completion engine
//!
//! This module orchestrates one completion request: extract the identifier
//! chain at the cursor, build the alias map, and resolve the chain through
//! a fixed priority order of contexts.
//!
//! ## Resolution order
//!
//! ```text
//! 1. chain == destination prefix          -> destination table listing
//! 2. chain == <destination prefix>.<t>    -> destination columns of t
//! 3. chain == <source prefix>.<t>         -> source columns of t
//! 4. chain is an alias                    -> columns of the aliased table
//! 5. chain is a local table               -> its columns
//! 6. no chain                             -> local tables + prefix hints
//! ```
//!
//! The first matching branch wins; when none applies the result is empty.
//! Every failure mode degrades to an empty candidate list, the host never
//! sees an error from this path.

use std::sync::Arc;

use tracing::{debug, instrument};

use sqlhint_schema::{LoadingSignal, LocalSchema, Namespace, SchemaFetcher, SchemaRegistry};

use crate::alias::AliasMap;
use crate::candidate::{Candidate, CandidateKind};
use crate::chain::{IdentifierChain, chain_before_cursor};

// Literals the namespace prefixes are built from: the lowercased display
// name is appended onto these.
const DESTINATION_PREFIX_LITERAL: &str = "pg_";
const SOURCE_PREFIX_LITERAL: &str = "pg_src_";

/// Zero-based cursor position within the statement text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Line index within the statement
    pub row: u32,
    /// Character offset within the line
    pub column: u32,
}

impl Position {
    /// Create a position from row and column
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

/// Per-request inputs from the host editor
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    /// Full statement text, may span multiple lines
    pub statement: &'a str,
    /// Cursor position within the statement
    pub position: Position,
    /// Word fragment under the cursor; carried for the host's own
    /// filtering, resolution keys off the line text instead
    pub prefix: &'a str,
}

impl<'a> CompletionRequest<'a> {
    /// Create a request
    pub fn new(statement: &'a str, position: Position, prefix: &'a str) -> Self {
        Self {
            statement,
            position,
            prefix,
        }
    }

    fn line_at_cursor(&self) -> &'a str {
        self.statement
            .lines()
            .nth(self.position.row as usize)
            .unwrap_or("")
    }
}

/// Context-aware completion engine for one editing session
///
/// An engine is bound to one destination/source pair. When either
/// selection changes, build a new engine: the schema cache inside keys
/// entries by table name only, so reusing it across pairs would serve
/// stale names.
pub struct CompletionEngine {
    local: LocalSchema,
    registry: SchemaRegistry,
    destination_prefix: Option<String>,
    source_prefix: Option<String>,
}

impl CompletionEngine {
    /// Start building an engine over the two namespace fetchers
    ///
    /// # Arguments
    ///
    /// * `local` - Tables already known to the session
    /// * `destination` - Fetcher for the destination database
    /// * `source` - Fetcher for the pipeline's origin database
    pub fn builder(
        local: LocalSchema,
        destination: Arc<dyn SchemaFetcher>,
        source: Arc<dyn SchemaFetcher>,
    ) -> CompletionEngineBuilder {
        CompletionEngineBuilder {
            local,
            destination,
            source,
            destination_name: None,
            source_name: None,
            loading: LoadingSignal::disabled(),
        }
    }

    /// Produce completion candidates for one request
    ///
    /// Infallible by design: fetch failures and unparseable statements
    /// degrade to an empty list.
    #[instrument(
        skip(self, request),
        fields(row = request.position.row, column = request.position.column)
    )]
    pub async fn complete(&self, request: &CompletionRequest<'_>) -> Vec<Candidate> {
        let line = request.line_at_cursor();
        match chain_before_cursor(line, request.position.column as usize) {
            Some(chain) => {
                let aliases = AliasMap::extract(request.statement);
                self.resolve_chain(&chain, &aliases).await
            }
            None => self.flat_candidates(),
        }
    }

    /// Resolve an extracted chain through the priority branches
    async fn resolve_chain(&self, chain: &IdentifierChain, aliases: &AliasMap) -> Vec<Candidate> {
        let key = chain.folded();

        if let Some(prefix) = &self.destination_prefix {
            if key == prefix.as_str() {
                debug!(chain = key, "chain names the destination namespace");
                let tables = self.registry.tables(Namespace::Destination).await;
                return to_candidates(tables, CandidateKind::DestinationTable);
            }
            if let Some(table) = in_namespace(key, prefix) {
                return self
                    .namespace_columns(
                        Namespace::Destination,
                        table,
                        CandidateKind::DestinationColumn,
                    )
                    .await;
            }
        }

        if let Some(prefix) = &self.source_prefix
            && let Some(table) = in_namespace(key, prefix)
        {
            return self
                .namespace_columns(Namespace::Source, table, CandidateKind::SourceColumn)
                .await;
        }

        if let Some(table) = aliases.resolve(key) {
            debug!(chain = key, table, "chain is an alias");
            return self.table_columns(table).await;
        }

        if let Some(columns) = self.local.columns(key) {
            return to_candidates(columns.to_vec(), CandidateKind::SourceColumn);
        }

        debug!(chain = key, "chain matched no namespace, alias, or table");
        Vec::new()
    }

    /// Columns of a table an alias resolved to
    ///
    /// The aliased name may be a local table or carry a namespace prefix
    /// itself, as in `FROM pg_d1.orders o`.
    async fn table_columns(&self, table: &str) -> Vec<Candidate> {
        if let Some(columns) = self.local.columns(table) {
            return to_candidates(columns.to_vec(), CandidateKind::SourceColumn);
        }

        if let Some(prefix) = &self.destination_prefix
            && let Some(inner) = in_namespace(table, prefix)
        {
            return self
                .namespace_columns(Namespace::Destination, inner, CandidateKind::DestinationColumn)
                .await;
        }

        if let Some(prefix) = &self.source_prefix
            && let Some(inner) = in_namespace(table, prefix)
        {
            return self
                .namespace_columns(Namespace::Source, inner, CandidateKind::SourceColumn)
                .await;
        }

        Vec::new()
    }

    async fn namespace_columns(
        &self,
        namespace: Namespace,
        table: &str,
        kind: CandidateKind,
    ) -> Vec<Candidate> {
        let columns = self.registry.columns(namespace, table).await;
        to_candidates(columns, kind)
    }

    /// Flat fallback when the cursor is not after a dot: every local table
    /// plus one hint entry per configured namespace prefix
    fn flat_candidates(&self) -> Vec<Candidate> {
        let mut candidates: Vec<Candidate> = self
            .local
            .table_names()
            .map(|name| Candidate::new(name, CandidateKind::SourceTable))
            .collect();

        if let Some(prefix) = &self.destination_prefix {
            candidates.push(Candidate::new(prefix.clone(), CandidateKind::DestinationSchema));
        }
        if let Some(prefix) = &self.source_prefix {
            candidates.push(Candidate::new(prefix.clone(), CandidateKind::SourceSchema));
        }
        candidates
    }
}

/// Builder for [`CompletionEngine`]
pub struct CompletionEngineBuilder {
    local: LocalSchema,
    destination: Arc<dyn SchemaFetcher>,
    source: Arc<dyn SchemaFetcher>,
    destination_name: Option<String>,
    source_name: Option<String>,
    loading: LoadingSignal,
}

impl CompletionEngineBuilder {
    /// Set the destination display name, enabling the `pg_` prefix branch
    pub fn with_destination_name(mut self, name: impl AsRef<str>) -> Self {
        self.destination_name = Some(name.as_ref().to_string());
        self
    }

    /// Set the source display name, enabling the `pg_src_` prefix branch
    pub fn with_source_name(mut self, name: impl AsRef<str>) -> Self {
        self.source_name = Some(name.as_ref().to_string());
        self
    }

    /// Observe fetch start/settle events, typically to drive a spinner
    pub fn with_loading_observer(
        mut self,
        observer: impl Fn(bool) + Send + Sync + 'static,
    ) -> Self {
        self.loading = LoadingSignal::new(observer);
        self
    }

    /// Build the engine
    pub fn build(self) -> CompletionEngine {
        CompletionEngine {
            local: self.local,
            registry: SchemaRegistry::new(self.destination, self.source, self.loading),
            destination_prefix: self
                .destination_name
                .map(|name| namespace_prefix(DESTINATION_PREFIX_LITERAL, &name)),
            source_prefix: self
                .source_name
                .map(|name| namespace_prefix(SOURCE_PREFIX_LITERAL, &name)),
        }
    }
}

fn namespace_prefix(literal: &str, display_name: &str) -> String {
    format!("{literal}{}", display_name.to_lowercase())
}

/// `<prefix>.<table>` pattern match, returning the table portion
fn in_namespace<'a>(chain: &'a str, prefix: &str) -> Option<&'a str> {
    chain.strip_prefix(prefix)?.strip_prefix('.')
}

fn to_candidates(names: Vec<String>, kind: CandidateKind) -> Vec<Candidate> {
    names
        .into_iter()
        .map(|name| Candidate::new(name, kind))
        .collect()
}
