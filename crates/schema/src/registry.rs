// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Schema Source Registry
//!
//! This module wires the two remote namespaces behind the session cache and
//! the loading signal. All registry reads are infallible: a failed fetch is
//! logged and degraded to an empty list so the completion path never has to
//! surface schema errors to the editor.
//!
//! ## Fetch protocol
//!
//! Every cache miss runs the same sequence:
//!
//! 1. signal `true`
//! 2. await the fetcher
//! 3. signal `false`
//! 4. store the result, unless it is empty or an error
//!
//! Failed and empty fetches are never cached, so the next identical request
//! retries the endpoint.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use crate::cache::{CacheKey, SchemaCache};
use crate::loading::LoadingSignal;
use crate::r#trait::SchemaFetcher;

/// Remote namespace reachable from a pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// The configured destination database
    Destination,
    /// The pipeline's origin database
    Source,
}

impl Namespace {
    /// Short name used in logs
    pub fn label(self) -> &'static str {
        match self {
            Namespace::Destination => "destination",
            Namespace::Source => "source",
        }
    }
}

/// The two remote namespaces behind one cache and one loading signal
///
/// Cache keys carry only the table name, not the namespace. One registry
/// therefore serves exactly one destination/source pair: when either
/// selection changes, construct a new registry instead of mutating this
/// one, or stale entries from the old pair would keep answering.
pub struct SchemaRegistry {
    destination: Arc<dyn SchemaFetcher>,
    source: Arc<dyn SchemaFetcher>,
    cache: Mutex<SchemaCache>,
    loading: LoadingSignal,
}

impl SchemaRegistry {
    /// Create a registry over the two namespace fetchers
    ///
    /// # Arguments
    ///
    /// * `destination` - Fetcher for the destination database
    /// * `source` - Fetcher for the pipeline's origin database
    /// * `loading` - Signal notified around every remote fetch
    pub fn new(
        destination: Arc<dyn SchemaFetcher>,
        source: Arc<dyn SchemaFetcher>,
        loading: LoadingSignal,
    ) -> Self {
        Self {
            destination,
            source,
            cache: Mutex::new(SchemaCache::new()),
            loading,
        }
    }

    /// Table names of `namespace`
    ///
    /// Served from the cache when possible. On a miss the namespace is
    /// queried once and a non-empty result is memoized for the session.
    pub async fn tables(&self, namespace: Namespace) -> Vec<String> {
        self.lookup(namespace, CacheKey::Tables).await
    }

    /// Column names of `table` in `namespace`
    ///
    /// The table name is folded to lowercase before keying and fetching.
    pub async fn columns(&self, namespace: Namespace, table: &str) -> Vec<String> {
        let table = table.to_lowercase();
        self.lookup(namespace, CacheKey::Columns(table)).await
    }

    /// Number of memoized fetch results
    pub fn cached_entries(&self) -> usize {
        self.cache().len()
    }

    async fn lookup(&self, namespace: Namespace, key: CacheKey) -> Vec<String> {
        if let Some(hit) = self.cache().get(&key).map(<[String]>::to_vec) {
            debug!(namespace = namespace.label(), ?key, "schema cache hit");
            return hit;
        }

        let result = {
            let _loading = self.loading.begin();
            match &key {
                CacheKey::Tables => self.fetcher(namespace).list_tables().await,
                CacheKey::Columns(table) => self.fetcher(namespace).get_columns(table).await,
            }
        };

        match result {
            Ok(names) => {
                if !names.is_empty() {
                    self.cache().insert(key, names.clone());
                }
                names
            }
            Err(error) => {
                debug!(
                    namespace = namespace.label(),
                    ?key,
                    %error,
                    "schema fetch failed, returning empty result"
                );
                Vec::new()
            }
        }
    }

    fn fetcher(&self, namespace: Namespace) -> &dyn SchemaFetcher {
        match namespace {
            Namespace::Destination => self.destination.as_ref(),
            Namespace::Source => self.source.as_ref(),
        }
    }

    // Cache writes are idempotent per key, so a lock poisoned by a panicking
    // test thread is still safe to reuse.
    fn cache(&self) -> MutexGuard<'_, SchemaCache> {
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
