// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Mock schema fetcher implementation for testing
//!
//! Provides an in-memory fetcher with builder pattern for easy test setup.
//! Call counters make cache behavior observable from tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use sqlhint_schema::{SchemaError, SchemaFetcher, SchemaResult};

/// In-memory mock schema fetcher for testing
#[derive(Debug, Default)]
pub struct MockSchemaFetcher {
    tables: Vec<String>,
    columns: HashMap<String, Vec<String>>,
    failure: Option<SchemaError>,
    list_calls: AtomicUsize,
    column_calls: AtomicUsize,
}

impl MockSchemaFetcher {
    /// Create a new empty mock fetcher
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `list_tables` was invoked
    pub fn list_table_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// How many times `get_columns` was invoked
    pub fn column_calls(&self) -> usize {
        self.column_calls.load(Ordering::SeqCst)
    }

    /// Total fetch invocations across both methods
    pub fn total_calls(&self) -> usize {
        self.list_table_calls() + self.column_calls()
    }
}

#[async_trait::async_trait]
impl SchemaFetcher for MockSchemaFetcher {
    async fn list_tables(&self) -> SchemaResult<Vec<String>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(self.tables.clone()),
        }
    }

    async fn get_columns(&self, table: &str) -> SchemaResult<Vec<String>> {
        self.column_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.columns
            .get(&table.to_lowercase())
            .cloned()
            .ok_or_else(|| SchemaError::TableNotFound(table.to_string()))
    }
}

/// Builder for creating mock fetchers with a fluent API
#[derive(Debug, Default)]
pub struct MockSchemaFetcherBuilder {
    fetcher: MockSchemaFetcher,
}

impl MockSchemaFetcherBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table and its columns
    ///
    /// The table listing keeps the display casing; column lookups match
    /// the name case-insensitively.
    pub fn with_table<I, S>(mut self, name: &str, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fetcher.tables.push(name.to_string());
        self.fetcher.columns.insert(
            name.to_lowercase(),
            columns.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Add the standard destination schema (users, orders, products)
    pub fn with_standard_tables(self) -> Self {
        self.with_table("users", ["id", "email", "name", "created_at"])
            .with_table("orders", ["id", "user_id", "total", "status"])
            .with_table("products", ["id", "name", "price", "stock"])
    }

    /// Make every fetch fail with `error`
    pub fn failing_with(mut self, error: SchemaError) -> Self {
        self.fetcher.failure = Some(error);
        self
    }

    /// Make every fetch fail with a generic fetch failure
    pub fn failing(self) -> Self {
        self.failing_with(SchemaError::FetchFailed("mock failure".to_string()))
    }

    /// Build the mock fetcher
    pub fn build(self) -> MockSchemaFetcher {
        self.fetcher
    }
}
