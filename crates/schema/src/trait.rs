// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SchemaFetcher trait for namespace access
//!
//! This module defines the async SchemaFetcher trait used for querying the
//! remote schema namespaces reachable from a pipeline.

use crate::error::SchemaResult;

/// Async access to one schema namespace
///
/// This trait provides an async interface for listing tables and reading
/// column sets. Implementations can query live databases, call HTTP schema
/// endpoints, or serve canned data in tests.
///
/// # Examples
///
/// ```rust,ignore
/// use sqlhint_schema::{SchemaError, SchemaFetcher};
///
/// async fn count_tables(fetcher: &impl SchemaFetcher) -> Result<usize, SchemaError> {
///     Ok(fetcher.list_tables().await?.len())
/// }
/// ```
#[async_trait::async_trait]
pub trait SchemaFetcher: Send + Sync {
    /// List all tables in the namespace
    ///
    /// # Returns
    ///
    /// A vector of table display names.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ConnectionFailed` if the endpoint is unreachable.
    /// Returns `SchemaError::Timeout` if the request exceeds its deadline.
    async fn list_tables(&self) -> SchemaResult<Vec<String>>;

    /// Get column names for a specific table
    ///
    /// # Arguments
    ///
    /// * `table` - Table name, folded to lowercase by callers in this crate
    ///
    /// # Returns
    ///
    /// A vector of column display names.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::TableNotFound` if the table doesn't exist.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let columns = fetcher.get_columns("users").await?;
    /// for column in columns {
    ///     println!("{column}");
    /// }
    /// ```
    async fn get_columns(&self, table: &str) -> SchemaResult<Vec<String>>;
}
