// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for schema operations
//!
//! This module defines the error types used throughout the schema layer.
//! Fetch errors never reach the host: the registry degrades them to empty
//! results. They exist so fetcher implementations can report what went
//! wrong and so logs carry a cause.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur while querying a schema namespace
#[derive(Debug, Error, Clone, Serialize)]
pub enum SchemaError {
    /// Failed to reach the namespace endpoint
    #[error("Failed to connect to schema endpoint: {0}")]
    ConnectionFailed(String),

    /// The fetch request itself failed
    #[error("Schema fetch failed: {0}")]
    FetchFailed(String),

    /// The fetch timed out
    #[error("Schema fetch timed out after {0}s")]
    Timeout(u64),

    /// Requested table was not found in the namespace
    #[error("Table '{0}' not found")]
    TableNotFound(String),

    /// The namespace does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}
