// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Local Schema
//!
//! This module provides the table definitions already known to the editor
//! session, typically the tables configured on the pipeline being edited.
//! Lookups are case-insensitive while display casing is preserved.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sqlhint_schema::LocalSchema;
//!
//! let schema = LocalSchema::new()
//!     .with_table("orders", ["id", "customer_id", "amount"]);
//! assert!(schema.contains("ORDERS"));
//! ```

use serde::{Deserialize, Serialize};

/// One locally known table and its columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct LocalTable {
    name: String,
    columns: Vec<String>,
}

/// Table definitions known to the session, in insertion order
///
/// Insertion order is meaningful: flat fallback suggestions list the tables
/// in the order the host registered them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalSchema {
    tables: Vec<LocalTable>,
}

impl LocalSchema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table and its columns
    ///
    /// Re-registering a table name (compared case-insensitively) replaces
    /// the earlier definition in place, keeping its position.
    ///
    /// # Arguments
    ///
    /// * `name` - Table display name
    /// * `columns` - Column display names
    pub fn with_table<I, S>(mut self, name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let table = LocalTable {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        };
        match self.position(&table.name) {
            Some(index) => self.tables[index] = table,
            None => self.tables.push(table),
        }
        self
    }

    /// Columns of `table`, or `None` if the table is unknown
    ///
    /// The lookup ignores case.
    pub fn columns(&self, table: &str) -> Option<&[String]> {
        self.position(table)
            .map(|index| self.tables[index].columns.as_slice())
    }

    /// Whether `table` is registered, ignoring case
    pub fn contains(&self, table: &str) -> bool {
        self.position(table).is_some()
    }

    /// Table display names in insertion order
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|table| table.name.as_str())
    }

    /// Number of registered tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether no tables are registered
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.tables
            .iter()
            .position(|table| table.name.eq_ignore_ascii_case(name))
    }
}
