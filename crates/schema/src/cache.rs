// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Schema Cache
//!
//! This module provides the per-session memoization of remote fetch results.
//! Entries live for the session: there is no TTL and no eviction. Staleness
//! against the live database is accepted, the host restarts the session to
//! refresh.
//!
//! Empty results are never stored, so a later identical request retries the
//! fetch instead of pinning an empty suggestion list for the whole session.

use std::collections::HashMap;

/// Key identifying one cached fetch result
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// The namespace table listing
    Tables,
    /// Column set of one table, keyed by lowercased name
    Columns(String),
}

impl CacheKey {
    /// Key for the column set of `table`
    ///
    /// The name is folded to lowercase so requests differing only in case
    /// share one entry.
    pub fn columns(table: &str) -> Self {
        CacheKey::Columns(table.to_lowercase())
    }
}

/// Session-lifetime store of fetched name lists
#[derive(Debug, Clone, Default)]
pub struct SchemaCache {
    entries: HashMap<CacheKey, Vec<String>>,
}

impl SchemaCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached names for `key`, if present
    pub fn get(&self, key: &CacheKey) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Store a fetch result
    ///
    /// Empty results are dropped. Re-inserting a key overwrites the earlier
    /// entry, which makes concurrent duplicate fetches harmless.
    pub fn insert(&mut self, key: CacheKey, names: Vec<String>) {
        if names.is_empty() {
            return;
        }
        self.entries.insert(key, names);
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut cache = SchemaCache::new();
        cache.insert(CacheKey::Tables, vec!["users".to_string()]);

        assert_eq!(cache.get(&CacheKey::Tables).unwrap(), ["users"]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_empty_result_not_stored() {
        let mut cache = SchemaCache::new();
        cache.insert(CacheKey::Tables, vec![]);

        assert!(cache.get(&CacheKey::Tables).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_columns_key_folds_case() {
        let mut cache = SchemaCache::new();
        cache.insert(CacheKey::columns("Orders"), vec!["id".to_string()]);

        assert_eq!(cache.get(&CacheKey::columns("orders")).unwrap(), ["id"]);
        assert_eq!(cache.get(&CacheKey::columns("ORDERS")).unwrap(), ["id"]);
    }

    #[test]
    fn test_reinsert_overwrites() {
        let mut cache = SchemaCache::new();
        cache.insert(CacheKey::Tables, vec!["a".to_string()]);
        cache.insert(CacheKey::Tables, vec!["a".to_string(), "b".to_string()]);

        assert_eq!(cache.get(&CacheKey::Tables).unwrap(), ["a", "b"]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_table_and_column_keys_are_distinct() {
        let mut cache = SchemaCache::new();
        cache.insert(CacheKey::Tables, vec!["users".to_string()]);
        cache.insert(CacheKey::columns("users"), vec!["id".to_string()]);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&CacheKey::Tables).unwrap(), ["users"]);
        assert_eq!(cache.get(&CacheKey::columns("users")).unwrap(), ["id"]);
    }
}
