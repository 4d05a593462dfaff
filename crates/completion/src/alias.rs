// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Alias extraction
//!
//! This module scans one statement for table references and the aliases
//! bound to them, producing the alias → table map the engine resolves
//! single-segment chains against.
//!
//! The scan is a best-effort pass over the literal statement text, not a
//! SQL parser. Comments are stripped first so reference keywords inside
//! comment text never register. A reference is a keyword (`FROM`, `JOIN`,
//! `UPDATE`, `INTO`, `USING`) followed by a table identifier; the next
//! bare token, with an optional leading `AS`, is taken as the alias unless
//! it is a common SQL keyword. Nested subqueries, quoted identifiers, and
//! multi-statement text may mis-resolve; that degrades to fewer or wrong
//! suggestions, never an error.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

// Block comments go first so `--` inside a block does not eat to line end.
static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"--[^\r\n]*").unwrap());

static TABLE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:FROM|JOIN|UPDATE|INTO|USING)\s+([A-Za-z0-9_.\-]+)").unwrap()
});

// Inspected against the text right after a table reference, never consumed
// by the reference match itself. A reference with no alias is followed by
// the next clause keyword, which the denylist rejects.
static ALIAS_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+(?:(?i:AS)\s+)?([A-Za-z0-9_-]+)").unwrap());

// Heuristic filter for tokens that can trail a table reference without
// being an alias. Deliberately small, not a full reserved-word list.
const ALIAS_DENYLIST: &[&str] = &[
    "select", "from", "join", "where", "as", "on", "and", "or", "group", "order", "limit", "left",
    "right", "inner", "outer", "using", "update", "set", "insert", "into",
];

/// Alias → table bindings harvested from one statement
///
/// Keys and values are lowercased. The map is rebuilt from scratch for
/// every completion request; it is derived state, not a cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap {
    entries: HashMap<String, String>,
}

impl AliasMap {
    /// Scan `statement` and collect alias bindings
    ///
    /// When the same alias is bound more than once, the last reference in
    /// statement order wins.
    pub fn extract(statement: &str) -> Self {
        let stripped = strip_comments(statement);
        let mut entries = HashMap::new();

        for reference in TABLE_REFERENCE.captures_iter(&stripped) {
            let Some(table) = reference.get(1) else {
                continue;
            };
            let Some(alias) = ALIAS_TOKEN.captures(&stripped[table.end()..]) else {
                continue;
            };
            let Some(token) = alias.get(1) else {
                continue;
            };

            let token = token.as_str().to_lowercase();
            if ALIAS_DENYLIST.contains(&token.as_str()) {
                continue;
            }
            entries.insert(token, table.as_str().to_lowercase());
        }

        debug!(bindings = entries.len(), "extracted alias map");
        Self { entries }
    }

    /// Table bound to `alias`, compared case-insensitively
    pub fn resolve(&self, alias: &str) -> Option<&str> {
        self.entries.get(&alias.to_lowercase()).map(String::as_str)
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no bindings were found
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Blank out line and block comments, keeping a space so token boundaries
/// survive. An unterminated block comment is left as-is.
fn strip_comments(statement: &str) -> String {
    let without_blocks = BLOCK_COMMENT.replace_all(statement, " ");
    LINE_COMMENT.replace_all(&without_blocks, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_alias() {
        let map = AliasMap::extract("SELECT * FROM orders o");
        assert_eq!(map.resolve("o"), Some("orders"));
    }

    #[test]
    fn test_explicit_as_alias() {
        let map = AliasMap::extract("SELECT * FROM orders AS o");
        assert_eq!(map.resolve("o"), Some("orders"));
    }

    #[test]
    fn test_lowercase_as_alias() {
        let map = AliasMap::extract("SELECT * FROM orders as o");
        assert_eq!(map.resolve("o"), Some("orders"));
    }

    #[test]
    fn test_mixed_join() {
        let map = AliasMap::extract(
            "SELECT o.id FROM orders o JOIN customers AS c ON o.customer_id = c.id",
        );
        assert_eq!(map.resolve("o"), Some("orders"));
        assert_eq!(map.resolve("c"), Some("customers"));
    }

    #[test]
    fn test_unaliased_reference_then_aliased_join() {
        let map = AliasMap::extract("SELECT * FROM orders JOIN customers AS c");
        assert_eq!(map.resolve("c"), Some("customers"));
        assert!(map.resolve("join").is_none());
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_denylisted_token_is_not_an_alias() {
        for statement in [
            "SELECT * FROM orders on",
            "SELECT * FROM orders ON",
            "SELECT * FROM orders On",
            "SELECT * FROM orders WHERE id = 1",
            "SELECT * FROM orders ORDER BY id",
        ] {
            let map = AliasMap::extract(statement);
            assert!(map.is_empty(), "unexpected alias in {statement:?}");
        }
    }

    #[test]
    fn test_last_binding_wins() {
        let map = AliasMap::extract("SELECT * FROM orders x JOIN customers x");
        assert_eq!(map.resolve("x"), Some("customers"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_names_are_folded() {
        let map = AliasMap::extract("SELECT * FROM Orders O");
        assert_eq!(map.resolve("o"), Some("orders"));
        assert_eq!(map.resolve("O"), Some("orders"));
    }

    #[test]
    fn test_update_and_into_references() {
        let update = AliasMap::extract("UPDATE users u SET u.name = 'x'");
        assert_eq!(update.resolve("u"), Some("users"));

        let insert = AliasMap::extract("INSERT INTO events e VALUES (1)");
        assert_eq!(insert.resolve("e"), Some("events"));
    }

    #[test]
    fn test_qualified_table_name() {
        let map = AliasMap::extract("SELECT * FROM pg_d1.orders d");
        assert_eq!(map.resolve("d"), Some("pg_d1.orders"));
    }

    #[test]
    fn test_line_comment_is_ignored() {
        let map = AliasMap::extract("SELECT * FROM orders o -- JOIN bogus b\nWHERE o.id = 1");
        assert_eq!(map.resolve("o"), Some("orders"));
        assert!(map.resolve("b").is_none());
    }

    #[test]
    fn test_block_comment_is_ignored() {
        let map = AliasMap::extract("SELECT * /* FROM bogus b */ FROM orders o");
        assert_eq!(map.resolve("o"), Some("orders"));
        assert!(map.resolve("b").is_none());
    }

    #[test]
    fn test_line_comment_inside_block_comment() {
        let map = AliasMap::extract("SELECT /* x -- y */ 1 FROM orders o");
        assert_eq!(map.resolve("o"), Some("orders"));
    }

    #[test]
    fn test_multiline_statement() {
        let map =
            AliasMap::extract("SELECT o.id, c.name\nFROM orders o\nJOIN customers AS c\n  ON 1=1");
        assert_eq!(map.resolve("o"), Some("orders"));
        assert_eq!(map.resolve("c"), Some("customers"));
    }

    #[test]
    fn test_alias_at_end_of_statement() {
        let map = AliasMap::extract("SELECT * FROM orders AS");
        assert!(map.is_empty());
    }

    #[test]
    fn test_no_references() {
        let map = AliasMap::extract("SELECT 1 + 1");
        assert!(map.is_empty());
    }

    #[test]
    fn test_strip_comments_keeps_boundaries() {
        assert_eq!(strip_comments("a/*x*/b"), "a b");
        assert_eq!(strip_comments("a --x\nb"), "a  \nb");
        assert_eq!(strip_comments("a /* open"), "a /* open");
    }
}
