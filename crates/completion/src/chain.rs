// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Identifier chain extraction
//!
//! This module finds the dotted identifier chain immediately preceding the
//! cursor, the key the rest of the completion pipeline resolves against.
//!
//! A chain is the longest run of dot-separated segments ending in a literal
//! dot directly before the cursor, with only whitespace allowed between the
//! dot and the cursor. `pg_d1.users.` at the cursor yields the chain
//! `pg_d1.users`. When the text before the cursor does not end in such a
//! run, there is no chain and the engine falls back to flat suggestions.

use std::sync::LazyLock;

use regex::Regex;

// Longest trailing run of dot-separated segments, final dot included.
static CHAIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z0-9_-]+(?:\.[A-Za-z0-9_-]+)*)\.\s*$").unwrap());

/// Dotted identifier chain extracted before the cursor
///
/// Matching always runs on the lowercased form; the typed form is kept so
/// hosts can echo what the user actually wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierChain {
    typed: String,
    folded: String,
}

impl IdentifierChain {
    fn new(typed: &str) -> Self {
        Self {
            folded: typed.to_lowercase(),
            typed: typed.to_string(),
        }
    }

    /// The chain as the user typed it, trailing dot excluded
    pub fn typed(&self) -> &str {
        &self.typed
    }

    /// Lowercased form used for all resolution
    pub fn folded(&self) -> &str {
        &self.folded
    }
}

/// Extract the identifier chain ending at `column` on `line`
///
/// `column` is the zero-based cursor position counted in characters.
/// Positions past the end of the line behave as if the cursor sat at the
/// line end.
///
/// # Returns
///
/// The chain, or `None` when the cursor is not right after a dotted run.
///
/// # Examples
///
/// ```rust,ignore
/// let chain = chain_before_cursor("SELECT * FROM pg_d1.", 20).unwrap();
/// assert_eq!(chain.folded(), "pg_d1");
/// ```
pub fn chain_before_cursor(line: &str, column: usize) -> Option<IdentifierChain> {
    let before: String = line.chars().take(column).collect();
    let captures = CHAIN_PATTERN.captures(&before)?;
    Some(IdentifierChain::new(captures.get(1)?.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_at_end(line: &str) -> Option<IdentifierChain> {
        chain_before_cursor(line, line.chars().count())
    }

    #[test]
    fn test_single_segment() {
        let chain = chain_at_end("SELECT * FROM events.").unwrap();
        assert_eq!(chain.folded(), "events");
        assert_eq!(chain.typed(), "events");
    }

    #[test]
    fn test_multi_segment_chain() {
        let chain = chain_at_end("SELECT pg_d1.users.").unwrap();
        assert_eq!(chain.folded(), "pg_d1.users");
    }

    #[test]
    fn test_casing_folded_but_typed_kept() {
        let chain = chain_at_end("Events.").unwrap();
        assert_eq!(chain.folded(), "events");
        assert_eq!(chain.typed(), "Events");
    }

    #[test]
    fn test_whitespace_between_dot_and_cursor() {
        let chain = chain_at_end("events.   ").unwrap();
        assert_eq!(chain.folded(), "events");
    }

    #[test]
    fn test_hyphen_and_underscore_segments() {
        let chain = chain_at_end("my-table_2.").unwrap();
        assert_eq!(chain.folded(), "my-table_2");
    }

    #[test]
    fn test_cursor_mid_line() {
        // Cursor right after "o." with more text following.
        let chain = chain_before_cursor("SELECT o. FROM orders o", 9).unwrap();
        assert_eq!(chain.folded(), "o");
    }

    #[test]
    fn test_no_trailing_dot() {
        assert!(chain_at_end("SELECT * FROM events").is_none());
        assert!(chain_at_end("events.id").is_none());
    }

    #[test]
    fn test_detached_dot_has_no_chain() {
        assert!(chain_at_end("events .").is_none());
    }

    #[test]
    fn test_empty_line() {
        assert!(chain_at_end("").is_none());
        assert!(chain_before_cursor("", 10).is_none());
    }

    #[test]
    fn test_column_past_line_end() {
        let chain = chain_before_cursor("events.", 40).unwrap();
        assert_eq!(chain.folded(), "events");
    }

    #[test]
    fn test_column_cuts_off_dot() {
        // Cursor sits before the dot, so the run does not end in one.
        assert!(chain_before_cursor("events.", 6).is_none());
    }

    #[test]
    fn test_multibyte_text_before_chain() {
        // "désc" is commentary, cursor counted in characters not bytes.
        let line = "-- désc\u{301} events.";
        let chain = chain_before_cursor(line, line.chars().count()).unwrap();
        assert_eq!(chain.folded(), "events");
    }
}
