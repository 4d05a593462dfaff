// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Completion candidates
//!
//! This module defines the records handed back to the host editor: a
//! caption, the text to insert, a classification label, and a rank score.
//! The engine only assigns scores; sorting and rendering stay with the
//! host.

use std::fmt;

use serde::Serialize;

// Scoring constants for candidate ranking.
// Higher scores = higher priority in the host's suggestion list.

// Destination table listing, the most specific context.
const SCORE_DESTINATION_TABLE: i32 = 2000;
// Any resolved column set, local or remote.
const SCORE_COLUMN: i32 = 1000;
// Namespace prefix hints offered in the flat fallback.
const SCORE_NAMESPACE_HINT: i32 = 600;
// Local tables offered in the flat fallback.
const SCORE_LOCAL_TABLE: i32 = 500;

/// Classification label attached to each candidate
///
/// Serialized as the literal label string the host renders in its meta
/// column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CandidateKind {
    /// Table in the destination namespace
    #[serde(rename = "dest table")]
    DestinationTable,
    /// Column fetched from the destination namespace
    #[serde(rename = "dest column")]
    DestinationColumn,
    /// Column of a local table or of a source-database table
    #[serde(rename = "source column")]
    SourceColumn,
    /// Table known to the local schema
    #[serde(rename = "source table")]
    SourceTable,
    /// The destination namespace prefix itself
    #[serde(rename = "destination schema")]
    DestinationSchema,
    /// The source namespace prefix itself
    #[serde(rename = "source schema")]
    SourceSchema,
}

impl CandidateKind {
    /// Label shown in the host's meta column
    pub fn label(self) -> &'static str {
        match self {
            CandidateKind::DestinationTable => "dest table",
            CandidateKind::DestinationColumn => "dest column",
            CandidateKind::SourceColumn => "source column",
            CandidateKind::SourceTable => "source table",
            CandidateKind::DestinationSchema => "destination schema",
            CandidateKind::SourceSchema => "source schema",
        }
    }

    /// Rank score the host sorts by
    pub fn score(self) -> i32 {
        match self {
            CandidateKind::DestinationTable => SCORE_DESTINATION_TABLE,
            CandidateKind::DestinationColumn | CandidateKind::SourceColumn => SCORE_COLUMN,
            CandidateKind::DestinationSchema | CandidateKind::SourceSchema => SCORE_NAMESPACE_HINT,
            CandidateKind::SourceTable => SCORE_LOCAL_TABLE,
        }
    }
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One suggested insertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Display text, schema casing preserved
    pub caption: String,
    /// Text inserted on accept
    pub value: String,
    /// Classification label
    pub meta: CandidateKind,
    /// Rank score derived from the kind
    pub score: i32,
}

impl Candidate {
    /// Create a candidate whose caption and value are the same name
    pub fn new(name: impl Into<String>, kind: CandidateKind) -> Self {
        let name = name.into();
        Self {
            caption: name.clone(),
            value: name,
            meta: kind,
            score: kind.score(),
        }
    }
}
