// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # sqlhint - Completion Engine
//!
//! Context-aware identifier completion for hand-written SQL transformations
//! inside a data-pipeline editor. Given the statement text and the cursor
//! position, the engine suggests table and column names drawn from the
//! locally configured schema and from the destination and source databases
//! reachable through the pipeline.
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//! - `chain`: Extracts the dotted identifier chain before the cursor
//! - `alias`: Harvests alias → table bindings from the statement text
//! - `candidate`: Candidate records, classification labels, and scores
//! - `engine`: The priority-ordered resolution algorithm
//!
//! ## Flow
//!
//! ```text
//! 1. Host editor sends statement text + cursor position
//!    ↓
//! 2. chain_before_cursor() extracts the dotted chain, if any
//!    ↓
//! 3. AliasMap::extract() scans the statement for alias bindings
//!    ↓
//! 4. CompletionEngine.resolve_chain() walks the priority branches,
//!    fetching remote schemas through the registry as needed
//!    ↓
//! 5. Return scored candidates; the host sorts and renders
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sqlhint_completion::{CompletionEngine, CompletionRequest, Position};
//!
//! let engine = CompletionEngine::builder(local, destination, source)
//!     .with_destination_name("d1")
//!     .build();
//!
//! let request = CompletionRequest::new("SELECT * FROM pg_d1.", Position::new(0, 20), "");
//! let candidates = engine.complete(&request).await;
//! ```

pub mod alias;
pub mod candidate;
pub mod chain;
pub mod engine;

// Re-exports
pub use alias::AliasMap;
pub use candidate::{Candidate, CandidateKind};
pub use chain::{IdentifierChain, chain_before_cursor};
pub use engine::{CompletionEngine, CompletionEngineBuilder, CompletionRequest, Position};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
