// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # sqlhint - Schema Layer
//!
//! This crate provides schema access for the sqlhint completion engine.
//! It defines the `SchemaFetcher` trait and the session-scoped state built
//! on top of it:
//!
//! - **Local Schema**: Table definitions already known to the editor session
//! - **Schema Registry**: The two remote namespaces (destination and source)
//!   behind a shared cache and a loading signal
//! - **Schema Cache**: Per-session memoization of fetch results
//!
//! ## Architecture
//!
//! The schema layer is responsible for:
//! - Abstracting the destination and source database endpoints
//! - Memoizing table listings and column sets for the session lifetime
//! - Telling the host when a remote fetch is in flight
//! - Degrading fetch failures to empty results instead of surfacing errors
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sqlhint_schema::{Namespace, SchemaRegistry};
//!
//! async fn print_tables(registry: &SchemaRegistry) {
//!     for table in registry.tables(Namespace::Destination).await {
//!         println!("{table}");
//!     }
//! }
//! ```
//!
//! ## Implementing the SchemaFetcher Trait
//!
//! To implement a custom fetcher:
//!
//! ```rust,ignore
//! use sqlhint_schema::{SchemaFetcher, SchemaResult};
//! use async_trait::async_trait;
//!
//! struct MyFetcher;
//!
//! #[async_trait]
//! impl SchemaFetcher for MyFetcher {
//!     async fn list_tables(&self) -> SchemaResult<Vec<String>> {
//!         // Your implementation here
//!     }
//!
//!     async fn get_columns(&self, table: &str) -> SchemaResult<Vec<String>> {
//!         // Your implementation here
//!     }
//! }
//! ```

pub mod cache;
pub mod error;
pub mod loading;
pub mod local;
pub mod registry;
pub mod r#trait;

// Re-exports
pub use cache::{CacheKey, SchemaCache};
pub use error::{SchemaError, SchemaResult};
pub use loading::{LoadingGuard, LoadingObserver, LoadingSignal};
pub use local::LocalSchema;
pub use registry::{Namespace, SchemaRegistry};
pub use r#trait::SchemaFetcher;
