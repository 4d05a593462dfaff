// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Testing utilities for sqlhint
//!
//! This crate provides common testing components including:
//! - Mock schema fetcher with call-count instrumentation
//! - Ready-made local schemas
//! - Sample SQL statements for completion tests

pub mod fixtures;
pub mod mock_fetcher;

// Re-exports for convenience
pub use fixtures::{SqlFixtures, standard_local_schema};
pub use mock_fetcher::{MockSchemaFetcher, MockSchemaFetcherBuilder};
