// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Loading Signal
//!
//! This module tells the host when a remote schema fetch is in flight, so it
//! can show a spinner next to the editor. The protocol is a plain boolean
//! callback: `true` right before a fetch starts, `false` once it settles.
//! Every `true` is paired with exactly one `false`, whether the fetch
//! succeeds, fails, or is cancelled mid-flight.
//!
//! Cache hits never touch the signal.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sqlhint_schema::LoadingSignal;
//!
//! let signal = LoadingSignal::new(|state| println!("loading: {state}"));
//! let guard = signal.begin(); // prints "loading: true"
//! drop(guard);                // prints "loading: false"
//! ```

use std::fmt;
use std::sync::Arc;

/// Observer callback receiving fetch start and settle events
pub type LoadingObserver = dyn Fn(bool) + Send + Sync;

/// Emits paired start and settle events around remote schema fetches
#[derive(Clone, Default)]
pub struct LoadingSignal {
    observer: Option<Arc<LoadingObserver>>,
}

impl LoadingSignal {
    /// Create a signal that forwards events to `observer`
    pub fn new(observer: impl Fn(bool) + Send + Sync + 'static) -> Self {
        Self {
            observer: Some(Arc::new(observer)),
        }
    }

    /// Create a signal that notifies nobody
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Whether an observer is attached
    pub fn is_enabled(&self) -> bool {
        self.observer.is_some()
    }

    /// Emit `true` now and return the guard that emits the paired `false`
    ///
    /// The guard emits on drop, which covers early returns and futures that
    /// are dropped at an await point.
    pub fn begin(&self) -> LoadingGuard {
        if let Some(observer) = &self.observer {
            observer(true);
        }
        LoadingGuard {
            observer: self.observer.clone(),
        }
    }
}

impl fmt::Debug for LoadingSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadingSignal")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

/// Guard for one in-flight fetch, emits `false` exactly once when dropped
#[must_use = "dropping the guard emits the settle event"]
pub struct LoadingGuard {
    observer: Option<Arc<LoadingObserver>>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer(false);
        }
    }
}
