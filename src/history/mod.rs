// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search history: the last few queries, most recent first.
//!
//! Append-or-promote. Submitting a query that is already in the list moves it
//! to the front instead of duplicating it. The list never grows past its cap.
//!
//! The persisted value is a JSON array of strings under one namespaced key.
//! Anything else found there (bad JSON, numbers, objects) is treated as no
//! history at all. A reader should never see an error because of a stale value
//! some older build wrote.
//!
//! **Invariants**:
//! - `entries().len() <= limit` after every operation
//! - no two entries are equal

pub mod store;

pub use store::{JsonFileStore, KeyValueStore, MemoryStore};

use crate::contracts::check_history_bounded;
use tracing::{debug, warn};

/// Storage key the site has always used.
pub const HISTORY_KEY: &str = "kumono_search_history";

/// Maximum number of remembered queries.
pub const MAX_HISTORY: usize = 5;

/// History manager over an injected key-value store.
#[derive(Debug)]
pub struct SearchHistory<S: KeyValueStore> {
    store: S,
    key: String,
    limit: usize,
    entries: Vec<String>,
}

impl<S: KeyValueStore> SearchHistory<S> {
    /// Load history from `store` with the default key and cap.
    pub fn load(store: S) -> Self {
        Self::load_with(store, HISTORY_KEY, MAX_HISTORY)
    }

    /// Load history with an explicit key and cap.
    ///
    /// Absent, unreadable or malformed values all load as empty. Over-long lists
    /// are truncated.
    pub fn load_with(store: S, key: &str, limit: usize) -> Self {
        let entries = match store.get(key) {
            Ok(Some(raw)) => parse_entries(&raw, limit),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key, error = %e, "search history unreadable, starting empty");
                Vec::new()
            }
        };
        Self {
            store,
            key: key.to_string(),
            limit,
            entries,
        }
    }

    /// Most recent first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a submitted query.
    ///
    /// Blank queries are ignored (they never trigger a search either). Equality
    /// is exact: `"Kyoto"` and `"kyoto"` are separate entries.
    pub fn submit(&mut self, query: &str) {
        if query.trim().is_empty() {
            return;
        }
        self.entries.retain(|existing| existing != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(self.limit);
        check_history_bounded(&self.entries, self.limit);
        self.persist();
    }

    /// Forget everything, in memory and in the store.
    pub fn clear(&mut self) {
        self.entries.clear();
        if let Err(e) = self.store.remove(&self.key) {
            warn!(key = %self.key, error = %e, "failed to clear search history");
        }
    }

    /// Give the store back (the CLI flushes and drops it).
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) {
        let serialized = match serde_json::to_string(&self.entries) {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "failed to serialize search history");
                return;
            }
        };
        if let Err(e) = self.store.set(&self.key, &serialized) {
            warn!(key = %self.key, error = %e, "failed to persist search history");
        }
    }
}

/// Parse a persisted value, tolerating garbage.
fn parse_entries(raw: &str, limit: usize) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(stored) => {
            let mut entries: Vec<String> = Vec::with_capacity(limit.min(stored.len()));
            for entry in stored {
                if entries.len() == limit {
                    break;
                }
                if !entries.contains(&entry) {
                    entries.push(entry);
                }
            }
            entries
        }
        Err(e) => {
            debug!(error = %e, "discarding malformed search history");
            Vec::new()
        }
    }
}
