// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shareable location state.
//!
//! A search is bookmarkable: the current query lives in one URL parameter, and
//! loading that URL re-runs the same search. The browser's `window.location`
//! and `history.pushState` are abstracted behind [`LocationAccessor`] so the
//! session can be driven without a browser.

use url::Url;

/// Name of the query parameter carrying the search text.
pub const QUERY_PARAM: &str = "q";

/// Read and replace the current page location.
pub trait LocationAccessor {
    fn current(&self) -> Url;
    /// Record a new location (the `pushState` equivalent).
    fn push(&mut self, url: Url);
}

/// In-memory location with a navigation log.
#[derive(Debug, Clone)]
pub struct MemoryLocation {
    history: Vec<Url>,
}

impl MemoryLocation {
    pub fn new(initial: Url) -> Self {
        Self {
            history: vec![initial],
        }
    }

    /// Every location visited, oldest first.
    pub fn history(&self) -> &[Url] {
        &self.history
    }
}

impl LocationAccessor for MemoryLocation {
    fn current(&self) -> Url {
        // history is never empty: seeded in new()
        self.history[self.history.len() - 1].clone()
    }

    fn push(&mut self, url: Url) {
        self.history.push(url);
    }
}

/// The value of parameter `name`, if present (first occurrence wins).
pub fn param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// The search query carried by `url`.
pub fn query_param(url: &Url) -> Option<String> {
    param(url, QUERY_PARAM)
}

/// `url` with parameter `name` set to `value`, other parameters untouched.
///
/// Replaces every existing occurrence of `name` so the result has exactly one.
pub fn with_param(url: &Url, name: &str, value: &str) -> Url {
    let others: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != name)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut updated = url.clone();
    {
        let mut pairs = updated.query_pairs_mut();
        pairs.clear();
        for (k, v) in &others {
            pairs.append_pair(k, v);
        }
        pairs.append_pair(name, value);
    }
    updated
}

/// `url` with the search query set.
pub fn with_query_param(url: &Url, query: &str) -> Url {
    with_param(url, QUERY_PARAM, query)
}

/// Link to the search page for `query`, e.g. `/blog/search?q=kyoto`.
///
/// `param` must be the name the session reads back in `restore_from`.
pub fn search_href(search_path: &str, param: &str, query: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
    let name: String = url::form_urlencoded::byte_serialize(param.as_bytes()).collect();
    format!("{}?{}={}", search_path, name, encoded)
}

/// Link to a single item, e.g. `/blog/abc123`.
pub fn item_href(item_path: &str, id: &str) -> String {
    format!("{}/{}", item_path.trim_end_matches('/'), id)
}
