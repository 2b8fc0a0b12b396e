// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search session: one state holder, one recompute path.
//!
//! A UI binds to this the way it would bind to component state. Every event
//! (submit, filter change, sort change) mutates the session, and the view is
//! derived from the current state by a pure function. Nothing is cached
//! between events, so there is nothing to invalidate.
//!
//! ```text
//!   submit(q) ──▶ match ──▶ score ──▶ facets      (per search)
//!                              │
//!   set_category / set_sort ───┴──▶ apply_view    (per view)
//! ```
//!
//! Results hold catalog positions rather than references, which keeps the
//! session `'static` and lets it be stored inside a WASM object.

use crate::config::SearchConfig;
use crate::contracts::check_view_sorted;
use crate::error::LoadError;
use crate::location::{self, LocationAccessor};
use crate::scoring::relevance_score;
use crate::search::facet::{apply_view, category_facets};
use crate::search::matcher::{matches, Query};
use crate::search::suggest::suggest_with_limits;
use crate::source::Catalog;
use crate::types::{CategoryFilter, ScoredItem, SortKey, Suggestion};
use std::time::Duration;
use tracing::debug;

/// Where a session stands, from the reader's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    /// Nothing submitted yet.
    Idle,
    /// The content collection never arrived. Carries the user-facing message.
    LoadFailed(String),
    /// Submitted, but blank. Not the same as "no matches".
    EmptyQuery,
    /// Submitted, nothing matched.
    NoMatches,
    /// Submitted, this many items matched (before category filtering).
    Results(usize),
}

/// Shown when the content collection fails to load.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load search data.";

/// Timing and count for the result header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMetrics {
    pub total_results: usize,
    pub elapsed: Duration,
}

impl SearchMetrics {
    pub fn has_results(&self) -> bool {
        self.total_results > 0
    }

    /// Seconds with two decimals, as the result header shows it.
    pub fn seconds_label(&self) -> String {
        format!("{:.2}", self.elapsed.as_secs_f64())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Hit {
    position: usize,
    score: u32,
}

/// Per-search state. Replaced wholesale on every submit.
#[derive(Debug, Clone)]
struct ResultState {
    query: Query,
    hits: Vec<Hit>,
    categories: Vec<String>,
    filter: CategoryFilter,
    sort: SortKey,
}

/// A search session over one loaded catalog.
#[derive(Debug, Clone)]
pub struct SearchSession {
    catalog: Catalog,
    config: SearchConfig,
    load_error: Option<String>,
    state: Option<ResultState>,
}

impl SearchSession {
    pub fn new(catalog: Catalog, config: SearchConfig) -> Self {
        Self {
            catalog,
            config,
            load_error: None,
            state: None,
        }
    }

    /// Session from a load attempt. A failure leaves the catalog empty and
    /// every later search reports `LoadFailed`.
    pub fn from_load(result: Result<Catalog, LoadError>, config: SearchConfig) -> Self {
        match result {
            Ok(catalog) => Self::new(catalog, config),
            Err(e) => {
                tracing::error!(error = %e, "search data unavailable");
                Self {
                    catalog: Catalog::empty(),
                    config,
                    load_error: Some(LOAD_FAILED_MESSAGE.to_string()),
                    state: None,
                }
            }
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Run a full search: match, score, derive facets. Resets filter and sort.
    pub fn submit(&mut self, raw: &str) -> SearchStatus {
        let query = Query::parse(raw);
        let hits: Vec<Hit> = if query.is_empty() {
            Vec::new()
        } else {
            self.catalog
                .iter()
                .enumerate()
                .filter(|(_, item)| matches(&query, item))
                .map(|(position, item)| Hit {
                    position,
                    score: relevance_score(&query, item),
                })
                .collect()
        };

        let scored: Vec<ScoredItem<'_>> = hits.iter().map(|hit| self.scored(hit)).collect();
        let categories = category_facets(&scored);

        debug!(query = raw, hits = hits.len(), "search submitted");

        self.state = Some(ResultState {
            query,
            hits,
            categories,
            filter: CategoryFilter::All,
            sort: SortKey::Relevance,
        });
        self.status()
    }

    /// Submit and record the query in the page location (bookmarkable).
    pub fn submit_at(&mut self, raw: &str, location: &mut impl LocationAccessor) -> SearchStatus {
        let url = location::with_param(&location.current(), &self.config.query_param, raw);
        location.push(url);
        self.submit(raw)
    }

    /// Re-run the search carried by the current location, if any.
    pub fn restore_from(&mut self, location: &impl LocationAccessor) -> Option<SearchStatus> {
        let query = location::param(&location.current(), &self.config.query_param)?;
        Some(self.submit(&query))
    }

    /// Drop the current results (query changed, or the view went away).
    pub fn reset(&mut self) {
        self.state = None;
    }

    pub fn set_category(&mut self, filter: CategoryFilter) {
        if let Some(state) = self.state.as_mut() {
            state.filter = filter;
        }
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        if let Some(state) = self.state.as_mut() {
            state.sort = sort;
        }
    }

    pub fn status(&self) -> SearchStatus {
        if let Some(message) = &self.load_error {
            return SearchStatus::LoadFailed(message.clone());
        }
        match &self.state {
            None => SearchStatus::Idle,
            Some(state) if state.query.is_empty() => SearchStatus::EmptyQuery,
            Some(state) if state.hits.is_empty() => SearchStatus::NoMatches,
            Some(state) => SearchStatus::Results(state.hits.len()),
        }
    }

    /// Has anything been submitted since the last reset?
    pub fn searched(&self) -> bool {
        self.state.is_some()
    }

    pub fn query(&self) -> Option<&Query> {
        self.state.as_ref().map(|s| &s.query)
    }

    /// Categories present among all results, independent of the filter.
    pub fn categories(&self) -> &[String] {
        self.state.as_ref().map(|s| s.categories.as_slice()).unwrap_or(&[])
    }

    pub fn category_filter(&self) -> CategoryFilter {
        self.state.as_ref().map(|s| s.filter.clone()).unwrap_or_default()
    }

    pub fn sort_key(&self) -> SortKey {
        self.state.as_ref().map(|s| s.sort).unwrap_or_default()
    }

    /// Every scored match, in catalog order.
    pub fn results(&self) -> Vec<ScoredItem<'_>> {
        self.state
            .as_ref()
            .map(|s| s.hits.iter().map(|hit| self.scored(hit)).collect())
            .unwrap_or_default()
    }

    /// The filtered, sorted view to render.
    pub fn view(&self) -> Vec<ScoredItem<'_>> {
        match &self.state {
            Some(state) => {
                let view = apply_view(&self.results(), &state.filter, state.sort);
                check_view_sorted(&view, state.sort);
                view
            }
            None => Vec::new(),
        }
    }

    /// Typeahead over the whole catalog, with configured limits.
    pub fn suggest(&self, partial: &str) -> Vec<Suggestion> {
        suggest_with_limits(
            partial,
            &self.catalog,
            self.config.min_suggestion_chars,
            self.config.suggestion_limit,
        )
    }

    fn scored(&self, hit: &Hit) -> ScoredItem<'_> {
        ScoredItem {
            item: &self.catalog[hit.position],
            relevance_score: hit.score,
        }
    }
}
