// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Category facets and the filter/sort pipeline.
//!
//! `apply_view` is the last stage before rendering. It copies, filters, then
//! sorts. The input slice is never touched, which is what lets the session call
//! it again on every control change without accumulating state.

use crate::scoring::ranking::sort_results;
use crate::types::{CategoryFilter, ScoredItem, SortKey};

/// Distinct category names among `results`, in order of first appearance.
///
/// Uncategorized items contribute nothing. Computed once per search, so the
/// list doesn't shrink when a filter is applied.
pub fn category_facets(results: &[ScoredItem<'_>]) -> Vec<String> {
    let mut facets: Vec<String> = Vec::new();
    for name in results.iter().filter_map(|r| r.item.category_name()) {
        if !facets.iter().any(|seen| seen == name) {
            facets.push(name.to_string());
        }
    }
    facets
}

/// Keep only results whose category passes `filter`. Order is kept.
pub fn filter_by_category<'a>(
    results: &[ScoredItem<'a>],
    filter: &CategoryFilter,
) -> Vec<ScoredItem<'a>> {
    results
        .iter()
        .filter(|r| filter.accepts(r.item.category_name()))
        .copied()
        .collect()
}

/// Filter then sort. Pure and idempotent.
pub fn apply_view<'a>(
    results: &[ScoredItem<'a>],
    filter: &CategoryFilter,
    sort: SortKey,
) -> Vec<ScoredItem<'a>> {
    let mut view = filter_by_category(results, filter);
    sort_results(&mut view, sort);
    view
}
