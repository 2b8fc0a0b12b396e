// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the search pipeline.
//!
//! Debug-mode assertions for the properties every search must satisfy. They
//! compile to nothing in release builds and are exercised by the test suites.
//!
//! | Contract Function            | Property                                       |
//! |------------------------------|------------------------------------------------|
//! | `check_match_subset`         | matches are an ordered subsequence of input    |
//! | `check_terms_present`        | every match contains every term                |
//! | `check_history_bounded`      | history never exceeds its cap, no duplicates   |
//! | `check_view_sorted`          | the view is ordered under its sort key         |
//!
//! # Usage
//!
//! ```ignore
//! use kumono_search::contracts::*;
//!
//! let matched = match_items(&query, &items);
//! check_match_subset(&items, &matched);
//! check_terms_present(&query, &matched);
//! ```

use crate::scoring::ranking::compare_results;
use crate::search::matcher::{searchable_text, Query};
use crate::types::{ContentItem, ScoredItem, SortKey};
use std::cmp::Ordering;

/// Compile-time check: a title hit always outweighs a description hit.
const _: () = {
    assert!(crate::scoring::TITLE_TERM_SCORE > crate::scoring::DESCRIPTION_TERM_SCORE);
};

// ============================================================================
// MATCH CONTRACTS
// ============================================================================

/// Check that `matched` is an order-preserving subsequence of `items`
/// (compared by identity, not equality).
///
/// # Panics (debug builds only)
/// Panics if a match is not in `items` or appears out of order.
#[inline]
pub fn check_match_subset(items: &[ContentItem], matched: &[&ContentItem]) {
    if cfg!(debug_assertions) {
        let mut cursor = 0usize;
        for m in matched {
            let found = items[cursor..]
                .iter()
                .position(|item| std::ptr::eq(item, *m));
            debug_assert!(
                found.is_some(),
                "CONTRACT VIOLATION: match '{}' is not an in-order element of the input",
                m.id
            );
            cursor += found.map(|p| p + 1).unwrap_or(0);
        }
    }
}

/// Check that every matched item contains every query term.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_terms_present(query: &Query, matched: &[&ContentItem]) {
    if cfg!(debug_assertions) {
        for item in matched {
            let text = searchable_text(item);
            for term in query.terms() {
                debug_assert!(
                    text.contains(term.as_str()),
                    "CONTRACT VIOLATION: '{}' matched without term '{}'",
                    item.id,
                    term
                );
            }
        }
    }
}

// ============================================================================
// HISTORY CONTRACTS
// ============================================================================

/// Check that history respects its cap and holds no duplicates.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_history_bounded(entries: &[String], limit: usize) {
    debug_assert!(
        entries.len() <= limit,
        "CONTRACT VIOLATION: history has {} entries, cap is {}",
        entries.len(),
        limit
    );
    if cfg!(debug_assertions) {
        for (i, a) in entries.iter().enumerate() {
            debug_assert!(
                !entries[i + 1..].contains(a),
                "CONTRACT VIOLATION: duplicate history entry '{}'",
                a
            );
        }
    }
}

// ============================================================================
// VIEW CONTRACTS
// ============================================================================

/// Check that a view is non-decreasing under its sort key.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_view_sorted(view: &[ScoredItem<'_>], key: SortKey) {
    if cfg!(debug_assertions) {
        for pair in view.windows(2) {
            debug_assert!(
                compare_results(&pair[0], &pair[1], key) != Ordering::Greater,
                "CONTRACT VIOLATION: '{}' sorted before '{}' under {}",
                pair[0].item.id,
                pair[1].item.id,
                key
            );
        }
    }
}
