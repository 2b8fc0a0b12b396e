// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance.
//!
//! Linear term weighting, nothing more. Each query term is worth a fixed amount
//! if it shows up in the title and a smaller fixed amount if it shows up in the
//! description. A title that equals the whole query gets a flat bonus on top.
//!
//! Body text and category names count for matching but not for scoring.
//!
//! # Constants
//!
//! | Signal                  | Points |
//! |-------------------------|--------|
//! | term in title           | 10     |
//! | term in description     | 5      |
//! | title equals raw query  | 50     |
//!
//! These are long-standing heuristics, not tuned values. Existing result
//! orderings depend on them; change them together with the ranking tests.

use crate::search::matcher::Query;
use crate::types::{ContentItem, ScoredItem};

/// Points for each term found in the title.
pub const TITLE_TERM_SCORE: u32 = 10;

/// Points for each term found in the description.
pub const DESCRIPTION_TERM_SCORE: u32 = 5;

/// Flat bonus when the lower-cased title equals the lower-cased raw query.
pub const EXACT_TITLE_BONUS: u32 = 50;

/// Score one item against a query.
///
/// The exact-title comparison uses the raw query, untrimmed. A reader who types
/// `"kumono park "` with a trailing space does not get the bonus.
pub fn relevance_score(query: &Query, item: &ContentItem) -> u32 {
    let title = item.title.to_lowercase();
    let description = item
        .description
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();

    let mut score = 0u32;
    for term in query.terms() {
        if title.contains(term.as_str()) {
            score += TITLE_TERM_SCORE;
        }
        if description.contains(term.as_str()) {
            score += DESCRIPTION_TERM_SCORE;
        }
    }

    if title == query.raw().to_lowercase() {
        score += EXACT_TITLE_BONUS;
    }

    score
}

/// Score every matched item. Output order equals input order.
pub fn score_items<'a>(query: &Query, matched: &[&'a ContentItem]) -> Vec<ScoredItem<'a>> {
    matched
        .iter()
        .map(|&item| ScoredItem {
            item,
            relevance_score: relevance_score(query, item),
        })
        .collect()
}
