// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typeahead suggestions.
//!
//! Cheaper and dumber than the real search on purpose: one substring, title or
//! category only, first few hits in collection order. No scoring.

use crate::types::{ContentItem, Suggestion};

/// Maximum number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 5;

/// Minimum number of characters (ignoring surrounding whitespace) before
/// suggestions appear.
/// Single characters match nearly everything and just make noise.
pub const MIN_SUGGESTION_CHARS: usize = 2;

/// Suggestions for a partially typed query, with the default limits.
pub fn suggest(partial: &str, items: &[ContentItem]) -> Vec<Suggestion> {
    suggest_with_limits(partial, items, MIN_SUGGESTION_CHARS, MAX_SUGGESTIONS)
}

/// Suggestions with explicit limits (the session reads them from config).
pub fn suggest_with_limits(
    partial: &str,
    items: &[ContentItem],
    min_chars: usize,
    limit: usize,
) -> Vec<Suggestion> {
    // Trimmed for the length gate only; the match uses what was typed.
    if partial.trim().chars().count() < min_chars {
        return Vec::new();
    }
    let needle = partial.to_lowercase();

    items
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&needle)
                || item
                    .category_name()
                    .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .take(limit)
        .map(|item| Suggestion {
            id: item.id.clone(),
            title: item.title.clone(),
            category: item.category_name().map(str::to_string),
        })
        .collect()
}
