// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term matching: which items contain every query term?
//!
//! The match is plain substring containment over one concatenated string per
//! item. `"park"` matches `"parking"` and `"ark"` matches `"park"`. That looseness
//! is the existing site behavior and bookmarked searches depend on it, so don't
//! "fix" it by tokenizing the target.
//!
//! **Invariant**: `match_items(q, items)` is an order-preserving subsequence of
//! `items`, and every returned item's searchable text contains every term of `q`.

use crate::contracts::{check_match_subset, check_terms_present};
use crate::types::ContentItem;
use crate::utils::terms;

/// A parsed query.
///
/// Keeps the raw text around because the scorer's exact-title bonus compares
/// against it untrimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    terms: Vec<String>,
}

impl Query {
    /// Lower-case and split on whitespace.
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            terms: terms(raw),
        }
    }

    /// The query exactly as the reader typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Lower-cased, non-empty terms in typed order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// True when nothing but whitespace was typed.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// The lower-cased text an item is matched against.
///
/// `title`, `description`, `body` and category name, in that order, joined by
/// single spaces. Missing fields contribute an empty string, so an item without
/// a description still gets two adjacent spaces. Harmless for substring search.
pub fn searchable_text(item: &ContentItem) -> String {
    [
        item.title.as_str(),
        item.description.as_deref().unwrap_or(""),
        item.body.as_deref().unwrap_or(""),
        item.category_name().unwrap_or(""),
    ]
    .join(" ")
    .to_lowercase()
}

/// Does `item` contain every term of `query`?
///
/// An empty query matches nothing.
pub fn matches(query: &Query, item: &ContentItem) -> bool {
    if query.is_empty() {
        return false;
    }
    let text = searchable_text(item);
    query.terms().iter().all(|term| text.contains(term.as_str()))
}

/// Filter `items` down to those containing every query term. Input order is kept.
pub fn match_items<'a>(query: &Query, items: &'a [ContentItem]) -> Vec<&'a ContentItem> {
    if query.is_empty() {
        return Vec::new();
    }
    let matched: Vec<&ContentItem> = items.iter().filter(|item| matches(query, item)).collect();
    check_match_subset(items, &matched);
    check_terms_present(query, &matched);
    matched
}

/// Outcome of the basic (unscored) search widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BasicOutcome<'a> {
    /// Nothing but whitespace was submitted. Searched, but deliberately empty.
    EmptyQuery,
    /// The query was real but nothing contained all its terms.
    NoMatches,
    Matches(Vec<&'a ContentItem>),
}

impl<'a> BasicOutcome<'a> {
    pub fn items(&self) -> &[&'a ContentItem] {
        match self {
            BasicOutcome::Matches(items) => items,
            _ => &[],
        }
    }
}

/// The basic search path: match only, no scores, input order.
pub fn search_basic<'a>(raw: &str, items: &'a [ContentItem]) -> BasicOutcome<'a> {
    let query = Query::parse(raw);
    if query.is_empty() {
        return BasicOutcome::EmptyQuery;
    }
    let matched = match_items(&query, items);
    if matched.is_empty() {
        BasicOutcome::NoMatches
    } else {
        BasicOutcome::Matches(matched)
    }
}
