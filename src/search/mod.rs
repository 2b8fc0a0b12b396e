// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: matching, facets and typeahead.
//!
//! - `matcher` - query parsing and the AND-of-substrings predicate
//! - `facet` - category facets plus the filter/sort view
//! - `suggest` - typeahead over titles and category names

pub mod facet;
pub mod matcher;
pub mod suggest;

pub use facet::{apply_view, category_facets, filter_by_category};
pub use matcher::{match_items, search_basic, searchable_text, BasicOutcome, Query};
pub use suggest::{suggest, suggest_with_limits, MAX_SUGGESTIONS, MIN_SUGGESTION_CHARS};
