// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how the final view gets ordered.
//!
//! Three sort keys, all stable:
//!
//! | Key         | Order                                   | Ties            |
//! |-------------|-----------------------------------------|-----------------|
//! | `relevance` | score, descending                       | input order     |
//! | `newest`    | published timestamp, descending         | input order     |
//! | `oldest`    | published timestamp, ascending          | input order     |
//!
//! A missing or unparseable `publishedAt` sorts as the oldest possible instant:
//! last under `newest`, first under `oldest`. Stability is what makes the view
//! idempotent. Sorting an already sorted view is a no-op.

use crate::types::{ContentItem, ScoredItem, SortKey};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::cmp::Ordering;

/// Parse a published timestamp.
///
/// Accepts RFC 3339 (`2024-01-01T00:00:00.000Z`, what the CMS emits), a naive
/// datetime (`2024-01-01T09:30:00`, read as UTC) and bare dates (`2024-01-01`,
/// `2024/01/01`, read as UTC midnight).
pub fn parse_published_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
    }
    None
}

/// Sortable timestamp for an item. Invalid or missing dates become `i64::MIN`.
pub fn published_millis(item: &ContentItem) -> i64 {
    item.published_at
        .as_deref()
        .and_then(parse_published_at)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(i64::MIN)
}

/// Compare two results under a sort key.
///
/// Returns `Equal` for ties; callers rely on a stable sort to keep input order.
pub fn compare_results(a: &ScoredItem<'_>, b: &ScoredItem<'_>, key: SortKey) -> Ordering {
    match key {
        SortKey::Relevance => b.relevance_score.cmp(&a.relevance_score),
        SortKey::Newest => published_millis(b.item).cmp(&published_millis(a.item)),
        SortKey::Oldest => published_millis(a.item).cmp(&published_millis(b.item)),
    }
}

/// Stable sort in place.
///
/// Timestamps are parsed once per item, not once per comparison.
pub fn sort_results(results: &mut Vec<ScoredItem<'_>>, key: SortKey) {
    match key {
        SortKey::Relevance => {
            results.sort_by(|a, b| compare_results(a, b, SortKey::Relevance));
        }
        SortKey::Newest | SortKey::Oldest => {
            let mut keyed: Vec<(i64, ScoredItem<'_>)> = results
                .iter()
                .map(|r| (published_millis(r.item), *r))
                .collect();
            if key == SortKey::Newest {
                keyed.sort_by(|a, b| b.0.cmp(&a.0));
            } else {
                keyed.sort_by(|a, b| a.0.cmp(&b.0));
            }
            results.clear();
            results.extend(keyed.into_iter().map(|(_, r)| r));
        }
    }
}
