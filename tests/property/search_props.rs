//! Matching, scoring and view properties.

use crate::common::make_item_full;
use kumono_search::search::searchable_text;
use kumono_search::scoring::{DESCRIPTION_TERM_SCORE, EXACT_TITLE_BONUS, TITLE_TERM_SCORE};
use kumono_search::{
    apply_view, category_facets, match_items, score_items, CategoryFilter, ContentItem, Query,
    ScoredItem, SortKey,
};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short words from a small alphabet so queries actually hit.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-eA-E]{1,4}").unwrap()
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..5).prop_map(|words| words.join(" "))
}

fn category_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec![
        "Outdoor".to_string(),
        "Food".to_string(),
        "Travel".to_string(),
    ]))
}

fn date_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        (2015i32..2026, 1u32..13, 1u32..29).prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d)),
        Just("garbage".to_string()),
    ])
}

fn item_strategy() -> impl Strategy<Value = (String, Option<String>, Option<String>, Option<String>, Option<String>)> {
    (
        text_strategy(),
        prop::option::of(text_strategy()),
        prop::option::of(text_strategy()),
        category_strategy(),
        date_strategy(),
    )
}

fn corpus_strategy() -> impl Strategy<Value = Vec<ContentItem>> {
    prop::collection::vec(item_strategy(), 0..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, description, body, category, date))| {
                make_item_full(
                    &format!("item-{}", i),
                    &title,
                    description.as_deref(),
                    body.as_deref(),
                    category.as_deref(),
                    date.as_deref(),
                )
            })
            .collect()
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..3).prop_map(|words| words.join(" "))
}

fn sort_strategy() -> impl Strategy<Value = SortKey> {
    prop::sample::select(vec![SortKey::Relevance, SortKey::Newest, SortKey::Oldest])
}

fn ids(results: &[ScoredItem<'_>]) -> Vec<String> {
    results.iter().map(|r| r.item.id.clone()).collect()
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Matches are an order-preserving subset of the collection.
    #[test]
    fn prop_match_is_ordered_subset(items in corpus_strategy(), raw in query_strategy()) {
        let matched = match_items(&Query::parse(&raw), &items);
        let mut cursor = 0;
        for m in &matched {
            let pos = items[cursor..].iter().position(|i| i.id == m.id);
            prop_assert!(pos.is_some(), "{} out of order or missing", m.id);
            cursor += pos.unwrap() + 1;
        }
    }

    /// Every match contains every query term somewhere in its searchable text.
    #[test]
    fn prop_every_match_has_every_term(items in corpus_strategy(), raw in query_strategy()) {
        let query = Query::parse(&raw);
        for item in match_items(&query, &items) {
            let text = searchable_text(item);
            for term in query.terms() {
                prop_assert!(text.contains(term.as_str()));
            }
        }
    }

    /// Everything that contains every term is matched (no false negatives).
    #[test]
    fn prop_match_is_complete(items in corpus_strategy(), raw in query_strategy()) {
        let query = Query::parse(&raw);
        let matched = match_items(&query, &items);
        let expected = if query.is_empty() {
            0
        } else {
            items
                .iter()
                .filter(|i| {
                    let text = searchable_text(i);
                    query.terms().iter().all(|t| text.contains(t.as_str()))
                })
                .count()
        };
        prop_assert_eq!(matched.len(), expected);
    }

    /// Scores stay within the range the constants allow.
    #[test]
    fn prop_score_bounded(items in corpus_strategy(), raw in query_strategy()) {
        let query = Query::parse(&raw);
        let matched = match_items(&query, &items);
        let max = query.terms().len() as u32 * (TITLE_TERM_SCORE + DESCRIPTION_TERM_SCORE)
            + EXACT_TITLE_BONUS;
        for r in score_items(&query, &matched) {
            prop_assert!(r.relevance_score <= max);
        }
    }

    /// Re-applying the same filter and sort changes nothing.
    #[test]
    fn prop_view_idempotent(
        items in corpus_strategy(),
        raw in query_strategy(),
        category in category_strategy(),
        sort in sort_strategy(),
    ) {
        let query = Query::parse(&raw);
        let matched = match_items(&query, &items);
        let scored = score_items(&query, &matched);
        let filter = category.map(CategoryFilter::Named).unwrap_or_default();

        let once = apply_view(&scored, &filter, sort);
        let twice = apply_view(&once, &filter, sort);
        prop_assert_eq!(ids(&once), ids(&twice));
    }

    /// A filtered view only holds results of that category, and drops none of them.
    #[test]
    fn prop_filter_exact(items in corpus_strategy(), raw in query_strategy(), category in category_strategy()) {
        let query = Query::parse(&raw);
        let matched = match_items(&query, &items);
        let scored = score_items(&query, &matched);
        let Some(name) = category else { return Ok(()); };

        let view = apply_view(&scored, &CategoryFilter::Named(name.clone()), SortKey::Relevance);
        prop_assert!(view.iter().all(|r| r.item.category_name() == Some(name.as_str())));
        let expected = scored.iter().filter(|r| r.item.category_name() == Some(name.as_str())).count();
        prop_assert_eq!(view.len(), expected);
    }

    /// Relevance views are non-increasing in score.
    #[test]
    fn prop_relevance_sorted(items in corpus_strategy(), raw in query_strategy()) {
        let query = Query::parse(&raw);
        let matched = match_items(&query, &items);
        let view = apply_view(&score_items(&query, &matched), &CategoryFilter::All, SortKey::Relevance);
        for pair in view.windows(2) {
            prop_assert!(pair[0].relevance_score >= pair[1].relevance_score);
        }
    }

    /// Facets are distinct and each one names a category among the results.
    #[test]
    fn prop_facets_distinct(items in corpus_strategy(), raw in query_strategy()) {
        let query = Query::parse(&raw);
        let matched = match_items(&query, &items);
        let scored = score_items(&query, &matched);
        let facets = category_facets(&scored);
        for (i, f) in facets.iter().enumerate() {
            prop_assert!(!facets[i + 1..].contains(f));
            prop_assert!(scored.iter().any(|r| r.item.category_name() == Some(f.as_str())));
        }
    }
}
