//! Relevance scores and their effect on result order.

use crate::common::{ids, make_dated_item, make_item, make_item_full, sample_blog, session};
use kumono_search::scoring::ranking::{parse_published_at, published_millis};
use kumono_search::{relevance_score, Query, SortKey};

#[test]
fn test_title_beats_description_beats_body() {
    let items = vec![
        make_item_full("body", "Notes", None, Some("kyoto in winter"), None, None),
        make_item_full("desc", "Trip", Some("kyoto"), None, None, None),
        make_item_full("title", "Kyoto trains", None, None, None, None),
    ];
    let mut s = session(items);
    s.submit("kyoto");
    assert_eq!(ids(&s.view()), vec!["title", "desc", "body"]);
    let scores: Vec<u32> = s.view().iter().map(|r| r.relevance_score).collect();
    assert_eq!(scores, vec![10, 5, 0]);
}

#[test]
fn test_exact_title_bonus_is_case_insensitive() {
    let item = make_item("1", "Kumono Park");
    assert_eq!(relevance_score(&Query::parse("kumono park"), &item), 70);
    assert_eq!(relevance_score(&Query::parse("KUMONO PARK"), &item), 70);
}

#[test]
fn test_exact_title_bonus_compares_untrimmed_query() {
    let item = make_item("1", "Kumono Park");
    assert_eq!(relevance_score(&Query::parse(" Kumono Park "), &item), 20);
}

#[test]
fn test_repeated_term_counts_each_time() {
    let item = make_item("1", "Park");
    // two terms, both "park": 10 + 10, plus no exact bonus ("park park" != "park")
    assert_eq!(relevance_score(&Query::parse("park park"), &item), 20);
}

#[test]
fn test_equal_scores_keep_collection_order() {
    let items = vec![
        make_item("b", "Park B"),
        make_item("a", "Park A"),
        make_item("c", "Park C"),
    ];
    let mut s = session(items);
    s.submit("park");
    assert_eq!(ids(&s.view()), vec!["b", "a", "c"]);
}

#[test]
fn test_invalid_dates_sort_as_oldest() {
    let items = vec![
        make_dated_item("bad", "Park bad", Some("not-a-date")),
        make_dated_item("none", "Park none", None),
        make_dated_item("dated", "Park dated", Some("2020-05-05T10:00:00+09:00")),
    ];
    let mut s = session(items);
    s.submit("park");
    s.set_sort(SortKey::Newest);
    assert_eq!(ids(&s.view()), vec!["dated", "bad", "none"]);
    s.set_sort(SortKey::Oldest);
    assert_eq!(ids(&s.view()), vec!["bad", "none", "dated"]);
}

#[test]
fn test_date_formats() {
    assert!(parse_published_at("2024-01-01T00:00:00.000Z").is_some());
    assert!(parse_published_at("2024-01-01").is_some());
    assert!(parse_published_at("2024/01/01").is_some());
    assert!(parse_published_at("January 1st").is_none());
    assert_eq!(
        published_millis(&make_dated_item("x", "x", Some("2024-01-01"))),
        published_millis(&make_dated_item("y", "y", Some("2024-01-01T00:00:00Z")))
    );
}

#[test]
fn test_sample_blog_relevance_order() {
    let mut s = session(sample_blog());
    s.submit("park");
    assert_eq!(ids(&s.view()), vec!["kumono-park", "ramen-map", "hiking-guide"]);
}
