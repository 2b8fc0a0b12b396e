//! Category facets and the filter/sort controls on a live session.

use crate::common::{ids, make_item_full, sample_blog, session};
use kumono_search::{CategoryFilter, SearchStatus, SortKey};

#[test]
fn test_facets_in_first_appearance_order() {
    let mut s = session(sample_blog());
    s.submit("park");
    assert_eq!(s.categories(), ["Outdoor", "Food"]);
}

#[test]
fn test_uncategorized_results_add_no_facet() {
    let mut s = session(sample_blog());
    assert_eq!(s.submit("cms"), SearchStatus::Results(1));
    assert!(s.categories().is_empty());
}

#[test]
fn test_uncategorized_hidden_by_named_filter_shown_by_all() {
    let items = vec![
        make_item_full("1", "Notes on parks", None, None, None, None),
        make_item_full("2", "Park Trail", None, None, Some("Outdoor"), None),
    ];
    let mut s = session(items);
    s.submit("park");

    s.set_category(CategoryFilter::Named("Outdoor".to_string()));
    assert_eq!(ids(&s.view()), vec!["2"]);

    s.set_category(CategoryFilter::parse("all"));
    assert_eq!(ids(&s.view()), vec!["1", "2"]);
}

#[test]
fn test_filter_to_absent_category_gives_empty_view() {
    let mut s = session(sample_blog());
    s.submit("park");
    s.set_category(CategoryFilter::Named("Travel".to_string()));
    assert!(s.view().is_empty());
    // The search itself still matched.
    assert_eq!(s.status(), SearchStatus::Results(3));
}

#[test]
fn test_filter_and_sort_compose() {
    let mut s = session(sample_blog());
    s.submit("hik");
    s.set_category(CategoryFilter::Named("Outdoor".to_string()));
    s.set_sort(SortKey::Newest);
    // autumn-hike has no date and goes last under newest
    assert_eq!(ids(&s.view()), vec!["hiking-guide", "autumn-hike"]);

    s.set_sort(SortKey::Oldest);
    assert_eq!(ids(&s.view()), vec!["autumn-hike", "hiking-guide"]);
}

#[test]
fn test_view_is_recomputed_not_accumulated() {
    let mut s = session(sample_blog());
    s.submit("park");
    let first = ids(&s.view());
    s.set_category(CategoryFilter::Named("Food".to_string()));
    s.set_category(CategoryFilter::All);
    s.set_sort(SortKey::Oldest);
    s.set_sort(SortKey::Relevance);
    assert_eq!(ids(&s.view()), first);
}

#[test]
fn test_controls_before_any_search_are_ignored() {
    let mut s = session(sample_blog());
    s.set_category(CategoryFilter::Named("Food".to_string()));
    s.set_sort(SortKey::Newest);
    assert_eq!(s.category_filter(), CategoryFilter::All);
    assert_eq!(s.sort_key(), SortKey::Relevance);
    assert_eq!(s.status(), SearchStatus::Idle);
}
