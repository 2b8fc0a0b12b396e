//! Bookmarkable searches and render-surface navigation.

use crate::common::{make_item, sample_blog, session};
use kumono_search::location::{query_param, search_href};
use kumono_search::render::render_session;
use kumono_search::{
    Catalog, EmptyState, LocationAccessor, MemoryLocation, RenderSurface, ResultCard,
    SearchConfig, SearchSession, SearchStatus, Selection,
};
use url::Url;

fn search_page() -> MemoryLocation {
    MemoryLocation::new(Url::parse("https://kumono.example/blog/search").unwrap())
}

#[test]
fn test_submit_pushes_location_and_reload_restores() {
    let mut location = search_page();
    let mut first = session(sample_blog());
    first.submit_at("ramen park", &mut location);

    assert_eq!(location.history().len(), 2);
    assert_eq!(query_param(&location.current()).as_deref(), Some("ramen park"));

    let mut reloaded = session(sample_blog());
    assert_eq!(reloaded.restore_from(&location), Some(SearchStatus::Results(1)));
    assert_eq!(reloaded.view()[0].item.id, "ramen-map");
}

#[test]
fn test_blank_query_in_location_is_empty_query() {
    let location = MemoryLocation::new(Url::parse("https://kumono.example/blog/search?q=").unwrap());
    let mut s = session(vec![make_item("1", "Kyoto")]);
    assert_eq!(s.restore_from(&location), Some(SearchStatus::EmptyQuery));
}

#[test]
fn test_selection_targets() {
    let config = SearchConfig::default();
    assert_eq!(Selection::Item("kumono-park".into()).href(&config), "/blog/kumono-park");
    assert_eq!(
        Selection::Search("kumono park".into()).href(&config),
        "/blog/search?q=kumono+park"
    );
    assert_eq!(search_href("/blog/search", "q", "雲野"), "/blog/search?q=%E9%9B%B2%E9%87%8E");
}

#[test]
fn test_search_link_restores_with_custom_param() {
    let config = SearchConfig::from_json(r#"{"queryParam": "s"}"#).unwrap();
    let href = Selection::Search("kyoto".into()).href(&config);
    assert_eq!(href, "/blog/search?s=kyoto");

    let location = MemoryLocation::new(Url::parse("https://kumono.example").unwrap().join(&href).unwrap());
    let catalog = Catalog::new(vec![make_item("1", "Kyoto")]).unwrap();
    let mut s = SearchSession::new(catalog, config);
    assert_eq!(s.restore_from(&location), Some(SearchStatus::Results(1)));
    assert_eq!(s.query().map(|q| q.raw()), Some("kyoto"));
}

#[derive(Default)]
struct CardCollector {
    cards: Vec<ResultCard>,
    empty: Option<EmptyState>,
}

impl RenderSurface for CardCollector {
    fn render_results(&mut self, _query: &str, cards: &[ResultCard], _categories: &[String]) {
        self.cards = cards.to_vec();
    }
    fn render_empty(&mut self, state: &EmptyState) {
        self.empty = Some(state.clone());
    }
    fn render_error(&mut self, _message: &str) {}
}

#[test]
fn test_rendered_cards_follow_view_order() {
    let mut s = session(sample_blog());
    s.submit("park");
    let mut surface = CardCollector::default();
    render_session(&s, &mut surface);

    let hrefs: Vec<&str> = surface.cards.iter().map(|c| c.href.as_str()).collect();
    assert_eq!(hrefs, vec!["/blog/kumono-park", "/blog/ramen-map", "/blog/hiking-guide"]);
    assert_eq!(surface.cards[0].published.as_deref(), Some("2022年4月10日"));
    assert_eq!(surface.cards[0].relevance_score, 15);
}

#[test]
fn test_no_match_state_echoes_query() {
    let mut s = session(sample_blog());
    s.submit("sushi");
    let mut surface = CardCollector::default();
    render_session(&s, &mut surface);
    assert_eq!(
        surface.empty,
        Some(EmptyState::NoMatches {
            query: "sushi".to_string()
        })
    );
}
