//! Shared test utilities and fixtures.

#![allow(dead_code)]

use kumono_search::{Catalog, ContentItem, ScoredItem, SearchConfig, SearchSession};
use std::fs;
use std::path::{Path, PathBuf};

// Re-export canonical test utilities from kumono_search::testing
pub use kumono_search::testing::{make_dated_item, make_item, make_item_full, sample_blog};

// ============================================================================
// FIXTURES
// ============================================================================

/// A `search-data.json` as the CMS export writes it (`content` / `eyecatch`
/// field names, category objects, ISO timestamps).
pub const FIXTURE_JSON: &str = r#"[
  {
    "id": "kumono-park",
    "title": "Kumono Park",
    "description": "best park",
    "content": "<p>Cherry blossoms in spring.</p>",
    "eyecatch": {"url": "https://images.example/park.jpg", "width": 1200, "height": 630},
    "category": {"id": "outdoor", "name": "Outdoor"},
    "publishedAt": "2024-01-01T00:00:00.000Z"
  },
  {
    "id": "city-life",
    "title": "City Life",
    "description": "trains and ramen",
    "content": "<p>The station area changed.</p>",
    "category": {"id": "lifestyle", "name": "Lifestyle"},
    "publishedAt": "2023-06-15T00:00:00.000Z"
  },
  {
    "id": "park-cafe",
    "title": "Park Cafe",
    "description": "coffee by the pond",
    "content": "<p>Open from nine.</p>",
    "category": {"id": "food", "name": "Food"},
    "publishedAt": "2023-11-03T00:00:00.000Z"
  }
]"#;

/// Write the fixture collection into `dir` and return its path.
pub fn write_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("search-data.json");
    fs::write(&path, FIXTURE_JSON).expect("Failed to write fixture");
    path
}

// ============================================================================
// SESSION HELPERS
// ============================================================================

/// Session over `items` with the default config.
pub fn session(items: Vec<ContentItem>) -> SearchSession {
    let catalog = Catalog::new(items).expect("fixture ids must be unique");
    SearchSession::new(catalog, SearchConfig::default())
}

/// Ids of a result list, in order.
pub fn ids(results: &[ScoredItem<'_>]) -> Vec<String> {
    results.iter().map(|r| r.item.id.clone()).collect()
}
