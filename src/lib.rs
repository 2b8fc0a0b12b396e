// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client-side keyword search for a static blog.
//!
//! The site exports every post to one JSON array. This crate loads it once and
//! answers keyword searches over it: substring matching on every term,
//! field-weighted relevance scores, category facets, three sort orders,
//! typeahead suggestions and a short persisted search history.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  source.rs  │────▶│ search/      │────▶│  scoring/    │────▶│ search/     │
//! │  (Catalog,  │     │  matcher.rs  │     │  (relevance, │     │  facet.rs   │
//! │ ContentSrc) │     │  (Query)     │     │   ranking)   │     │ (apply_view)│
//! └─────────────┘     └──────────────┘     └──────────────┘     └─────────────┘
//!        │                                                             │
//!        ▼                                                             ▼
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                                session.rs                                   │
//! │      (SearchSession: submit / set_category / set_sort / view / suggest)     │
//! └─────────────────────────────────────────────────────────────────────────────┘
//!        │                     │                          │
//!        ▼                     ▼                          ▼
//!   history/ (KeyValueStore)   location.rs (?q=)          render.rs (ResultCard)
//! ```
//!
//! # Modules
//!
//! | Module       | Role                                                 |
//! |--------------|------------------------------------------------------|
//! | `types`      | Content items, categories, sort keys, scored results |
//! | `search`     | Term matching, facets, suggestions                   |
//! | `scoring`    | Relevance score and result ordering                  |
//! | `session`    | State holder a UI binds to                           |
//! | `history`    | Recent queries over an injected key-value store      |
//! | `location`   | Query string propagation                             |
//! | `render`     | View models handed to a render surface               |
//! | `source`     | The immutable catalog and how it is loaded           |
//! | `cms`        | Headless CMS client and export (native)              |
//! | `config`     | JSON config and CMS credentials                      |
//!
//! # Usage
//!
//! ```ignore
//! use kumono_search::{Catalog, SearchConfig, SearchSession, SortKey};
//!
//! let catalog = Catalog::from_json(&std::fs::read_to_string("search-data.json")?)?;
//! let mut session = SearchSession::new(catalog, SearchConfig::default());
//!
//! session.submit("kumono park");
//! session.set_sort(SortKey::Newest);
//! for result in session.view() {
//!     println!("{} ({})", result.item.title, result.relevance_score);
//! }
//! ```

// Module declarations
#[cfg(feature = "native")]
pub mod cms;
pub mod config;
pub mod contracts;
pub mod error;
pub mod history;
pub mod location;
pub mod render;
pub mod scoring;
pub mod search;
pub mod session;
pub mod source;
#[cfg(feature = "native")]
pub mod telemetry;
pub mod testing;
pub mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
#[cfg(feature = "native")]
pub use cms::{export_all_blogs, Blog, CmsClient, CmsQueries, ListResponse};
pub use config::{CmsConfig, SearchConfig};
pub use error::{Error, LoadError, Result, StoreError};
pub use history::{JsonFileStore, KeyValueStore, MemoryStore, SearchHistory, HISTORY_KEY, MAX_HISTORY};
pub use location::{LocationAccessor, MemoryLocation};
pub use render::{render_session, EmptyState, RenderSurface, ResultCard, Selection};
pub use scoring::{relevance_score, score_items};
pub use search::{
    apply_view, category_facets, match_items, search_basic, suggest, BasicOutcome, Query,
};
pub use session::{SearchMetrics, SearchSession, SearchStatus};
#[cfg(feature = "native")]
pub use source::ContentSource;
pub use source::Catalog;
pub use types::{
    Category, CategoryFilter, ContentItem, Image, ScoredItem, SortKey, Suggestion,
};
