// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the blog search widget.
//!
//! Provides two WASM-accessible types:
//! - `BlogSearch`: a search session over a `search-data.json` string
//! - `SearchHistoryHandle`: recent queries persisted through any object with
//!   `getItem` / `setItem` / `removeItem` (`localStorage` in the browser)
//!
//! Everything crossing the boundary is plain JSON-shaped data via
//! `serde-wasm-bindgen`.

use crate::config::SearchConfig;
use crate::error::StoreError;
use crate::history::{KeyValueStore, SearchHistory};
use crate::render::{card_for, ResultCard};
use crate::search::matcher::search_basic;
use crate::session::{SearchSession, SearchStatus};
use crate::source::Catalog;
use crate::types::{CategoryFilter, SortKey};
use js_sys::{Function, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Search output for TypeScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchOutput {
    /// `idle`, `loadFailed`, `emptyQuery`, `noMatches` or `results`
    status: &'static str,
    message: Option<String>,
    total: usize,
    results: Vec<ResultCard>,
    categories: Vec<String>,
}

fn status_name(status: &SearchStatus) -> &'static str {
    match status {
        SearchStatus::Idle => "idle",
        SearchStatus::LoadFailed(_) => "loadFailed",
        SearchStatus::EmptyQuery => "emptyQuery",
        SearchStatus::NoMatches => "noMatches",
        SearchStatus::Results(_) => "results",
    }
}

fn config_from(value: JsValue) -> Result<SearchConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        Ok(SearchConfig::default())
    } else {
        from_value(value).map_err(|e| JsValue::from(e.to_string()))
    }
}

/// A search session bound to one content collection.
#[wasm_bindgen]
pub struct BlogSearch {
    session: SearchSession,
}

#[wasm_bindgen]
impl BlogSearch {
    /// Parse `search-data.json` text. Never throws: a bad payload yields a
    /// session whose every search reports `loadFailed`.
    ///
    /// `config` is an optional `SearchConfig`-shaped object (camelCase keys).
    #[wasm_bindgen(constructor)]
    pub fn new(json: &str, config: JsValue) -> Result<BlogSearch, JsValue> {
        let config = config_from(config)?;
        Ok(BlogSearch {
            session: SearchSession::from_load(Catalog::from_json(json), config),
        })
    }

    /// Number of loaded items.
    #[wasm_bindgen(js_name = itemCount)]
    pub fn item_count(&self) -> usize {
        self.session.catalog().len()
    }

    /// Run a scored search. Resets the category filter and sort.
    #[wasm_bindgen]
    pub fn search(&mut self, query: &str) -> Result<JsValue, JsValue> {
        self.session.submit(query);
        self.output()
    }

    /// Unscored search in collection order.
    #[wasm_bindgen(js_name = searchBasic)]
    pub fn search_basic(&self, query: &str) -> Result<JsValue, JsValue> {
        let config = self.session.config();
        let cards: Vec<ResultCard> = search_basic(query, self.session.catalog())
            .items()
            .iter()
            .map(|item| card_for(item, config))
            .collect();
        to_value(&cards).map_err(|e| JsValue::from(e.to_string()))
    }

    /// `"all"` clears the filter.
    #[wasm_bindgen(js_name = setCategory)]
    pub fn set_category(&mut self, category: &str) -> Result<JsValue, JsValue> {
        self.session.set_category(CategoryFilter::parse(category));
        self.output()
    }

    /// Unknown keys fall back to relevance.
    #[wasm_bindgen(js_name = setSort)]
    pub fn set_sort(&mut self, key: &str) -> Result<JsValue, JsValue> {
        self.session.set_sort(SortKey::parse_lenient(key));
        self.output()
    }

    /// The current filtered, sorted results.
    #[wasm_bindgen]
    pub fn view(&self) -> Result<JsValue, JsValue> {
        self.output()
    }

    #[wasm_bindgen]
    pub fn categories(&self) -> Result<JsValue, JsValue> {
        to_value(self.session.categories()).map_err(|e| JsValue::from(e.to_string()))
    }

    #[wasm_bindgen]
    pub fn suggest(&self, partial: &str) -> Result<JsValue, JsValue> {
        to_value(&self.session.suggest(partial)).map_err(|e| JsValue::from(e.to_string()))
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.session.reset();
    }

    fn output(&self) -> Result<JsValue, JsValue> {
        let status = self.session.status();
        let config = self.session.config();
        let output = SearchOutput {
            status: status_name(&status),
            message: match &status {
                SearchStatus::LoadFailed(message) => Some(message.clone()),
                _ => None,
            },
            total: match status {
                SearchStatus::Results(n) => n,
                _ => 0,
            },
            results: self
                .session
                .view()
                .iter()
                .map(|r| ResultCard::from_scored(r, config))
                .collect(),
            categories: self.session.categories().to_vec(),
        };
        to_value(&output).map_err(|e| JsValue::from(e.to_string()))
    }
}

// ============================================================================
// HISTORY
// ============================================================================

/// A JS object with the Web Storage methods.
struct JsStorage {
    target: JsValue,
}

impl JsStorage {
    fn call(&self, method: &str, args: &[&JsValue]) -> Result<JsValue, StoreError> {
        let backend = |e: JsValue| StoreError::Backend(format!("{}: {:?}", method, e));
        let function: Function = Reflect::get(&self.target, &JsValue::from_str(method))
            .map_err(backend)?
            .dyn_into()
            .map_err(backend)?;
        match args {
            [a] => function.call1(&self.target, a),
            [a, b] => function.call2(&self.target, a, b),
            _ => function.call0(&self.target),
        }
        .map_err(backend)
    }
}

impl KeyValueStore for JsStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.call("getItem", &[&JsValue::from_str(key)])?.as_string())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.call("setItem", &[&JsValue::from_str(key), &JsValue::from_str(value)])
            .map(|_| ())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.call("removeItem", &[&JsValue::from_str(key)]).map(|_| ())
    }
}

/// Recent searches, most recent first, persisted through `storage`.
#[wasm_bindgen]
pub struct SearchHistoryHandle {
    history: SearchHistory<JsStorage>,
}

#[wasm_bindgen]
impl SearchHistoryHandle {
    /// `storage` is usually `window.localStorage`. `config` is optional.
    #[wasm_bindgen(constructor)]
    pub fn new(storage: JsValue, config: JsValue) -> Result<SearchHistoryHandle, JsValue> {
        let config = config_from(config)?;
        let store = JsStorage { target: storage };
        Ok(SearchHistoryHandle {
            history: SearchHistory::load_with(store, &config.history_key, config.history_limit),
        })
    }

    #[wasm_bindgen]
    pub fn entries(&self) -> Result<JsValue, JsValue> {
        to_value(self.history.entries()).map_err(|e| JsValue::from(e.to_string()))
    }

    /// Record a submitted query. Blank queries are ignored.
    #[wasm_bindgen]
    pub fn submit(&mut self, query: &str) {
        self.history.submit(query);
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.history.clear();
    }
}
