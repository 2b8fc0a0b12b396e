// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The content collection and where it comes from.
//!
//! The site exports every post to one static JSON array (`search-data.json`).
//! It is fetched once per session and never written back. [`Catalog`] wraps it
//! in an `Arc<[ContentItem]>`, so clones are cheap and nothing can mutate it.
//!
//! Loading is the only asynchronous step in the whole engine. A failed load is
//! not retried; the caller shows an error and keeps an empty catalog.

use crate::error::LoadError;
use crate::types::ContentItem;
use std::collections::HashSet;
use std::ops::Deref;
use std::sync::Arc;
use tracing::info;

#[cfg(feature = "native")]
use std::path::PathBuf;
#[cfg(feature = "native")]
use tracing::warn;
#[cfg(feature = "native")]
use url::Url;

/// Immutable, shared content collection.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Arc<[ContentItem]>,
}

impl Catalog {
    /// An empty catalog: what a session holds before (or instead of) a load.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from items, rejecting duplicate ids.
    pub fn new(items: Vec<ContentItem>) -> Result<Self, LoadError> {
        {
            let mut seen = HashSet::with_capacity(items.len());
            for item in &items {
                if !seen.insert(item.id.as_str()) {
                    return Err(LoadError::DuplicateId(item.id.clone()));
                }
            }
        }
        Ok(Self {
            items: items.into(),
        })
    }

    /// Parse the `search-data.json` array.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let items: Vec<ContentItem> = serde_json::from_str(json)?;
        let catalog = Self::new(items)?;
        info!(items = catalog.len(), "search data loaded");
        Ok(catalog)
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl Deref for Catalog {
    type Target = [ContentItem];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

/// Where to load the catalog from.
#[cfg(feature = "native")]
#[derive(Debug, Clone)]
pub enum ContentSource {
    /// A local JSON file.
    File(PathBuf),
    /// A GET-able URL.
    Http(Url),
    /// Already in memory (tests, embedding).
    Inline(Vec<ContentItem>),
}

#[cfg(feature = "native")]
impl ContentSource {
    /// Interpret a CLI argument: `http(s)://` is a URL, anything else a path.
    pub fn from_arg(arg: &str) -> Self {
        match Url::parse(arg) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => ContentSource::Http(url),
            _ => ContentSource::File(PathBuf::from(arg)),
        }
    }

    /// Fetch and parse once.
    pub async fn load(&self) -> Result<Catalog, LoadError> {
        match self {
            ContentSource::File(path) => {
                let content =
                    tokio::fs::read_to_string(path)
                        .await
                        .map_err(|source| LoadError::Io {
                            path: path.display().to_string(),
                            source,
                        })?;
                Catalog::from_json(&content)
            }
            ContentSource::Http(url) => fetch_catalog(url).await,
            ContentSource::Inline(items) => Catalog::new(items.clone()),
        }
    }
}

#[cfg(feature = "native")]
async fn fetch_catalog(url: &Url) -> Result<Catalog, LoadError> {
    let http_err = |source| LoadError::Http {
        url: url.to_string(),
        source,
    };
    let response = reqwest::get(url.clone()).await.map_err(http_err)?;
    let status = response.status();
    if !status.is_success() {
        warn!(%url, status = status.as_u16(), "search data request failed");
        return Err(LoadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let body = response.text().await.map_err(http_err)?;
    Catalog::from_json(&body)
}
