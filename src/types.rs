// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search session.
//!
//! These types describe what the content source hands us (`ContentItem`), what
//! the engine hands back (`ScoredItem`, `Suggestion`), and the two knobs a reader
//! can turn on a result page (`CategoryFilter`, `SortKey`).
//!
//! # Invariants
//!
//! - **ContentItem**: `id` is unique within a loaded [`Catalog`](crate::Catalog).
//!   Checked once at load time; duplicates are rejected rather than silently merged.
//!
//! - **ScoredItem**: borrows from the catalog. The catalog is immutable for the
//!   lifetime of a session, so the borrow can never observe a mutation.
//!
//! - **SortKey**: parsing never fails. Anything unrecognised is `Relevance`.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// CONTENT
// =============================================================================

/// A category reference as the CMS emits it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// A displayable image asset.
///
/// The CMS emits `{ "url": ..., "width": ..., "height": ... }`; hand-written
/// search data often uses a bare URL string. Both deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl<'de> Deserialize<'de> for Image {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Url(String),
            Full {
                url: String,
                #[serde(default)]
                width: Option<u32>,
                #[serde(default)]
                height: Option<u32>,
            },
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Url(url) => Image {
                url,
                width: None,
                height: None,
            },
            Raw::Full { url, width, height } => Image { url, width, height },
        })
    }
}

/// One searchable piece of content (a blog post).
///
/// Field names follow the JSON the site exports to `search-data.json`.
/// `content` and `eyecatch` are accepted as aliases because that is what the
/// CMS calls them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, alias = "content", skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Raw timestamp text. Parsed lazily by the sort stage; garbage is tolerated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(default, alias = "eyecatch", skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

impl ContentItem {
    /// Category name, if the item is categorized.
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// A matched item paired with its relevance score.
///
/// Scores are recomputed on every search and never persisted. The basic search
/// path leaves every score at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredItem<'a> {
    pub item: &'a ContentItem,
    pub relevance_score: u32,
}

impl<'a> ScoredItem<'a> {
    /// Wrap an item that was never scored.
    pub fn unscored(item: &'a ContentItem) -> Self {
        Self {
            item,
            relevance_score: 0,
        }
    }
}

/// A typeahead suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub id: String,
    pub title: String,
    pub category: Option<String>,
}

// =============================================================================
// FACET / SORT KNOBS
// =============================================================================

/// Which category a result page is narrowed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// The literal the UI uses for "no filter".
    pub const ALL: &'static str = "all";

    /// Parse a filter value. `"all"` is the only reserved word.
    pub fn parse(value: &str) -> Self {
        if value == Self::ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value.to_string())
        }
    }

    /// Does an item with this category name pass the filter?
    pub fn accepts(&self, category_name: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(wanted) => category_name == Some(wanted.as_str()),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(Self::ALL),
            CategoryFilter::Named(name) => f.write_str(name),
        }
    }
}

/// How the final view is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Relevance,
    Newest,
    Oldest,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
        }
    }

    /// Lenient parse: unknown keys fall back to `Relevance`.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(SortKey::Relevance),
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by the strict `SortKey` parser.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key '{0}'")]
pub struct UnknownSortKey(pub String);
