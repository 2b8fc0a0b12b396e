// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Render surface contract.
//!
//! The engine never draws anything. It hands a surface a list of
//! [`ResultCard`]s (or an empty state) and gets back [`Selection`]s. Selections
//! turn into navigation targets; they never feed back into engine state.

use crate::config::SearchConfig;
use crate::location::{item_href, search_href};
use crate::scoring::ranking::parse_published_at;
use crate::session::{SearchSession, SearchStatus};
use crate::types::{ContentItem, ScoredItem};
use chrono::{Datelike, FixedOffset};
use serde::Serialize;

/// Everything a surface needs to draw one result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultCard {
    pub id: String,
    pub title: String,
    pub href: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    /// `2024年1月1日`, or the raw text if it didn't parse.
    pub published: Option<String>,
    pub relevance_score: u32,
}

impl ResultCard {
    pub fn from_scored(result: &ScoredItem<'_>, config: &SearchConfig) -> Self {
        let item = result.item;
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            href: item_href(&config.item_path, &item.id),
            description: item.description.clone(),
            image_url: item.image.as_ref().map(|img| img.url.clone()),
            category: item.category_name().map(str::to_string),
            published: item.published_at.as_deref().map(format_date),
            relevance_score: result.relevance_score,
        }
    }
}

/// Offset dates are shown in: JST, where the site's readers are.
pub const DISPLAY_UTC_OFFSET_SECS: i32 = 9 * 3600;

/// Format a published timestamp the way the site prints dates: `2024年1月1日`.
///
/// The calendar day is taken in JST, so `2023-12-31T20:00:00Z` is New Year's
/// Day. Unparseable input is returned as-is rather than hidden.
pub fn format_date(raw: &str) -> String {
    let local = parse_published_at(raw).and_then(|dt| {
        FixedOffset::east_opt(DISPLAY_UTC_OFFSET_SECS).map(|offset| dt.with_timezone(&offset))
    });
    match local {
        Some(dt) => format!("{}年{}月{}日", dt.year(), dt.month(), dt.day()),
        None => raw.to_string(),
    }
}

/// Which empty state to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyState {
    /// Nothing submitted yet: draw nothing.
    Idle,
    /// Blank query: ask for a keyword.
    NeedsQuery,
    /// Real query, zero results: echo the query and suggest alternatives.
    NoMatches { query: String },
}

impl EmptyState {
    pub fn message(&self) -> String {
        match self {
            EmptyState::Idle => String::new(),
            EmptyState::NeedsQuery => "Enter a keyword to search.".to_string(),
            EmptyState::NoMatches { query } => format!(
                "No articles matched \"{}\". Try another keyword or browse by category.",
                query
            ),
        }
    }
}

/// A surface that can show results.
pub trait RenderSurface {
    fn render_results(&mut self, query: &str, cards: &[ResultCard], categories: &[String]);
    fn render_empty(&mut self, state: &EmptyState);
    fn render_error(&mut self, message: &str);
}

/// Push the session's current state to a surface.
pub fn render_session(session: &SearchSession, surface: &mut impl RenderSurface) {
    let query = session.query().map(|q| q.raw().to_string()).unwrap_or_default();
    match session.status() {
        SearchStatus::LoadFailed(message) => surface.render_error(&message),
        SearchStatus::Idle => surface.render_empty(&EmptyState::Idle),
        SearchStatus::EmptyQuery => surface.render_empty(&EmptyState::NeedsQuery),
        SearchStatus::NoMatches => surface.render_empty(&EmptyState::NoMatches { query }),
        SearchStatus::Results(_) => {
            let cards: Vec<ResultCard> = session
                .view()
                .iter()
                .map(|r| ResultCard::from_scored(r, session.config()))
                .collect();
            // A category filter can empty the view even when the search matched.
            if cards.is_empty() {
                surface.render_empty(&EmptyState::NoMatches { query });
            } else {
                surface.render_results(&query, &cards, session.categories());
            }
        }
    }
}

/// What the reader picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A specific item (a result card or a suggestion).
    Item(String),
    /// A query (a history entry, or the search form).
    Search(String),
}

impl Selection {
    /// Navigation target for the selection.
    pub fn href(&self, config: &SearchConfig) -> String {
        match self {
            Selection::Item(id) => item_href(&config.item_path, id),
            Selection::Search(query) => {
                search_href(&config.search_path, &config.query_param, query.trim())
            }
        }
    }
}

/// Card for an item outside a search (e.g. a suggestion target preview).
pub fn card_for(item: &ContentItem, config: &SearchConfig) -> ResultCard {
    ResultCard::from_scored(&ScoredItem::unscored(item), config)
}
