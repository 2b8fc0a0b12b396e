// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the kumono-search command-line interface.
//!
//! `search`, `suggest` and `categories` run the engine against a
//! `search-data.json`: a local path or URL given with `--data`, or the config's
//! `dataUrl`. `history` manages the on-disk query history that `search`
//! appends to. `export` pulls every post out of the CMS
//! and writes the `search-data.json` the other commands read.

pub mod display;

use clap::{Parser, Subcommand};
use kumono_search::{SearchConfig, SortKey};
use std::convert::Infallible;
use std::path::PathBuf;
use tracing::warn;

/// History file used when `--store` is not given.
pub const DEFAULT_STORE: &str = ".kumono-search/history.json";

#[derive(Parser)]
#[command(
    name = "kumono-search",
    about = "Keyword search over a static blog export",
    version
)]
pub struct Cli {
    /// JSON config file (every field optional)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the content collection and print matching posts
    Search {
        /// Search query (whitespace-separated terms, all must match)
        query: String,

        /// search-data.json path or http(s) URL (default: config dataUrl)
        #[arg(short, long)]
        data: Option<String>,

        /// Only show results in this category ("all" for every category)
        #[arg(short, long)]
        category: Option<String>,

        /// Result order: relevance, newest or oldest (anything else is relevance)
        #[arg(short, long, default_value = "relevance", value_parser = lenient_sort)]
        sort: SortKey,

        /// Show relevance scores next to each result
        #[arg(long)]
        scores: bool,

        /// Unscored search: matches in collection order, no facets
        #[arg(long)]
        basic: bool,

        /// Don't record the query in history
        #[arg(long)]
        no_history: bool,

        /// History file
        #[arg(long, default_value = DEFAULT_STORE)]
        store: PathBuf,
    },

    /// Typeahead suggestions for a partial query
    Suggest {
        /// What has been typed so far
        partial: String,

        /// search-data.json path or http(s) URL (default: config dataUrl)
        #[arg(short, long)]
        data: Option<String>,
    },

    /// Categories present among a query's results
    Categories {
        /// Search query
        query: String,

        /// search-data.json path or http(s) URL (default: config dataUrl)
        #[arg(short, long)]
        data: Option<String>,
    },

    /// Show or edit search history
    History {
        #[command(subcommand)]
        action: HistoryAction,

        /// History file
        #[arg(long, default_value = DEFAULT_STORE, global = true)]
        store: PathBuf,
    },

    /// Export every CMS post to a search-data.json file
    ///
    /// Credentials come from MICROCMS_SERVICE_DOMAIN and MICROCMS_API_KEY.
    /// Without them the export is empty.
    Export {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Posts fetched per request (1-100)
        #[arg(long, default_value = "100")]
        page_size: usize,
    },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// Print recent queries, most recent first
    List,
    /// Forget all recent queries
    Clear,
    /// Record a query as if it had been searched
    Add {
        query: String,
    },
}

/// The collection to load: `--data` if given, the config's `dataUrl` otherwise.
pub fn data_source<'a>(data: Option<&'a str>, config: &'a SearchConfig) -> &'a str {
    data.unwrap_or(&config.data_url)
}

/// Unknown sort keys fall back to relevance, same as the web UI.
fn lenient_sort(value: &str) -> Result<SortKey, Infallible> {
    let key = SortKey::parse_lenient(value);
    if key.as_str() != value {
        warn!(requested = value, "unknown sort key, using relevance");
    }
    Ok(key)
}
