// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Configuration.
//!
//! `SearchConfig` is a JSON file where every field has a default, so `{}` is a
//! valid config and so is no file at all. CMS credentials come from the
//! environment only; they never belong in a file that gets committed.

use crate::error::ConfigError;
use crate::history::{HISTORY_KEY, MAX_HISTORY};
use crate::location::QUERY_PARAM;
use crate::search::{MAX_SUGGESTIONS, MIN_SUGGESTION_CHARS};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Engine and site-layout settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Where the content collection is fetched from.
    pub data_url: String,
    /// Storage key for search history.
    pub history_key: String,
    pub history_limit: usize,
    pub suggestion_limit: usize,
    pub min_suggestion_chars: usize,
    /// Path of the search results page.
    pub search_path: String,
    /// Prefix for item pages (`{item_path}/{id}`).
    pub item_path: String,
    pub query_param: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            data_url: "/search-data.json".to_string(),
            history_key: HISTORY_KEY.to_string(),
            history_limit: MAX_HISTORY,
            suggestion_limit: MAX_SUGGESTIONS,
            min_suggestion_chars: MIN_SUGGESTION_CHARS,
            search_path: "/blog/search".to_string(),
            item_path: "/blog".to_string(),
            query_param: QUERY_PARAM.to_string(),
        }
    }
}

impl SearchConfig {
    /// Parse a config from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load from a file if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

/// Environment variable holding the CMS service subdomain.
pub const CMS_DOMAIN_ENV: &str = "MICROCMS_SERVICE_DOMAIN";

/// Environment variable holding the CMS API key.
pub const CMS_API_KEY_ENV: &str = "MICROCMS_API_KEY";

/// Headless CMS credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct CmsConfig {
    pub service_domain: String,
    pub api_key: String,
    /// Override for the API origin (tests point this at a mock server).
    pub base_url: Option<String>,
}

// Keep the key out of logs.
impl std::fmt::Debug for CmsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CmsConfig")
            .field("service_domain", &self.service_domain)
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl CmsConfig {
    pub fn new(service_domain: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            service_domain: service_domain.into(),
            api_key: api_key.into(),
            base_url: None,
        }
    }

    /// Read credentials from the environment.
    ///
    /// Returns `None` (dummy mode) unless both variables are set and non-empty.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as `from_env` with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let domain = lookup(CMS_DOMAIN_ENV).filter(|v| !v.is_empty())?;
        let key = lookup(CMS_API_KEY_ENV).filter(|v| !v.is_empty())?;
        Some(Self::new(domain, key))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// API root, always ending in `/`.
    pub fn api_root(&self) -> String {
        match &self.base_url {
            Some(base) => format!("{}/", base.trim_end_matches('/')),
            None => format!("https://{}.microcms.io/api/v1/", self.service_domain),
        }
    }
}
