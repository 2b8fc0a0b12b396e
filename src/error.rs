// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Nothing in this crate is fatal to a search session. Every error here ends up
//! either as a user-facing message (load failures) or as a log line (history
//! persistence), never as a panic.

use thiserror::Error;

/// The content collection could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "native")]
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("invalid search data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate content id '{0}'")]
    DuplicateId(String),
}

/// The history store rejected an operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("storage file is not a JSON object: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Headless CMS failures.
#[cfg(feature = "native")]
#[derive(Debug, Error)]
pub enum CmsError {
    #[error("CMS credentials are not configured (dummy mode)")]
    DummyMode,

    #[error("CMS request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CMS endpoint {endpoint} answered with status {status}")]
    Status { endpoint: String, status: u16 },

    #[error("invalid CMS endpoint url: {0}")]
    Url(#[from] url::ParseError),
}

/// Configuration file problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Any error this crate can produce.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[cfg(feature = "native")]
    #[error(transparent)]
    Cms(#[from] CmsError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
