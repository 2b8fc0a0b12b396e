// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Headless CMS client (microCMS REST API).
//!
//! The blog's posts and categories live in microCMS. The site build pages
//! through every post and writes them to `search-data.json`, which is what the
//! search engine loads. This module is that export step plus the read calls
//! the site uses.
//!
//! # Endpoints
//!
//! | Call                     | Request                                         |
//! |--------------------------|-------------------------------------------------|
//! | `get_blogs`              | `GET blogs?{queries}`                           |
//! | `get_blog_detail`        | `GET blogs/{id}?{queries}`                      |
//! | `get_categories`         | `GET categories?{queries}`                      |
//! | `get_category_detail`    | `GET categories/{id}?{queries}`                 |
//! | `get_blogs_by_category`  | `GET blogs?filters=category[equals]{id}&...`    |
//!
//! # Dummy mode
//!
//! Without credentials the client still works: list calls return empty pages
//! and detail calls return [`CmsError::DummyMode`]. A fresh checkout can build
//! the site (with an empty search index) before anyone has set up the CMS.

use crate::config::CmsConfig;
use crate::error::CmsError;
use crate::types::{Category, ContentItem, Image};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-MICROCMS-API-KEY";

/// Largest page the API serves.
pub const MAX_PAGE_SIZE: usize = 100;

const BLOGS_ENDPOINT: &str = "blogs";
const CATEGORIES_ENDPOINT: &str = "categories";

// ============================================================================
// WIRE TYPES
// ============================================================================

/// Query parameters accepted by list and detail endpoints. Unset fields are
/// left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsQueries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
    /// e.g. `-publishedAt`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<String>,
    /// Full-text query, evaluated by the CMS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Comma-separated field list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<String>,
    /// Reference expansion depth (1-3).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_key: Option<String>,
}

impl CmsQueries {
    pub fn page(limit: usize, offset: usize) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
            ..Self::default()
        }
    }

    pub fn with_fields(mut self, fields: &[&str]) -> Self {
        self.fields = Some(fields.join(","));
        self
    }

    pub fn with_orders(mut self, orders: impl Into<String>) -> Self {
        self.orders = Some(orders.into());
        self
    }
}

/// A page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub contents: Vec<T>,
    pub total_count: usize,
    pub offset: usize,
    pub limit: usize,
}

impl<T> ListResponse<T> {
    fn empty(queries: &CmsQueries) -> Self {
        Self {
            contents: Vec::new(),
            total_count: 0,
            offset: queries.offset.unwrap_or(0),
            limit: queries.limit.unwrap_or(0),
        }
    }
}

/// A category as the CMS returns it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsCategory {
    pub id: String,
    pub name: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub published_at: Option<String>,
    pub revised_at: Option<String>,
}

impl From<CmsCategory> for Category {
    fn from(c: CmsCategory) -> Self {
        Category {
            id: c.id,
            name: c.name,
        }
    }
}

/// A blog post as the CMS returns it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub eyecatch: Option<Image>,
    pub category: Option<CmsCategory>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub published_at: Option<String>,
    pub revised_at: Option<String>,
}

impl From<Blog> for ContentItem {
    fn from(blog: Blog) -> Self {
        ContentItem {
            id: blog.id,
            title: blog.title,
            description: blog.description,
            body: blog.content,
            category: blog.category.map(Category::from),
            published_at: blog.published_at,
            image: blog.eyecatch,
        }
    }
}

// ============================================================================
// CLIENT
// ============================================================================

/// microCMS client. Cheap to clone.
#[derive(Debug, Clone)]
pub struct CmsClient {
    http: reqwest::Client,
    config: Option<CmsConfig>,
}

impl CmsClient {
    pub fn new(config: CmsConfig) -> Self {
        Self {
            http: http_client(),
            config: Some(config),
        }
    }

    /// A client without credentials.
    pub fn dummy() -> Self {
        Self {
            http: http_client(),
            config: None,
        }
    }

    /// Credentials from `MICROCMS_SERVICE_DOMAIN` / `MICROCMS_API_KEY`,
    /// dummy mode if either is missing.
    pub fn from_env() -> Self {
        match CmsConfig::from_env() {
            Some(config) => Self::new(config),
            None => {
                warn!("CMS environment variables are not set, using dummy mode");
                Self::dummy()
            }
        }
    }

    pub fn is_dummy(&self) -> bool {
        self.config.is_none()
    }

    pub async fn get_blogs(&self, queries: &CmsQueries) -> Result<ListResponse<Blog>, CmsError> {
        self.get_list(BLOGS_ENDPOINT, queries).await
    }

    pub async fn get_blog_detail(&self, id: &str, queries: &CmsQueries) -> Result<Blog, CmsError> {
        self.get_detail(BLOGS_ENDPOINT, id, queries).await
    }

    pub async fn get_categories(
        &self,
        queries: &CmsQueries,
    ) -> Result<ListResponse<CmsCategory>, CmsError> {
        self.get_list(CATEGORIES_ENDPOINT, queries).await
    }

    pub async fn get_category_detail(
        &self,
        id: &str,
        queries: &CmsQueries,
    ) -> Result<CmsCategory, CmsError> {
        self.get_detail(CATEGORIES_ENDPOINT, id, queries).await
    }

    /// Posts in one category. Replaces any `filters` already in `queries`.
    pub async fn get_blogs_by_category(
        &self,
        category_id: &str,
        queries: &CmsQueries,
    ) -> Result<ListResponse<Blog>, CmsError> {
        let queries = CmsQueries {
            filters: Some(format!("category[equals]{}", category_id)),
            ..queries.clone()
        };
        self.get_blogs(&queries).await
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        queries: &CmsQueries,
    ) -> Result<ListResponse<T>, CmsError> {
        let Some(config) = &self.config else {
            return Ok(ListResponse::empty(queries));
        };
        let url = Url::parse(&config.api_root())?.join(endpoint)?;
        self.fetch(config, url, endpoint, queries).await
    }

    async fn get_detail<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        id: &str,
        queries: &CmsQueries,
    ) -> Result<T, CmsError> {
        let Some(config) = &self.config else {
            return Err(CmsError::DummyMode);
        };
        let mut url = Url::parse(&config.api_root())?.join(endpoint)?;
        // push_segment percent-encodes the id
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(id);
        }
        self.fetch(config, url, endpoint, queries).await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        config: &CmsConfig,
        url: Url,
        endpoint: &str,
        queries: &CmsQueries,
    ) -> Result<T, CmsError> {
        debug!(%url, "CMS request");
        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &config.api_key)
            .query(queries)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint, status = status.as_u16(), "CMS request failed");
            return Err(CmsError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.json::<T>().await?)
    }
}

fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap_or_default()
}

// ============================================================================
// EXPORT
// ============================================================================

/// Page through every blog post, newest first, as search content.
///
/// `page_size` is clamped to `1..=100`. In dummy mode this returns an empty
/// list.
pub async fn export_all_blogs(
    client: &CmsClient,
    page_size: usize,
) -> Result<Vec<ContentItem>, CmsError> {
    let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
    let mut items = Vec::new();
    let mut offset = 0;

    loop {
        let queries = CmsQueries::page(page_size, offset).with_orders("-publishedAt");
        let page = client.get_blogs(&queries).await?;
        let fetched = page.contents.len();
        items.extend(page.contents.into_iter().map(ContentItem::from));
        offset += fetched;

        if fetched == 0 || offset >= page.total_count {
            break;
        }
    }

    info!(items = items.len(), "exported blog posts");
    Ok(items)
}
