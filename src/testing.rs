//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Category, ContentItem};

/// Create a content item with just an id and a title.
///
/// This is the canonical implementation used across all tests.
pub fn make_item(id: &str, title: &str) -> ContentItem {
    make_item_full(id, title, None, None, None, None)
}

/// Create a content item with a published date.
pub fn make_dated_item(id: &str, title: &str, published_at: Option<&str>) -> ContentItem {
    make_item_full(id, title, None, None, None, published_at)
}

/// Create a content item with every searchable field spelled out.
///
/// The category id is derived from the name (lower-cased), which is what the
/// CMS fixtures look like.
pub fn make_item_full(
    id: &str,
    title: &str,
    description: Option<&str>,
    body: Option<&str>,
    category: Option<&str>,
    published_at: Option<&str>,
) -> ContentItem {
    ContentItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.map(str::to_string),
        body: body.map(str::to_string),
        category: category.map(|name| Category {
            id: name.to_lowercase(),
            name: name.to_string(),
        }),
        published_at: published_at.map(str::to_string),
        image: None,
    }
}

/// A small blog corpus: six posts, three categories, one uncategorized.
pub fn sample_blog() -> Vec<ContentItem> {
    vec![
        make_item_full(
            "hiking-guide",
            "Hiking Guide",
            Some("Trails around Kumono for every level"),
            Some("Start early and bring water. The ridge trail is the best park walk."),
            Some("Outdoor"),
            Some("2024-01-01T00:00:00.000Z"),
        ),
        make_item_full(
            "city-life",
            "City Life",
            Some("Cafes, trains and late-night ramen"),
            Some("The station area changed a lot this year."),
            Some("Lifestyle"),
            Some("2023-06-15T00:00:00.000Z"),
        ),
        make_item_full(
            "kumono-park",
            "Kumono Park",
            Some("best park"),
            Some("Cherry blossoms in spring, maple in autumn."),
            Some("Outdoor"),
            Some("2022-04-10T00:00:00.000Z"),
        ),
        make_item_full(
            "ramen-map",
            "Ramen Map",
            Some("Twelve bowls near the park"),
            None,
            Some("Food"),
            Some("2024-02-20T00:00:00.000Z"),
        ),
        make_item_full(
            "site-news",
            "Site News",
            None,
            Some("We moved the blog to a new CMS."),
            None,
            Some("not-a-date"),
        ),
        make_item_full(
            "autumn-hike",
            "Autumn Hike Report",
            Some("Maple trails"),
            Some("A long hike with friends."),
            Some("Outdoor"),
            None,
        ),
    ]
}
