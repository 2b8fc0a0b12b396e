//! The CMS client against a mock microCMS.

use kumono_search::cms::API_KEY_HEADER;
use kumono_search::error::CmsError;
use kumono_search::{export_all_blogs, Catalog, CmsClient, CmsConfig, CmsQueries};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-key";

fn client(server: &MockServer) -> CmsClient {
    CmsClient::new(CmsConfig::new("kumono", API_KEY).with_base_url(format!("{}/api/v1", server.uri())))
}

fn blog(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("about {}", title),
        "content": "<p>body</p>",
        "category": {"id": "outdoor", "name": "Outdoor", "createdAt": "2024-01-01T00:00:00.000Z"},
        "publishedAt": "2024-01-01T00:00:00.000Z",
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-01T00:00:00.000Z",
        "revisedAt": "2024-01-01T00:00:00.000Z"
    })
}

fn page(contents: Vec<Value>, total: usize, offset: usize, limit: usize) -> Value {
    json!({"contents": contents, "totalCount": total, "offset": offset, "limit": limit})
}

#[tokio::test]
async fn test_get_blogs_sends_key_and_queries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blogs"))
        .and(header(API_KEY_HEADER, API_KEY))
        .and(query_param("limit", "2"))
        .and(query_param("orders", "-publishedAt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![blog("a", "Alpha"), blog("b", "Beta")],
            2,
            0,
            2,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let queries = CmsQueries {
        limit: Some(2),
        orders: Some("-publishedAt".to_string()),
        ..CmsQueries::default()
    };
    let response = client(&server).get_blogs(&queries).await.unwrap();
    assert_eq!(response.total_count, 2);
    assert_eq!(response.contents[1].title, "Beta");
}

#[tokio::test]
async fn test_blog_detail_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blogs/kumono-park"))
        .respond_with(ResponseTemplate::new(200).set_body_json(blog("kumono-park", "Kumono Park")))
        .mount(&server)
        .await;

    let detail = client(&server)
        .get_blog_detail("kumono-park", &CmsQueries::default())
        .await
        .unwrap();
    assert_eq!(detail.title, "Kumono Park");
    assert_eq!(detail.category.map(|c| c.name).as_deref(), Some("Outdoor"));
}

#[tokio::test]
async fn test_categories() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![json!({"id": "food", "name": "Food"})],
            1,
            0,
            10,
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/categories/food"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "food", "name": "Food"})))
        .mount(&server)
        .await;

    let cms = client(&server);
    let list = cms.get_categories(&CmsQueries::default()).await.unwrap();
    assert_eq!(list.contents[0].name, "Food");
    let detail = cms.get_category_detail("food", &CmsQueries::default()).await.unwrap();
    assert_eq!(detail.id, "food");
}

#[tokio::test]
async fn test_blogs_by_category_sets_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blogs"))
        .and(query_param("filters", "category[equals]outdoor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![blog("a", "Alpha")], 1, 0, 10)))
        .expect(1)
        .mount(&server)
        .await;

    let queries = CmsQueries {
        filters: Some("title[contains]x".to_string()),
        ..CmsQueries::default()
    };
    let response = client(&server)
        .get_blogs_by_category("outdoor", &queries)
        .await
        .unwrap();
    assert_eq!(response.contents.len(), 1);
}

#[tokio::test]
async fn test_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client(&server).get_blogs(&CmsQueries::default()).await.unwrap_err();
    assert!(matches!(err, CmsError::Status { status: 401, .. }));
}

#[tokio::test]
async fn test_export_pages_through_everything() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blogs"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![blog("a", "Alpha"), blog("b", "Beta")],
            3,
            0,
            2,
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blogs"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![blog("c", "Gamma")], 3, 2, 2)))
        .mount(&server)
        .await;

    let items = export_all_blogs(&client(&server), 2).await.unwrap();
    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);

    // The export is exactly what the search engine loads.
    let json = serde_json::to_string(&items).unwrap();
    let catalog = Catalog::from_json(&json).unwrap();
    assert_eq!(catalog.get("c").map(|i| i.title.as_str()), Some("Gamma"));
    assert_eq!(catalog.get("a").and_then(|i| i.body.as_deref()), Some("<p>body</p>"));
}
