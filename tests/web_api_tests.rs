//! Integration tests for the Mendeleev Web API.
//!
//! These tests require the `web` feature to be enabled:
//! ```bash
//! cargo test --features web web_api
//! ```

#![cfg(feature = "web")]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use mendeleev::config::ServerConfig;
use mendeleev::data::{DataSource, Dataset};
use mendeleev::web::{create_router, AppState, API_VERSION};

mod fixtures;
use fixtures::sample_data_dir;

/// Creates a test AppState over the embedded data set.
fn create_test_state() -> AppState {
    let data = DataSource::Embedded.load().expect("Embedded data should load");
    AppState::new(data, ServerConfig::default()).expect("Failed to create app state")
}

fn create_sample_state() -> AppState {
    let dir = sample_data_dir();
    let data: Dataset = DataSource::Directory(dir.path().to_path_buf())
        .load()
        .expect("Sample data should load");
    AppState::new(data, ServerConfig::default()).expect("Failed to create app state")
}

/// Sends a GET request and returns the status and parsed JSON body.
async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = create_router(create_test_state());
    let (status, json) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], API_VERSION);
    assert_eq!(json["element_count"], 118);
    assert!(json["timestamp"].is_string());
    assert_eq!(json["cache_stats"]["hits"], 0);
}

#[tokio::test]
async fn test_api_health_alias() {
    let app = create_router(create_test_state());
    let (status, _) = get_json(app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_response_headers() {
    let app = create_router(create_test_state());
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers["x-api-version"], API_VERSION);
    let request_id = headers["x-request-id"].to_str().unwrap();
    assert_eq!(request_id.len(), 36);
}

#[tokio::test]
async fn test_security_headers() {
    let app = create_router(create_test_state());
    let response = app
        .oneshot(Request::builder().uri("/api/elements/Fe").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(headers["content-security-policy"], "default-src 'self'");
    assert!(headers["cache-control"].to_str().unwrap().contains("no-store"));
}

#[tokio::test]
async fn test_request_ids_are_unique() {
    let app = create_router(create_test_state());
    let mut ids = Vec::new();
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        ids.push(response.headers()["x-request-id"].clone());
    }
    assert_ne!(ids[0], ids[1]);
}

// ============================================================================
// Element list
// ============================================================================

#[tokio::test]
async fn test_list_default_page() {
    let app = create_router(create_test_state());
    let (status, json) = get_json(app, "/api/elements").await;

    assert_eq!(status, StatusCode::OK);
    let metadata = &json["metadata"];
    assert_eq!(metadata["total_items"], 118);
    assert_eq!(metadata["total_pages"], 3);
    assert_eq!(metadata["page"], 1);
    assert_eq!(metadata["has_next"], true);
    assert_eq!(metadata["has_previous"], false);

    let elements = json["elements"].as_array().unwrap();
    assert_eq!(elements.len(), 50);
    assert_eq!(elements[0]["symbol"], "H");
    assert_eq!(elements[0]["_links"]["self"], "/api/elements/1");
    assert_eq!(elements[0]["_links"]["symbol"], "/api/elements/H");
    assert!(elements[0].get("protons").is_none());
    assert_eq!(json["language"], "en");
}

#[tokio::test]
async fn test_list_filters_and_sorting() {
    let app = create_router(create_test_state());
    let (status, json) = get_json(
        app,
        "/api/elements?category=noble-gas&sort_by=atomic_number&order=desc&detailed=true",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let elements = json["elements"].as_array().unwrap();
    assert_eq!(elements.len(), 7);
    assert_eq!(elements[0]["symbol"], "Og");
    assert_eq!(elements[6]["symbol"], "He");
    assert!(elements[6]["protons"].is_number());
}

#[tokio::test]
async fn test_list_last_page() {
    let app = create_router(create_test_state());
    let (_, json) = get_json(app, "/api/elements?page=3&limit=50").await;

    assert_eq!(json["elements"].as_array().unwrap().len(), 18);
    assert_eq!(json["metadata"]["has_next"], false);
    assert_eq!(json["metadata"]["has_previous"], true);
}

#[tokio::test]
async fn test_list_huge_page_is_empty() {
    let app = create_router(create_test_state());
    let (status, json) = get_json(app, &format!("/api/elements?page={}", usize::MAX)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["elements"].as_array().unwrap().is_empty());
    assert_eq!(json["metadata"]["has_next"], false);
}

#[tokio::test]
async fn test_list_rejects_invalid_parameters() {
    for uri in [
        "/api/elements?sort_by=color",
        "/api/elements?order=sideways",
        "/api/elements?limit=0",
        "/api/elements?limit=101",
        "/api/elements?page=0",
        "/api/elements?lang=de",
    ] {
        let app = create_router(create_test_state());
        let (status, json) = get_json(app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(json["error"].is_string(), "{uri}");
    }
}

// ============================================================================
// Single element
// ============================================================================

#[tokio::test]
async fn test_get_element_by_any_identifier() {
    let state = create_test_state();
    for uri in ["/api/elements/26", "/api/elements/Fe", "/api/elements/fe", "/api/elements/Iron"] {
        let (status, json) = get_json(create_router(state.clone()), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(json["symbol"], "Fe", "{uri}");
        assert_eq!(json["atomic_number"], 26, "{uri}");
    }
}

#[tokio::test]
async fn test_get_element_detailed_by_default() {
    let app = create_router(create_test_state());
    let (_, json) = get_json(app, "/api/elements/Na").await;
    assert_eq!(json["electrons_per_shell"], serde_json::json!([2, 8, 1]));
    assert!(json.get("similar_elements").is_none());

    let app = create_router(create_test_state());
    let (_, json) = get_json(app, "/api/elements/Na?detailed=false").await;
    assert!(json.get("electrons_per_shell").is_none());
}

#[tokio::test]
async fn test_get_element_persian_display_name() {
    let app = create_router(create_test_state());
    let (_, json) = get_json(app, "/api/elements/H?lang=fa").await;
    assert_eq!(json["display_name"], "هیدروژن");
    assert_eq!(json["name"], "Hydrogen");
}

#[tokio::test]
async fn test_get_element_with_similar() {
    let app = create_router(create_test_state());
    let (_, json) = get_json(app, "/api/elements/Ne?include_similar=true").await;

    let similar = json["similar_elements"].as_array().unwrap();
    assert_eq!(similar.len(), 5);
    assert!(similar.iter().all(|e| e["symbol"] != "Ne"));
}

#[tokio::test]
async fn test_get_element_not_found_is_bilingual() {
    let app = create_router(create_test_state());
    let (status, json) = get_json(app, "/api/elements/Xx").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Element Xx not found");
    assert_eq!(json["messages"]["en"], "Element Xx not found");
    assert!(json["messages"]["fa"].as_str().unwrap().contains("یافت نشد"));
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_search_ranks_results() {
    let app = create_router(create_test_state());
    let (status, json) = get_json(app, "/api/search?q=fe").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["query"], "fe");
    assert_eq!(json["fields_searched"], serde_json::json!(["symbol", "name", "fa_name"]));

    let results = json["results"].as_array().unwrap();
    assert_eq!(json["count"], results.len());
    assert_eq!(results[0]["symbol"], "Fe");
    assert_eq!(results[0]["relevance_score"], 100);
    let scores: Vec<u64> = results.iter().map(|r| r["relevance_score"].as_u64().unwrap()).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_search_category_field() {
    let app = create_router(create_test_state());
    let (_, json) = get_json(app, "/api/search?q=noble&fields=category").await;
    assert_eq!(json["count"], 7);
}

#[tokio::test]
async fn test_search_short_query_is_empty() {
    let app = create_router(create_test_state());
    let (status, json) = get_json(app, "/api/search?q=h").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 0);
}

#[tokio::test]
async fn test_search_limit_bounds() {
    for limit in ["0", "101"] {
        let app = create_router(create_test_state());
        let (status, _) = get_json(app, &format!("/api/search?q=iron&limit={limit}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "limit={limit}");
    }
}

#[tokio::test]
async fn test_search_requires_query() {
    let app = create_router(create_test_state());
    let (status, _) = get_json(app, "/api/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_alias_search_prefix() {
    let app = create_router(create_sample_state());
    let (status, json) = get_json(app, "/api/aliases/search?q=7").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 2);
    assert_eq!(json["symbols"], serde_json::json!(["Li", "N"]));
}

#[tokio::test]
async fn test_alias_search_empty_query_matches_all() {
    let app = create_router(create_sample_state());
    let (_, json) = get_json(app, "/api/aliases/search").await;
    assert_eq!(json["count"], 8);
}

// ============================================================================
// Compare and stats
// ============================================================================

#[tokio::test]
async fn test_compare_elements() {
    let app = create_router(create_test_state());
    let (status, json) = get_json(app, "/api/compare/Li/Na").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["elements"][0]["symbol"], "Li");
    assert_eq!(json["elements"][1]["symbol"], "Na");
    let similar: Vec<&str> = json["similarities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["property"].as_str().unwrap())
        .collect();
    assert!(similar.contains(&"group"));
}

#[tokio::test]
async fn test_compare_unknown_element() {
    let app = create_router(create_test_state());
    let (status, json) = get_json(app, "/api/compare/Li/Zz").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Element Zz not found");
}

#[tokio::test]
async fn test_stats() {
    let app = create_router(create_test_state());
    let (status, json) = get_json(app, "/api/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_elements"], 118);
    assert_eq!(json["periods"]["1"], 2);
    assert_eq!(json["categories"]["lanthanide"], 15);
    assert!(json["cache_stats"]["hit_rate"].is_number());
}

#[tokio::test]
async fn test_repeated_request_hits_cache() {
    let state = create_test_state();

    get_json(create_router(state.clone()), "/api/elements/Fe").await;
    let (_, first) = get_json(create_router(state.clone()), "/api/stats").await;
    assert_eq!(first["cache_stats"]["hits"], 0);
    assert_eq!(first["cache_stats"]["size"], 1);

    get_json(create_router(state.clone()), "/api/elements/Fe").await;
    let (_, second) = get_json(create_router(state), "/api/stats").await;
    assert_eq!(second["cache_stats"]["hits"], 1);
    assert_eq!(second["cache_stats"]["size"], 1);
}

// ============================================================================
// Export
// ============================================================================

async fn export(app: Router, uri: &str) -> (StatusCode, String, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let disposition = response
        .headers()
        .get("content-disposition")
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, disposition, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_export_minified_download() {
    let app = create_router(create_test_state());
    let (status, disposition, body) = export(app, "/api/export/json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(disposition.starts_with("attachment; filename=mendeleev_elements_"));
    assert!(disposition.ends_with(".json"));
    assert!(!body.contains('\n'));

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json.as_object().unwrap().len(), 118);
    assert_eq!(json["26"]["symbol"], "Fe");
    assert_eq!(json["26"]["display_name"], "Iron");
    assert!(json["26"]["electrons_per_shell"].is_array());
}

#[tokio::test]
async fn test_export_pretty_persian() {
    let app = create_router(create_test_state());
    let (status, _, body) = export(app, "/api/export/json?format_type=pretty&lang=fa").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\n  \""));
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["1"]["display_name"], "هیدروژن");
}

#[tokio::test]
async fn test_export_rejects_unknown_format() {
    let app = create_router(create_test_state());
    let (status, _, _) = export(app, "/api/export/json?format_type=compressed").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Router configuration
// ============================================================================

#[tokio::test]
async fn test_cors_headers_when_enabled() {
    let app = create_router(create_test_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("Origin", "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn test_static_fallback() {
    let static_dir = tempfile::TempDir::new().unwrap();
    std::fs::write(static_dir.path().join("index.html"), "<h1>table</h1>").unwrap();

    let data = DataSource::Embedded.load().unwrap();
    let server = ServerConfig {
        static_dir: Some(static_dir.path().to_path_buf()),
        ..ServerConfig::default()
    };
    let app = create_router(AppState::new(data, server).unwrap());

    let response = app
        .oneshot(Request::builder().uri("/index.html").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"<h1>table</h1>");
}

#[tokio::test]
async fn test_unknown_route_without_static_dir() {
    let app = create_router(create_test_state());
    let (status, _) = get_json(app, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
