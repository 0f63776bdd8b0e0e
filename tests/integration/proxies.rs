//! Integration tests for the Metals.dev and NewsAPI pass-through routes.

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::test_utils::{mock_status, TestApp, API_KEY};

#[tokio::test]
async fn metals_passes_upstream_document_through() {
    let app = TestApp::new().await;
    let upstream = json!({
        "status": "success",
        "currency": "USD",
        "unit": "toz",
        "metals": { "gold": 2321.45, "silver": 27.31, "platinum": 958.2 },
        "timestamps": { "metal": "2024-05-03T12:00:00.000Z" }
    });
    Mock::given(method("GET"))
        .and(path("/v1/latest"))
        .and(query_param("api_key", API_KEY))
        .and(query_param("currency", "USD"))
        .and(query_param("unit", "toz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream.clone()))
        .mount(&app.upstream)
        .await;

    let response = app.server.get("/api/metals").await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response.header("cache-control"),
        "s-maxage=60, stale-while-revalidate"
    );

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], upstream);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn metals_rate_limit_is_relayed() {
    let app = TestApp::new().await;
    mock_status(&app.upstream, "/v1/latest", 429).await;

    let response = app.server.get("/api/metals").await;
    assert_eq!(response.status_code(), 429);

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error"],
        "Price service temporarily unavailable. Please try again later."
    );
}

#[tokio::test]
async fn metals_unsuccessful_payload_is_a_server_error() {
    let app = TestApp::new().await;
    Mock::given(path("/v1/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "failure",
            "error_code": 1101,
            "error_message": "Invalid API key"
        })))
        .mount(&app.upstream)
        .await;

    let response = app.server.get("/api/metals").await;
    assert_eq!(response.status_code(), 500);

    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Failed to fetch metal prices. Please try again later."
    );
}

#[tokio::test]
async fn metals_reports_unconfigured_service() {
    let app = TestApp::unconfigured().await;

    let response = app.server.get("/api/metals").await;
    assert_eq!(response.status_code(), 500);

    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Metals price service not configured. Please contact administrator."
    );
}

#[tokio::test]
async fn news_returns_articles_and_total() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .and(query_param("q", "gold market OR gold price"))
        .and(query_param("sortBy", "publishedAt"))
        .and(query_param("pageSize", "6"))
        .and(query_param("language", "en"))
        .and(query_param("apiKey", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "totalResults": 1342,
            "articles": [
                { "title": "Gold edges higher", "url": "https://news.example.com/a" },
                { "title": "Bullion steady ahead of data", "url": "https://news.example.com/b" }
            ]
        })))
        .mount(&app.upstream)
        .await;

    let response = app.server.get("/api/news").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["totalResults"], 1342);
    assert_eq!(body["articles"].as_array().unwrap().len(), 2);
    assert_eq!(body["articles"][0]["title"], "Gold edges higher");
}

#[tokio::test]
async fn news_upstream_failure_is_a_server_error() {
    let app = TestApp::new().await;
    mock_status(&app.upstream, "/v2/everything", 401).await;

    let response = app.server.get("/api/news").await;
    assert_eq!(response.status_code(), 500);

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Failed to fetch news");
}
