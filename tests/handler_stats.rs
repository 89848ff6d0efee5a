mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use serde_json::json;
use shorturls::api::handlers::{shorten_handler, stats_handler, stats_list_handler};

fn stats_app(test: &common::TestApp) -> Router {
    Router::new()
        .route("/shorturls/allstats", get(stats_list_handler))
        .route("/shorturls/{code}/stats", get(stats_handler))
        .with_state(test.state.clone())
}

#[tokio::test]
async fn test_stats_by_code_success() {
    let test = common::create_test_state();
    let server = TestServer::new(stats_app(&test)).unwrap();

    common::create_test_link(&test, "testcode", "https://example.com/article").await;
    common::record_test_click(&test, "testcode", Some("https://blog.example")).await;
    common::record_test_click(&test, "testcode", None).await;

    let response = server.get("/shorturls/testcode/stats").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["shortLink"],
        format!("{}/testcode", common::TEST_BASE_URL)
    );
    assert_eq!(json["originalURL"], "https://example.com/article");
    assert_eq!(json["clicks"], 2);

    let created_at: DateTime<Utc> = json["createdAt"].as_str().unwrap().parse().unwrap();
    let expiry: DateTime<Utc> = json["expiry"].as_str().unwrap().parse().unwrap();
    assert!(expiry > created_at);

    let click_data = json["clickData"].as_array().unwrap();
    assert_eq!(click_data.len(), 2);
    assert_eq!(click_data[0]["referrer"], "https://blog.example");
    assert_eq!(click_data[0]["location"], "Unknown");
    assert!(click_data[1]["referrer"].is_null());
}

#[tokio::test]
async fn test_stats_by_code_not_found() {
    let test = common::create_test_state();
    let server = TestServer::new(stats_app(&test)).unwrap();

    let response = server.get("/shorturls/notfound/stats").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Shortcode not found.");
}

#[tokio::test]
async fn test_stats_zero_clicks() {
    let test = common::create_test_state();
    let server = TestServer::new(stats_app(&test)).unwrap();

    common::create_test_link(&test, "quiet", "https://example.com").await;

    let response = server.get("/shorturls/quiet/stats").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["clicks"], 0);
    assert_eq!(json["clickData"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_stats_available_after_expiry() {
    let test = common::create_test_state();
    let server = TestServer::new(stats_app(&test)).unwrap();

    common::create_expired_link(&test, "archived", "https://example.com/old").await;
    common::record_test_click(&test, "archived", None).await;

    let response = server.get("/shorturls/archived/stats").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["originalURL"], "https://example.com/old");
    assert_eq!(json["clicks"], 1);
}

#[tokio::test]
async fn test_stats_list_creation_order() {
    let test = common::create_test_state();
    let server = TestServer::new(stats_app(&test)).unwrap();

    common::create_test_link(&test, "first", "https://example.com/1").await;
    common::create_test_link(&test, "second", "https://example.com/2").await;
    common::create_test_link(&test, "third", "https://example.com/3").await;
    common::record_test_click(&test, "second", None).await;

    let response = server.get("/shorturls/allstats").await;

    response.assert_status_ok();

    let items = response.json::<serde_json::Value>();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(
        items[0]["shortLink"],
        format!("{}/first", common::TEST_BASE_URL)
    );
    assert_eq!(
        items[1]["shortLink"],
        format!("{}/second", common::TEST_BASE_URL)
    );
    assert_eq!(
        items[2]["shortLink"],
        format!("{}/third", common::TEST_BASE_URL)
    );
    assert_eq!(items[1]["clicks"], 1);
}

#[tokio::test]
async fn test_stats_list_empty() {
    let test = common::create_test_state();
    let server = TestServer::new(stats_app(&test)).unwrap();

    let response = server.get("/shorturls/allstats").await;

    response.assert_status_ok();

    let items = response.json::<serde_json::Value>();
    assert_eq!(items.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_shorten_then_stats_flow() {
    let test = common::create_test_state();
    let app = Router::new()
        .route("/shorturls", post(shorten_handler))
        .route("/shorturls/allstats", get(stats_list_handler))
        .route("/shorturls/{code}/stats", get(stats_handler))
        .with_state(test.state.clone());

    let server = TestServer::new(app).unwrap();

    let created = server
        .post("/shorturls")
        .json(&json!({
            "url": "https://example.com/flow",
            "shortcode": "flow1"
        }))
        .await;
    assert_eq!(created.status_code(), 201);

    common::record_test_click(&test, "flow1", Some("https://news.example")).await;

    let response = server.get("/shorturls/flow1/stats").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["originalURL"], "https://example.com/flow");
    assert_eq!(json["clicks"], 1);

    let list = server.get("/shorturls/allstats").await;
    let items = list.json::<serde_json::Value>();
    assert_eq!(items.as_array().unwrap().len(), 1);
}
