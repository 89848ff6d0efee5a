mod common;

use axum::{Router, extract::ConnectInfo, routing::get};
use axum_test::TestServer;
use shorturls::api::handlers::redirect_handler;
use shorturls::domain::repositories::ClickRepository;
use std::net::SocketAddr;
use tower::Layer;

#[derive(Clone)]
struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

fn redirect_app(test: &common::TestApp) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .layer(MockConnectInfoLayer)
        .with_state(test.state.clone())
}

#[tokio::test]
async fn test_redirect_success() {
    let test = common::create_test_state();
    let server = TestServer::new(redirect_app(&test)).unwrap();

    common::create_test_link(&test, "redirect1", "https://example.com/target").await;

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), 302);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let test = common::create_test_state();
    let server = TestServer::new(redirect_app(&test)).unwrap();

    let response = server.get("/notfound").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Shortcode not found.");
}

#[tokio::test]
async fn test_redirect_expired() {
    let test = common::create_test_state();
    let server = TestServer::new(redirect_app(&test)).unwrap();

    common::create_expired_link(&test, "stale", "https://example.com").await;

    let response = server.get("/stale").await;

    assert_eq!(response.status_code(), 410);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Shortlink has expired.");

    // The expired hit must not be counted.
    let count = test.clicks.count_by_code("stale").await.unwrap();
    assert_eq!(count, Some(0));
}

#[tokio::test]
async fn test_redirect_records_click() {
    let test = common::create_test_state();
    let server = TestServer::new(redirect_app(&test)).unwrap();

    common::create_test_link(&test, "clickme", "https://example.com").await;

    let response = server.get("/clickme").await;

    assert_eq!(response.status_code(), 302);

    let clicks = test.clicks.find_by_code("clickme").await.unwrap().unwrap();
    assert_eq!(clicks.len(), 1);
    assert_eq!(clicks[0].referrer, None);
    assert_eq!(clicks[0].location, "Unknown");
}

#[tokio::test]
async fn test_redirect_records_referer() {
    let test = common::create_test_state();
    let server = TestServer::new(redirect_app(&test)).unwrap();

    common::create_test_link(&test, "track", "https://example.com").await;

    let response = server
        .get("/track")
        .add_header("Referer", "https://google.com")
        .await;

    assert_eq!(response.status_code(), 302);

    let clicks = test.clicks.find_by_code("track").await.unwrap().unwrap();
    assert_eq!(clicks.len(), 1);
    assert_eq!(clicks[0].referrer, Some("https://google.com".to_string()));
}

#[tokio::test]
async fn test_redirect_clicks_accumulate_in_order() {
    let test = common::create_test_state();
    let server = TestServer::new(redirect_app(&test)).unwrap();

    common::create_test_link(&test, "popular", "https://example.com").await;

    let first = server
        .get("/popular")
        .add_header("Referer", "https://first.example")
        .await;
    assert_eq!(first.status_code(), 302);

    let second = server
        .get("/popular")
        .add_header("Referer", "https://second.example")
        .await;
    assert_eq!(second.status_code(), 302);

    let clicks = test.clicks.find_by_code("popular").await.unwrap().unwrap();
    assert_eq!(clicks.len(), 2);
    assert_eq!(clicks[0].referrer, Some("https://first.example".to_string()));
    assert_eq!(clicks[1].referrer, Some("https://second.example".to_string()));
    assert!(clicks[0].timestamp <= clicks[1].timestamp);
}
