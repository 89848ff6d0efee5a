//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorturls`              - Create a short link
//! - `GET  /shorturls/allstats`     - Statistics for every link
//! - `GET  /shorturls/{code}/stats` - Statistics for one link
//! - `GET  /{code}`                 - Short link redirect
//!
//! # Middleware
//!
//! - **Access log** - one combined-log line per request
//! - **CORS** - permissive (`Access-Control-Allow-*` on every response)
//! - **Path normalization** - trailing slash handling

use crate::api::handlers::{redirect_handler, shorten_handler, stats_handler, stats_list_handler};
use crate::api::middleware::access_log;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Static segments take precedence over captures in axum, so `/shorturls`
/// is never treated as a short code by the `/{code}` route.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/shorturls", post(shorten_handler))
        .route("/shorturls/allstats", get(stats_list_handler))
        .route("/shorturls/{code}/stats", get(stats_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(
            state,
            access_log::access_log_mw,
        ))
        .layer(CorsLayer::permissive());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
