//! Handler for single-link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /shorturls/{code}/stats`
///
/// # Response
///
/// Returns link metadata, total click count, and the full click history in
/// append order:
///
/// ```json
/// {
///   "shortLink": "http://localhost:8000/abcd1",
///   "originalURL": "https://example.com/some/long/path",
///   "createdAt": "2026-01-01T00:00:00Z",
///   "expiry": "2026-01-01T00:30:00Z",
///   "clicks": 1,
///   "clickData": [
///     { "timestamp": "...", "referrer": null, "location": "Unknown" }
///   ]
/// }
/// ```
///
/// Expired links still answer here: expiry gates redirects, not statistics.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.stats_for(&code).await?;
    let short_link = state.link_service.short_link(&stats.link.code);

    Ok(Json(StatsResponse::from_stats(stats, short_link)))
}
