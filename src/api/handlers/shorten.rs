//! Handler for the link creation endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "validity": 30,        // optional, minutes, default 30
///   "shortcode": "abcd1"   // optional, used verbatim
/// }
/// ```
///
/// # Response
///
/// `201 Created`:
///
/// ```json
/// {
///   "shortLink": "http://localhost:8000/abcd1",
///   "expiry": "2026-01-01T00:30:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when the URL is missing or malformed, the
/// validity is not a positive number, or the requested shortcode is already
/// taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let url = payload.url.unwrap_or_default();
    let link = state
        .link_service
        .create_link(&url, payload.validity, payload.shortcode)
        .await?;

    state.stats_service.init_clicks(&link.code).await?;

    tracing::info!(code = %link.code, "Short link created");

    let response = ShortenResponse {
        short_link: state.link_service.short_link(&link.code),
        expiry: link.expires_at,
    };

    Ok((StatusCode::CREATED, Json(response)))
}
