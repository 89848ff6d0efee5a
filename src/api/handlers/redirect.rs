//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use chrono::Utc;
use std::net::SocketAddr;
use tracing::debug;

use crate::domain::entities::Click;
use crate::error::AppError;
use crate::infrastructure::geoip::format_location;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the code; unknown codes answer 404
/// 2. Apply the expiry gate against a single `now` instant
/// 3. Resolve the client location from the request IP
/// 4. Append the click to the code's history
/// 5. Return 302 Found with the original URL in `Location`
///
/// The click is recorded before the response is produced, so a statistics
/// read issued right after the redirect already counts it.
///
/// # Click Tracking
///
/// Each click stores the shared `now` timestamp, the Referer header when
/// present, and a location string. Geolocation failures degrade to
/// `"Unknown"`; they never fail the redirect.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 410 Gone if the link has expired (statistics stay readable).
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    // One instant for both the expiry decision and the click record.
    let now = Utc::now();

    let link = state.link_service.get_link(&code).await?;
    if link.is_expired_at(now) {
        return Err(AppError::Expired);
    }

    let referrer = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let ip = client_ip(&headers, addr, state.behind_proxy);
    let location = format_location(state.geoip.resolve(ip).await);
    debug!("Click on {} from {} ({})", code, ip, location);

    state
        .stats_service
        .record_click(&code, Click::new(now, referrer, location))
        .await?;

    let target = HeaderValue::try_from(link.original_url.as_str())
        .map_err(|_| AppError::internal("Stored URL is not a valid Location header"))?;

    Ok((StatusCode::FOUND, [(header::LOCATION, target)]))
}
