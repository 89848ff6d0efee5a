//! Handler for the all-links statistics listing.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for every stored link.
///
/// # Endpoint
///
/// `GET /shorturls/allstats`
///
/// # Response
///
/// A JSON array of the same objects the single-link statistics endpoint
/// returns, in creation order. Expired links are included; an empty service
/// answers `[]`.
pub async fn stats_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatsResponse>>, AppError> {
    let all_stats = state.stats_service.all_stats().await?;

    let items = all_stats
        .into_iter()
        .map(|stats| {
            let short_link = state.link_service.short_link(&stats.link.code);
            StatsResponse::from_stats(stats, short_link)
        })
        .collect();

    Ok(Json(items))
}
