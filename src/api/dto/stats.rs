//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;
use crate::application::services::LinkStats;

/// Statistics for a single short link.
///
/// Includes link metadata, total click count, and the full click history in
/// append order. Field names are part of the wire contract, hence the
/// explicit renames rather than a blanket casing rule.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(rename = "shortLink")]
    pub short_link: String,

    #[serde(rename = "originalURL")]
    pub original_url: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    pub expiry: DateTime<Utc>,

    pub clicks: usize,

    #[serde(rename = "clickData")]
    pub click_data: Vec<ClickInfo>,
}

impl StatsResponse {
    /// Builds the response from a stats view and the advertised short URL.
    pub fn from_stats(stats: LinkStats, short_link: String) -> Self {
        Self {
            short_link,
            original_url: stats.link.original_url,
            created_at: stats.link.created_at,
            expiry: stats.link.expires_at,
            clicks: stats.clicks.len(),
            click_data: stats.clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}
