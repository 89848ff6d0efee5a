//! DTOs for click event data.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Click;

/// Individual click event information.
///
/// `referrer` serializes as JSON `null` when the request carried no Referer
/// header; consumers rely on the field always being present.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub timestamp: DateTime<Utc>,
    pub referrer: Option<String>,
    pub location: String,
}

impl From<Click> for ClickInfo {
    fn from(click: Click) -> Self {
        Self {
            timestamp: click.timestamp,
            referrer: click.referrer,
            location: click.location,
        }
    }
}
