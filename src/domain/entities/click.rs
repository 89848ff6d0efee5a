//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click event recorded when a shortened link redirect is served.
///
/// Captures the redirect instant, the referrer (absent when the request
/// carried no `Referer` header), and a coarse location string resolved from
/// the client IP at record time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub timestamp: DateTime<Utc>,
    pub referrer: Option<String>,
    /// Display string only: either `"City, Country"` with blanks for unknown
    /// halves, or `"Unknown"` when the lookup resolved nothing.
    pub location: String,
}

impl Click {
    /// Creates a new Click instance.
    pub fn new(
        timestamp: DateTime<Utc>,
        referrer: Option<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            referrer,
            location: location.into(),
        }
    }
}
