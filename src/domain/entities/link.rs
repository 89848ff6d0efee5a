//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with its lifetime metadata.
///
/// Represents the mapping between a short code and the original URL. Records
/// are immutable once stored and never removed: an expired link stops
/// redirecting but stays readable for statistics.
#[derive(Debug, Clone)]
pub struct Link {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            original_url,
            created_at,
            expires_at,
        }
    }

    /// Returns true if the link is past its expiry at the given instant.
    ///
    /// The boundary is exclusive: a link whose expiry equals `now` is still
    /// live.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Returns true if the link is past its expiry.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
