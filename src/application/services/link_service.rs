//! Link creation and retrieval service.

use std::sync::Arc;
use std::sync::LazyLock;

use chrono::{DateTime, Duration, Utc};
use regex::Regex;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Lifetime of a short link, in minutes, when the caller does not supply one.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Accepted original-URL shape.
///
/// Deliberately a scheme prefix check rather than full URL parsing: the
/// service stores and redirects to exactly the string it was given.
static HTTP_SCHEME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").unwrap());

/// Service for creating and retrieving shortened links.
///
/// Handles URL shape validation, expiry computation, and code
/// generation with collision retry.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    base_url: String,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    ///
    /// `base_url` is the public origin short links are advertised under;
    /// a trailing slash is tolerated.
    pub fn new(link_repository: Arc<L>, base_url: impl Into<String>) -> Self {
        Self {
            link_repository,
            base_url: base_url.into(),
        }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `original_url` - The URL to shorten; must start with `http://` or `https://`
    /// - `validity_minutes` - Lifetime in minutes (default 30)
    /// - `requested_code` - Optional caller-chosen code; empty means "generate one"
    ///
    /// # Code Resolution
    ///
    /// A requested code is used verbatim, with no charset or length
    /// restriction beyond non-emptiness, and a collision is surfaced to the
    /// caller. A generated code is random and retried on the (unlikely)
    /// collision up to 10 times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the URL has the wrong shape.
    /// Returns [`AppError::InvalidValidity`] if the validity is not positive
    /// or the resulting expiry is unrepresentable.
    /// Returns [`AppError::CodeConflict`] if the requested code is taken.
    pub async fn create_link(
        &self,
        original_url: &str,
        validity_minutes: Option<i64>,
        requested_code: Option<String>,
    ) -> Result<Link, AppError> {
        if !HTTP_SCHEME_REGEX.is_match(original_url) {
            return Err(AppError::InvalidUrl);
        }

        let minutes = validity_minutes.unwrap_or(DEFAULT_VALIDITY_MINUTES);
        if minutes <= 0 {
            return Err(AppError::InvalidValidity);
        }

        let lifetime = Duration::try_minutes(minutes).ok_or(AppError::InvalidValidity)?;
        let created_at = Utc::now();
        let expires_at = created_at
            .checked_add_signed(lifetime)
            .ok_or(AppError::InvalidValidity)?;

        // An empty shortcode field means "generate one".
        match requested_code.filter(|code| !code.is_empty()) {
            Some(code) => {
                let link = Link::new(code, original_url.to_string(), created_at, expires_at);
                self.link_repository.insert(link.clone()).await?;
                Ok(link)
            }
            None => {
                self.insert_with_generated_code(original_url, created_at, expires_at)
                    .await
            }
        }
    }

    /// Retrieves a link by its short code.
    ///
    /// Expiry is not judged here: expired links are returned so their
    /// statistics stay readable. The redirect handler applies the expiry
    /// gate itself.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Constructs the full public short URL for a code.
    pub fn short_link(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }

    /// Inserts a link under a freshly generated code, retrying on collision.
    ///
    /// The conflict comes straight from the insert, so two concurrent
    /// creates can never both claim the same generated code.
    async fn insert_with_generated_code(
        &self,
        original_url: &str,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<Link, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let link = Link::new(
                generate_code(),
                original_url.to_string(),
                created_at,
                expires_at,
            );

            match self.link_repository.insert(link.clone()).await {
                Ok(()) => return Ok(link),
                Err(AppError::CodeConflict) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal("Failed to generate unique code"))
    }
}
