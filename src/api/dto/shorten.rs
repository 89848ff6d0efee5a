//! DTOs for the link creation endpoint.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for the accepted URL shape.
static HTTP_SCHEME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").unwrap());

/// Request to create a short link.
///
/// `url` is modeled as optional so that an absent field reports the same
/// "Invalid URL format." error as a malformed one instead of a generic
/// deserialization failure.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must start with `http://` or `https://`).
    #[validate(
        required(message = "Invalid URL format."),
        regex(path = "*HTTP_SCHEME_REGEX", message = "Invalid URL format.")
    )]
    pub url: Option<String>,

    /// Optional lifetime in minutes. Defaults to 30 when absent.
    #[validate(range(min = 1, message = "Validity must be a positive number of minutes."))]
    pub validity: Option<i64>,

    /// Optional caller-chosen short code, used verbatim. Empty means
    /// "generate one".
    pub shortcode: Option<String>,
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    /// Full public short URL, e.g. `http://localhost:8000/abc123`.
    #[serde(rename = "shortLink")]
    pub short_link: String,

    /// Expiry instant in RFC 3339 / ISO 8601 format.
    pub expiry: DateTime<Utc>,
}
