//! Repository trait for per-link click history.

use crate::domain::entities::Click;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the append-only click ledger.
///
/// Each short code owns one ordered click sequence. Sequences are created
/// empty when the link is created and only ever grow; nothing updates or
/// removes recorded clicks.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryClickRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_clicks.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Creates an empty click sequence for `code` if none exists yet.
    ///
    /// Calling this again for a known code leaves the existing sequence
    /// untouched.
    async fn init(&self, code: &str) -> Result<(), AppError>;

    /// Appends a click to the sequence for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no sequence exists for `code`.
    async fn record(&self, code: &str, click: Click) -> Result<(), AppError>;

    /// Returns the full click history for `code` in append order.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(clicks))` if a sequence exists (possibly empty)
    /// - `Ok(None)` if no sequence exists for `code`
    async fn find_by_code(&self, code: &str) -> Result<Option<Vec<Click>>, AppError>;

    /// Returns the number of clicks recorded for `code`, or `None` if no
    /// sequence exists.
    async fn count_by_code(&self, code: &str) -> Result<Option<usize>, AppError>;
}
