//! Repository trait for short link data access.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the short link store.
///
/// Links are write-once: there is no update or delete, and expired records
/// stay stored so their statistics remain readable.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryLinkRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new short link.
    ///
    /// The uniqueness check and the insert are atomic with respect to
    /// concurrent callers: of two simultaneous inserts for the same code,
    /// exactly one succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeConflict`] if the code is already taken.
    async fn insert(&self, link: Link) -> Result<(), AppError>;

    /// Finds a link by its short code.
    ///
    /// Expired links are still returned; expiry is judged by the caller.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists every stored link in insertion order.
    ///
    /// The returned records are a snapshot; writes racing with the listing
    /// either appear in it or don't, but never corrupt it.
    async fn list_all(&self) -> Result<Vec<Link>, AppError>;
}
