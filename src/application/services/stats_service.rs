//! Click statistics and analytics service.

use std::sync::Arc;

use crate::domain::entities::{Click, Link};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;

/// A link together with its full click history.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub link: Link,
    pub clicks: Vec<Click>,
}

impl LinkStats {
    /// Total number of recorded clicks.
    pub fn total(&self) -> usize {
        self.clicks.len()
    }
}

/// Service composing the link store and the click ledger.
///
/// The two underlying stores know nothing about each other; this service is
/// the only place where link metadata and click history meet. It records
/// clicks on redirects and assembles the statistics views.
pub struct StatsService<L: LinkRepository, C: ClickRepository> {
    link_repository: Arc<L>,
    click_repository: Arc<C>,
}

impl<L: LinkRepository, C: ClickRepository> StatsService<L, C> {
    /// Creates a new statistics service.
    pub fn new(link_repository: Arc<L>, click_repository: Arc<C>) -> Self {
        Self {
            link_repository,
            click_repository,
        }
    }

    /// Creates the empty click sequence for a freshly created link.
    pub async fn init_clicks(&self, code: &str) -> Result<(), AppError> {
        self.click_repository.init(code).await
    }

    /// Appends a click to a link's history.
    ///
    /// The click is durably in the sequence once this returns: a statistics
    /// read issued afterwards already counts it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no sequence exists for `code`.
    pub async fn record_click(&self, code: &str, click: Click) -> Result<(), AppError> {
        self.click_repository.record(code, click).await
    }

    /// Number of clicks recorded for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes.
    pub async fn count_clicks(&self, code: &str) -> Result<usize, AppError> {
        self.click_repository
            .count_by_code(code)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Retrieves full statistics for a specific short code.
    ///
    /// Works for expired links too: expiry gates redirects, never
    /// statistics. A link without a click sequence reports an empty history
    /// rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn stats_for(&self, code: &str) -> Result<LinkStats, AppError> {
        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or(AppError::NotFound)?;

        let clicks = self
            .click_repository
            .find_by_code(code)
            .await?
            .unwrap_or_default();

        Ok(LinkStats { link, clicks })
    }

    /// Retrieves statistics for every stored link, in creation order.
    ///
    /// Returns an empty list when nothing has been shortened yet.
    pub async fn all_stats(&self) -> Result<Vec<LinkStats>, AppError> {
        let links = self.link_repository.list_all().await?;

        let mut stats = Vec::with_capacity(links.len());
        for link in links {
            let clicks = self
                .click_repository
                .find_by_code(&link.code)
                .await?
                .unwrap_or_default();
            stats.push(LinkStats { link, clicks });
        }

        Ok(stats)
    }
}
