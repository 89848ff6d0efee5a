//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};
use crate::infrastructure::geoip::GeoIpService;
use crate::infrastructure::memory::{MemoryClickRepository, MemoryLinkRepository};

/// Handler-visible application state.
///
/// Everything sits behind `Arc`s, so cloning per request is cheap. State is
/// constructed once at startup (and per test), never held in a global: tests
/// get isolated stores by building their own instance.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<MemoryLinkRepository>>,
    pub stats_service: Arc<StatsService<MemoryLinkRepository, MemoryClickRepository>>,
    pub geoip: Arc<dyn GeoIpService>,
    /// When true, client IPs come from forwarding headers.
    pub behind_proxy: bool,
}

impl AppState {
    /// Builds the application state from its parts.
    pub fn new(
        link_service: Arc<LinkService<MemoryLinkRepository>>,
        stats_service: Arc<StatsService<MemoryLinkRepository, MemoryClickRepository>>,
        geoip: Arc<dyn GeoIpService>,
        behind_proxy: bool,
    ) -> Self {
        Self {
            link_service,
            stats_service,
            geoip,
            behind_proxy,
        }
    }
}
