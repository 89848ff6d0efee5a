//! No-op GeoIP implementation for disabled geolocation.

use async_trait::async_trait;
use std::net::IpAddr;
use tracing::debug;

use super::service::{GeoInfo, GeoIpService};

/// A GeoIP provider that never resolves anything.
///
/// Every click recorded through it carries the location `"Unknown"`.
///
/// # Use Cases
///
/// - No GeoIP database configured
/// - Fallback when the configured database file fails to open at startup
/// - Tests that need deterministic locations
pub struct NullGeoIp;

impl NullGeoIp {
    /// Creates a new NullGeoIp instance.
    pub fn new() -> Self {
        debug!("Using NullGeoIp (geolocation disabled)");
        Self
    }
}

impl Default for NullGeoIp {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GeoIpService for NullGeoIp {
    async fn resolve(&self, _ip: IpAddr) -> Option<GeoInfo> {
        None
    }

    fn name(&self) -> &'static str {
        "Null"
    }
}
