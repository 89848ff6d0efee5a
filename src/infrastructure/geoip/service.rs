//! GeoIP service trait and location formatting.

use async_trait::async_trait;
use std::net::IpAddr;

/// Resolved geolocation data for an IP address.
///
/// Both fields are optional: real databases routinely know the country but
/// not the city for an address, and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoInfo {
    pub city: Option<String>,
    pub country: Option<String>,
}

/// Trait for IP-to-location lookups used when recording clicks.
///
/// Implementations must be thread-safe and absorb their own failures: a
/// lookup that errors in any way returns `None`, never an error the caller
/// has to handle. Click recording degrades to an unknown location instead of
/// failing the redirect.
///
/// # Implementations
///
/// - [`crate::infrastructure::geoip::MaxMindGeoIp`] - local MaxMind City database
/// - [`crate::infrastructure::geoip::NullGeoIp`] - no-op implementation for disabled geolocation
#[async_trait]
pub trait GeoIpService: Send + Sync {
    /// Resolves the location of `ip`, if known.
    async fn resolve(&self, ip: IpAddr) -> Option<GeoInfo>;

    /// Provider name for startup logs.
    fn name(&self) -> &'static str;
}

/// Renders the location string stored on a click.
///
/// A miss becomes `"Unknown"`. A hit joins city and country with `", "`,
/// substituting an empty string for whichever half is missing, so partial
/// results like `", US"` or `"Paris, "` are possible.
pub fn format_location(geo: Option<GeoInfo>) -> String {
    match geo {
        Some(info) => format!(
            "{}, {}",
            info.city.unwrap_or_default(),
            info.country.unwrap_or_default()
        ),
        None => "Unknown".to_string(),
    }
}
