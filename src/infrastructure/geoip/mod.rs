//! IP geolocation for click analytics.
//!
//! Provides a [`GeoIpService`] trait with two implementations:
//! - [`MaxMindGeoIp`] - lookups against a local MaxMind City database
//! - [`NullGeoIp`] - no-op implementation for disabled geolocation
//!
//! Lookup failures never surface to handlers; [`format_location`] turns a
//! miss into the `"Unknown"` location string.

mod maxmind;
mod null;
mod service;

pub use maxmind::MaxMindGeoIp;
pub use null::NullGeoIp;
pub use service::{GeoInfo, GeoIpService, format_location};
