//! MaxMind GeoLite2/GeoIP2 database implementation.

use std::net::IpAddr;
use std::sync::Arc;

use async_trait::async_trait;
use maxminddb::Reader;
use tracing::trace;

use super::service::{GeoInfo, GeoIpService};

/// GeoIP provider backed by a local MaxMind City database file.
///
/// The database is read fully into memory at startup; lookups never touch
/// the network.
pub struct MaxMindGeoIp {
    reader: Arc<Reader<Vec<u8>>>,
}

impl MaxMindGeoIp {
    /// Opens the database file at `path`.
    pub fn open(path: &str) -> Result<Self, maxminddb::MaxMindDbError> {
        let reader = Reader::open_readfile(path)?;
        Ok(Self {
            reader: Arc::new(reader),
        })
    }
}

#[async_trait]
impl GeoIpService for MaxMindGeoIp {
    async fn resolve(&self, ip: IpAddr) -> Option<GeoInfo> {
        let result = self.reader.lookup(ip).ok()?;
        let city: maxminddb::geoip2::City = result.decode().ok()??;

        let country = city.country.iso_code.map(String::from);
        let city_name = city.city.names.english.map(|s| s.to_string());

        trace!(
            "MaxMind lookup for {}: country={:?}, city={:?}",
            ip, country, city_name
        );

        Some(GeoInfo {
            city: city_name,
            country,
        })
    }

    fn name(&self) -> &'static str {
        "MaxMind"
    }
}
