//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! All variables are optional; the defaults give a working local setup.
//!
//! - `BASE_URL` - Public origin advertised in short links (default: `http://localhost:8000`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `RUST_LOG` - Log level/filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `GEOIP_DB_PATH` - Path to a MaxMind City database; geolocation is
//!   disabled when unset
//! - `BEHIND_PROXY` - Read client IPs from `X-Forwarded-For` / `X-Real-IP`
//!   (default: `false`)

use anyhow::Result;
use std::env;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Public origin used to build the advertised `shortLink` values.
    pub base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Path to a MaxMind GeoLite2/GeoIP2 City database file.
    pub geoip_db_path: Option<String>,
    /// When true, client IPs are read from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Config {
    /// Loads configuration from environment variables, applying defaults.
    pub fn from_env() -> Self {
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let geoip_db_path = env::var("GEOIP_DB_PATH").ok().filter(|p| !p.is_empty());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Self {
            base_url,
            listen_addr,
            log_level,
            log_format,
            geoip_db_path,
            behind_proxy,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `base_url` is not a valid http(s) URL
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let base = Url::parse(&self.base_url)
            .map_err(|e| anyhow::anyhow!("BASE_URL is not a valid URL: {e}"))?;
        if base.scheme() != "http" && base.scheme() != "https" {
            anyhow::bail!(
                "BASE_URL must use http or https, got '{}'",
                base.scheme()
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);

        if let Some(ref path) = self.geoip_db_path {
            tracing::info!("  GeoIP database: {}", path);
        } else {
            tracing::info!("  GeoIP database: disabled");
        }

        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
