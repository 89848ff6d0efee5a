//! # shorturls
//!
//! A URL shortening service with per-click analytics, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory stores and GeoIP providers
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Short links with per-link expiry (default 30 minutes); expired links
//!   stop redirecting but keep serving statistics
//! - Optional caller-chosen shortcodes, used verbatim
//! - Append-only click history with timestamp, referrer, and coarse
//!   geolocation per click
//! - All state is process-local; the repository traits are the seam a
//!   persistent backend would implement
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: override the advertised origin and the bind address
//! export BASE_URL="http://localhost:8000"
//! export LISTEN="0.0.0.0:8000"
//!
//! # Optional: enable click geolocation
//! export GEOIP_DB_PATH="/data/GeoLite2-City.mmdb"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, LinkStats, StatsService};
    pub use crate::domain::entities::{Click, Link};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
