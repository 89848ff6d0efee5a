//! Infrastructure layer for concrete backends.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data storage and IP geolocation.
//!
//! # Modules
//!
//! - [`memory`] - In-memory repository implementations
//! - [`geoip`] - IP geolocation (MaxMind and no-op implementations)

pub mod geoip;
pub mod memory;
