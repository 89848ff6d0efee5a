//! Domain layer containing business entities and logic.
//!
//! This module implements the core domain logic following Clean Architecture principles.
//! It defines entities and repository interfaces independent of infrastructure
//! concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - The link store and the click ledger are deliberately independent: neither
//!   trait references the other, and composition happens in
//!   [`crate::application::services`]

pub mod entities;
pub mod repositories;
