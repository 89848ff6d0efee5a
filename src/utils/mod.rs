//! Utility functions for code generation and request handling.
//!
//! This module provides helper functions used across the application:
//!
//! - [`code_generator`] - Short code generation
//! - [`client_ip`] - Client IP extraction from the socket or proxy headers

pub mod client_ip;
pub mod code_generator;
