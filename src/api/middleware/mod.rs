//! HTTP middleware for request processing.
//!
//! Provides access logging; CORS and path normalization come from
//! `tower-http` layers applied in the router.

pub mod access_log;
