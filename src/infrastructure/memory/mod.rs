//! In-memory repository implementations.
//!
//! Concrete implementations of domain repository traits backed by
//! `tokio::sync::RwLock`-guarded maps. This is the only persistence the
//! service has: all links and clicks live in process memory and are lost on
//! restart.
//!
//! # Repositories
//!
//! - [`MemoryLinkRepository`] - Link storage and retrieval
//! - [`MemoryClickRepository`] - Append-only click history

pub mod memory_click_repository;
pub mod memory_link_repository;

pub use memory_click_repository::MemoryClickRepository;
pub use memory_link_repository::MemoryLinkRepository;
