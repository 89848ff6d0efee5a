//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod redirect;
pub mod shorten;
pub mod stats;
pub mod stats_list;

pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
pub use stats_list::stats_list_handler;
