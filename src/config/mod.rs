//! Configuration module for the wind history pipeline.

pub mod dataset;
pub mod history;
pub mod http;

mod debug; // Private: use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use dataset::DATASET;
pub use history::HISTORY;
pub use http::{HTTP_CLIENT, HttpClientConfig};
