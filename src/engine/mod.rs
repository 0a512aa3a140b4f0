pub mod core;
pub mod messages;
pub mod state;
pub mod worker;

// Re-export key components
pub use core::DatasetEngine;
pub use state::{DatasetState, LoadStatus, PublishedDataset};
