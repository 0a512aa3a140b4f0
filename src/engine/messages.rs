use std::sync::Arc;

use super::state::PublishedDataset;
use crate::data::LoadError;
use crate::domain::SupportedYear;

/// A request to load both series for a year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    /// Copy of the engine's generation at selection time
    pub generation: u64,
    pub year: SupportedYear,
}

/// The result returned by the worker task
#[derive(Debug, Clone)]
pub struct LoadResult {
    pub generation: u64,
    pub year: SupportedYear,
    pub duration_ms: u128,

    // Success: the new front buffer (both series)
    // Failure: the first error hit, nothing partial
    pub result: Result<Arc<PublishedDataset>, LoadError>,
}
