use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use strum_macros::Display;

use crate::data::Series;
use crate::domain::SupportedYear;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LoadStatus {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Both series for one year. Only ever published together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishedDataset {
    pub year: SupportedYear,
    pub speed: Series,
    pub direction: Series,
}

/// What the presentation layer reads: the current selection and its outcome.
#[derive(Debug, Clone)]
pub struct DatasetState {
    pub status: LoadStatus,
    pub year: Option<SupportedYear>,

    /// THE FRONT BUFFER.
    /// Replaced wholesale when the current generation succeeds.
    pub published: Option<Arc<PublishedDataset>>,

    /// Message of the current generation's failure, shown verbatim
    pub last_error: Option<String>,
    pub last_update_time: Option<Instant>,
}

impl Default for DatasetState {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetState {
    pub fn new() -> Self {
        Self {
            status: LoadStatus::Idle,
            year: None,
            published: None,
            last_error: None,
            last_update_time: None,
        }
    }

    /// A new selection discards whatever the previous one produced.
    pub fn begin_loading(&mut self, year: SupportedYear) {
        self.status = LoadStatus::Loading;
        self.year = Some(year);
        self.published = None;
        self.last_error = None;
    }

    /// Promote a finished load to the front buffer.
    pub fn update_buffer(&mut self, dataset: Arc<PublishedDataset>) {
        self.published = Some(dataset);
        self.status = LoadStatus::Succeeded;
        self.last_update_time = Some(Instant::now());
        self.last_error = None;
    }

    pub fn record_failure(&mut self, message: String) {
        self.published = None;
        self.status = LoadStatus::Failed;
        self.last_update_time = Some(Instant::now());
        self.last_error = Some(message);
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }
}
