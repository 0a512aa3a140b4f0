use std::sync::Arc;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::config::DEBUG_FLAGS;
use crate::data::SourceFetcher;
use crate::domain::SupportedYear;

use super::messages::{LoadRequest, LoadResult};
use super::state::{DatasetState, LoadStatus, PublishedDataset};
use super::worker;

/// Owns the year selection and decides which load result, if any, gets published.
///
/// Every selection mints a new generation. Results travel back tagged with
/// the generation they were started under; anything but the current one is
/// dropped on arrival. In-flight loads are never aborted, only ignored.
pub struct DatasetEngine {
    fetcher: Arc<dyn SourceFetcher>,

    /// Single writer: only `select_year` advances it.
    generation: u64,

    state: DatasetState,

    /// Worker Communication
    result_tx: UnboundedSender<LoadResult>,
    result_rx: UnboundedReceiver<LoadResult>,
}

impl DatasetEngine {
    pub fn new(fetcher: Arc<dyn SourceFetcher>) -> Self {
        let (result_tx, result_rx) = unbounded_channel::<LoadResult>();
        Self {
            fetcher,
            generation: 0,
            state: DatasetState::new(),
            result_tx,
            result_rx,
        }
    }

    /// Start loading `year`, superseding whatever is in flight. Returns the new generation.
    /// Must be called from within a tokio runtime.
    pub fn select_year(&mut self, year: SupportedYear) -> u64 {
        self.generation += 1;
        self.state.begin_loading(year);

        if DEBUG_FLAGS.print_selection_events {
            log::info!(
                "Selected {} (generation {}, source: {})",
                year,
                self.generation,
                self.fetcher.signature()
            );
        }

        let req = LoadRequest {
            generation: self.generation,
            year,
        };
        worker::spawn_load_task(Arc::clone(&self.fetcher), req, self.result_tx.clone());

        self.generation
    }

    /// Non-blocking: apply every result that has already arrived.
    /// Returns TRUE while the current generation is still loading.
    pub fn update(&mut self) -> bool {
        while let Ok(result) = self.result_rx.try_recv() {
            self.handle_load_result(result);
        }
        self.state.is_loading()
    }

    /// Wait for the next result of any generation.
    /// Returns whether it was applied (`false` for a stale one).
    pub async fn apply_next(&mut self) -> bool {
        match self.result_rx.recv().await {
            Some(result) => self.handle_load_result(result),
            // Unreachable while the engine holds its own sender.
            None => false,
        }
    }

    /// Wait until the current generation has resolved.
    pub async fn wait_for_current(&mut self) -> &DatasetState {
        while self.state.is_loading() {
            self.apply_next().await;
        }
        &self.state
    }

    // --- ACCESSORS ---

    pub fn state(&self) -> &DatasetState {
        &self.state
    }

    pub fn status(&self) -> LoadStatus {
        self.state.status
    }

    pub fn current_generation(&self) -> u64 {
        self.generation
    }

    pub fn published(&self) -> Option<Arc<PublishedDataset>> {
        self.state.published.clone()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.state.last_error.as_deref()
    }

    // --- INTERNAL LOGIC ---

    fn handle_load_result(&mut self, result: LoadResult) -> bool {
        if result.generation != self.generation {
            if DEBUG_FLAGS.print_stale_generations {
                log::info!(
                    "Discarding stale result for {} (generation {}, current {})",
                    result.year,
                    result.generation,
                    self.generation
                );
            }
            return false;
        }

        match result.result {
            Ok(dataset) => {
                log::info!(
                    "Loaded {}: {} speed / {} direction samples in {}ms",
                    result.year,
                    dataset.speed.len(),
                    dataset.direction.len(),
                    result.duration_ms
                );
                self.state.update_buffer(dataset);
            }
            Err(e) => {
                log::error!("Load failed for {}: {}", result.year, e);
                self.state.record_failure(e.to_string());
            }
        }
        true
    }
}
