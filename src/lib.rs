#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod history;
pub mod utils;

// Re-export commonly used types
pub use data::{ChartPayload, NormalizedSample, Series, SourceFetcher, fetcher_for_source};
pub use domain::{DatasetKey, Metric, SupportedYear, WindSafety, compass_point};
pub use engine::{DatasetEngine, DatasetState, LoadStatus, PublishedDataset};
pub use history::{HistoricalRecord, HistoryTable, Paginator, SortMode};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

use crate::config::DATASET;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Year to load (2022-2025)
    #[arg(long, default_value_t = SupportedYear::configured_default())]
    pub year: SupportedYear,

    /// Base URL (http/https) or local directory holding the CSV exports
    #[arg(long, default_value = DATASET.resources.default_source)]
    pub source: String,

    /// JSON file of historical records to tabulate
    #[arg(long)]
    pub records: Option<PathBuf>,

    /// Table order: date-desc, date-asc, speed-desc or speed-asc
    #[arg(long, default_value_t = SortMode::default())]
    pub sort: SortMode,

    /// Table page to show (out-of-range values are clamped)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Print the chart payloads as JSON instead of a summary
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
