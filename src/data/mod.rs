// Fetch, parse, normalize and assemble the per-year CSV exports
pub mod csv_rows;
pub mod error;
pub mod fetcher;
pub mod normalize;
pub mod series;

// Re-export commonly used types
pub use csv_rows::{ParseError, RawRow, parse_rows};
pub use error::LoadError;
pub use fetcher::{DirFetcher, FetchError, HttpFetcher, SourceFetcher, fetcher_for_source};
pub use normalize::{NormalizedSample, normalize_row, parse_number};
pub use series::{ChartPayload, Series, SeriesDescriptor, assemble_series};
