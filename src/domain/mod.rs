// Domain types and value objects
pub mod metric;
pub mod safety;
pub mod year;

// Re-export commonly used types
pub use metric::{Metric, MetricDescriptor};
pub use safety::{WindSafety, compass_point};
pub use year::{DatasetKey, SupportedYear, UnsupportedYear};
