//! Dataset resource configuration

/// Where the per-year CSV exports live and how they are named
pub struct DatasetResources {
    /// Default source: a base URL (http/https) or a local export directory
    pub default_source: &'static str,
    /// File name template for the wind speed export, `{year}` is substituted
    pub speed_template: &'static str,
    /// File name template for the wind direction export, `{year}` is substituted
    pub direction_template: &'static str,
}

/// The Master Dataset Configuration
pub struct DatasetConfig {
    pub default_year: u16,
    pub resources: DatasetResources,
}

pub const DATASET: DatasetConfig = DatasetConfig {
    default_year: 2025,

    resources: DatasetResources {
        default_source: "data",
        // Names written by the prediction exporter
        speed_template: "windspeed_{year}_pred.csv",
        direction_template: "winddirection_{year}_pred.csv",
    },
};
