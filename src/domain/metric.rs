use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::config::DATASET;

/// One of the two measured quantities, each with its own per-year export.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Metric {
    Speed,
    Direction,
}

/// Which CSV columns feed a metric's samples, and how the chart should label them.
///
/// The column names double as the keys of the published chart points, so a
/// renderer can look values up with `actual_column` / `predicted_column`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDescriptor {
    pub metric: Metric,
    pub timestamp_column: &'static str,
    pub actual_column: &'static str,
    pub predicted_column: &'static str,
    pub actual_label: &'static str,
    pub predicted_label: &'static str,
    pub axis_label: &'static str,
}

static SPEED_DESCRIPTOR: MetricDescriptor = MetricDescriptor {
    metric: Metric::Speed,
    timestamp_column: "datetime",
    actual_column: "windspeed",
    predicted_column: "pred_windspeed",
    actual_label: "Actual",
    predicted_label: "Predicted",
    axis_label: "Wind Speed (km/h)",
};

static DIRECTION_DESCRIPTOR: MetricDescriptor = MetricDescriptor {
    metric: Metric::Direction,
    timestamp_column: "datetime",
    actual_column: "winddir",
    predicted_column: "pred_winddir",
    actual_label: "Actual",
    predicted_label: "Predicted",
    axis_label: "Wind Direction (°)",
};

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Speed, Metric::Direction];

    pub fn descriptor(self) -> &'static MetricDescriptor {
        match self {
            Metric::Speed => &SPEED_DESCRIPTOR,
            Metric::Direction => &DIRECTION_DESCRIPTOR,
        }
    }

    pub fn resource_template(self) -> &'static str {
        match self {
            Metric::Speed => DATASET.resources.speed_template,
            Metric::Direction => DATASET.resources.direction_template,
        }
    }
}
