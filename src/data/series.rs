use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::csv_rows::RawRow;
use super::normalize::{NormalizedSample, normalize_row};
use crate::config::DEBUG_FLAGS;
use crate::domain::{Metric, MetricDescriptor, SupportedYear};

/// Samples for one metric and one year, in input row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub metric: Metric,
    pub year: SupportedYear,
    pub samples: Vec<NormalizedSample>,
}

/// Keys and labels a chart renderer needs to draw a [`Series`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDescriptor {
    pub actual_key: &'static str,
    pub pred_key: &'static str,
    pub actual_label: &'static str,
    pub pred_label: &'static str,
    pub y_label: &'static str,
}

impl From<&MetricDescriptor> for SeriesDescriptor {
    fn from(d: &MetricDescriptor) -> Self {
        Self {
            actual_key: d.actual_column,
            pred_key: d.predicted_column,
            actual_label: d.actual_label,
            pred_label: d.predicted_label,
            y_label: d.axis_label,
        }
    }
}

/// Everything the charting widget consumes for one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPayload {
    pub metric: Metric,
    pub year: SupportedYear,
    pub series: SeriesDescriptor,
    pub data: Vec<Value>,
}

/// Normalize every row, keeping the ones that produce a sample. No sorting, no dedup.
pub fn assemble_series(
    rows: &[RawRow],
    descriptor: &MetricDescriptor,
    year: SupportedYear,
) -> Series {
    let samples: Vec<NormalizedSample> = rows
        .iter()
        .filter_map(|row| normalize_row(row, descriptor))
        .collect();

    if DEBUG_FLAGS.print_row_drops {
        let dropped = rows.len() - samples.len();
        if dropped > 0 {
            log::info!(
                "{} {}: dropped {} of {} rows",
                descriptor.metric,
                year,
                dropped,
                rows.len()
            );
        }
    }

    Series {
        metric: descriptor.metric,
        year,
        samples,
    }
}

impl Series {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn descriptor(&self) -> &'static MetricDescriptor {
        self.metric.descriptor()
    }

    /// First and last timestamps, in row order.
    pub fn time_span(&self) -> Option<(i64, i64)> {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => Some((first.t, last.t)),
            _ => None,
        }
    }

    /// `{ "t": .., <actual_key>: .., <pred_key>: .. }` per sample.
    pub fn chart_points(&self) -> Vec<Value> {
        let d = self.descriptor();
        self.samples
            .iter()
            .map(|s| {
                let mut point = Map::with_capacity(3);
                point.insert("t".to_string(), Value::from(s.t));
                point.insert(d.actual_column.to_string(), Value::from(s.actual));
                point.insert(d.predicted_column.to_string(), Value::from(s.predicted));
                Value::Object(point)
            })
            .collect()
    }

    pub fn chart_payload(&self) -> ChartPayload {
        ChartPayload {
            metric: self.metric,
            year: self.year,
            series: SeriesDescriptor::from(self.descriptor()),
            data: self.chart_points(),
        }
    }
}
