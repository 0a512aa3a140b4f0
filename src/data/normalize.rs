use serde::{Deserialize, Serialize};

use super::csv_rows::RawRow;
use crate::domain::MetricDescriptor;
use crate::utils::time_utils::parse_timestamp_ms;

/// One validated observation/prediction pair. All fields are finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSample {
    /// Epoch milliseconds (UTC)
    pub t: i64,
    pub actual: f64,
    pub predicted: f64,
}

/// Parse a numeric CSV field. Empty text, NaN and infinities count as missing.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Project a raw row onto a sample, or `None` if any of the three fields is unusable.
pub fn normalize_row(row: &RawRow, descriptor: &MetricDescriptor) -> Option<NormalizedSample> {
    let t = parse_timestamp_ms(row.get(descriptor.timestamp_column)?)?;
    let actual = parse_number(row.get(descriptor.actual_column)?)?;
    let predicted = parse_number(row.get(descriptor.predicted_column)?)?;

    Some(NormalizedSample {
        t,
        actual,
        predicted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Metric;

    fn speed_row(t: &str, actual: &str, predicted: &str) -> RawRow {
        RawRow::from_pairs(&[
            ("datetime", t),
            ("windspeed", actual),
            ("pred_windspeed", predicted),
        ])
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("5.2"), Some(5.2));
        assert_eq!(parse_number(" -3 "), Some(-3.0));
        assert_eq!(parse_number("1e2"), Some(100.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("-infinity"), None);
    }

    #[test]
    fn test_valid_row_yields_exactly_one_sample() {
        let row = speed_row("2025-01-01T00:00:00Z", "5.2", "5.0");
        let sample = normalize_row(&row, Metric::Speed.descriptor()).unwrap();
        assert_eq!(
            sample,
            NormalizedSample {
                t: 1_735_689_600_000,
                actual: 5.2,
                predicted: 5.0,
            }
        );
    }

    #[test]
    fn test_invalid_fields_yield_no_sample() {
        let descriptor = Metric::Speed.descriptor();
        let cases = [
            speed_row("not-a-date", "5.2", "5.0"),
            speed_row("2025-01-01T00:00:00Z", "abc", "5.0"),
            speed_row("2025-01-01T00:00:00Z", "5.2", ""),
            speed_row("2025-01-01T00:00:00Z", "NaN", "5.0"),
            speed_row("", "5.2", "5.0"),
        ];
        for row in &cases {
            assert_eq!(normalize_row(row, descriptor), None, "row {:?}", row);
        }
    }

    #[test]
    fn test_missing_column_yields_no_sample() {
        let row = RawRow::from_pairs(&[("datetime", "2025-01-01"), ("windspeed", "4")]);
        assert_eq!(normalize_row(&row, Metric::Speed.descriptor()), None);

        // Speed columns do not satisfy the direction descriptor.
        let row = speed_row("2025-01-01", "4", "4");
        assert_eq!(normalize_row(&row, Metric::Direction.descriptor()), None);
    }

    #[test]
    fn test_zero_is_a_value_not_a_gap() {
        let row = speed_row("2025-01-01", "0", "0.0");
        let sample = normalize_row(&row, Metric::Speed.descriptor()).unwrap();
        assert_eq!((sample.actual, sample.predicted), (0.0, 0.0));
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let descriptor = Metric::Direction.descriptor();
        let row = RawRow::from_pairs(&[
            ("datetime", "2023-07-04 12:30"),
            ("winddir", "275.5"),
            ("pred_winddir", "280"),
        ]);
        let first = normalize_row(&row, descriptor).unwrap();

        // Feed the sample back through as text.
        let t = crate::utils::time_utils::epoch_ms_to_utc(first.t);
        let actual = first.actual.to_string();
        let predicted = first.predicted.to_string();
        let again = RawRow::from_pairs(&[
            ("datetime", t.as_str()),
            ("winddir", actual.as_str()),
            ("pred_winddir", predicted.as_str()),
        ]);
        assert_eq!(normalize_row(&again, descriptor), Some(first));
        assert_eq!(normalize_row(&row, descriptor), Some(first));
    }
}
