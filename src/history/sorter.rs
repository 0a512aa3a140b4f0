use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::record::HistoricalRecord;
use crate::config::HISTORY;

/// Table orderings. Parsed from and displayed as `date-desc`, `speed-asc`, etc.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SortMode {
    DateDesc,
    DateAsc,
    SpeedDesc,
    SpeedAsc,
}

impl Default for SortMode {
    /// `HISTORY.default_sort`, or newest-first if that string is not a mode.
    fn default() -> Self {
        SortMode::from_str(HISTORY.default_sort).unwrap_or(SortMode::DateDesc)
    }
}

impl SortMode {
    pub fn label(self) -> &'static str {
        match self {
            SortMode::DateDesc => "Date (Newest First)",
            SortMode::DateAsc => "Date (Oldest First)",
            SortMode::SpeedDesc => "Wind Speed (Highest First)",
            SortMode::SpeedAsc => "Wind Speed (Lowest First)",
        }
    }
}

/// Ordered view over `records`; the collection itself is untouched.
/// Stable: records that compare equal keep their input order.
pub fn sorted_view(records: &[HistoricalRecord], mode: SortMode) -> Vec<&HistoricalRecord> {
    let mut view: Vec<&HistoricalRecord> = records.iter().collect();
    match mode {
        SortMode::DateDesc => view.sort_by(|a, b| b.date_time().cmp(&a.date_time())),
        SortMode::DateAsc => view.sort_by(|a, b| a.date_time().cmp(&b.date_time())),
        SortMode::SpeedDesc => view.sort_by(|a, b| b.current_speed.total_cmp(&a.current_speed)),
        SortMode::SpeedAsc => view.sort_by(|a, b| a.current_speed.total_cmp(&b.current_speed)),
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use strum::IntoEnumIterator;

    fn record(day: u32, hour: u32, speed: f64, tag: &str) -> HistoricalRecord {
        HistoricalRecord::new(
            NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            speed,
            speed,
            tag,
            tag,
        )
    }

    fn tags(view: &[&HistoricalRecord]) -> Vec<String> {
        view.iter().map(|r| r.current_dir.clone()).collect()
    }

    fn sample() -> Vec<HistoricalRecord> {
        vec![
            record(2, 8, 10.0, "a"),
            record(1, 8, 30.0, "b"),
            record(2, 6, 10.0, "c"),
            record(2, 8, 20.0, "d"),
            record(3, 0, 30.0, "e"),
        ]
    }

    #[test]
    fn test_mode_strings() {
        assert_eq!(SortMode::from_str("date-desc").unwrap(), SortMode::DateDesc);
        assert_eq!(SortMode::from_str("speed-asc").unwrap(), SortMode::SpeedAsc);
        assert!(SortMode::from_str("alphabetical").is_err());
        assert_eq!(SortMode::SpeedDesc.to_string(), "speed-desc");
        for mode in SortMode::iter() {
            assert_eq!(SortMode::from_str(&mode.to_string()).unwrap(), mode);
        }
        assert_eq!(
            SortMode::from_str(HISTORY.default_sort).unwrap(),
            SortMode::default()
        );
    }

    #[test]
    fn test_date_modes_order_by_date_then_time() {
        let records = sample();
        assert_eq!(
            tags(&sorted_view(&records, SortMode::DateAsc)),
            vec!["b", "c", "a", "d", "e"]
        );
        // a and d share a timestamp and keep input order.
        assert_eq!(
            tags(&sorted_view(&records, SortMode::DateDesc)),
            vec!["e", "a", "d", "c", "b"]
        );
    }

    #[test]
    fn test_speed_modes_are_stable() {
        let records = sample();
        assert_eq!(
            tags(&sorted_view(&records, SortMode::SpeedDesc)),
            vec!["b", "e", "d", "a", "c"]
        );
        assert_eq!(
            tags(&sorted_view(&records, SortMode::SpeedAsc)),
            vec!["a", "c", "d", "b", "e"]
        );
    }

    #[test]
    fn test_view_does_not_mutate_collection() {
        let records = sample();
        let before = records.clone();
        let _ = sorted_view(&records, SortMode::SpeedAsc);
        assert_eq!(records, before);
    }

    #[test]
    fn test_empty_collection() {
        assert!(sorted_view(&[], SortMode::DateDesc).is_empty());
    }
}
