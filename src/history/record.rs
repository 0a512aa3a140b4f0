use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One row of the historical wind table. Independent of the chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalRecord {
    pub date: NaiveDate,
    #[serde(with = "clock_time")]
    pub time: NaiveTime,
    pub current_speed: f64,
    pub predicted_speed: f64,
    pub current_dir: String,
    pub predicted_dir: String,
}

impl HistoricalRecord {
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        current_speed: f64,
        predicted_speed: f64,
        current_dir: impl Into<String>,
        predicted_dir: impl Into<String>,
    ) -> Self {
        Self {
            date,
            time,
            current_speed,
            predicted_speed,
            current_dir: current_dir.into(),
            predicted_dir: predicted_dir.into(),
        }
    }

    /// Key for the date sort modes.
    pub fn date_time(&self) -> (NaiveDate, NaiveTime) {
        (self.date, self.time)
    }
}

/// Read a JSON array of records.
pub fn load_records_from_path(path: &Path) -> Result<Vec<HistoricalRecord>> {
    let file = File::open(path).context(format!("Failed to open records file: {:?}", path))?;
    let reader = BufReader::new(file);
    let records: Vec<HistoricalRecord> = serde_json::from_reader(reader)
        .context(format!("Failed to deserialize records: {:?}", path))?;
    log::info!("Loaded {} historical records from {:?}", records.len(), path);
    Ok(records)
}

// "HH:MM" on the wire; "HH:MM:SS" is accepted too.
mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let trimmed = raw.trim();
        NaiveTime::parse_from_str(trimmed, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map_err(|e| de::Error::custom(format!("invalid time {:?}: {}", raw, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_record() {
        let json = r#"{
            "date": "2024-05-01",
            "time": "08:00",
            "currentSpeed": 12.5,
            "predictedSpeed": 11.0,
            "currentDir": "NE",
            "predictedDir": "E"
        }"#;
        let record: HistoricalRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(record.time, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(record.current_speed, 12.5);
        assert_eq!(record.predicted_dir, "E");
    }

    #[test]
    fn test_time_with_seconds_and_serialization() {
        let json = r#"{"date":"2024-05-01","time":"23:15:00","currentSpeed":1,"predictedSpeed":2,"currentDir":"N","predictedDir":"N"}"#;
        let record: HistoricalRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.time, NaiveTime::from_hms_opt(23, 15, 0).unwrap());

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["time"], "23:15");
        assert_eq!(value["currentSpeed"], 1.0);
    }

    #[test]
    fn test_bad_time_is_rejected() {
        let json = r#"{"date":"2024-05-01","time":"8 o'clock","currentSpeed":1,"predictedSpeed":2,"currentDir":"N","predictedDir":"N"}"#;
        assert!(serde_json::from_str::<HistoricalRecord>(json).is_err());
    }

    #[test]
    fn test_load_records_from_path() {
        let path = std::env::temp_dir().join(format!(
            "wind_history_records_{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"[{"date":"2024-05-02","time":"09:30","currentSpeed":3.5,"predictedSpeed":4,"currentDir":"S","predictedDir":"SW"}]"#,
        )
        .unwrap();

        let records = load_records_from_path(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].current_dir, "S");

        std::fs::remove_file(&path).unwrap();
        assert!(load_records_from_path(&path).is_err());
    }
}
