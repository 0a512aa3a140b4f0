use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use super::metric::Metric;
use crate::config::DATASET;

/// The enumerated set of years the selector offers.
///
/// Converting from a raw number is the boundary guard: anything outside this
/// set is rejected before it can reach the request lifecycle.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
#[serde(try_from = "u16", into = "u16")]
pub enum SupportedYear {
    Y2022,
    Y2023,
    Y2024,
    Y2025,
}

impl SupportedYear {
    pub fn as_u16(self) -> u16 {
        match self {
            SupportedYear::Y2022 => 2022,
            SupportedYear::Y2023 => 2023,
            SupportedYear::Y2024 => 2024,
            SupportedYear::Y2025 => 2025,
        }
    }

    /// The year selected at startup (`DATASET.default_year`).
    pub fn configured_default() -> Self {
        SupportedYear::try_from(DATASET.default_year).unwrap_or(SupportedYear::Y2025)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedYear(pub u16);

impl fmt::Display for UnsupportedYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsupported year: {} (expected 2022-2025)", self.0)
    }
}

impl std::error::Error for UnsupportedYear {}

impl TryFrom<u16> for SupportedYear {
    type Error = UnsupportedYear;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2022 => Ok(SupportedYear::Y2022),
            2023 => Ok(SupportedYear::Y2023),
            2024 => Ok(SupportedYear::Y2024),
            2025 => Ok(SupportedYear::Y2025),
            other => Err(UnsupportedYear(other)),
        }
    }
}

impl From<SupportedYear> for u16 {
    fn from(year: SupportedYear) -> Self {
        year.as_u16()
    }
}

impl FromStr for SupportedYear {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u16 = s
            .trim()
            .parse()
            .map_err(|_| format!("Not a year: {:?}", s))?;
        SupportedYear::try_from(value).map_err(|e| e.to_string())
    }
}

impl fmt::Display for SupportedYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

/// Identifies one CSV resource: a metric for a year.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetKey {
    pub metric: Metric,
    pub year: SupportedYear,
}

impl DatasetKey {
    pub fn new(metric: Metric, year: SupportedYear) -> Self {
        Self { metric, year }
    }

    /// Both resources a year selection needs, speed first.
    pub fn pair_for(year: SupportedYear) -> [DatasetKey; 2] {
        Metric::ALL.map(|metric| DatasetKey::new(metric, year))
    }

    /// Resource path relative to the configured source, e.g. `windspeed_2024_pred.csv`.
    pub fn resource_name(&self) -> String {
        self.metric
            .resource_template()
            .replace("{year}", &self.year.to_string())
    }
}

impl fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.metric, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_enum_matches_configured_years() {
        let from_enum: Vec<u16> = SupportedYear::iter().map(u16::from).collect();
        assert_eq!(from_enum, vec![2022, 2023, 2024, 2025]);
        assert!(SupportedYear::try_from(DATASET.default_year).is_ok());
        assert_eq!(
            SupportedYear::configured_default().as_u16(),
            DATASET.default_year
        );
    }

    #[test]
    fn test_unsupported_year_is_rejected_at_boundary() {
        assert_eq!(SupportedYear::try_from(2021u16), Err(UnsupportedYear(2021)));
        assert_eq!(SupportedYear::try_from(2026u16), Err(UnsupportedYear(2026)));
        assert!("2019".parse::<SupportedYear>().is_err());
        assert!("twenty".parse::<SupportedYear>().is_err());
        assert_eq!(" 2024 ".parse::<SupportedYear>(), Ok(SupportedYear::Y2024));
    }

    #[test]
    fn test_year_serializes_as_number() {
        let json = serde_json::to_string(&SupportedYear::Y2023).unwrap();
        assert_eq!(json, "2023");
        let back: SupportedYear = serde_json::from_str("2025").unwrap();
        assert_eq!(back, SupportedYear::Y2025);
        assert!(serde_json::from_str::<SupportedYear>("1999").is_err());
    }

    #[test]
    fn test_resource_names() {
        let [speed, direction] = DatasetKey::pair_for(SupportedYear::Y2024);
        assert_eq!(speed.resource_name(), "windspeed_2024_pred.csv");
        assert_eq!(direction.resource_name(), "winddirection_2024_pred.csv");
        assert_eq!(speed.to_string(), "speed/2024");
    }
}
