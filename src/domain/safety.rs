//! Fishing-safety classification of wind readings.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Upper bound (inclusive) of the Safe band, m/s.
const SAFE_MAX_MS: f64 = 8.0;
/// Lower bound (inclusive) of the High band, m/s.
const HIGH_MIN_MS: f64 = 22.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum WindSafety {
    #[strum(serialize = "Safe")]
    Safe,
    #[strum(serialize = "Moderate Alert")]
    Moderate,
    #[strum(serialize = "High Wind Alert")]
    High,
}

impl WindSafety {
    /// Bands: Safe <= 8 m/s, Moderate < 22 m/s, High >= 22 m/s.
    /// Returns `None` for readings that cannot be a wind speed.
    pub fn classify(speed_ms: f64) -> Option<WindSafety> {
        if !speed_ms.is_finite() || speed_ms < 0.0 {
            return None;
        }
        if speed_ms <= SAFE_MAX_MS {
            Some(WindSafety::Safe)
        } else if speed_ms < HIGH_MIN_MS {
            Some(WindSafety::Moderate)
        } else {
            Some(WindSafety::High)
        }
    }
}

static COMPASS_POINTS: [&str; 8] = [
    "North",
    "Northeast",
    "East",
    "Southeast",
    "South",
    "Southwest",
    "West",
    "Northwest",
];

/// 8-point compass name for a bearing in degrees (0 = North, clockwise).
pub fn compass_point(degrees: f64) -> Option<&'static str> {
    if !degrees.is_finite() {
        return None;
    }
    let normalized = degrees.rem_euclid(360.0);
    // Each sector is 45° wide and centred on its point.
    let sector = ((normalized + 22.5) / 45.0).floor() as usize % COMPASS_POINTS.len();
    Some(COMPASS_POINTS[sector])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safety_bands() {
        assert_eq!(WindSafety::classify(0.0), Some(WindSafety::Safe));
        assert_eq!(WindSafety::classify(8.0), Some(WindSafety::Safe));
        assert_eq!(WindSafety::classify(8.5), Some(WindSafety::Moderate));
        assert_eq!(WindSafety::classify(21.9), Some(WindSafety::Moderate));
        assert_eq!(WindSafety::classify(22.0), Some(WindSafety::High));
        assert_eq!(WindSafety::classify(42.8), Some(WindSafety::High));
    }

    #[test]
    fn test_safety_rejects_impossible_speeds() {
        assert_eq!(WindSafety::classify(-1.0), None);
        assert_eq!(WindSafety::classify(f64::NAN), None);
        assert_eq!(WindSafety::classify(f64::INFINITY), None);
    }

    #[test]
    fn test_safety_labels() {
        assert_eq!(WindSafety::High.to_string(), "High Wind Alert");
        assert_eq!(WindSafety::Safe.to_string(), "Safe");
    }

    #[test]
    fn test_compass_points() {
        assert_eq!(compass_point(0.0), Some("North"));
        assert_eq!(compass_point(45.0), Some("Northeast"));
        assert_eq!(compass_point(90.0), Some("East"));
        assert_eq!(compass_point(315.0), Some("Northwest"));
        assert_eq!(compass_point(350.0), Some("North"));
        assert_eq!(compass_point(-90.0), Some("West"));
        assert_eq!(compass_point(720.0 + 180.0), Some("South"));
        assert_eq!(compass_point(f64::NAN), None);
    }
}
