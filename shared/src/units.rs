//! Workout units and wall-clock times
//!
//! Logged workout quantities are multiples of an inventory item's unit
//! (minutes, reps, sets), and sleep sessions are bounded by wall-clock
//! times with no date component. Both are stored strongly typed and
//! converted to/from their document string forms at the serde boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Workout Units
// ============================================================================

/// Unit a workout's calories-per-unit figure is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutUnit {
    #[default]
    Minutes,
    Reps,
    Sets,
}

impl WorkoutUnit {
    /// Get the unit label as it appears in documents and display
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutUnit::Minutes => "minutes",
            WorkoutUnit::Reps => "reps",
            WorkoutUnit::Sets => "sets",
        }
    }
}

impl fmt::Display for WorkoutUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for WorkoutUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minutes" | "minute" | "min" | "mins" => Ok(WorkoutUnit::Minutes),
            "reps" | "rep" => Ok(WorkoutUnit::Reps),
            "sets" | "set" => Ok(WorkoutUnit::Sets),
            _ => Err(format!("Unknown workout unit: {}", s)),
        }
    }
}

// ============================================================================
// Clock Times
// ============================================================================

/// Wall-clock time of day ("HH:MM", 24-hour), no date attached
///
/// Sleep sessions store their boundaries as clock times; the date a
/// session belongs to is the daily log's date, and sessions may wrap
/// past midnight. Serialized as the "HH:MM" document string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    /// Build a clock time, rejecting out-of-range components
    pub fn new(hour: u8, minute: u8) -> Result<Self, String> {
        if hour > 23 {
            return Err(format!("Hour must be 0-23, got {}", hour));
        }
        if minute > 59 {
            return Err(format!("Minute must be 0-59, got {}", minute));
        }
        Ok(Self { hour, minute })
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl std::str::FromStr for ClockTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| format!("Invalid clock time '{}': expected HH:MM", s))?;
        let hour: u8 = h
            .parse()
            .map_err(|_| format!("Invalid clock time '{}': bad hour", s))?;
        let minute: u8 = m
            .parse()
            .map_err(|_| format!("Invalid clock time '{}': bad minute", s))?;
        ClockTime::new(hour, minute)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_workout_unit_roundtrip() {
        for unit in [WorkoutUnit::Minutes, WorkoutUnit::Reps, WorkoutUnit::Sets] {
            let parsed: WorkoutUnit = unit.label().parse().unwrap();
            assert_eq!(parsed, unit);
        }
    }

    #[test]
    fn test_workout_unit_aliases() {
        assert_eq!("min".parse::<WorkoutUnit>().unwrap(), WorkoutUnit::Minutes);
        assert_eq!("Rep".parse::<WorkoutUnit>().unwrap(), WorkoutUnit::Reps);
        assert!("hours".parse::<WorkoutUnit>().is_err());
    }

    #[test]
    fn test_workout_unit_serde() {
        let json = serde_json::to_string(&WorkoutUnit::Minutes).unwrap();
        assert_eq!(json, "\"minutes\"");
        let unit: WorkoutUnit = serde_json::from_str("\"sets\"").unwrap();
        assert_eq!(unit, WorkoutUnit::Sets);
    }

    #[rstest]
    #[case("00:00", 0, 0)]
    #[case("22:00", 22, 0)]
    #[case("23:59", 23, 59)]
    #[case("7:05", 7, 5)]
    fn test_clock_time_parse(#[case] input: &str, #[case] hour: u8, #[case] minute: u8) {
        let time: ClockTime = input.parse().unwrap();
        assert_eq!(time.hour, hour);
        assert_eq!(time.minute, minute);
    }

    #[rstest]
    #[case("24:00")]
    #[case("12:60")]
    #[case("noon")]
    #[case("1200")]
    #[case("")]
    fn test_clock_time_parse_invalid(#[case] input: &str) {
        assert!(input.parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_clock_time_display_pads() {
        let time = ClockTime::new(7, 5).unwrap();
        assert_eq!(time.to_string(), "07:05");
    }

    #[test]
    fn test_clock_time_serde_string() {
        let time: ClockTime = serde_json::from_str("\"22:30\"").unwrap();
        assert_eq!(time, ClockTime::new(22, 30).unwrap());
        assert_eq!(serde_json::to_string(&time).unwrap(), "\"22:30\"");
    }
}
