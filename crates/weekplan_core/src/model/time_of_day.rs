//! Wall-clock time-of-day value type.
//!
//! # Responsibility
//! - Parse display-format time strings (12-hour `"h:mm AM/PM"` and
//!   24-hour `"HH:MM"`) into one canonical representation.
//! - Provide the continuous hour value consumed by the pixel grid.
//!
//! # Invariants
//! - `hour` is always in `0..=23`, `minute` in `0..=59`.
//! - Malformed input fails with `TimeParseError` instead of producing a
//!   garbage value that would corrupt layout math downstream.

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static TIME_12H_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(\d{1,2}):(\d{2})\s*(AM|PM)\s*$").expect("static pattern must compile")
});

static TIME_24H_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d{1,2}):(\d{2})\s*$").expect("static pattern must compile"));

/// Parse failure for a time-of-day string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    /// Input did not match `"h:mm AM/PM"` or `"HH:MM"`.
    UnrecognizedFormat(String),
    /// Hour field was outside the valid range for its notation.
    HourOutOfRange { input: String, hour: u32 },
    /// Minute field was 60 or greater.
    MinuteOutOfRange { input: String, minute: u32 },
}

impl Display for TimeParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedFormat(input) => {
                write!(f, "unrecognized time format `{input}`; expected `h:mm AM/PM` or `HH:MM`")
            }
            Self::HourOutOfRange { input, hour } => {
                write!(f, "hour {hour} out of range in `{input}`")
            }
            Self::MinuteOutOfRange { input, minute } => {
                write!(f, "minute {minute} out of range in `{input}`")
            }
        }
    }
}

impl Error for TimeParseError {}

/// Wall-clock time within a single day.
///
/// Ordering follows clock order, which is what the within-day sort in the
/// layout engine relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Creates a time-of-day, rejecting out-of-range fields.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Parses either supported display notation.
    ///
    /// # Contract
    /// - `"2:30 PM"` style: `PM` adds 12 unless the hour is 12; `12:xx AM`
    ///   maps to hour 0.
    /// - `"14:30"` style: hours `0..=23` accepted as-is.
    pub fn parse(input: &str) -> Result<Self, TimeParseError> {
        if let Some(caps) = TIME_12H_RE.captures(input) {
            let hour: u32 = caps[1].parse().map_err(|_| {
                TimeParseError::UnrecognizedFormat(input.to_string())
            })?;
            let minute: u32 = caps[2].parse().map_err(|_| {
                TimeParseError::UnrecognizedFormat(input.to_string())
            })?;
            if !(1..=12).contains(&hour) {
                return Err(TimeParseError::HourOutOfRange {
                    input: input.to_string(),
                    hour,
                });
            }
            if minute > 59 {
                return Err(TimeParseError::MinuteOutOfRange {
                    input: input.to_string(),
                    minute,
                });
            }
            let is_pm = caps[3].eq_ignore_ascii_case("pm");
            let hour24 = match (hour, is_pm) {
                (12, false) => 0,
                (12, true) => 12,
                (h, false) => h,
                (h, true) => h + 12,
            };
            return Ok(Self {
                hour: hour24 as u8,
                minute: minute as u8,
            });
        }

        if let Some(caps) = TIME_24H_RE.captures(input) {
            let hour: u32 = caps[1].parse().map_err(|_| {
                TimeParseError::UnrecognizedFormat(input.to_string())
            })?;
            let minute: u32 = caps[2].parse().map_err(|_| {
                TimeParseError::UnrecognizedFormat(input.to_string())
            })?;
            if hour > 23 {
                return Err(TimeParseError::HourOutOfRange {
                    input: input.to_string(),
                    hour,
                });
            }
            if minute > 59 {
                return Err(TimeParseError::MinuteOutOfRange {
                    input: input.to_string(),
                    minute,
                });
            }
            return Ok(Self {
                hour: hour as u8,
                minute: minute as u8,
            });
        }

        Err(TimeParseError::UnrecognizedFormat(input.to_string()))
    }

    /// Continuous hour value in `[0, 24)` with minutes in the fraction.
    ///
    /// This is the unit the pixel grid consumes: `"2:30 PM"` -> `14.5`.
    pub fn continuous_hours(&self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / 60.0
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    /// Converts to `chrono::NaiveTime` for date-time arithmetic.
    pub fn to_naive_time(&self) -> NaiveTime {
        // Fields are range-checked at construction, so this cannot miss.
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl Display for TimeOfDay {
    /// Canonical 12-hour display form, e.g. `"2:30 PM"` or `"12:00 AM"`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let period = if self.hour >= 12 { "PM" } else { "AM" };
        let hour12 = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{hour12}:{:02} {period}", self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::{TimeOfDay, TimeParseError};

    #[test]
    fn parses_noon_and_midnight_edge_cases() {
        let midnight = TimeOfDay::parse("12:00 AM").unwrap();
        assert_eq!(midnight.continuous_hours(), 0.0);

        let noon = TimeOfDay::parse("12:00 PM").unwrap();
        assert_eq!(noon.continuous_hours(), 12.0);
    }

    #[test]
    fn pm_offset_applies_except_at_twelve() {
        assert_eq!(TimeOfDay::parse("2:30 PM").unwrap(), TimeOfDay::new(14, 30).unwrap());
        assert_eq!(TimeOfDay::parse("11:59 PM").unwrap(), TimeOfDay::new(23, 59).unwrap());
        assert_eq!(TimeOfDay::parse("9:05 AM").unwrap(), TimeOfDay::new(9, 5).unwrap());
    }

    #[test]
    fn late_evening_fraction_is_continuous() {
        let late = TimeOfDay::parse("11:59 PM").unwrap();
        assert!((late.continuous_hours() - 23.9833).abs() < 1e-3);
        assert!(late.continuous_hours() < 24.0);
    }

    #[test]
    fn accepts_24_hour_notation() {
        assert_eq!(TimeOfDay::parse("14:30").unwrap(), TimeOfDay::new(14, 30).unwrap());
        assert_eq!(TimeOfDay::parse("00:00").unwrap(), TimeOfDay::new(0, 0).unwrap());
        assert_eq!(TimeOfDay::parse("23:59").unwrap(), TimeOfDay::new(23, 59).unwrap());
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            TimeOfDay::parse("lunchtime"),
            Err(TimeParseError::UnrecognizedFormat(_))
        ));
        assert!(matches!(
            TimeOfDay::parse("25:00"),
            Err(TimeParseError::HourOutOfRange { hour: 25, .. })
        ));
        assert!(matches!(
            TimeOfDay::parse("0:30 PM"),
            Err(TimeParseError::HourOutOfRange { hour: 0, .. })
        ));
        assert!(matches!(
            TimeOfDay::parse("10:61"),
            Err(TimeParseError::MinuteOutOfRange { minute: 61, .. })
        ));
        assert!(TimeOfDay::parse("").is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for (hour, minute) in [(0u8, 0u8), (9, 5), (12, 0), (14, 30), (23, 59)] {
            let time = TimeOfDay::new(hour, minute).unwrap();
            let reparsed = TimeOfDay::parse(&time.to_string()).unwrap();
            assert_eq!(reparsed, time);
        }
    }

    #[test]
    fn ordering_follows_clock_order() {
        let morning = TimeOfDay::parse("9:00 AM").unwrap();
        let noon = TimeOfDay::parse("12:00 PM").unwrap();
        let evening = TimeOfDay::parse("8:15 PM").unwrap();
        assert!(morning < noon);
        assert!(noon < evening);
    }
}
