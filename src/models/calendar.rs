//! Calendar primitives: days of the week and hour ranges.
//!
//! Shift scheduling works on a one-week horizon at whole-hour
//! granularity. A [`Day`] names one day of that week and an
//! [`HourRange`] is a half-open interval of hours within a day.
//!
//! # Time Model
//! Hours run from 0 to 24. `24` is only valid as an exclusive end bound
//! (an evening shift `[16, 24)` ends at midnight).
//!
//! # Textual Form
//! Hour ranges read and write as `"HH:MM-HH:MM"` (e.g. `"08:00-16:00"`),
//! the format used by roster exports. Minutes must be `00`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Last valid exclusive end hour of a day.
pub const HOURS_PER_DAY: u32 = 24;

/// A day of the scheduling week.
///
/// Ordered in calendar order, Monday first. Slot generation and
/// schedule output follow this order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All days in calendar order.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// English day name.
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error parsing an hour range from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HourRangeParseError {
    #[error("expected \"HH:MM-HH:MM\", got {0:?}")]
    Format(String),
    #[error("invalid hour in {0:?}")]
    Hour(String),
    #[error("only whole hours are supported, got {0:?}")]
    Minutes(String),
}

/// A half-open hour interval [start, end).
///
/// Construction does not check ordering; inverted or out-of-day ranges
/// are reported by [`crate::validation::validate_input`] so the error can
/// name the employee and day they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HourRange {
    /// Start hour (inclusive).
    pub start: u32,
    /// End hour (exclusive).
    pub end: u32,
}

impl HourRange {
    /// Creates a new hour range.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Length of the range in hours (0 for inverted ranges).
    #[inline]
    pub fn duration_hours(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Whether `[start, end)` lies entirely inside this range.
    ///
    /// No partial credit: a request that sticks out on either side is
    /// not covered.
    #[inline]
    pub fn covers(&self, start: u32, end: u32) -> bool {
        start >= self.start && end <= self.end
    }

    /// Whether `[start, end)` intersects this range.
    #[inline]
    pub fn overlaps(&self, start: u32, end: u32) -> bool {
        self.start < end && self.end > start
    }

    /// Whether the range is non-empty and within a single day.
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end && self.end <= HOURS_PER_DAY
    }
}

impl fmt::Display for HourRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00-{:02}:00", self.start, self.end)
    }
}

fn parse_clock(s: &str) -> Result<u32, HourRangeParseError> {
    let (hour, minutes) = s
        .trim()
        .split_once(':')
        .ok_or_else(|| HourRangeParseError::Format(s.to_string()))?;
    let hour: u32 = hour
        .parse()
        .map_err(|_| HourRangeParseError::Hour(s.to_string()))?;
    if minutes != "00" {
        return Err(HourRangeParseError::Minutes(s.to_string()));
    }
    Ok(hour)
}

impl FromStr for HourRange {
    type Err = HourRangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| HourRangeParseError::Format(s.to_string()))?;
        Ok(Self::new(parse_clock(start)?, parse_clock(end)?))
    }
}

impl TryFrom<String> for HourRange {
    type Error = HourRangeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HourRange> for String {
    fn from(range: HourRange) -> Self {
        range.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_order() {
        assert!(Day::Monday < Day::Tuesday);
        assert!(Day::Saturday < Day::Sunday);
        assert_eq!(Day::ALL.first(), Some(&Day::Monday));
        assert_eq!(Day::ALL.last(), Some(&Day::Sunday));
        assert_eq!(Day::Wednesday.to_string(), "Wednesday");
    }

    #[test]
    fn test_hour_range_covers() {
        let r = HourRange::new(8, 16);
        assert!(r.covers(8, 16));
        assert!(r.covers(10, 12));
        assert!(!r.covers(7, 16)); // starts too early
        assert!(!r.covers(8, 17)); // ends too late
        assert!(!r.covers(16, 24));
    }

    #[test]
    fn test_hour_range_overlaps() {
        let r = HourRange::new(8, 16);
        assert!(r.overlaps(15, 20));
        assert!(r.overlaps(0, 9));
        assert!(!r.overlaps(16, 24)); // touching
        assert!(!r.overlaps(0, 8));
    }

    #[test]
    fn test_hour_range_duration() {
        assert_eq!(HourRange::new(16, 24).duration_hours(), 8);
        assert_eq!(HourRange::new(16, 8).duration_hours(), 0);
    }

    #[test]
    fn test_well_formed() {
        assert!(HourRange::new(0, 24).is_well_formed());
        assert!(!HourRange::new(8, 8).is_well_formed());
        assert!(!HourRange::new(16, 8).is_well_formed());
        assert!(!HourRange::new(20, 25).is_well_formed());
    }

    #[test]
    fn test_parse() {
        let r: HourRange = "08:00-16:00".parse().unwrap();
        assert_eq!(r, HourRange::new(8, 16));
        let r: HourRange = "8:00-24:00".parse().unwrap();
        assert_eq!(r, HourRange::new(8, 24));
        assert_eq!(r.to_string(), "08:00-24:00");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "08:00".parse::<HourRange>(),
            Err(HourRangeParseError::Format(_))
        ));
        assert!(matches!(
            "xx:00-16:00".parse::<HourRange>(),
            Err(HourRangeParseError::Hour(_))
        ));
        assert!(matches!(
            "08:30-16:00".parse::<HourRange>(),
            Err(HourRangeParseError::Minutes(_))
        ));
    }

    #[test]
    fn test_serde_text_form() {
        let r = HourRange::new(6, 14);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, "\"06:00-14:00\"");
        let back: HourRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
        assert!(serde_json::from_str::<HourRange>("\"nonsense\"").is_err());
    }
}
