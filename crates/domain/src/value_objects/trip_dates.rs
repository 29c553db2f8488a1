//! Trip date range value object

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Inclusive travel date range
///
/// Duration counts both endpoints: a trip starting and ending on the same
/// day is 1 day long, and 2024-06-01 through 2024-06-05 is 5 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TripDates {
    start: NaiveDate,
    end: NaiveDate,
}

impl TripDates {
    /// Create a validated date range
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateRange` if `end` precedes `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::InvalidDateRange(format!(
                "end date {end} precedes start date {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Get the start date
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Get the end date
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Trip length in days, inclusive of both endpoints
    ///
    /// The formula floors at 1, so even a degenerate range yields a
    /// one-day plan rather than an empty itinerary.
    #[must_use]
    pub fn duration_days(&self) -> u32 {
        let days = (self.end - self.start).num_days() + 1;
        u32::try_from(days.max(1)).unwrap_or(1)
    }
}

impl fmt::Display for TripDates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_same_day_is_one_day() {
        let dates = TripDates::new(date(2024, 6, 1), date(2024, 6, 1)).expect("valid range");
        assert_eq!(dates.duration_days(), 1);
    }

    #[test]
    fn test_inclusive_duration() {
        let dates = TripDates::new(date(2024, 6, 1), date(2024, 6, 5)).expect("valid range");
        assert_eq!(dates.duration_days(), 5);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let result = TripDates::new(date(2024, 6, 5), date(2024, 6, 1));
        assert!(matches!(result, Err(DomainError::InvalidDateRange(_))));
    }

    #[test]
    fn test_crosses_month_boundary() {
        let dates = TripDates::new(date(2024, 1, 30), date(2024, 2, 2)).expect("valid range");
        assert_eq!(dates.duration_days(), 4);
    }

    #[test]
    fn test_display() {
        let dates = TripDates::new(date(2024, 6, 1), date(2024, 6, 5)).expect("valid range");
        assert_eq!(dates.to_string(), "2024-06-01 to 2024-06-05");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let dates = TripDates::new(date(2024, 6, 1), date(2024, 6, 5)).expect("valid range");
        let json = serde_json::to_string(&dates).expect("serialize");
        let parsed: TripDates = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, dates);
    }
}
