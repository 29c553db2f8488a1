//! Destination weather snapshot
//!
//! The minimal weather view the planner consumes. Fetched by the caller
//! before planning; an absent snapshot means "weather unknown" and is a
//! valid input state, not an error.

use serde::{Deserialize, Serialize};

/// Current conditions at the destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// Provider condition category (e.g. "Rain", "Clear")
    pub condition: String,
    /// Human-readable description (e.g. "light rain")
    pub description: String,
}

impl WeatherSnapshot {
    /// Create a new snapshot
    #[must_use]
    pub fn new(temperature_c: f64, condition: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            temperature_c,
            condition: condition.into(),
            description: description.into(),
        }
    }

    /// Whether rain is mentioned in either the condition category or the
    /// description
    ///
    /// Providers disagree on which field carries "rain", so both are
    /// checked case-insensitively.
    #[must_use]
    pub fn mentions_rain(&self) -> bool {
        self.condition.to_lowercase().contains("rain")
            || self.description.to_lowercase().contains("rain")
    }

    /// Whether a storm is mentioned in either field
    #[must_use]
    pub fn mentions_storm(&self) -> bool {
        self.condition.to_lowercase().contains("storm")
            || self.description.to_lowercase().contains("storm")
    }

    /// Temperature rounded to the nearest whole degree
    #[must_use]
    pub fn rounded_temperature(&self) -> i64 {
        // round half away from zero, matching how temperatures are displayed
        #[allow(clippy::cast_possible_truncation)]
        let rounded = self.temperature_c.round() as i64;
        rounded
    }

    /// One-line expectation used in per-day itinerary notes
    #[must_use]
    pub fn expectation_line(&self) -> String {
        format!(
            "Expected: {}, {}°C",
            self.description,
            self.rounded_temperature()
        )
    }
}
