//! Weather suitability score value object
//!
//! Represents a validated 0-100 score expressing how favorable destination
//! weather is for a trip.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::{ScoreBand, SuitabilityScore};
//!
//! let score = SuitabilityScore::new(92).expect("valid score");
//! assert_eq!(score.value(), 92);
//! assert_eq!(score.band(), ScoreBand::Excellent);
//!
//! // Out-of-range values are rejected
//! assert!(SuitabilityScore::new(101).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a score is out of range
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid suitability score: {0} is out of range (must be 0-100)")]
pub struct InvalidSuitabilityScore(u8);

/// Presentation band for a suitability score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// 80 and above
    Excellent,
    /// 60 to 79
    Fair,
    /// Below 60
    Poor,
}

/// Weather suitability score (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SuitabilityScore(u8);

impl SuitabilityScore {
    /// Maximum valid score
    pub const MAX: u8 = 100;

    /// Create a new validated score
    ///
    /// # Errors
    ///
    /// Returns `InvalidSuitabilityScore` if the value is greater than 100.
    pub const fn new(value: u8) -> Result<Self, InvalidSuitabilityScore> {
        if value > Self::MAX {
            Err(InvalidSuitabilityScore(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Create a score, clamping to the valid range
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Get the score as a u8
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Classify the score into its presentation band
    #[must_use]
    pub const fn band(self) -> ScoreBand {
        match self.0 {
            80.. => ScoreBand::Excellent,
            60..=79 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }
}

impl fmt::Display for SuitabilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<SuitabilityScore> for u8 {
    fn from(score: SuitabilityScore) -> Self {
        score.0
    }
}

/// Custom deserialization that validates the score range
impl<'de> Deserialize<'de> for SuitabilityScore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
