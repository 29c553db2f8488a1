//! Preference tag value object

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when preference tag text is not recognized
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown preference tag: {0}")]
pub struct InvalidPreferenceTag(pub String);

/// Trip-style category selected by the user
///
/// Tags bias the itinerary rotation, the packing list, and the
/// best-time-to-visit recommendation. Every fixed lookup table in the
/// planner is an exhaustive `match` over this enum, so adding a variant
/// is a compile error until each table handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreferenceTag {
    /// Trekking, rafting, climbing
    Adventure,
    /// Spa, yoga, slow days
    Relaxation,
    /// Viewpoints, tea gardens, ropeways
    HillStation,
    /// Coastline, water sports
    Beach,
    /// Monuments, museums, heritage walks
    Cultural,
    /// Safaris and bird watching
    Wildlife,
    /// Scenic drives with stops en route
    RoadTrip,
    /// Street food to fine dining
    Foodie,
}

impl PreferenceTag {
    /// Get the canonical tag text (kebab-case, as users type it)
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Adventure => "adventure",
            Self::Relaxation => "relaxation",
            Self::HillStation => "hill-station",
            Self::Beach => "beach",
            Self::Cultural => "cultural",
            Self::Wildlife => "wildlife",
            Self::RoadTrip => "road-trip",
            Self::Foodie => "foodie",
        }
    }

    /// Get all known tags
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Adventure,
            Self::Relaxation,
            Self::HillStation,
            Self::Beach,
            Self::Cultural,
            Self::Wildlife,
            Self::RoadTrip,
            Self::Foodie,
        ]
    }
}

impl fmt::Display for PreferenceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for PreferenceTag {
    type Err = InvalidPreferenceTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "adventure" => Ok(Self::Adventure),
            "relaxation" => Ok(Self::Relaxation),
            "hill-station" | "hill_station" | "hillstation" => Ok(Self::HillStation),
            "beach" => Ok(Self::Beach),
            "cultural" => Ok(Self::Cultural),
            "wildlife" => Ok(Self::Wildlife),
            "road-trip" | "road_trip" | "roadtrip" => Ok(Self::RoadTrip),
            "foodie" => Ok(Self::Foodie),
            _ => Err(InvalidPreferenceTag(s.to_string())),
        }
    }
}
