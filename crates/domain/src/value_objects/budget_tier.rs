//! Budget tier value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Spending level for a trip
///
/// Controls the per-day rates used by the cost breakdown. Unrecognized
/// input degrades to `Moderate` rather than failing, so a plan can always
/// be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    /// Hostels, street food, public transport
    Budget,
    /// Mid-range hotels and restaurants
    #[default]
    Moderate,
    /// Upscale stays and curated experiences
    Premium,
    /// Top-end hotels, fine dining, private transport
    Luxury,
}

impl BudgetTier {
    /// Parse tier text, falling back to `Moderate` for unrecognized input
    ///
    /// The planner is total over its inputs: a typo in the tier must not
    /// prevent a plan from being generated.
    #[must_use]
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Budget => "Budget",
            Self::Moderate => "Moderate",
            Self::Premium => "Premium",
            Self::Luxury => "Luxury",
        }
    }

    /// Get all tiers in ascending spending order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Budget, Self::Moderate, Self::Premium, Self::Luxury]
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for BudgetTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "budget" => Ok(Self::Budget),
            "moderate" => Ok(Self::Moderate),
            "premium" => Ok(Self::Premium),
            "luxury" => Ok(Self::Luxury),
            _ => Err(format!("Unknown budget tier: {s}")),
        }
    }
}
