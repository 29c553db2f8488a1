//! Synthesized trip plan
//!
//! The complete output record of the planner: suitability, best time to
//! visit, day-by-day itinerary, packing list, and cost breakdown. Every
//! field is populated; renderers may assume completeness.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::{BudgetTier, SuitabilityScore, TripDates};

/// Weather suitability verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suitability {
    /// Score from 0 to 100
    pub score: SuitabilityScore,
    /// Explanation tied to the score band
    pub note: String,
}

/// Best-time-to-visit recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestTime {
    /// Season range, e.g. "November - February"
    pub range: String,
    /// Explanation naming the driving preference and the destination
    pub note: String,
}

/// One day of the itinerary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day index, 1-based
    pub day: u32,
    /// Day title ("Arrival Day", "Departure Day", ...)
    pub title: String,
    /// Activities in presentation order, never empty
    pub activities: Vec<String>,
    /// Expected-weather note, present iff a snapshot was supplied
    pub weather_note: Option<String>,
}

impl DayPlan {
    /// Create a new day plan
    #[must_use]
    pub fn new(day: u32, title: impl Into<String>, activities: Vec<String>) -> Self {
        Self {
            day,
            title: title.into(),
            activities,
            weather_note: None,
        }
    }

    /// Attach a weather note
    #[must_use]
    pub fn with_weather_note(mut self, note: impl Into<String>) -> Self {
        self.weather_note = Some(note.into());
        self
    }
}

/// Fixed cost categories, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Accommodation,
    FoodAndDining,
    Transportation,
    Activities,
    Miscellaneous,
}

impl CostCategory {
    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Accommodation => "Accommodation",
            Self::FoodAndDining => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::Activities => "Activities",
            Self::Miscellaneous => "Miscellaneous",
        }
    }

    /// All categories in breakdown order
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Accommodation,
            Self::FoodAndDining,
            Self::Transportation,
            Self::Activities,
            Self::Miscellaneous,
        ]
    }
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One line of the cost breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostLine {
    /// Expense category
    pub category: CostCategory,
    /// Per-day rate in rupees
    pub daily_rate: u64,
    /// Rate multiplied by trip duration
    pub total: u64,
}

impl CostLine {
    /// Create a line for a category over a trip duration
    #[must_use]
    pub const fn new(category: CostCategory, daily_rate: u64, duration_days: u32) -> Self {
        Self {
            category,
            daily_rate,
            total: daily_rate * duration_days as u64,
        }
    }
}

/// Full estimated cost table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Lines in fixed category order
    pub lines: Vec<CostLine>,
    /// Sum of all line totals
    pub total: u64,
}

impl CostBreakdown {
    /// Build a breakdown from its lines, computing the total
    #[must_use]
    pub fn new(lines: Vec<CostLine>) -> Self {
        let total = lines.iter().map(|line| line.total).sum();
        Self { lines, total }
    }
}

/// Complete synthesized trip plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    /// Starting location, as requested
    pub origin: String,
    /// Destination, as requested
    pub destination: String,
    /// Travel dates
    pub dates: TripDates,
    /// Trip length in days (>= 1)
    pub duration_days: u32,
    /// Budget tier the costs were computed for
    pub budget: BudgetTier,
    /// One-line trip description
    pub summary: String,
    /// Weather suitability verdict
    pub suitability: Suitability,
    /// Best time to visit the destination
    pub best_time: BestTime,
    /// One entry per trip day
    pub itinerary: Vec<DayPlan>,
    /// Deduplicated packing items in first-insertion order
    pub packing_list: Vec<String>,
    /// Estimated costs
    pub cost: CostBreakdown,
}
