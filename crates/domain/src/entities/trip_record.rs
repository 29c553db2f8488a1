//! Saved trip history record

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::TripPlan;
use crate::value_objects::TripId;

/// Compact record of a generated plan, kept in the bounded trip history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRecord {
    /// Record id
    pub id: TripId,
    /// Starting location
    pub origin: String,
    /// Destination
    pub destination: String,
    /// First travel day
    pub start_date: NaiveDate,
    /// Last travel day
    pub end_date: NaiveDate,
    /// Trip length in days
    pub duration_days: u32,
    /// When the plan was generated
    pub created_at: DateTime<Utc>,
}

impl TripRecord {
    /// Build a history record from a synthesized plan
    #[must_use]
    pub fn from_plan(plan: &TripPlan) -> Self {
        Self {
            id: TripId::new(),
            origin: plan.origin.clone(),
            destination: plan.destination.clone(),
            start_date: plan.dates.start(),
            end_date: plan.dates.end(),
            duration_days: plan.duration_days,
            created_at: Utc::now(),
        }
    }

    /// Short route label for display ("Delhi -> Goa")
    #[must_use]
    pub fn route(&self) -> String {
        format!("{} -> {}", self.origin, self.destination)
    }
}
