//! Value Objects - Immutable, identity-less domain primitives

mod budget_tier;
mod preference_tag;
mod suitability_score;
mod trip_dates;
mod trip_id;

pub use budget_tier::BudgetTier;
pub use preference_tag::{InvalidPreferenceTag, PreferenceTag};
pub use suitability_score::{InvalidSuitabilityScore, ScoreBand, SuitabilityScore};
pub use trip_dates::TripDates;
pub use trip_id::TripId;
