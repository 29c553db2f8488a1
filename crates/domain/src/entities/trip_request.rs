//! Trip planning request

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;
use crate::value_objects::{BudgetTier, PreferenceTag, TripDates};

/// Validated input to the trip planner
///
/// Construction deduplicates preference tags while preserving the order
/// they were given in; the first tag drives the best-time recommendation.
/// Callers are expected to run [`TripRequest::validated`] before handing
/// the request to the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TripRequest {
    /// Starting location
    #[validate(length(min = 1, message = "origin is required"))]
    pub origin: String,
    /// Destination city
    #[validate(length(min = 1, message = "destination is required"))]
    pub destination: String,
    /// Travel dates (inclusive)
    pub dates: TripDates,
    /// Spending level
    pub budget: BudgetTier,
    /// Trip-style preferences, insertion-ordered and deduplicated
    pub preferences: Vec<PreferenceTag>,
}

impl TripRequest {
    /// Create a new request
    #[must_use]
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        dates: TripDates,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            dates,
            budget: BudgetTier::default(),
            preferences: Vec::new(),
        }
    }

    /// Set the budget tier
    #[must_use]
    pub const fn with_budget(mut self, budget: BudgetTier) -> Self {
        self.budget = budget;
        self
    }

    /// Set the preference tags, deduplicating while preserving order
    #[must_use]
    pub fn with_preferences(mut self, preferences: impl IntoIterator<Item = PreferenceTag>) -> Self {
        self.preferences.clear();
        for tag in preferences {
            if !self.preferences.contains(&tag) {
                self.preferences.push(tag);
            }
        }
        self
    }

    /// The tag that drives the best-time recommendation
    ///
    /// Falls back to `Relaxation` when no preferences were given.
    #[must_use]
    pub fn primary_preference(&self) -> PreferenceTag {
        self.preferences
            .first()
            .copied()
            .unwrap_or(PreferenceTag::Relaxation)
    }

    /// Trip length in days
    #[must_use]
    pub fn duration_days(&self) -> u32 {
        self.dates.duration_days()
    }

    /// Run field validation, mapping failures into the domain error type
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` naming the offending field.
    pub fn validated(&self) -> Result<&Self, DomainError> {
        self.validate().map_err(|e| {
            let detail = e
                .field_errors()
                .into_iter()
                .flat_map(|(field, errors)| {
                    errors.iter().map(move |err| {
                        err.message
                            .as_ref()
                            .map_or_else(|| field.to_string(), ToString::to_string)
                    })
                })
                .collect::<Vec<_>>()
                .join(", ");
            DomainError::ValidationError(detail)
        })?;
        Ok(self)
    }
}
