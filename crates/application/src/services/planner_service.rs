//! Trip planning orchestration
//!
//! Fetches destination weather, runs the synthesizer, and appends the
//! result to the bounded trip history. The weather fetch is best-effort:
//! a failed or skipped fetch plans without weather instead of erroring.

use std::sync::Arc;

use domain::{TripPlan, TripRecord, TripRequest, WeatherSnapshot};
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{TripHistoryPort, WeatherPort};
use crate::services::TripPlanner;

/// Orchestrates weather lookup, synthesis, and history persistence
pub struct PlannerService {
    weather: Arc<dyn WeatherPort>,
    history: Arc<dyn TripHistoryPort>,
    planner: TripPlanner,
}

impl std::fmt::Debug for PlannerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlannerService")
            .field("planner", &self.planner)
            .finish_non_exhaustive()
    }
}

impl PlannerService {
    /// Create a new service over the given ports
    #[must_use]
    pub fn new(weather: Arc<dyn WeatherPort>, history: Arc<dyn TripHistoryPort>) -> Self {
        Self {
            weather,
            history,
            planner: TripPlanner::new(),
        }
    }

    /// Plan a trip, fetching destination weather unless `offline`
    ///
    /// # Errors
    ///
    /// Returns a validation error for an incomplete request. Weather and
    /// history failures are downgraded to warnings; the plan is returned
    /// regardless.
    #[instrument(skip(self, request), fields(destination = %request.destination))]
    pub async fn plan_trip(
        &self,
        request: &TripRequest,
        offline: bool,
    ) -> Result<TripPlan, ApplicationError> {
        request.validated()?;

        let weather = if offline {
            debug!("offline planning requested, skipping weather fetch");
            None
        } else {
            self.fetch_destination_weather(&request.destination).await
        };

        let plan = self.planner.synthesize(request, weather.as_ref());

        let record = TripRecord::from_plan(&plan);
        if let Err(error) = self.history.append(&record).await {
            // the plan is already synthesized; losing a history row is
            // not worth failing the request
            warn!(%error, "failed to append trip to history");
        }

        Ok(plan)
    }

    /// Fetch the most recently planned trips, newest first
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the history store is unavailable.
    pub async fn recent_trips(&self, limit: usize) -> Result<Vec<TripRecord>, ApplicationError> {
        self.history.recent(limit).await
    }

    async fn fetch_destination_weather(&self, city: &str) -> Option<WeatherSnapshot> {
        match self.weather.current_by_city(city).await {
            Ok(snapshot) => {
                debug!(
                    temperature = snapshot.temperature_c,
                    condition = %snapshot.condition,
                    "fetched destination weather"
                );
                Some(snapshot)
            },
            Err(error) => {
                warn!(%error, %city, "destination weather unavailable, planning without it");
                None
            },
        }
    }
}
