//! Trip plan synthesis engine
//!
//! Pure rule-based generator: given a request and an optional destination
//! weather snapshot it produces a complete [`TripPlan`]. No I/O, no shared
//! state, no randomness; identical inputs yield identical plans, and every
//! unrecognized or missing input takes a fallback branch, so synthesis is
//! total over its declared domain.

mod best_time;
mod costs;
mod itinerary;
mod packing;
mod suitability;

use domain::{TripPlan, TripRequest, WeatherSnapshot};

/// The trip plan synthesizer
#[derive(Debug, Clone, Copy, Default)]
pub struct TripPlanner;

impl TripPlanner {
    /// Create a new planner
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Synthesize a complete plan from a request and optional weather
    ///
    /// Callers are expected to validate the request first; synthesis
    /// itself cannot fail.
    #[must_use]
    pub fn synthesize(&self, request: &TripRequest, weather: Option<&WeatherSnapshot>) -> TripPlan {
        let duration_days = request.duration_days();

        TripPlan {
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            dates: request.dates,
            duration_days,
            budget: request.budget,
            summary: Self::summary(request, duration_days),
            suitability: suitability::score(weather),
            best_time: best_time::recommend(request.primary_preference(), &request.destination),
            itinerary: itinerary::build(
                &request.destination,
                duration_days,
                &request.preferences,
                weather,
            ),
            packing_list: packing::build(weather, &request.preferences),
            cost: costs::breakdown(request.budget, duration_days),
        }
    }

    fn summary(request: &TripRequest, duration_days: u32) -> String {
        let focus = if request.preferences.is_empty() {
            "a great experience".to_string()
        } else {
            request
                .preferences
                .iter()
                .map(|tag| tag.label())
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!(
            "A {duration_days}-day trip from {} to {}, curated for {focus}.",
            request.origin, request.destination
        )
    }
}
