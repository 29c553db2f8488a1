//! Day-by-day itinerary generation
//!
//! First and last days carry fixed arrival/departure activities. Middle
//! days rotate through each preference's themed activity list at
//! `day_index mod 6`, deduplicating within the day, with a general list
//! as filler when stated preferences yield fewer than two activities.
//!
//! A one-day trip is both arrival and departure, so the two activity
//! sets are merged into a single entry.

use domain::{DayPlan, PreferenceTag, WeatherSnapshot};

/// Six representative activities per preference tag
pub(crate) const fn themed_activities(tag: PreferenceTag) -> [&'static str; 6] {
    match tag {
        PreferenceTag::Adventure => [
            "Trekking and mountain exploration",
            "River rafting or kayaking",
            "Camping under the stars",
            "Zip-lining or bungee jumping",
            "Rock climbing session",
            "Mountain biking trail",
        ],
        PreferenceTag::Relaxation => [
            "Spa and wellness retreat",
            "Yoga session at sunrise",
            "Leisurely nature walk",
            "Sunset meditation",
            "Scenic boat ride",
            "Resort pool and relaxation",
        ],
        PreferenceTag::HillStation => [
            "Scenic viewpoint visit",
            "Tea garden exploration",
            "Waterfall hike",
            "Local market shopping",
            "Nature photography walk",
            "Cable car / ropeway ride",
        ],
        PreferenceTag::Beach => [
            "Beach sunrise walk",
            "Snorkeling or diving",
            "Beach volleyball and games",
            "Sunset cruise",
            "Seafood tasting tour",
            "Water sports (parasailing, jet ski)",
        ],
        PreferenceTag::Cultural => [
            "Historical monument tour",
            "Local museum visit",
            "Traditional art workshop",
            "Heritage walking tour",
            "Local cuisine cooking class",
            "Evening cultural performance",
        ],
        PreferenceTag::Wildlife => [
            "Morning jungle safari",
            "Bird watching excursion",
            "Nature trail walk",
            "Wildlife photography session",
            "Evening safari drive",
            "Visit rescue/breeding center",
        ],
        PreferenceTag::RoadTrip => [
            "Early morning departure with scenic stops",
            "Local roadside café breakfast",
            "Explore a small town en route",
            "Scenic lake / river stop",
            "Sunset viewpoint visit",
            "Night drive with music and snacks",
        ],
        PreferenceTag::Foodie => [
            "Local street food tour",
            "Fine dining experience",
            "Cooking class with local chef",
            "Market ingredient shopping",
            "Traditional breakfast experience",
            "Dessert and café hopping",
        ],
    }
}

/// Fallback activities for days the stated preferences cannot fill
fn general_activities(destination: &str) -> [String; 6] {
    [
        format!("Arrive at {destination}, check-in and freshen up"),
        "Explore local area and nearby attractions".to_string(),
        "Visit popular landmarks and photo opportunities".to_string(),
        "Try local cuisine at recommended restaurants".to_string(),
        "Evening leisure walk and shopping".to_string(),
        "Check-out and departure with memorable experiences".to_string(),
    ]
}

fn arrival_activities(destination: &str) -> Vec<String> {
    vec![
        format!("Arrive at {destination}, check into accommodation"),
        "Settle in and explore the nearby area".to_string(),
    ]
}

fn departure_activities() -> Vec<String> {
    vec![
        "Pack and check out".to_string(),
        "Last-minute souvenir shopping".to_string(),
        "Departure".to_string(),
    ]
}

/// Merged activity set for a trip that arrives and departs the same day.
/// Check-out is skipped since nothing was unpacked overnight.
fn single_day_activities(destination: &str) -> Vec<String> {
    let mut activities = arrival_activities(destination);
    activities.push("Last-minute souvenir shopping".to_string());
    activities.push("Departure".to_string());
    activities
}

fn explore_activities(
    day_index: usize,
    preferences: &[PreferenceTag],
    general: &[String; 6],
) -> Vec<String> {
    let mut activities: Vec<String> = Vec::new();

    for tag in preferences {
        let themed = themed_activities(*tag);
        let candidate = themed[day_index % themed.len()];
        if !activities.iter().any(|existing| existing == candidate) {
            activities.push(candidate.to_string());
        }
    }

    if activities.len() < 2 {
        let filler = &general[day_index % general.len()];
        if !activities.contains(filler) {
            activities.push(filler.clone());
        }
    }

    activities
}

/// Build the itinerary: exactly `duration_days` entries, in day order
pub(crate) fn build(
    destination: &str,
    duration_days: u32,
    preferences: &[PreferenceTag],
    weather: Option<&WeatherSnapshot>,
) -> Vec<DayPlan> {
    let general = general_activities(destination);
    let last_index = duration_days.saturating_sub(1);

    let mut itinerary = Vec::with_capacity(duration_days as usize);
    for i in 0..duration_days {
        let (title, activities) = if duration_days == 1 {
            (
                "Arrival & Departure Day".to_string(),
                single_day_activities(destination),
            )
        } else if i == 0 {
            ("Arrival Day".to_string(), arrival_activities(destination))
        } else if i == last_index {
            ("Departure Day".to_string(), departure_activities())
        } else {
            (
                format!("Day {} — Explore", i + 1),
                explore_activities(i as usize, preferences, &general),
            )
        };

        let mut day = DayPlan::new(i + 1, title, activities);
        if let Some(snapshot) = weather {
            day = day.with_weather_note(snapshot.expectation_line());
        }
        itinerary.push(day);
    }

    itinerary
}
