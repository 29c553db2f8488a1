//! Best-time-to-visit recommendation
//!
//! Fixed season ranges keyed by the first preference tag. The match is
//! exhaustive so a new tag cannot ship without a season.

use domain::{BestTime, PreferenceTag};

/// Season range for a preference tag
pub(crate) const fn season_range(tag: PreferenceTag) -> &'static str {
    match tag {
        PreferenceTag::Adventure | PreferenceTag::Cultural => "October - March",
        PreferenceTag::Relaxation | PreferenceTag::RoadTrip => "September - November",
        PreferenceTag::HillStation => "March - June",
        PreferenceTag::Beach => "November - February",
        PreferenceTag::Wildlife => "November - April",
        PreferenceTag::Foodie => "Year-round (Festival seasons preferred)",
    }
}

/// Recommend when to visit, based on the primary preference
pub(crate) fn recommend(primary: PreferenceTag, destination: &str) -> BestTime {
    BestTime {
        range: season_range(primary).to_string(),
        note: format!(
            "Based on your \"{}\" preference for {destination}.",
            primary.label()
        ),
    }
}
