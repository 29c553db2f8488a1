//! Weather suitability scoring
//!
//! A fixed decision list evaluated top to bottom. Rain or storm overrides
//! a pleasant temperature: the pleasant branch requires no rain mention,
//! so a rainy 20°C day falls through to the rain branch.

use domain::{Suitability, SuitabilityScore, WeatherSnapshot};

/// Score destination weather for trip suitability
///
/// Absent weather yields the fixed moderate default. Every branch
/// produces a score and note; this function never fails.
pub(crate) fn score(weather: Option<&WeatherSnapshot>) -> Suitability {
    let Some(snapshot) = weather else {
        return verdict(75, "Moderate weather conditions expected.");
    };

    let temp = snapshot.temperature_c;
    let rainy = snapshot.mentions_rain();

    if (15.0..=30.0).contains(&temp) && !rainy {
        verdict(92, "Excellent weather! Perfect for outdoor activities.")
    } else if rainy || snapshot.mentions_storm() {
        verdict(
            45,
            "Rain expected. Pack waterproof gear and plan indoor activities.",
        )
    } else if temp < 5.0 {
        verdict(55, "Very cold conditions. Heavy winter gear recommended.")
    } else if temp < 15.0 {
        verdict(70, "Cool weather. Light jacket recommended.")
    } else if temp <= 40.0 {
        verdict(60, "Hot weather expected. Stay hydrated and avoid midday sun.")
    } else {
        verdict(35, "Extreme heat warning. Limit outdoor activities.")
    }
}

fn verdict(score: u8, note: &str) -> Suitability {
    Suitability {
        score: SuitabilityScore::clamped(score),
        note: note.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(temp: f64, condition: &str, description: &str) -> WeatherSnapshot {
        WeatherSnapshot::new(temp, condition, description)
    }

    #[test]
    fn absent_weather_is_moderate_default() {
        let result = score(None);
        assert_eq!(result.score.value(), 75);
        assert!(result.note.contains("Moderate"));
    }

    #[test]
    fn pleasant_range_without_rain_is_excellent() {
        let result = score(Some(&snapshot(20.0, "Clear", "clear sky")));
        assert_eq!(result.score.value(), 92);
    }

    #[test]
    fn rain_overrides_pleasant_temperature() {
        let result = score(Some(&snapshot(20.0, "Clouds", "light rain")));
        assert_eq!(result.score.value(), 45);
        assert!(result.note.contains("waterproof"));
    }

    #[test]
    fn storm_scores_as_rain() {
        let result = score(Some(&snapshot(22.0, "Thunderstorm", "thunderstorm")));
        assert_eq!(result.score.value(), 45);
    }

    #[test]
    fn very_cold() {
        let result = score(Some(&snapshot(2.0, "Snow", "light snow")));
        assert_eq!(result.score.value(), 55);
    }

    #[test]
    fn cool_band() {
        let result = score(Some(&snapshot(10.0, "Clouds", "overcast clouds")));
        assert_eq!(result.score.value(), 70);
    }

    #[test]
    fn hot_band() {
        let result = score(Some(&snapshot(35.0, "Clear", "clear sky")));
        assert_eq!(result.score.value(), 60);
    }

    #[test]
    fn extreme_heat() {
        let result = score(Some(&snapshot(45.0, "Clear", "clear sky")));
        assert_eq!(result.score.value(), 35);
    }

    #[test]
    fn range_boundaries_are_inclusive() {
        assert_eq!(score(Some(&snapshot(15.0, "Clear", "clear sky"))).score.value(), 92);
        assert_eq!(score(Some(&snapshot(30.0, "Clear", "clear sky"))).score.value(), 92);
        assert_eq!(score(Some(&snapshot(40.0, "Clear", "clear sky"))).score.value(), 60);
    }

    #[test]
    fn cold_rain_still_scores_as_rain() {
        // rain check precedes the temperature bands
        let result = score(Some(&snapshot(3.0, "Rain", "freezing rain")));
        assert_eq!(result.score.value(), 45);
    }
}
