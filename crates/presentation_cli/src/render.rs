//! Plain-text rendering of plans, weather, and history

use std::fmt::Write as _;

use domain::{ScoreBand, TripPlan, TripRecord};
use integration_weather::{CurrentConditions, Forecast};

/// Marker glyph for a suitability band
const fn band_glyph(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Excellent => "🟢",
        ScoreBand::Fair => "🟡",
        ScoreBand::Poor => "🔴",
    }
}

/// Group digits of an amount in threes ("61500" -> "61,500")
fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Render a complete trip plan
#[must_use]
pub fn render_plan(plan: &TripPlan) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "✈️  {} → {} ({})", plan.origin, plan.destination, plan.dates);
    let _ = writeln!(out, "{}", plan.summary);
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Weather suitability: {} {} - {}",
        band_glyph(plan.suitability.score.band()),
        plan.suitability.score,
        plan.suitability.note
    );
    let _ = writeln!(
        out,
        "Best time to visit:  {} ({})",
        plan.best_time.range, plan.best_time.note
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Itinerary:");
    for day in &plan.itinerary {
        let _ = writeln!(out, "  Day {} · {}", day.day, day.title);
        if let Some(note) = &day.weather_note {
            let _ = writeln!(out, "    ({note})");
        }
        for activity in &day.activities {
            let _ = writeln!(out, "    - {activity}");
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Packing list:");
    for item in &plan.packing_list {
        let _ = writeln!(out, "  - {item}");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Estimated costs ({} tier):", plan.budget);
    for line in &plan.cost.lines {
        let _ = writeln!(
            out,
            "  {:<16} ₹{:>7}/day   ₹{:>10}",
            line.category.label(),
            format_amount(line.daily_rate),
            format_amount(line.total)
        );
    }
    let _ = writeln!(
        out,
        "  {:<16} {:>12}   ₹{:>10}",
        "Total", "", format_amount(plan.cost.total)
    );

    out
}

/// Render current conditions for a city
#[must_use]
pub fn render_conditions(conditions: &CurrentConditions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🌤  {}", conditions.city);
    let _ = writeln!(
        out,
        "  {} ({}), {:.0}°C (feels like {:.0}°C)",
        conditions.condition, conditions.description, conditions.temperature, conditions.feels_like
    );
    let _ = writeln!(
        out,
        "  Humidity {}%, wind {:.1} m/s",
        conditions.humidity, conditions.wind_speed
    );
    out
}

/// Render the 5-day midday forecast digest
#[must_use]
pub fn render_forecast(forecast: &Forecast) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "5-day forecast (midday):");
    for point in forecast.daily_digest() {
        let _ = writeln!(
            out,
            "  {}  {:>5.1}°C  {}",
            point.timestamp.format("%a %b %d"),
            point.temperature,
            point.description
        );
    }
    out
}

/// Render recently planned trips
#[must_use]
pub fn render_history(records: &[TripRecord]) -> String {
    if records.is_empty() {
        return "No saved trips yet. Plan your first trip!\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Recent trips:");
    for record in records {
        let _ = writeln!(
            out,
            "  {}  {} to {} ({} days)  planned {}",
            record.route(),
            record.start_date,
            record.end_date,
            record.duration_days,
            record.created_at.format("%Y-%m-%d %H:%M")
        );
    }
    out
}
