//! Packing list generation
//!
//! Fixed essentials, one temperature tier (or a generic set when weather
//! is unknown), rain gear when rain is mentioned, then per-preference
//! extras. The result is deduplicated preserving first insertion.

use domain::{PreferenceTag, WeatherSnapshot};

const ESSENTIALS: [&str; 5] = [
    "Passport / ID",
    "Charger & Power Bank",
    "Toiletries",
    "First Aid Kit",
    "Reusable Water Bottle",
];

const COLD_WEAR: [&str; 4] = ["Heavy Jacket", "Thermal Wear", "Gloves & Beanie", "Warm Socks"];
const COOL_WEAR: [&str; 3] = ["Light Jacket", "Sweater", "Long Pants"];
const MILD_WEAR: [&str; 3] = ["T-Shirts", "Comfortable Shorts", "Light Layers"];
const HOT_WEAR: [&str; 4] = [
    "Sunscreen (SPF 50+)",
    "Sunglasses",
    "Hat / Cap",
    "Light Cotton Clothes",
];

const UNKNOWN_WEATHER: [&str; 3] = ["Versatile Layers", "Sunscreen", "Umbrella"];
const RAIN_GEAR: [&str; 3] = ["Umbrella", "Raincoat / Poncho", "Waterproof Bag"];

/// Extra items per preference tag; tags without gear contribute nothing
const fn tag_extras(tag: PreferenceTag) -> &'static [&'static str] {
    match tag {
        PreferenceTag::Adventure => &["Hiking Boots", "Backpack", "Torch / Headlamp"],
        PreferenceTag::Beach => &["Swimsuit", "Flip Flops", "Beach Towel"],
        PreferenceTag::Cultural => &["Modest Clothing", "Notebook & Pen"],
        PreferenceTag::Wildlife => &["Binoculars", "Camouflage Wear", "Insect Repellent"],
        PreferenceTag::Foodie => &["Antacids", "Wet Wipes"],
        PreferenceTag::Relaxation | PreferenceTag::HillStation | PreferenceTag::RoadTrip => &[],
    }
}

/// Clothing tier for a temperature; tiers are mutually exclusive,
/// evaluated low to high
const fn temperature_tier(temperature_c: f64) -> &'static [&'static str] {
    if temperature_c < 10.0 {
        &COLD_WEAR
    } else if temperature_c < 20.0 {
        &COOL_WEAR
    } else if temperature_c < 30.0 {
        &MILD_WEAR
    } else {
        &HOT_WEAR
    }
}

fn push_unique(items: &mut Vec<String>, item: &str) {
    if !items.iter().any(|existing| existing == item) {
        items.push(item.to_string());
    }
}

/// Build the packing list for the given weather and preferences
pub(crate) fn build(
    weather: Option<&WeatherSnapshot>,
    preferences: &[PreferenceTag],
) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();

    for item in ESSENTIALS {
        push_unique(&mut items, item);
    }

    if let Some(snapshot) = weather {
        for item in temperature_tier(snapshot.temperature_c) {
            push_unique(&mut items, item);
        }
        if snapshot.mentions_rain() {
            for item in RAIN_GEAR {
                push_unique(&mut items, item);
            }
        }
    } else {
        for item in UNKNOWN_WEATHER {
            push_unique(&mut items, item);
        }
    }

    for tag in preferences {
        for item in tag_extras(*tag) {
            push_unique(&mut items, item);
        }
    }

    items
}
