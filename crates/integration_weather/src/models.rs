//! OpenWeatherMap API response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::WeatherError;

/// Raw `/weather` endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentResponse {
    /// Resolved city name
    pub name: String,
    /// Temperature block
    pub main: MainData,
    /// Condition list; the first entry is the primary condition
    pub weather: Vec<ConditionData>,
    /// Wind block
    pub wind: Option<WindData>,
    /// Visibility in meters
    pub visibility: Option<u32>,
}

/// Temperature and humidity block shared by both endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct MainData {
    /// Temperature in Celsius (metric units requested)
    pub temp: f64,
    /// Apparent temperature in Celsius
    pub feels_like: f64,
    /// Relative humidity percentage
    pub humidity: u8,
    /// Surface pressure in hPa
    pub pressure: Option<f64>,
}

/// A single weather condition entry
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionData {
    /// Category, e.g. "Rain", "Clear", "Clouds"
    pub main: String,
    /// Human description, e.g. "light rain"
    pub description: String,
    /// Icon code
    pub icon: Option<String>,
}

/// Wind block
#[derive(Debug, Clone, Deserialize)]
pub struct WindData {
    /// Wind speed in m/s
    pub speed: f64,
}

/// Raw `/forecast` endpoint response (3-hourly points)
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    /// Forecast points in chronological order
    pub list: Vec<ForecastEntry>,
}

/// One 3-hourly forecast point as returned by the API
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    /// Unix timestamp of the point
    pub dt: i64,
    /// Timestamp text, e.g. "2024-06-01 12:00:00"
    pub dt_txt: String,
    /// Temperature block
    pub main: MainData,
    /// Condition list
    pub weather: Vec<ConditionData>,
}

/// Parsed current conditions for a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Resolved city name
    pub city: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Apparent temperature in Celsius
    pub feels_like: f64,
    /// Relative humidity percentage
    pub humidity: u8,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Condition category
    pub condition: String,
    /// Human description
    pub description: String,
}

impl CurrentConditions {
    /// Parse from a raw `/weather` response
    ///
    /// # Errors
    ///
    /// Returns a parse error if the response carries no conditions.
    pub fn from_response(response: CurrentResponse) -> Result<Self, WeatherError> {
        let primary = response
            .weather
            .first()
            .ok_or_else(|| WeatherError::ParseError("empty weather conditions".to_string()))?;

        Ok(Self {
            city: response.name,
            temperature: response.main.temp,
            feels_like: response.main.feels_like,
            humidity: response.main.humidity,
            wind_speed: response.wind.map_or(0.0, |w| w.speed),
            condition: primary.main.clone(),
            description: primary.description.clone(),
        })
    }

    /// Reduce to the minimal snapshot the planner consumes
    #[must_use]
    pub fn to_snapshot(&self) -> domain::WeatherSnapshot {
        domain::WeatherSnapshot::new(
            self.temperature,
            self.condition.clone(),
            self.description.clone(),
        )
    }
}

/// A parsed forecast point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Point timestamp (UTC)
    pub timestamp: DateTime<Utc>,
    /// Raw timestamp text from the API
    pub stamp_text: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Condition category
    pub condition: String,
    /// Human description
    pub description: String,
}

/// Parsed multi-point forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// 3-hourly points in chronological order
    pub points: Vec<ForecastPoint>,
}

impl Forecast {
    /// Parse from a raw `/forecast` response
    ///
    /// # Errors
    ///
    /// Returns a parse error if any point carries no conditions or an
    /// invalid timestamp.
    pub fn from_response(response: ForecastResponse) -> Result<Self, WeatherError> {
        let mut points = Vec::with_capacity(response.list.len());

        for entry in response.list {
            let primary = entry
                .weather
                .first()
                .ok_or_else(|| WeatherError::ParseError("empty weather conditions".to_string()))?;
            let timestamp = DateTime::from_timestamp(entry.dt, 0).ok_or_else(|| {
                WeatherError::ParseError(format!("invalid timestamp: {}", entry.dt))
            })?;

            points.push(ForecastPoint {
                timestamp,
                stamp_text: entry.dt_txt,
                temperature: entry.main.temp,
                condition: primary.main.clone(),
                description: primary.description.clone(),
            });
        }

        Ok(Self { points })
    }

    /// One representative point per day: the midday (12:00) points,
    /// capped at 5 days
    #[must_use]
    pub fn daily_digest(&self) -> Vec<&ForecastPoint> {
        self.points
            .iter()
            .filter(|point| point.stamp_text.contains("12:00:00"))
            .take(5)
            .collect()
    }
}
