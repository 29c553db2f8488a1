//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap current-weather and 5-day forecast
//! endpoints.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{CurrentConditions, CurrentResponse, Forecast, ForecastResponse};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// API key was rejected
    #[error("Invalid API key")]
    InvalidApiKey,

    /// The requested city is unknown to the provider
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// OpenWeatherMap API key
    #[serde(default)]
    pub api_key: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Units requested from the provider; the planner works in Celsius
const UNITS: &str = "metric";

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current conditions for a city by name
    async fn current_by_city(&self, city: &str) -> Result<CurrentConditions, WeatherError>;

    /// Get current conditions for a coordinate pair
    async fn current_by_coords(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, WeatherError>;

    /// Get the 3-hourly forecast for a city
    async fn forecast_by_city(&self, city: &str) -> Result<Forecast, WeatherError>;

    /// Check if the weather service is healthy
    async fn is_healthy(&self) -> bool;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Map a non-success status to the client error taxonomy
    fn error_for_status(status: StatusCode, context: &str) -> WeatherError {
        match status {
            StatusCode::UNAUTHORIZED => WeatherError::InvalidApiKey,
            StatusCode::NOT_FOUND => WeatherError::CityNotFound(context.to_string()),
            StatusCode::TOO_MANY_REQUESTS => WeatherError::RateLimitExceeded,
            s if s.is_server_error() => WeatherError::ServiceUnavailable(format!("HTTP {s}")),
            s => WeatherError::RequestFailed(format!("HTTP {s}")),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        context: &str,
    ) -> Result<T, WeatherError> {
        let url = format!("{}{path}", self.config.base_url);
        debug!(%url, "Fetching weather data");

        let response = self
            .client
            .get(&url)
            .query(query)
            .query(&[("appid", self.config.api_key.as_str()), ("units", UNITS)])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_for_status(status, context));
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self), fields(city = %city))]
    async fn current_by_city(&self, city: &str) -> Result<CurrentConditions, WeatherError> {
        let response: CurrentResponse = self.get_json("/weather", &[("q", city)], city).await?;
        CurrentConditions::from_response(response)
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn current_by_coords(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let lat = latitude.to_string();
        let lon = longitude.to_string();
        let context = format!("{latitude},{longitude}");
        let response: CurrentResponse = self
            .get_json("/weather", &[("lat", lat.as_str()), ("lon", lon.as_str())], &context)
            .await?;
        CurrentConditions::from_response(response)
    }

    #[instrument(skip(self), fields(city = %city))]
    async fn forecast_by_city(&self, city: &str) -> Result<Forecast, WeatherError> {
        let response: ForecastResponse = self.get_json("/forecast", &[("q", city)], city).await?;
        Forecast::from_response(response)
    }

    async fn is_healthy(&self) -> bool {
        // Lightweight reachability probe against a well-known city
        self.current_by_city("London").await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = WeatherConfig::default();
        assert_eq!(config.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: WeatherConfig =
            serde_json::from_str(r#"{"api_key": "secret"}"#).expect("should deserialize");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_validate_coordinates_valid() {
        assert!(OpenWeatherClient::validate_coordinates(0.0, 0.0).is_ok());
        assert!(OpenWeatherClient::validate_coordinates(90.0, 180.0).is_ok());
        assert!(OpenWeatherClient::validate_coordinates(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_validate_coordinates_invalid() {
        assert!(OpenWeatherClient::validate_coordinates(91.0, 0.0).is_err());
        assert!(OpenWeatherClient::validate_coordinates(-91.0, 0.0).is_err());
        assert!(OpenWeatherClient::validate_coordinates(0.0, 181.0).is_err());
        assert!(OpenWeatherClient::validate_coordinates(0.0, -181.0).is_err());
    }

    #[test]
    fn test_error_for_status() {
        assert!(matches!(
            OpenWeatherClient::error_for_status(StatusCode::UNAUTHORIZED, "Goa"),
            WeatherError::InvalidApiKey
        ));
        assert!(matches!(
            OpenWeatherClient::error_for_status(StatusCode::NOT_FOUND, "Atlantis"),
            WeatherError::CityNotFound(city) if city == "Atlantis"
        ));
        assert!(matches!(
            OpenWeatherClient::error_for_status(StatusCode::TOO_MANY_REQUESTS, "Goa"),
            WeatherError::RateLimitExceeded
        ));
        assert!(matches!(
            OpenWeatherClient::error_for_status(StatusCode::BAD_GATEWAY, "Goa"),
            WeatherError::ServiceUnavailable(_)
        ));
        assert!(matches!(
            OpenWeatherClient::error_for_status(StatusCode::BAD_REQUEST, "Goa"),
            WeatherError::RequestFailed(_)
        ));
    }

    #[test]
    fn test_weather_error_display() {
        let err = WeatherError::CityNotFound("Atlantis".to_string());
        assert_eq!(err.to_string(), "City not found: Atlantis");

        let err = WeatherError::InvalidCoordinates;
        assert!(err.to_string().contains("latitude"));
    }

    #[test]
    fn test_client_creation() {
        let client = OpenWeatherClient::new(WeatherConfig::default());
        assert!(client.is_ok());
    }
}
