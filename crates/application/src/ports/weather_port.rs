//! Weather provider port
//!
//! Defines the interface for fetching the destination weather snapshot
//! the planner consumes. The planner itself never performs I/O; a failed
//! fetch degrades to planning without weather.

use async_trait::async_trait;
use domain::WeatherSnapshot;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current conditions for a city by name
    async fn current_by_city(&self, city: &str) -> Result<WeatherSnapshot, ApplicationError>;

    /// Get current conditions for a coordinate pair
    async fn current_by_coords(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherSnapshot, ApplicationError>;

    /// Check if the weather service is reachable
    async fn is_available(&self) -> bool;
}
