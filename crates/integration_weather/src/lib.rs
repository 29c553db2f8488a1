//! OpenWeatherMap weather integration
//!
//! Client for the OpenWeatherMap API (<https://openweathermap.org/api>).
//! Provides current conditions by city or coordinates and a 5-day/3-hour
//! forecast, mapped into the compact snapshot the trip planner consumes.

pub mod client;
mod models;

pub use client::{OpenWeatherClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{CurrentConditions, Forecast, ForecastPoint};
