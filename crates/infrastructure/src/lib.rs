//! Infrastructure layer - Adapters and persistence
//!
//! Concrete implementations of the application ports: the OpenWeatherMap
//! adapter, the SQLite trip-history store, and application configuration
//! loading.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use adapters::WeatherAdapter;
pub use config::{AppConfig, DatabaseConfig};
pub use persistence::{ConnectionPool, DatabaseError, SqliteTripHistory, create_pool};
