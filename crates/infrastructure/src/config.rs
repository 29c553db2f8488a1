//! Application configuration
//!
//! Layered configuration: serde defaults, then an optional `tripcast.toml`
//! file, then `TRIPCAST_*` environment variables (double-underscore
//! separated, e.g. `TRIPCAST_WEATHER__API_KEY`).

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};

/// SQLite database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database file path; `:memory:` for an in-memory database
    #[serde(default = "default_db_path")]
    pub path: String,

    /// Maximum pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_db_path() -> String {
    "tripcast.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Weather provider settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Database settings
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from an optional file plus the environment
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a source cannot be read or the merged
    /// configuration does not deserialize.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        builder = match file {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name("tripcast").required(false)),
        };

        builder = builder.add_source(Environment::with_prefix("TRIPCAST").separator("__"));

        builder.build()?.try_deserialize()
    }
}
