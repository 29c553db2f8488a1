//! Adapters - Port implementations over external services

mod weather_adapter;

pub use weather_adapter::WeatherAdapter;
