//! Port definitions for external collaborators

mod trip_history_port;
mod weather_port;

pub use trip_history_port::{HISTORY_CAPACITY, TripHistoryPort};
pub use weather_port::WeatherPort;

#[cfg(test)]
pub use trip_history_port::MockTripHistoryPort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
