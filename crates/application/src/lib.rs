//! Application layer - Use cases and orchestration
//!
//! Contains the trip-plan synthesis engine, port definitions for the
//! outside world (weather provider, trip history), and the service that
//! orchestrates them.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
