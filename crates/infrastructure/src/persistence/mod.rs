//! Persistence - SQLite-backed stores

mod connection;
mod trip_history;

pub use connection::{ConnectionPool, DatabaseError, PooledConn, create_pool};
pub use trip_history::SqliteTripHistory;
