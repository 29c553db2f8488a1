//! Trip history port
//!
//! Bounded store of previously generated plans. Stores keep at most
//! [`HISTORY_CAPACITY`] records, evicting the oldest on overflow.

use async_trait::async_trait;
use domain::TripRecord;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Maximum number of history records a store retains
pub const HISTORY_CAPACITY: usize = 10;

/// Port for trip history persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TripHistoryPort: Send + Sync {
    /// Append a record, evicting the oldest beyond capacity
    async fn append(&self, record: &TripRecord) -> Result<(), ApplicationError>;

    /// Fetch the most recent records, newest first
    async fn recent(&self, limit: usize) -> Result<Vec<TripRecord>, ApplicationError>;
}
