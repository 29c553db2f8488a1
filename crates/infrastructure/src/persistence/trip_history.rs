//! SQLite trip history store
//!
//! Bounded history of generated plans: at most
//! [`application::ports::HISTORY_CAPACITY`] rows are retained, with the
//! oldest evicted on overflow.

use application::error::ApplicationError;
use application::ports::{HISTORY_CAPACITY, TripHistoryPort};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use domain::{TripId, TripRecord};
use rusqlite::{Row, params};
use tracing::debug;

use super::connection::{ConnectionPool, DatabaseError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// SQLite-backed implementation of [`TripHistoryPort`]
pub struct SqliteTripHistory {
    pool: ConnectionPool,
}

impl std::fmt::Debug for SqliteTripHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteTripHistory").finish_non_exhaustive()
    }
}

impl SqliteTripHistory {
    /// Create the store, ensuring the schema exists
    ///
    /// # Errors
    ///
    /// Returns a database error if the table cannot be created.
    pub fn new(pool: ConnectionPool) -> Result<Self, DatabaseError> {
        {
            let conn = pool.get()?;
            conn.execute_batch(
                "
                CREATE TABLE IF NOT EXISTS trip_history (
                    id TEXT PRIMARY KEY,
                    origin TEXT NOT NULL,
                    destination TEXT NOT NULL,
                    start_date TEXT NOT NULL,
                    end_date TEXT NOT NULL,
                    duration_days INTEGER NOT NULL,
                    created_at TEXT NOT NULL
                );
                CREATE INDEX IF NOT EXISTS idx_trip_history_created_at
                    ON trip_history (created_at DESC);
                ",
            )?;
        }
        Ok(Self { pool })
    }

    fn record_from_row(row: &Row<'_>) -> rusqlite::Result<TripRecord> {
        let text_error = |idx: usize, e: Box<dyn std::error::Error + Send + Sync>| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, e)
        };

        let id: String = row.get(0)?;
        let start_date: String = row.get(3)?;
        let end_date: String = row.get(4)?;
        let created_at: String = row.get(6)?;

        Ok(TripRecord {
            id: TripId::parse(&id).map_err(|e| text_error(0, Box::new(e)))?,
            origin: row.get(1)?,
            destination: row.get(2)?,
            start_date: NaiveDate::parse_from_str(&start_date, DATE_FORMAT)
                .map_err(|e| text_error(3, Box::new(e)))?,
            end_date: NaiveDate::parse_from_str(&end_date, DATE_FORMAT)
                .map_err(|e| text_error(4, Box::new(e)))?,
            duration_days: row.get(5)?,
            created_at: DateTime::parse_from_rfc3339(&created_at)
                .map_err(|e| text_error(6, Box::new(e)))?
                .with_timezone(&Utc),
        })
    }

    fn persistence_error(error: impl std::fmt::Display) -> ApplicationError {
        ApplicationError::Persistence(error.to_string())
    }
}

#[async_trait]
impl TripHistoryPort for SqliteTripHistory {
    async fn append(&self, record: &TripRecord) -> Result<(), ApplicationError> {
        let conn = self.pool.get().map_err(Self::persistence_error)?;

        conn.execute(
            "INSERT INTO trip_history
                (id, origin, destination, start_date, end_date, duration_days, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                record.id.to_string(),
                record.origin,
                record.destination,
                record.start_date.format(DATE_FORMAT).to_string(),
                record.end_date.format(DATE_FORMAT).to_string(),
                record.duration_days,
                record.created_at.to_rfc3339(),
            ],
        )
        .map_err(Self::persistence_error)?;

        // keep only the newest HISTORY_CAPACITY rows
        let evicted = conn
            .execute(
                "DELETE FROM trip_history WHERE id NOT IN (
                    SELECT id FROM trip_history
                    ORDER BY created_at DESC, rowid DESC
                    LIMIT ?1
                )",
                params![HISTORY_CAPACITY as i64],
            )
            .map_err(Self::persistence_error)?;

        if evicted > 0 {
            debug!(evicted, "evicted oldest trip history rows");
        }

        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<TripRecord>, ApplicationError> {
        let conn = self.pool.get().map_err(Self::persistence_error)?;

        let mut statement = conn
            .prepare(
                "SELECT id, origin, destination, start_date, end_date, duration_days, created_at
                 FROM trip_history
                 ORDER BY created_at DESC, rowid DESC
                 LIMIT ?1",
            )
            .map_err(Self::persistence_error)?;

        let rows = statement
            .query_map(params![limit as i64], Self::record_from_row)
            .map_err(Self::persistence_error)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(Self::persistence_error)?);
        }
        Ok(records)
    }
}
