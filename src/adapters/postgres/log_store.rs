//! PostgreSQL implementation of LogStore.
//!
//! Appends daily journal entries. The `(user_id, entry_date)` unique
//! index is the one-entry-per-day rule; a violation surfaces as
//! `StoreError::AlreadyExists` so the handler can answer 409 instead of
//! a generic failure.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{LogEntry, LogEntryId, NewLogEntry, StoreError};
use crate::ports::LogStore;

/// Postgres error code for a unique-constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL implementation of LogStore.
#[derive(Clone)]
pub struct PostgresLogStore {
    pool: PgPool,
}

impl PostgresLogStore {
    /// Creates a new PostgresLogStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LogStore for PostgresLogStore {
    async fn insert(&self, entry: &NewLogEntry) -> Result<LogEntry, StoreError> {
        let id = LogEntryId::new();
        let created_at = chrono::Utc::now();

        sqlx::query(
            r#"
            INSERT INTO daily_log (id, user_id, entry_date, note, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id.as_uuid())
        .bind(entry.user_id.as_uuid())
        .bind(entry.entry_date)
        .bind(&entry.note)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(classify_insert_error)?;

        Ok(LogEntry {
            id,
            user_id: entry.user_id,
            entry_date: entry.entry_date,
            note: entry.note.clone(),
            created_at,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn classify_insert_error(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return StoreError::AlreadyExists;
        }
    }
    StoreError::backend(format!("Failed to insert log entry: {}", e))
}
