//! Durable per-user rows and the record-store error contract.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use super::{LogEntryId, UserId};

/// A user's saved dashboard preferences, one row per user.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSettings {
    pub user_id: UserId,
    /// Coordinates the weather widget falls back to.
    pub default_lat: f64,
    pub default_lon: f64,
    /// Handle the contribution graph loads by default.
    pub github_username: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// A stored daily journal entry. At most one per user per day.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub id: LogEntryId,
    pub user_id: UserId,
    pub entry_date: NaiveDate,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new daily log entry; id and timestamps are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct NewLogEntry {
    pub user_id: UserId,
    pub entry_date: NaiveDate,
    pub note: String,
}

/// Errors surfaced by the record store.
///
/// `AlreadyExists` is the distinguishable unique-violation case that
/// handlers map to 409; everything else the store cannot classify lands
/// in `Backend`.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A row with the same unique key is already recorded.
    #[error("already recorded")]
    AlreadyExists,

    /// No row matched the requested key.
    #[error("not found")]
    NotFound,

    /// The store itself failed (connection, query, corruption).
    #[error("record store error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Creates a backend error with a message.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_already_exists_displays_user_facing_message() {
        assert_eq!(format!("{}", StoreError::AlreadyExists), "already recorded");
    }

    #[test]
    fn store_error_backend_carries_detail() {
        let err = StoreError::backend("connection reset");
        assert_eq!(format!("{}", err), "record store error: connection reset");
    }
}
