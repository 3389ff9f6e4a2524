//! Log store port: daily journal entries.

use async_trait::async_trait;

use crate::domain::{LogEntry, NewLogEntry, StoreError};

/// Inserts daily log rows under a `(user, date)` uniqueness constraint.
///
/// # Contract
///
/// - A second insert for the same user and date returns
///   `StoreError::AlreadyExists`, which callers surface as 409
/// - On success the stored row is returned with its generated id and
///   creation timestamp
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Inserts a new entry and returns the stored row.
    async fn insert(&self, entry: &NewLogEntry) -> Result<LogEntry, StoreError>;
}
