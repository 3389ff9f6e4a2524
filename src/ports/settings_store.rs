//! Settings store port: per-user dashboard preferences.

use async_trait::async_trait;

use crate::domain::{DashboardSettings, StoreError, UserId};

/// Reads and writes the one-row-per-user settings table.
///
/// # Contract
///
/// - `select_one` returns `StoreError::NotFound` when the user has never
///   saved settings
/// - `upsert` inserts or replaces on the user-id key and is idempotent
///   for identical payloads
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Returns the stored settings for `user_id`.
    async fn select_one(&self, user_id: UserId) -> Result<DashboardSettings, StoreError>;

    /// Inserts or replaces the settings row keyed by its `user_id`.
    async fn upsert(&self, settings: &DashboardSettings) -> Result<(), StoreError>;
}
