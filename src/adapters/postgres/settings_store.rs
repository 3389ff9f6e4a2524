//! PostgreSQL implementation of SettingsStore.
//!
//! One `dashboard_settings` row per user, written with an upsert so the
//! first save and every later save go through the same statement.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::{DashboardSettings, StoreError, UserId};
use crate::ports::SettingsStore;

/// PostgreSQL implementation of SettingsStore.
#[derive(Clone)]
pub struct PostgresSettingsStore {
    pool: PgPool,
}

impl PostgresSettingsStore {
    /// Creates a new PostgresSettingsStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsStore for PostgresSettingsStore {
    async fn select_one(&self, user_id: UserId) -> Result<DashboardSettings, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT user_id, default_lat, default_lon, github_username, updated_at
            FROM dashboard_settings
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::backend(format!("Failed to fetch settings: {}", e)))?;

        match row {
            Some(row) => row_to_settings(row),
            None => Err(StoreError::NotFound),
        }
    }

    async fn upsert(&self, settings: &DashboardSettings) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO dashboard_settings (
                user_id, default_lat, default_lon, github_username, updated_at
            ) VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id) DO UPDATE SET
                default_lat = EXCLUDED.default_lat,
                default_lon = EXCLUDED.default_lon,
                github_username = EXCLUDED.github_username,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(settings.user_id.as_uuid())
        .bind(settings.default_lat)
        .bind(settings.default_lon)
        .bind(settings.github_username.as_deref())
        .bind(settings.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::backend(format!("Failed to upsert settings: {}", e)))?;

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_settings(row: sqlx::postgres::PgRow) -> Result<DashboardSettings, StoreError> {
    let user_id: uuid::Uuid = row
        .try_get("user_id")
        .map_err(|e| StoreError::backend(format!("Failed to get user_id: {}", e)))?;

    let default_lat: f64 = row
        .try_get("default_lat")
        .map_err(|e| StoreError::backend(format!("Failed to get default_lat: {}", e)))?;

    let default_lon: f64 = row
        .try_get("default_lon")
        .map_err(|e| StoreError::backend(format!("Failed to get default_lon: {}", e)))?;

    let github_username: Option<String> = row
        .try_get("github_username")
        .map_err(|e| StoreError::backend(format!("Failed to get github_username: {}", e)))?;

    let updated_at: chrono::DateTime<chrono::Utc> = row
        .try_get("updated_at")
        .map_err(|e| StoreError::backend(format!("Failed to get updated_at: {}", e)))?;

    Ok(DashboardSettings {
        user_id: UserId::from_uuid(user_id),
        default_lat,
        default_lon,
        github_username,
        updated_at,
    })
}
