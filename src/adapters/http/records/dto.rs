//! HTTP DTOs for the settings and daily-log endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DashboardSettings, LogEntry, LogEntryId};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for PUT /api/settings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdateRequest {
    pub default_lat: f64,
    pub default_lon: f64,
    pub github_username: Option<String>,
}

/// Request body for POST /api/log.
///
/// The date arrives as a string so a malformed one gets this API's own
/// 400 message instead of a deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntryRequest {
    pub entry_date: Option<String>,
    pub note: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response body for GET /api/settings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsView {
    pub default_lat: f64,
    pub default_lon: f64,
    pub github_username: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<DashboardSettings> for SettingsView {
    fn from(settings: DashboardSettings) -> Self {
        Self {
            default_lat: settings.default_lat,
            default_lon: settings.default_lon,
            github_username: settings.github_username,
            updated_at: settings.updated_at,
        }
    }
}

/// Response body for POST /api/log.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntryView {
    pub id: LogEntryId,
    pub entry_date: NaiveDate,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

impl From<LogEntry> for LogEntryView {
    fn from(entry: LogEntry) -> Self {
        Self {
            id: entry.id,
            entry_date: entry.entry_date,
            note: entry.note,
            created_at: entry.created_at,
        }
    }
}
