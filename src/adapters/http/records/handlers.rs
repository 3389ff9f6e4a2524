//! HTTP handlers for the settings and daily-log endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;

use crate::domain::{DashboardSettings, NewLogEntry, StoreError};
use crate::ports::{LogStore, SettingsStore};

use super::super::error::ApiError;
use super::super::middleware::RequireUser;
use super::dto::{LogEntryRequest, LogEntryView, SettingsUpdateRequest, SettingsView};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the record endpoints.
#[derive(Clone)]
pub struct RecordsAppState {
    pub settings: Arc<dyn SettingsStore>,
    pub log: Arc<dyn LogStore>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/settings
///
/// Returns the caller's saved preferences, 404 until the first save.
pub async fn get_settings(
    State(state): State<RecordsAppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<SettingsView>, ApiError> {
    let settings = state
        .settings
        .select_one(user.id)
        .await
        .map_err(fetch_error)?;

    Ok(Json(SettingsView::from(settings)))
}

/// PUT /api/settings
///
/// Creates or replaces the caller's preferences. Answers 204; the
/// client already holds the state it just sent.
pub async fn put_settings(
    State(state): State<RecordsAppState>,
    RequireUser(user): RequireUser,
    body: Option<Json<SettingsUpdateRequest>>,
) -> Result<StatusCode, ApiError> {
    let Some(Json(update)) = body else {
        return Err(ApiError::bad_request(
            "A settings body with defaultLat and defaultLon is required.",
        ));
    };

    validate_coordinates(update.default_lat, update.default_lon)?;

    let settings = DashboardSettings {
        user_id: user.id,
        default_lat: update.default_lat,
        default_lon: update.default_lon,
        github_username: normalize_username(update.github_username),
        updated_at: chrono::Utc::now(),
    };

    state.settings.upsert(&settings).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/log
///
/// Appends one journal entry. A second entry for the same day answers
/// 409 and leaves the original untouched.
pub async fn append_log(
    State(state): State<RecordsAppState>,
    RequireUser(user): RequireUser,
    body: Option<Json<LogEntryRequest>>,
) -> Result<(StatusCode, Json<LogEntryView>), ApiError> {
    let Some(Json(request)) = body else {
        return Err(ApiError::bad_request(
            "An entry with entryDate and note is required.",
        ));
    };

    let entry_date = parse_entry_date(request.entry_date.as_deref())?;
    let note = request
        .note
        .map(|note| note.trim().to_string())
        .filter(|note| !note.is_empty())
        .ok_or_else(|| ApiError::bad_request("A note is required."))?;

    let entry = state
        .log
        .insert(&NewLogEntry {
            user_id: user.id,
            entry_date,
            note,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(LogEntryView::from(entry))))
}

// ════════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════════

fn fetch_error(error: StoreError) -> ApiError {
    match error {
        StoreError::NotFound => ApiError::not_found("No settings saved for this user."),
        other => ApiError::from(other),
    }
}

fn validate_coordinates(lat: f64, lon: f64) -> Result<(), ApiError> {
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(ApiError::bad_request(
            "defaultLat must be within [-90, 90] and defaultLon within [-180, 180].",
        ));
    }
    Ok(())
}

fn normalize_username(username: Option<String>) -> Option<String> {
    username
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

fn parse_entry_date(value: Option<&str>) -> Result<NaiveDate, ApiError> {
    value
        .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .ok_or_else(|| ApiError::bad_request("entryDate must be a date in YYYY-MM-DD format."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_coordinates_bounds_both_axes() {
        assert!(validate_coordinates(36.27, -95.85).is_ok());
        assert!(validate_coordinates(90.0, 180.0).is_ok());
        assert!(validate_coordinates(90.5, 0.0).is_err());
        assert!(validate_coordinates(0.0, -180.5).is_err());
    }

    #[test]
    fn normalize_username_drops_blank_values() {
        assert_eq!(normalize_username(None), None);
        assert_eq!(normalize_username(Some("".to_string())), None);
        assert_eq!(normalize_username(Some("   ".to_string())), None);
        assert_eq!(
            normalize_username(Some("  octocat  ".to_string())),
            Some("octocat".to_string())
        );
    }

    #[test]
    fn parse_entry_date_accepts_iso_dates_only() {
        assert_eq!(
            parse_entry_date(Some("2025-06-17")).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 17).unwrap()
        );
        assert!(parse_entry_date(Some("06/17/2025")).is_err());
        assert!(parse_entry_date(Some("today")).is_err());
        assert!(parse_entry_date(None).is_err());
    }
}
