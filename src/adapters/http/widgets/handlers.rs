//! HTTP handlers for the widget endpoints.
//!
//! Each handler validates its own inputs first, so a bad request never
//! costs an upstream call, then hands the rest to the matching port.
//! Port errors carry their status and user-facing message; the handlers
//! convert and pass them on unchanged.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;

use crate::domain::Coordinates;
use crate::ports::{ContributionProvider, LottoProvider, WeatherProvider};

use super::super::error::ApiError;
use super::super::middleware::RequireUser;
use super::dto::{ContributionCalendar, ContributionParams, LottoDraw, WeatherParams, WeatherReport};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the widget endpoints.
#[derive(Clone)]
pub struct WidgetsAppState {
    pub weather: Arc<dyn WeatherProvider>,
    pub lotto: Arc<dyn LottoProvider>,
    pub github: Arc<dyn ContributionProvider>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/weather?lat=..&lon=..
///
/// Requires both coordinates; half a coordinate is a 400 before any
/// upstream traffic.
pub async fn current_weather(
    State(state): State<WidgetsAppState>,
    RequireUser(_user): RequireUser,
    Query(params): Query<WeatherParams>,
) -> Result<Json<WeatherReport>, ApiError> {
    let coordinates = parse_coordinates(&params)?;
    let report = state.weather.fetch_current(Some(coordinates)).await?;
    Ok(Json(report))
}

/// GET /api/lotto-info
pub async fn lotto_info(
    State(state): State<WidgetsAppState>,
    RequireUser(_user): RequireUser,
) -> Result<Json<LottoDraw>, ApiError> {
    let draw = state.lotto.next_draw().await?;
    Ok(Json(draw))
}

/// GET /api/github-contributions?username=..
///
/// An absent or blank username is a 400 before the port is invoked.
pub async fn github_contributions(
    State(state): State<WidgetsAppState>,
    RequireUser(_user): RequireUser,
    Query(params): Query<ContributionParams>,
) -> Result<Json<ContributionCalendar>, ApiError> {
    let username = params.username.unwrap_or_default();
    if username.trim().is_empty() {
        return Err(ApiError::bad_request(
            "GitHub username is required as a query parameter.",
        ));
    }

    let calendar = state.github.fetch_calendar(&username).await?;
    Ok(Json(calendar))
}

// ════════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════════

fn parse_coordinates(params: &WeatherParams) -> Result<Coordinates, ApiError> {
    let lat = params.lat.as_deref().and_then(|s| s.parse::<f64>().ok());
    let lon = params.lon.as_deref().and_then(|s| s.parse::<f64>().ok());

    match (lat, lon) {
        (Some(lat), Some(lon)) => Ok(Coordinates::new(lat, lon)),
        _ => Err(ApiError::bad_request(
            "Latitude and longitude are required query parameters.",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(lat: Option<&str>, lon: Option<&str>) -> WeatherParams {
        WeatherParams {
            lat: lat.map(String::from),
            lon: lon.map(String::from),
        }
    }

    #[test]
    fn parse_coordinates_accepts_a_full_pair() {
        let coords = parse_coordinates(&params(Some("36.27"), Some("-95.85"))).unwrap();
        assert_eq!(coords.lat, 36.27);
        assert_eq!(coords.lon, -95.85);
    }

    #[test]
    fn parse_coordinates_rejects_half_a_pair() {
        assert!(parse_coordinates(&params(Some("36.27"), None)).is_err());
        assert!(parse_coordinates(&params(None, Some("-95.85"))).is_err());
        assert!(parse_coordinates(&params(None, None)).is_err());
    }

    #[test]
    fn parse_coordinates_folds_bad_numbers_into_the_same_rejection() {
        let err = parse_coordinates(&params(Some("north"), Some("-95.85"))).unwrap_err();
        assert_eq!(
            err.message,
            "Latitude and longitude are required query parameters."
        );
    }
}
