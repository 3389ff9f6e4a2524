//! HTTP handler for the dashboard page data.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::ports::WeatherProvider;

use super::super::middleware::RequireUser;
use super::dto::{DashboardView, UserView};

/// Shared state for the dashboard endpoint.
#[derive(Clone)]
pub struct DashboardAppState {
    pub weather: Arc<dyn WeatherProvider>,
}

/// GET /
///
/// Page data for the signed-in dashboard: the user plus the weather for
/// the configured default location. A weather failure degrades to
/// `weather: null` with a message; it never fails the page.
pub async fn dashboard_overview(
    State(state): State<DashboardAppState>,
    RequireUser(user): RequireUser,
) -> Json<DashboardView> {
    let (weather, error) = match state.weather.fetch_current(None).await {
        Ok(report) => (Some(report), None),
        Err(e) => {
            tracing::warn!(stage = e.stage(), "Dashboard weather lookup failed: {}", e);
            (None, Some(e.to_string()))
        }
    };

    Json(DashboardView {
        user: UserView::from(&user),
        weather,
        error,
    })
}
