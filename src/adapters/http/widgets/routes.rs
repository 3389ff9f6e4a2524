//! HTTP routes for the widget endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{current_weather, github_contributions, lotto_info, WidgetsAppState};

/// Creates the widgets router with all routes.
pub fn widget_routes(state: WidgetsAppState) -> Router {
    Router::new()
        // GET /api/weather
        .route("/api/weather", get(current_weather))
        // GET /api/lotto-info
        .route("/api/lotto-info", get(lotto_info))
        // GET /api/github-contributions
        .route("/api/github-contributions", get(github_contributions))
        .with_state(state)
}
