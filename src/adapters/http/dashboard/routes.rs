//! HTTP route for the dashboard page data.

use axum::routing::get;
use axum::Router;

use super::handlers::{dashboard_overview, DashboardAppState};

/// Creates the dashboard router.
pub fn dashboard_routes(state: DashboardAppState) -> Router {
    Router::new()
        // GET /
        .route("/", get(dashboard_overview))
        .with_state(state)
}
