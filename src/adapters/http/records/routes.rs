//! HTTP routes for the settings and daily-log endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{append_log, get_settings, put_settings, RecordsAppState};

/// Creates the records router with all routes.
pub fn record_routes(state: RecordsAppState) -> Router {
    Router::new()
        // GET /api/settings, PUT /api/settings
        .route("/api/settings", get(get_settings).put(put_settings))
        // POST /api/log
        .route("/api/log", post(append_log))
        .with_state(state)
}
