//! HTTP routes for the auth endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{logout, session_status, submit_credentials, AuthAppState};

/// Creates the auth router with all routes.
pub fn auth_routes(state: AuthAppState) -> Router {
    Router::new()
        // GET /auth (session status), POST /auth?action=login|signup
        .route("/auth", get(session_status).post(submit_credentials))
        // POST /auth/logout
        .route("/auth/logout", post(logout))
        .with_state(state)
}
