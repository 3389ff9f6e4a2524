//! HTTP handlers for the auth endpoints.
//!
//! Login and signup share one route and one request shape; the `action`
//! query parameter picks the flow. Both set the session cookie and
//! answer 303 to the dashboard, so a browser form submission lands on
//! the home page the way a page-based app would.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Redirect;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

use crate::domain::{Credentials, HOME_PATH, LOGIN_PATH};
use crate::ports::IdentityProvider;

use super::super::error::ApiError;
use super::super::middleware::{CurrentUser, SESSION_COOKIE};
use super::dto::{CredentialsRequest, SessionStatus, UserView};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the auth endpoints.
#[derive(Clone)]
pub struct AuthAppState {
    pub identity: Arc<dyn IdentityProvider>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Action Selection
// ════════════════════════════════════════════════════════════════════════════════

/// Query parameters for POST /auth.
#[derive(Debug, Deserialize)]
pub struct AuthActionParams {
    pub action: Option<String>,
}

/// Which credential flow a POST /auth invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthAction {
    Login,
    Signup,
}

impl AuthAction {
    fn from_param(value: Option<&str>) -> Result<Self, ApiError> {
        match value {
            Some("login") => Ok(AuthAction::Login),
            Some("signup") => Ok(AuthAction::Signup),
            _ => Err(ApiError::bad_request(
                "Query parameter 'action' must be 'login' or 'signup'.",
            )),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /auth
///
/// Session status for the login page. Signed-in users never reach this
/// handler; the gate redirects them home first.
pub async fn session_status(CurrentUser(user): CurrentUser) -> Json<SessionStatus> {
    Json(SessionStatus {
        authenticated: user.is_some(),
        user: user.as_ref().map(UserView::from),
    })
}

/// POST /auth?action=login|signup
///
/// Validates the credentials, runs the selected identity flow, sets the
/// session cookie, and answers 303 to the dashboard.
pub async fn submit_credentials(
    State(state): State<AuthAppState>,
    Query(params): Query<AuthActionParams>,
    jar: CookieJar,
    body: Option<Json<CredentialsRequest>>,
) -> Result<(CookieJar, Redirect), ApiError> {
    let action = AuthAction::from_param(params.action.as_deref())?;

    let (email, password) = match body {
        Some(Json(CredentialsRequest {
            email: Some(email),
            password: Some(password),
        })) if !email.is_empty() && !password.is_empty() => (email, password),
        _ => return Err(ApiError::bad_request("Email and password are required.")),
    };

    let credentials = Credentials::new(email, password);
    credentials.validate().map_err(ApiError::bad_request)?;

    let session = match action {
        AuthAction::Login => state.identity.authenticate(&credentials).await?,
        AuthAction::Signup => state
            .identity
            .register(&credentials)
            .await
            .map_err(signup_error)?,
    };

    let jar = jar.add(session_cookie(session.access_token));
    Ok((jar, Redirect::to(HOME_PATH)))
}

/// POST /auth/logout
///
/// Removes the session cookie and answers 303 to the login page. Safe
/// for anonymous callers; removing an absent cookie is a no-op.
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    let jar = jar.remove(removal_cookie());
    (jar, Redirect::to(LOGIN_PATH))
}

// ════════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════════

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

fn removal_cookie() -> Cookie<'static> {
    // Removal must carry the same path the cookie was set with.
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}

fn signup_error(error: crate::domain::AuthError) -> ApiError {
    match error {
        crate::domain::AuthError::AlreadyRegistered => ApiError::from(error),
        other => {
            tracing::error!("Signup failed: {}", other);
            ApiError::internal(
                "An unexpected error occurred during signup. Please try again later.",
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_action_parses_known_values() {
        assert_eq!(
            AuthAction::from_param(Some("login")).unwrap(),
            AuthAction::Login
        );
        assert_eq!(
            AuthAction::from_param(Some("signup")).unwrap(),
            AuthAction::Signup
        );
    }

    #[test]
    fn auth_action_rejects_unknown_or_missing() {
        assert!(AuthAction::from_param(Some("logout")).is_err());
        assert!(AuthAction::from_param(Some("")).is_err());
        assert!(AuthAction::from_param(None).is_err());
    }

    #[test]
    fn session_cookie_is_scoped_to_the_site_root() {
        let cookie = session_cookie("token-abc".to_string());
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
    }

    #[test]
    fn removal_cookie_matches_the_session_path() {
        let cookie = removal_cookie();
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.path(), Some("/"));
    }
}
