//! Session gate middleware and extractors for axum.
//!
//! This module provides:
//! - `session_gate` - Layer that resolves the session cookie and routes
//!   every request through the redirect decision
//! - `RequireUser` - Extractor that requires an authenticated user
//! - `CurrentUser` - Extractor for optional authentication
//!
//! # Architecture
//!
//! The middleware uses the `IdentityProvider` port, keeping it
//! provider-agnostic. Whether backed by GoTrue or a mock for testing,
//! the gate itself doesn't change.
//!
//! ```text
//! Request → session_gate → decide(user present, path)
//!               ↓ PassThrough: injects CurrentUser into extensions
//!           Handler → RequireUser / CurrentUser extractor reads them
//! ```
//!
//! Redirects use 303 See Other, so a gated POST lands as a GET on the
//! target page.
//!
//! # Example
//!
//! ```ignore
//! use axum::{middleware, routing::get, Router};
//! use std::sync::Arc;
//!
//! let identity: Arc<dyn IdentityProvider> = Arc::new(MockIdentityProvider::new());
//!
//! let app = Router::new()
//!     .route("/", get(home_handler))
//!     .layer(middleware::from_fn_with_state(identity.clone(), session_gate));
//!
//! async fn home_handler(RequireUser(user): RequireUser) -> String {
//!     format!("Hello, {}!", user.email)
//! }
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::CookieJar;

use crate::domain::{decide, AuthenticatedUser, GateDecision, HOME_PATH, LOGIN_PATH};
use crate::ports::IdentityProvider;

use super::super::error::ErrorResponse;

/// Name of the cookie holding the session access token.
pub const SESSION_COOKIE: &str = "hb_session";

/// Gate middleware state - wraps the identity provider.
pub type GateState = Arc<dyn IdentityProvider>;

/// Session gate middleware guarding every route.
///
/// This middleware:
/// 1. Reads the session cookie, if any
/// 2. Resolves it to a user through the `IdentityProvider` port
/// 3. Treats any resolution failure as "no user" - a stale cookie must
///    land on the login page, never on an error page
/// 4. Applies the redirect decision; pass-through requests carry
///    `CurrentUser` in their extensions
pub async fn session_gate(
    State(identity): State<GateState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let user = resolve_user(&identity, &jar).await;

    match decide(user.is_some(), request.uri().path()) {
        GateDecision::RedirectToLogin => Redirect::to(LOGIN_PATH).into_response(),
        GateDecision::RedirectToHome => Redirect::to(HOME_PATH).into_response(),
        GateDecision::PassThrough => {
            request.extensions_mut().insert(CurrentUser(user));
            next.run(request).await
        }
    }
}

/// Resolves the session cookie to a user, or `None`.
async fn resolve_user(identity: &GateState, jar: &CookieJar) -> Option<AuthenticatedUser> {
    let cookie = jar.get(SESSION_COOKIE)?;

    match identity.current_user(cookie.value()).await {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("Session cookie did not resolve to a user: {}", e);
            None
        }
    }
}

/// Extractor for optional authentication.
///
/// Returns `None` when the request carries no valid session. Inserted by
/// the gate on pass-through; extracting it on a route outside the gate
/// also yields `None`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<AuthenticatedUser>);

impl<S> axum::extract::FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let current = parts
                .extensions
                .get::<CurrentUser>()
                .cloned()
                .unwrap_or(CurrentUser(None));
            Ok(current)
        })
    }
}

/// Extractor that requires an authenticated user.
///
/// The gate already redirects anonymous traffic away from protected
/// pages, so this rejection only fires if a route is wired up outside
/// the gate by mistake. It answers 401 rather than trusting that wiring.
///
/// # Example
///
/// ```ignore
/// async fn my_handler(RequireUser(user): RequireUser) -> impl IntoResponse {
///     format!("Hello, {}!", user.email)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireUser(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = SessionRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<CurrentUser>()
                .and_then(|current| current.0.clone())
                .map(RequireUser)
                .ok_or(SessionRejection::Unauthenticated)
        })
    }
}

/// Rejection type for session failures.
#[derive(Debug, Clone)]
pub enum SessionRejection {
    /// No authenticated user is attached to the request.
    Unauthenticated,
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        let message = match self {
            SessionRejection::Unauthenticated => "Authentication required",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}
