//! HTTP DTOs for the auth endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::AuthenticatedUser;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for the login and signup flows.
///
/// Both fields are optional at the wire level so a missing one produces
/// this API's own 400 message instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Client-facing projection of an authenticated user.
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: String,
    pub email: String,
}

impl From<&AuthenticatedUser> for UserView {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
        }
    }
}

/// Response body for GET /auth.
#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
    /// Explicitly `null` when anonymous.
    pub user: Option<UserView>,
}
