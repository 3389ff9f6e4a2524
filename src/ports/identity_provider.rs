//! Identity port for credential verification and session resolution.
//!
//! The identity backend is an external collaborator and stays opaque:
//! verify credentials, issue a session, resolve a token to a user. It is
//! provider-agnostic - implementations exist for GoTrue and mock testing,
//! and could be added for Auth0, Keycloak, etc.
//!
//! # Example Implementation
//!
//! ```ignore
//! pub struct GoTrueIdentity { ... }
//!
//! #[async_trait]
//! impl IdentityProvider for GoTrueIdentity {
//!     async fn current_user(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
//!         // 1. GET /auth/v1/user with the bearer token
//!         // 2. Map the subject claims to AuthenticatedUser
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::domain::{AuthError, AuthenticatedUser, Credentials, Session};

/// Verifies credentials and resolves session tokens.
///
/// The session gate calls `current_user` once per request; the auth
/// handlers call `authenticate` and `register` on the public path.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::InvalidCredentials` when the backend rejects a
///   login attempt, without distinguishing "no such user" from "wrong
///   password"
/// - Return `AuthError::AlreadyRegistered` when signup hits an existing
///   email
/// - Return `AuthError::InvalidToken` for malformed or expired tokens
/// - Return `AuthError::ServiceUnavailable` for transient backend errors
/// - Never panic on any backend response
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verifies an email/password pair and issues a session.
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError>;

    /// Registers a new user and issues a session for them.
    async fn register(&self, credentials: &Credentials) -> Result<Session, AuthError>;

    /// Resolves a session token to its user.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthenticatedUser)` - Token is live, user resolved
    /// * `Err(AuthError::InvalidToken)` - Token malformed or expired
    /// * `Err(AuthError::ServiceUnavailable)` - Backend unreachable
    async fn current_user(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
