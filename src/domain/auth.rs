//! Authentication types for the domain layer.
//!
//! These types represent a dashboard user resolved from a session token.
//! They have **no external dependencies** - any identity backend (GoTrue,
//! Auth0, Keycloak) can populate them via the `IdentityProvider` port.
//!
//! # Design Decisions
//!
//! - `AuthenticatedUser` carries only the fields the dashboard uses
//! - `AuthError` is domain-centric, not provider-specific
//! - Credential validation is pure so it runs before any network call

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::UserId;

/// Characters accepted as the "special" class in passwords.
const PASSWORD_SPECIALS: &str = "@$!%*?&";

/// Minimum password length.
const PASSWORD_MIN_LEN: usize = 8;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    // Loose shape check only: something@something.something, no whitespace.
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

/// Returns true if `email` has a plausible address shape.
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Returns true if `password` satisfies the signup policy: at least
/// 8 characters, at least one lowercase letter, one uppercase letter,
/// one digit, and one of `@$!%*?&`, drawn only from those classes.
pub fn validate_password(password: &str) -> bool {
    let allowed = |c: char| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c);

    password.chars().count() >= PASSWORD_MIN_LEN
        && password.chars().all(allowed)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

/// Email/password pair submitted to the login and signup flows.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks both fields against the signup policy.
    ///
    /// Returns the user-facing message for the first failing check, so
    /// handlers can reject with 400 before touching the identity backend.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !validate_email(&self.email) {
            return Err("Invalid email.");
        }
        if !validate_password(&self.password) {
            return Err("Invalid password.");
        }
        Ok(())
    }
}

/// Authenticated user resolved from a valid session token.
///
/// This is a **domain type** with no provider dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The stable subject id from the identity backend.
    pub id: UserId,

    /// The user's email address.
    pub email: String,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}

/// A live session issued by the identity backend.
///
/// The token is opaque to this system; it is stored in the session cookie
/// and handed back to the provider for per-request user resolution.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub user: AuthenticatedUser,
}

/// Authentication errors, described from the application's perspective
/// rather than the identity backend's.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The email/password pair was rejected.
    #[error("Login failed")]
    InvalidCredentials,

    /// Signup was rejected because the email is already registered.
    #[error("A user with this email already exists.")]
    AlreadyRegistered,

    /// The session token is missing, malformed, or expired.
    #[error("Invalid or expired session")]
    InvalidToken,

    /// The identity backend is unreachable or misbehaving.
    #[error("Identity service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}
