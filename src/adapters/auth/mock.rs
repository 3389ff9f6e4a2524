//! Mock identity adapter for testing.
//!
//! Implements the `IdentityProvider` port without a real backend, so the
//! session gate and auth handlers can be exercised in tests.
//!
//! # Example
//!
//! ```ignore
//! use homeboard::adapters::auth::MockIdentityProvider;
//! use homeboard::domain::{AuthenticatedUser, UserId};
//!
//! // A provider that resolves one session token
//! let identity = MockIdentityProvider::new()
//!     .with_user("valid-token", AuthenticatedUser::new(UserId::new(), "test@example.com"));
//!
//! let result = identity.current_user("valid-token").await;
//! assert!(result.is_ok());
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::{AuthError, AuthenticatedUser, Credentials, Session, UserId};
use crate::ports::IdentityProvider;

/// A registered mock account.
#[derive(Debug, Clone)]
struct MockAccount {
    password: String,
    session: Session,
}

/// Mock identity provider for testing.
///
/// Holds a map of session tokens to users and a map of registered
/// accounts. Unknown tokens return `InvalidToken`; wrong passwords return
/// `InvalidCredentials`; duplicate signups return `AlreadyRegistered`.
#[derive(Debug, Default)]
pub struct MockIdentityProvider {
    /// Map of valid session tokens to their users.
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    /// Map of registered accounts keyed by email.
    accounts: RwLock<HashMap<String, MockAccount>>,
    /// Optional error returned by every operation (for error-path testing).
    force_error: RwLock<Option<AuthError>>,
}

impl MockIdentityProvider {
    /// Creates a new empty mock provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid session token that resolves to `user`.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.write().unwrap().insert(token.into(), user);
        self
    }

    /// Adds a valid session token with a generated test user.
    ///
    /// The user's email is derived from the token so assertions can
    /// predict it.
    pub fn with_test_user(self, token: impl Into<String>) -> Self {
        let token = token.into();
        let user = AuthenticatedUser::new(UserId::new(), format!("{}@test.example.com", token));
        self.with_user(token, user)
    }

    /// Registers an account so `authenticate` succeeds for this pair.
    ///
    /// The issued session token is `token-{email}` and also resolves via
    /// `current_user`.
    pub fn with_account(self, email: impl Into<String>, password: impl Into<String>) -> Self {
        let email = email.into();
        let token = format!("token-{}", email);
        let user = AuthenticatedUser::new(UserId::new(), email.clone());
        let session = Session {
            access_token: token.clone(),
            user: user.clone(),
        };
        self.accounts.write().unwrap().insert(
            email,
            MockAccount {
                password: password.into(),
                session,
            },
        );
        self.tokens.write().unwrap().insert(token, user);
        self
    }

    /// Forces every operation to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }

    /// Clears the forced error and returns to normal operation.
    pub fn clear_error(&self) {
        *self.force_error.write().unwrap() = None;
    }

    /// Registers a new valid token at runtime.
    pub fn add_token(&self, token: impl Into<String>, user: AuthenticatedUser) {
        self.tokens.write().unwrap().insert(token.into(), user);
    }

    /// Removes a token, making it invalid.
    pub fn remove_token(&self, token: &str) {
        self.tokens.write().unwrap().remove(token);
    }

    /// Returns the number of registered valid tokens.
    pub fn token_count(&self) -> usize {
        self.tokens.read().unwrap().len()
    }

    fn forced_error(&self) -> Option<AuthError> {
        self.force_error.read().unwrap().clone()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        if let Some(error) = self.forced_error() {
            return Err(error);
        }

        let accounts = self.accounts.read().unwrap();
        match accounts.get(&credentials.email) {
            Some(account) if account.password == credentials.password => {
                Ok(account.session.clone())
            }
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    async fn register(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        if let Some(error) = self.forced_error() {
            return Err(error);
        }

        {
            let accounts = self.accounts.read().unwrap();
            if accounts.contains_key(&credentials.email) {
                return Err(AuthError::AlreadyRegistered);
            }
        }

        let token = format!("token-{}", credentials.email);
        let user = AuthenticatedUser::new(UserId::new(), credentials.email.clone());
        let session = Session {
            access_token: token.clone(),
            user: user.clone(),
        };

        self.accounts.write().unwrap().insert(
            credentials.email.clone(),
            MockAccount {
                password: credentials.password.clone(),
                session: session.clone(),
            },
        );
        self.tokens.write().unwrap().insert(token, user);

        Ok(session)
    }

    async fn current_user(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = self.forced_error() {
            return Err(error);
        }

        self.tokens
            .read()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(), "test@example.com")
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Token Resolution Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn mock_returns_user_for_registered_token() {
        let user = test_user();
        let identity = MockIdentityProvider::new().with_user("valid-token", user.clone());

        let resolved = identity.current_user("valid-token").await.unwrap();
        assert_eq!(resolved, user);
    }

    #[tokio::test]
    async fn mock_returns_invalid_token_for_unknown() {
        let identity = MockIdentityProvider::new();

        let result = identity.current_user("unknown-token").await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn mock_with_test_user_derives_email_from_token() {
        let identity = MockIdentityProvider::new().with_test_user("my-token");

        let user = identity.current_user("my-token").await.unwrap();
        assert_eq!(user.email, "my-token@test.example.com");
    }

    #[tokio::test]
    async fn mock_with_error_forces_error_on_every_operation() {
        let identity = MockIdentityProvider::new()
            .with_user("valid-token", test_user())
            .with_error(AuthError::service_unavailable("down"));

        assert!(identity.current_user("valid-token").await.is_err());
        assert!(identity
            .authenticate(&Credentials::new("a@b.co", "pw"))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn mock_clear_error_restores_normal_operation() {
        let identity = MockIdentityProvider::new()
            .with_user("valid-token", test_user())
            .with_error(AuthError::service_unavailable("down"));

        assert!(identity.current_user("valid-token").await.is_err());

        identity.clear_error();
        assert!(identity.current_user("valid-token").await.is_ok());
    }

    #[tokio::test]
    async fn mock_remove_token_invalidates() {
        let identity = MockIdentityProvider::new().with_user("token", test_user());

        assert!(identity.current_user("token").await.is_ok());
        identity.remove_token("token");
        assert!(identity.current_user("token").await.is_err());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Credential Flow Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn mock_authenticate_accepts_registered_account() {
        let identity = MockIdentityProvider::new().with_account("user@example.com", "Abcdef1!");

        let session = identity
            .authenticate(&Credentials::new("user@example.com", "Abcdef1!"))
            .await
            .unwrap();

        assert_eq!(session.user.email, "user@example.com");
        assert_eq!(session.access_token, "token-user@example.com");
    }

    #[tokio::test]
    async fn mock_authenticate_rejects_wrong_password() {
        let identity = MockIdentityProvider::new().with_account("user@example.com", "Abcdef1!");

        let result = identity
            .authenticate(&Credentials::new("user@example.com", "wrong"))
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn mock_authenticate_rejects_unknown_email() {
        let identity = MockIdentityProvider::new();

        let result = identity
            .authenticate(&Credentials::new("ghost@example.com", "pw"))
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn mock_register_issues_resolvable_session() {
        let identity = MockIdentityProvider::new();

        let session = identity
            .register(&Credentials::new("new@example.com", "Abcdef1!"))
            .await
            .unwrap();

        let resolved = identity.current_user(&session.access_token).await.unwrap();
        assert_eq!(resolved, session.user);
    }

    #[tokio::test]
    async fn mock_register_rejects_duplicate_email() {
        let identity = MockIdentityProvider::new().with_account("taken@example.com", "Abcdef1!");

        let result = identity
            .register(&Credentials::new("taken@example.com", "Other2!x"))
            .await;

        assert!(matches!(result, Err(AuthError::AlreadyRegistered)));
    }

    #[test]
    fn mock_token_count_tracks_tokens() {
        let identity = MockIdentityProvider::new()
            .with_test_user("t1")
            .with_test_user("t2");

        assert_eq!(identity.token_count(), 2);
    }
}
