//! GoTrue adapter for the identity port.
//!
//! This adapter implements the `IdentityProvider` port against a
//! GoTrue-style identity backend (Supabase Auth and compatible servers):
//!
//! 1. `POST /auth/v1/token?grant_type=password` verifies credentials
//! 2. `POST /auth/v1/signup` registers a new user
//! 3. `GET /auth/v1/user` resolves a session token to its user
//!
//! The session token stays opaque here: it is never decoded locally, only
//! handed back to the backend for resolution. Signature and expiry checks
//! are the backend's job.
//!
//! # Example
//!
//! ```ignore
//! use homeboard::adapters::auth::{GoTrueConfig, GoTrueIdentity};
//! use homeboard::ports::IdentityProvider;
//!
//! let config = GoTrueConfig::new("https://project.supabase.co", "anon-key");
//! let identity = GoTrueIdentity::new(config);
//! let user = identity.current_user("eyJ...").await?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{AuthError, AuthenticatedUser, Credentials, Session, UserId};
use crate::ports::IdentityProvider;

/// Configuration for the GoTrue identity adapter.
#[derive(Debug, Clone)]
pub struct GoTrueConfig {
    /// Base URL of the backend (e.g., "https://project.supabase.co").
    pub base_url: String,

    /// Public API key sent as the `apikey` header on every call.
    api_key: Secret<String>,

    /// Request timeout.
    pub timeout: Duration,
}

impl GoTrueConfig {
    /// Creates a new configuration with required fields.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: Secret::new(api_key.into()),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn token_url(&self) -> String {
        self.endpoint("token?grant_type=password")
    }

    fn signup_url(&self) -> String {
        self.endpoint("signup")
    }

    fn user_url(&self) -> String {
        self.endpoint("user")
    }
}

/// User object in GoTrue responses.
#[derive(Debug, Deserialize)]
struct GoTrueUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

/// Session issued by the token and signup endpoints.
#[derive(Debug, Deserialize)]
struct GoTrueSession {
    access_token: String,
    user: GoTrueUser,
}

/// Error body shapes GoTrue has used across versions.
#[derive(Debug, Default, Deserialize)]
struct GoTrueErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl GoTrueErrorBody {
    fn detail(self) -> String {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
            .unwrap_or_else(|| "no error detail".to_string())
    }
}

/// Production implementation of `IdentityProvider` backed by GoTrue.
pub struct GoTrueIdentity {
    config: GoTrueConfig,
    http_client: reqwest::Client,
}

impl GoTrueIdentity {
    /// Creates a new adapter with its own HTTP client.
    pub fn new(config: GoTrueConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    /// Reads the error detail out of a non-2xx response body.
    async fn error_detail(response: reqwest::Response) -> String {
        response
            .json::<GoTrueErrorBody>()
            .await
            .unwrap_or_default()
            .detail()
    }

    /// Maps a GoTrue user object onto the domain type.
    fn map_user(user: GoTrueUser) -> Result<AuthenticatedUser, AuthError> {
        let id: UserId = user.id.parse().map_err(|_| {
            tracing::warn!("Identity backend returned a non-UUID user id: {}", user.id);
            AuthError::service_unavailable("identity backend returned malformed user data")
        })?;

        let email = user.email.ok_or_else(|| {
            tracing::warn!(user_id = %id, "Identity backend returned a user without an email");
            AuthError::service_unavailable("identity backend returned malformed user data")
        })?;

        Ok(AuthenticatedUser::new(id, email))
    }

    fn map_session(session: GoTrueSession) -> Result<Session, AuthError> {
        Ok(Session {
            access_token: session.access_token,
            user: Self::map_user(session.user)?,
        })
    }

    /// Sends a credential POST and handles the transport layer.
    async fn post_credentials(
        &self,
        url: &str,
        credentials: &Credentials,
    ) -> Result<reqwest::Response, AuthError> {
        tracing::debug!(url, "Calling identity backend");

        self.http_client
            .post(url)
            .header("apikey", self.config.api_key.expose_secret())
            .json(&json!({
                "email": credentials.email,
                "password": credentials.password,
            }))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Identity backend unreachable: {}", e);
                AuthError::service_unavailable(format!("identity backend unreachable: {}", e))
            })
    }
}

#[async_trait]
impl IdentityProvider for GoTrueIdentity {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let response = self
            .post_credentials(&self.config.token_url(), credentials)
            .await?;

        let status = response.status();
        if status.is_success() {
            let session: GoTrueSession = response.json().await.map_err(|e| {
                tracing::error!("Failed to parse token response: {}", e);
                AuthError::service_unavailable(format!("malformed token response: {}", e))
            })?;
            return Self::map_session(session);
        }

        let detail = Self::error_detail(response).await;
        if status.as_u16() == 400 || status.as_u16() == 401 {
            tracing::warn!(status = %status, detail, "Login rejected by identity backend");
            Err(AuthError::InvalidCredentials)
        } else {
            tracing::error!(status = %status, detail, "Identity backend error during login");
            Err(AuthError::service_unavailable(format!(
                "identity backend returned {}",
                status
            )))
        }
    }

    async fn register(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let response = self
            .post_credentials(&self.config.signup_url(), credentials)
            .await?;

        let status = response.status();
        if status.is_success() {
            let session: GoTrueSession = response.json().await.map_err(|e| {
                tracing::error!("Failed to parse signup response: {}", e);
                AuthError::service_unavailable(format!("malformed signup response: {}", e))
            })?;
            return Self::map_session(session);
        }

        let detail = Self::error_detail(response).await;
        // GoTrue versions disagree on the status for duplicate signups, but
        // the message is stable enough to match on.
        if status.as_u16() == 422
            || detail.contains("already registered")
            || detail.contains("already exists")
        {
            tracing::warn!(detail, "Signup rejected: email already registered");
            return Err(AuthError::AlreadyRegistered);
        }

        tracing::error!(status = %status, detail, "Identity backend error during signup");
        Err(AuthError::service_unavailable(format!(
            "identity backend returned {}",
            status
        )))
    }

    async fn current_user(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        tracing::debug!("Resolving session token against identity backend");

        let response = self
            .http_client
            .get(self.config.user_url())
            .header("apikey", self.config.api_key.expose_secret())
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Identity backend unreachable: {}", e);
                AuthError::service_unavailable(format!("identity backend unreachable: {}", e))
            })?;

        let status = response.status();
        if status.is_success() {
            let user: GoTrueUser = response.json().await.map_err(|e| {
                tracing::error!("Failed to parse user response: {}", e);
                AuthError::service_unavailable(format!("malformed user response: {}", e))
            })?;
            return Self::map_user(user);
        }

        if status.as_u16() == 401 || status.as_u16() == 403 {
            tracing::debug!(status = %status, "Session token rejected");
            Err(AuthError::InvalidToken)
        } else {
            let detail = Self::error_detail(response).await;
            tracing::error!(status = %status, detail, "Identity backend error during resolution");
            Err(AuthError::service_unavailable(format!(
                "identity backend returned {}",
                status
            )))
        }
    }
}

impl std::fmt::Debug for GoTrueIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoTrueIdentity")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}
