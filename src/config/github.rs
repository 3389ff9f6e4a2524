//! GitHub API configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// GitHub API configuration
///
/// The token is optional: without one the contribution widget still
/// works, at GitHub's unauthenticated rate limits.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubConfig {
    /// GraphQL endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Personal access token
    pub token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl GithubConfig {
    /// Get the request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate GitHub configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ValidationError::InvalidUpstreamUrl("github"));
        }
        Ok(())
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            token: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    "https://api.github.com/graphql".to_string()
}

fn default_timeout() -> u64 {
    10
}
