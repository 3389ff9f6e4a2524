//! Identity backend configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Identity backend configuration (GoTrue)
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    /// Identity backend base URL, e.g. `https://project.supabase.co`.
    /// The adapter appends the `/auth/v1/...` route paths itself.
    pub base_url: String,

    /// Public (anon) API key sent with every request
    pub api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl IdentityConfig {
    /// Get the request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate identity configuration
    ///
    /// In production, requires HTTPS for the base URL.
    /// In development, allows localhost with HTTP/HTTPS.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("IDENTITY__BASE_URL"));
        }
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("IDENTITY__API_KEY"));
        }

        if *environment == Environment::Production && !self.base_url.starts_with("https://") {
            return Err(ValidationError::IdentityMustBeHttps);
        }

        Ok(())
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_config_defaults() {
        let config = IdentityConfig::default();
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_validation_missing_base_url() {
        let config = IdentityConfig::default();
        assert!(config.validate(&Environment::Development).is_err());
    }

    #[test]
    fn test_validation_missing_api_key() {
        let config = IdentityConfig {
            base_url: "https://identity.example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate(&Environment::Development).is_err());
    }

    #[test]
    fn test_validation_production_requires_https() {
        let config = IdentityConfig {
            base_url: "http://identity.example.com".to_string(),
            api_key: "anon-key".to_string(),
            ..Default::default()
        };
        // Allowed in development
        assert!(config.validate(&Environment::Development).is_ok());
        // Rejected in production
        assert!(config.validate(&Environment::Production).is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        let config = IdentityConfig {
            base_url: "https://identity.example.com".to_string(),
            api_key: "anon-key".to_string(),
            ..Default::default()
        };
        assert!(config.validate(&Environment::Production).is_ok());
    }
}
