//! Lottery feed configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Lottery feed configuration (Mega Millions)
///
/// Fully defaulted; the section only needs to appear in the environment
/// to point at a different feed.
#[derive(Debug, Clone, Deserialize)]
pub struct LottoConfig {
    /// Draw-data feed URL
    #[serde(default = "default_feed_url")]
    pub feed_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl LottoConfig {
    /// Get the request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate lottery configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.feed_url.starts_with("http://") && !self.feed_url.starts_with("https://") {
            return Err(ValidationError::InvalidUpstreamUrl("lotto"));
        }
        Ok(())
    }
}

impl Default for LottoConfig {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_feed_url() -> String {
    "https://www.megamillions.com/cmspages/utilservice.asmx/GetLatestDrawData".to_string()
}

fn default_timeout() -> u64 {
    8
}
