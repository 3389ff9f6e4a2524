//! Weather provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Weather provider configuration (OpenWeatherMap)
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    /// Provider API key
    pub api_key: String,

    /// Provider base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Latitude used when a request names no coordinates
    #[serde(default = "default_lat")]
    pub default_lat: f64,

    /// Longitude used when a request names no coordinates
    #[serde(default = "default_lon")]
    pub default_lon: f64,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl WeatherConfig {
    /// Get the request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate weather configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("WEATHER__API_KEY"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidUpstreamUrl("weather"));
        }
        if !(-90.0..=90.0).contains(&self.default_lat)
            || !(-180.0..=180.0).contains(&self.default_lon)
        {
            return Err(ValidationError::InvalidCoordinates);
        }
        Ok(())
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            default_lat: default_lat(),
            default_lon: default_lon(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_lat() -> f64 {
    36.27
}

fn default_lon() -> f64 {
    -95.85
}

fn default_timeout() -> u64 {
    8
}
