//! OpenWeatherMap adapter for the weather port.
//!
//! Calls the current-weather endpoint and reduces the response to the
//! four fields the dashboard renders. Weather is best-effort data: the
//! normalization never fails on absent fields, it just leaves them
//! `None`. Units are fixed to imperial.
//!
//! # Example
//!
//! ```ignore
//! use homeboard::adapters::weather::{OpenWeatherClient, OpenWeatherConfig};
//! use homeboard::ports::WeatherProvider;
//!
//! let config = OpenWeatherConfig::new("api-key");
//! let weather = OpenWeatherClient::new(config);
//! let report = weather.fetch_current(None).await?; // default location
//! ```

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::{AdapterError, Coordinates, WeatherReport};
use crate::ports::WeatherProvider;

/// The one measurement system the dashboard uses.
const UNITS: &str = "imperial";

/// Fallback message when the provider's error body has no `message`.
const GENERIC_UPSTREAM_FAILURE: &str = "Failed to fetch weather from external service.";

/// Configuration for the OpenWeatherMap adapter.
#[derive(Debug, Clone)]
pub struct OpenWeatherConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL for the API.
    pub base_url: String,
    /// Location used when a caller passes no coordinates.
    pub default_coordinates: Coordinates,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenWeatherConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://api.openweathermap.org/data/2.5".to_string(),
            default_coordinates: Coordinates::new(36.27, -95.85),
            timeout: Duration::from_secs(8),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the default location.
    pub fn with_default_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.default_coordinates = coordinates;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the current-weather request URL. Contains the API key, so
    /// it must never be logged.
    fn request_url(&self, coordinates: Coordinates) -> String {
        format!(
            "{}/weather?lat={}&lon={}&appid={}&units={}",
            self.base_url.trim_end_matches('/'),
            coordinates.lat,
            coordinates.lon,
            self.api_key.expose_secret(),
            UNITS
        )
    }
}

/// The slice of the provider response the dashboard reads. Every field
/// is defaulted so a schema drift degrades to `None` instead of a parse
/// failure.
#[derive(Debug, Default, Deserialize)]
struct ProviderResponse {
    #[serde(default)]
    main: Option<MainReadings>,
    #[serde(default)]
    weather: Vec<Condition>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct MainReadings {
    #[serde(default)]
    temp: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct Condition {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    icon: Option<String>,
}

/// Error body OpenWeatherMap returns alongside non-2xx statuses.
#[derive(Debug, Default, Deserialize)]
struct ProviderErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Reduces a provider response to the normalized report, field by field.
///
/// Pure: identical inputs always produce identical reports.
fn normalize(response: ProviderResponse) -> WeatherReport {
    let condition = response.weather.into_iter().next().unwrap_or_default();

    WeatherReport {
        temperature: response.main.unwrap_or_default().temp,
        description: condition.description,
        icon_code: condition.icon,
        location_name: response.name,
    }
}

/// Parses a 2xx body and normalizes it.
///
/// Only a body that is not valid JSON fails; any valid object maps to a
/// report, however sparse.
fn parse_report(payload: &str) -> Result<WeatherReport, AdapterError> {
    let response: ProviderResponse = serde_json::from_str(payload)
        .map_err(|e| AdapterError::parse(format!("weather response is not valid JSON: {}", e)))?;
    Ok(normalize(response))
}

/// Production implementation of `WeatherProvider` backed by OpenWeatherMap.
pub struct OpenWeatherClient {
    config: OpenWeatherConfig,
    http_client: reqwest::Client,
}

impl OpenWeatherClient {
    /// Creates a new adapter with its own HTTP client.
    pub fn new(config: OpenWeatherConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn fetch_current(
        &self,
        coordinates: Option<Coordinates>,
    ) -> Result<WeatherReport, AdapterError> {
        let coordinates = coordinates.unwrap_or(self.config.default_coordinates);

        tracing::debug!(
            lat = coordinates.lat,
            lon = coordinates.lon,
            "Fetching current weather"
        );

        let response = self
            .http_client
            .get(self.config.request_url(coordinates))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Weather upstream unreachable: {}", e);
                AdapterError::unreachable("Could not connect to the weather service.")
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ProviderErrorBody>()
                .await
                .unwrap_or_default()
                .message
                .unwrap_or_else(|| GENERIC_UPSTREAM_FAILURE.to_string());
            tracing::error!(status = %status, message, "Weather upstream returned an error");
            return Err(AdapterError::transport(status.as_u16(), message));
        }

        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read weather response body: {}", e);
            AdapterError::unreachable("Could not connect to the weather service.")
        })?;

        parse_report(&body)
    }
}

impl std::fmt::Debug for OpenWeatherClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherClient")
            .field("base_url", &self.config.base_url)
            .field("default_coordinates", &self.config.default_coordinates)
            .finish_non_exhaustive()
    }
}
