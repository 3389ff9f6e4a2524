//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `HOMEBOARD_` prefix and nested values use underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use homeboard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod database;
mod error;
mod github;
mod identity;
mod lotto;
mod server;
mod weather;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use github::GithubConfig;
pub use identity::IdentityConfig;
pub use lotto::LottoConfig;
pub use server::{Environment, ServerConfig};
pub use weather::WeatherConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the dashboard backend.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Identity backend configuration (GoTrue)
    pub identity: IdentityConfig,

    /// Weather provider configuration (OpenWeatherMap)
    pub weather: WeatherConfig,

    /// Lottery feed configuration (Mega Millions)
    #[serde(default)]
    pub lotto: LottoConfig,

    /// GitHub API configuration
    #[serde(default)]
    pub github: GithubConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `HOMEBOARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `HOMEBOARD__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `HOMEBOARD__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("HOMEBOARD")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Performs semantic validation of configuration:
    /// - URL formats
    /// - Pool size constraints
    /// - Production-specific requirements (e.g., HTTPS)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.identity.validate(&self.server.environment)?;
        self.weather.validate()?;
        self.lotto.validate()?;
        self.github.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
