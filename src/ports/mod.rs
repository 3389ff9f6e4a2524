//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Identity
//!
//! - `IdentityProvider` - Credential verification and session-token resolution
//!
//! ## Upstream widgets
//!
//! - `WeatherProvider` - Current conditions for a coordinate pair
//! - `LottoProvider` - Next-drawing figures from the lottery feed
//! - `ContributionProvider` - Contribution calendar from the code-hosting API
//!
//! ## Record store
//!
//! - `SettingsStore` - Per-user dashboard preferences (read, upsert)
//! - `LogStore` - Daily journal entries (insert with unique-day constraint)

mod contribution_provider;
mod identity_provider;
mod log_store;
mod lotto_provider;
mod settings_store;
mod weather_provider;

pub use contribution_provider::ContributionProvider;
pub use identity_provider::IdentityProvider;
pub use log_store::LogStore;
pub use lotto_provider::LottoProvider;
pub use settings_store::SettingsStore;
pub use weather_provider::WeatherProvider;
