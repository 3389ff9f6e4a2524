//! Domain layer containing the dashboard's business types and decisions.
//!
//! # Module Organization
//!
//! - `ids` - Strongly-typed identifier value objects
//! - `auth` - Authenticated user, credentials, and auth errors
//! - `gate` - The pure session-gate redirect decision
//! - `widgets` - Normalized upstream payloads (weather, lottery, contributions)
//! - `records` - Durable per-user rows (settings, daily log) and store errors
//! - `error` - The adapter error taxonomy shared by all upstream adapters

mod auth;
mod error;
mod gate;
mod ids;
mod records;
mod widgets;

pub use auth::{
    validate_email, validate_password, AuthError, AuthenticatedUser, Credentials, Session,
};
pub use error::AdapterError;
pub use gate::{decide, GateDecision, HOME_PATH, LOGIN_PATH};
pub use ids::{LogEntryId, UserId};
pub use records::{DashboardSettings, LogEntry, NewLogEntry, StoreError};
pub use widgets::{
    ContributionCalendar, ContributionDay, ContributionWeek, Coordinates, LottoDraw, WeatherReport,
};
