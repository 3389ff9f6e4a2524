//! HTTP DTOs for the widget endpoints.
//!
//! Responses reuse the domain widget types directly; they are already
//! shaped and cased for the client.

use serde::Deserialize;

pub use crate::domain::{ContributionCalendar, LottoDraw, WeatherReport};

/// Query parameters for GET /api/weather.
///
/// Kept as raw strings: a missing value and an unparseable one get the
/// same 400, decided by the handler rather than the deserializer.
#[derive(Debug, Default, Deserialize)]
pub struct WeatherParams {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

/// Query parameters for GET /api/github-contributions.
#[derive(Debug, Default, Deserialize)]
pub struct ContributionParams {
    pub username: Option<String>,
}
