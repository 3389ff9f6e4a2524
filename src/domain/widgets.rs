//! Normalized upstream payloads.
//!
//! Each widget adapter reduces a third-party response to one of these
//! types, which are the only shapes the client ever sees. All of them are
//! plain data: derived per request, never cached, serialized in camelCase.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair for the weather lookup.
///
/// Both components are always present; "half a coordinate" is rejected at
/// the HTTP boundary before this type is ever built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Current conditions, normalized from the weather provider.
///
/// Every field is independently optional: weather is best-effort data, so
/// a provider response missing a field still yields a success with that
/// field `null` rather than an error. Serialization keeps explicit nulls
/// to hold the client contract stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub temperature: Option<f64>,
    pub description: Option<String>,
    pub icon_code: Option<String>,
    pub location_name: Option<String>,
}

/// The next drawing's figures, normalized from the lottery feed.
///
/// All three fields are required; a feed missing any of them is a shape
/// error, never a partially-populated success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LottoDraw {
    pub next_jackpot_annuity: f64,
    pub next_jackpot_cash: f64,
    pub next_drawing_date: String,
}

/// A year of contribution activity, normalized from the code-hosting API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    pub total_contributions: i32,
    pub weeks: Vec<ContributionWeek>,
}

/// One column of the contribution graph. Order within `weeks` and within
/// `days` follows the upstream response exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeek {
    pub days: Vec<ContributionDay>,
}

/// A single day's cell in the contribution graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    pub count: i32,
    pub date: String,
    pub color_token: String,
}
