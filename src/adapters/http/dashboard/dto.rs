//! HTTP DTOs for the dashboard endpoint.

use serde::Serialize;

use crate::domain::WeatherReport;

pub use super::super::auth::dto::UserView;

/// Response body for GET /.
///
/// Weather is best-effort page data: on failure `weather` is `null` and
/// `error` carries the user-facing reason, with the rest of the page
/// intact. Both keys are always present.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub user: UserView,
    pub weather: Option<WeatherReport>,
    pub error: Option<String>,
}
