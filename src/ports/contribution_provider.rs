//! Contribution-graph port: calendar data from the code-hosting API.

use async_trait::async_trait;

use crate::domain::{AdapterError, ContributionCalendar};

/// Fetches and normalizes a user's contribution calendar.
///
/// # Contract
///
/// - A blank `username` is rejected with `AdapterError::Validation`
///   before any network traffic
/// - A GraphQL `errors` array maps to `AdapterError::Graphql` (502),
///   distinct from HTTP transport failure
/// - A response with no calendar for the handle maps to
///   `AdapterError::NotFound` (404)
#[async_trait]
pub trait ContributionProvider: Send + Sync {
    /// Returns the contribution calendar for `username`.
    async fn fetch_calendar(&self, username: &str) -> Result<ContributionCalendar, AdapterError>;
}
