//! GitHub GraphQL adapter for the contribution-calendar port.
//!
//! Sends a single fixed query for one user's contribution calendar and
//! normalizes the response into domain naming. Failures keep their
//! origin: upstream HTTP errors pass their status through, GraphQL-level
//! errors map to 502, and an absent calendar in an otherwise well-formed
//! response maps to 404.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::{AdapterError, ContributionCalendar, ContributionDay, ContributionWeek};
use crate::ports::ContributionProvider;

/// Identifies this widget to the GitHub API.
const USER_AGENT: &str = "homeboard-github-widget/1.0";

/// The one query this adapter ever sends.
const CONTRIBUTION_QUERY: &str = r#"
query($username: String!) {
  user(login: $username) {
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            contributionCount
            date
            color
          }
        }
      }
    }
  }
}
"#;

/// Configuration for the GitHub adapter.
///
/// The token is optional: without one the adapter still works but runs
/// against GitHub's unauthenticated rate limits.
#[derive(Clone)]
pub struct GithubConfig {
    /// GraphQL endpoint URL.
    pub endpoint: String,
    /// Personal access token, if configured.
    pub token: Option<Secret<String>>,
    /// Request timeout.
    pub timeout: Duration,
}

impl GithubConfig {
    /// Creates an unauthenticated configuration against the public API.
    pub fn new() -> Self {
        Self {
            endpoint: "https://api.github.com/graphql".to_string(),
            token: None,
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the personal access token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(Secret::new(token.into()));
        self
    }

    /// Sets the GraphQL endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubConfig")
            .field("endpoint", &self.endpoint)
            .field("authenticated", &self.token.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Option<Vec<GraphqlErrorEntry>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorEntry {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(default)]
    user: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserNode {
    #[serde(default)]
    contributions_collection: Option<ContributionsCollection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionsCollection {
    #[serde(default)]
    contribution_calendar: Option<CalendarNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarNode {
    #[serde(default)]
    total_contributions: i32,
    #[serde(default)]
    weeks: Vec<WeekNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WeekNode {
    #[serde(default)]
    contribution_days: Vec<DayNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DayNode {
    #[serde(default)]
    contribution_count: i32,
    #[serde(default)]
    date: String,
    #[serde(default)]
    color: String,
}

/// Renames upstream fields into the domain calendar, preserving the
/// upstream ordering of weeks and days.
fn normalize(calendar: CalendarNode) -> ContributionCalendar {
    ContributionCalendar {
        total_contributions: calendar.total_contributions,
        weeks: calendar
            .weeks
            .into_iter()
            .map(|week| ContributionWeek {
                days: week
                    .contribution_days
                    .into_iter()
                    .map(|day| ContributionDay {
                        count: day.contribution_count,
                        date: day.date,
                        color_token: day.color,
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Maps a parsed GraphQL response to a calendar or the matching error.
///
/// The `errors` key wins over `data` even when both are present, and an
/// empty `errors` array still counts as a GraphQL failure.
fn evaluate_response(
    username: &str,
    response: GraphqlResponse,
) -> Result<ContributionCalendar, AdapterError> {
    if let Some(errors) = response.errors {
        let detail = errors
            .into_iter()
            .next()
            .and_then(|entry| entry.message)
            .unwrap_or_else(|| "Unknown GraphQL error".to_string());
        return Err(AdapterError::graphql(format!(
            "Error in GitHub GraphQL response for {}: {}",
            username, detail
        )));
    }

    let calendar = response
        .data
        .and_then(|data| data.user)
        .and_then(|user| user.contributions_collection)
        .and_then(|collection| collection.contribution_calendar);

    match calendar {
        Some(calendar) => Ok(normalize(calendar)),
        None => Err(AdapterError::not_found(format!(
            "No contribution data found for GitHub user: {}. \
             Ensure the username is correct and has activity.",
            username
        ))),
    }
}

/// Parses a raw response body and evaluates it. Pure.
fn parse_calendar(username: &str, body: &str) -> Result<ContributionCalendar, AdapterError> {
    let response: GraphqlResponse = serde_json::from_str(body)
        .map_err(|e| AdapterError::parse(format!("GitHub response is not valid JSON: {}", e)))?;
    evaluate_response(username, response)
}

/// Best-effort extraction of GitHub's `message` field from an error body.
fn error_detail(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message {
            return message;
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no error detail".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Production implementation of `ContributionProvider` backed by the
/// GitHub GraphQL API.
pub struct GithubContributionClient {
    config: GithubConfig,
    http_client: reqwest::Client,
}

impl GithubContributionClient {
    /// Creates a new adapter with its own HTTP client.
    pub fn new(config: GithubConfig) -> Self {
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
impl ContributionProvider for GithubContributionClient {
    async fn fetch_calendar(&self, username: &str) -> Result<ContributionCalendar, AdapterError> {
        // Reject before any network traffic.
        if username.trim().is_empty() {
            return Err(AdapterError::validation(
                "GitHub username is required as a query parameter.",
            ));
        }

        tracing::debug!(username, "Fetching contribution calendar");

        let mut request = self
            .http_client
            .post(&self.config.endpoint)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .json(&serde_json::json!({
                "query": CONTRIBUTION_QUERY,
                "variables": { "username": username },
            }));

        match &self.config.token {
            Some(token) => {
                request = request.bearer_auth(token.expose_secret());
            }
            None => {
                tracing::warn!(
                    "No GitHub token configured; sending unauthenticated request \
                     (heavily rate-limited)"
                );
            }
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(username, "GitHub API unreachable: {}", e);
            AdapterError::unreachable("Could not reach the GitHub API.")
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!(username, "Failed to read GitHub response body: {}", e);
            AdapterError::unreachable("Could not reach the GitHub API.")
        })?;

        if !status.is_success() {
            let detail = error_detail(&body);
            tracing::error!(status = %status, username, "GitHub API request failed");
            return Err(AdapterError::transport(
                status.as_u16(),
                format!("Failed to fetch GitHub data for {}: {}", username, detail),
            ));
        }

        parse_calendar(username, &body).map_err(|e| {
            tracing::error!(username, stage = e.stage(), error = %e, "GitHub response unusable");
            e
        })
    }
}

impl std::fmt::Debug for GithubContributionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubContributionClient")
            .field("endpoint", &self.config.endpoint)
            .field("authenticated", &self.config.token.is_some())
            .finish_non_exhaustive()
    }
}
