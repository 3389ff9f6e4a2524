//! Mega Millions adapter for the lottery port.
//!
//! The feed is the worst-behaved upstream this system talks to: it
//! answers a GET with JSON smuggled inside a quasi-XML envelope. The
//! pipeline is fetch, unwrap (see [`extract_json`]), parse, then require
//! all three draw fields. Each stage fails distinctly so operators can
//! tell an envelope change from a schema change.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{AdapterError, LottoDraw};
use crate::ports::LottoProvider;

use super::extract::extract_json;

/// Identifies this widget to the feed operator.
const USER_AGENT: &str = "homeboard-lotto-widget/1.0";

/// Message surfaced when the envelope yields no payload.
const EXTRACTION_FAILURE: &str = "Failed to process lotto data response.";

/// Configuration for the Mega Millions adapter.
#[derive(Debug, Clone)]
pub struct MegaMillionsConfig {
    /// The draw-data feed URL.
    pub feed_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl MegaMillionsConfig {
    /// Creates a configuration pointing at the public feed.
    pub fn new() -> Self {
        Self {
            feed_url: "https://www.megamillions.com/cmspages/utilservice.asmx/GetLatestDrawData"
                .to_string(),
            timeout: Duration::from_secs(8),
        }
    }

    /// Sets the feed URL.
    pub fn with_feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for MegaMillionsConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The slice of the recovered JSON the dashboard reads. Everything is
/// optional at parse time; requiredness is enforced afterwards so the
/// error can name exactly what was missing.
#[derive(Debug, Default, Deserialize)]
struct DrawFeed {
    #[serde(rename = "Jackpot", default)]
    jackpot: Option<JackpotFigures>,
    #[serde(rename = "NextDrawingDate", default)]
    next_drawing_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct JackpotFigures {
    #[serde(rename = "NextPrizePool", default)]
    next_prize_pool: Option<f64>,
    #[serde(rename = "NextCashValue", default)]
    next_cash_value: Option<f64>,
}

/// Parses the recovered payload and enforces the three required fields.
///
/// Pure: identical payloads always produce identical results.
fn parse_draw(payload: &str) -> Result<LottoDraw, AdapterError> {
    let feed: DrawFeed = serde_json::from_str(payload)
        .map_err(|e| AdapterError::parse(format!("lotto payload is not valid JSON: {}", e)))?;

    let jackpot = feed.jackpot.unwrap_or_default();

    match (
        jackpot.next_prize_pool,
        jackpot.next_cash_value,
        feed.next_drawing_date,
    ) {
        (Some(annuity), Some(cash), Some(date)) => Ok(LottoDraw {
            next_jackpot_annuity: annuity,
            next_jackpot_cash: cash,
            next_drawing_date: date,
        }),
        (annuity, cash, date) => {
            let mut missing = Vec::new();
            if annuity.is_none() {
                missing.push("Jackpot.NextPrizePool");
            }
            if cash.is_none() {
                missing.push("Jackpot.NextCashValue");
            }
            if date.is_none() {
                missing.push("NextDrawingDate");
            }
            Err(AdapterError::missing_field(format!(
                "Lotto data is in an unexpected format: missing {}",
                missing.join(", ")
            )))
        }
    }
}

/// Production implementation of `LottoProvider` backed by the Mega
/// Millions feed.
pub struct MegaMillionsClient {
    config: MegaMillionsConfig,
    http_client: reqwest::Client,
}

impl MegaMillionsClient {
    /// Creates a new adapter with its own HTTP client.
    pub fn new(config: MegaMillionsConfig) -> Self {
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
impl LottoProvider for MegaMillionsClient {
    async fn next_draw(&self) -> Result<LottoDraw, AdapterError> {
        tracing::debug!(url = %self.config.feed_url, "Fetching lottery feed");

        let response = self
            .http_client
            .get(&self.config.feed_url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Lottery feed unreachable: {}", e);
                AdapterError::unreachable("Could not reach the lottery feed.")
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = %status, "Lottery feed returned an error");
            return Err(AdapterError::transport(
                status.as_u16(),
                format!("Failed to fetch lotto data: {}", status.as_u16()),
            ));
        }

        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read lottery feed body: {}", e);
            AdapterError::unreachable("Could not reach the lottery feed.")
        })?;

        // Log the envelope length, never the body itself.
        let payload = extract_json(&body).map_err(|e| {
            tracing::error!(
                body_len = body.len(),
                error = %e,
                "Failed to extract lotto payload from XML envelope"
            );
            AdapterError::extraction(EXTRACTION_FAILURE)
        })?;

        parse_draw(payload).map_err(|e| {
            tracing::error!(stage = e.stage(), error = %e, "Lottery feed payload unusable");
            e
        })
    }
}

impl std::fmt::Debug for MegaMillionsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MegaMillionsClient")
            .field("feed_url", &self.config.feed_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PAYLOAD: &str = r#"{
        "Jackpot": {"NextPrizePool": 226000000, "NextCashValue": 113100000},
        "NextDrawingDate": "2025-06-17T23:00:00",
        "DrawingNumbers": [4, 8, 15, 16, 23]
    }"#;

    // ════════════════════════════════════════════════════════════════════════════
    // Parse Stage Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn parse_draw_reads_all_three_fields() {
        let draw = parse_draw(FULL_PAYLOAD).unwrap();
        assert_eq!(
            draw,
            LottoDraw {
                next_jackpot_annuity: 226_000_000.0,
                next_jackpot_cash: 113_100_000.0,
                next_drawing_date: "2025-06-17T23:00:00".to_string(),
            }
        );
    }

    #[test]
    fn parse_draw_ignores_extra_feed_fields() {
        // The live feed carries winners, megaplier, and more; only the
        // three normalized fields matter.
        assert!(parse_draw(FULL_PAYLOAD).is_ok());
    }

    #[test]
    fn parse_draw_rejects_invalid_json_as_parse_stage() {
        let err = parse_draw("<not json>").unwrap_err();
        assert_eq!(err.stage(), "parse");
        assert_eq!(err.status(), 500);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Missing-Field Stage Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn parse_draw_missing_cash_value_names_the_field() {
        let payload = r#"{
            "Jackpot": {"NextPrizePool": 226000000},
            "NextDrawingDate": "2025-06-17T23:00:00"
        }"#;

        let err = parse_draw(payload).unwrap_err();
        assert_eq!(err.stage(), "missing-field");
        assert_eq!(err.status(), 500);
        assert!(format!("{}", err).contains("Jackpot.NextCashValue"));
        assert!(!format!("{}", err).contains("NextPrizePool"));
    }

    #[test]
    fn parse_draw_missing_jackpot_section_names_both_figures() {
        let payload = r#"{"NextDrawingDate": "2025-06-17T23:00:00"}"#;

        let err = parse_draw(payload).unwrap_err();
        assert_eq!(err.stage(), "missing-field");
        let message = format!("{}", err);
        assert!(message.contains("Jackpot.NextPrizePool"));
        assert!(message.contains("Jackpot.NextCashValue"));
    }

    #[test]
    fn parse_draw_empty_object_names_all_three_fields() {
        let err = parse_draw("{}").unwrap_err();
        let message = format!("{}", err);
        assert!(message.contains("Jackpot.NextPrizePool"));
        assert!(message.contains("Jackpot.NextCashValue"));
        assert!(message.contains("NextDrawingDate"));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Pipeline Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn envelope_to_draw_pipeline_round_trips() {
        let document = format!(
            "<string xmlns=\"http://tempuri.org/\">{}</string>",
            FULL_PAYLOAD
        );

        let payload = extract_json(&document).unwrap();
        let draw = parse_draw(payload).unwrap();
        assert_eq!(draw.next_jackpot_cash, 113_100_000.0);
    }

    #[test]
    fn parse_draw_is_idempotent_for_identical_payloads() {
        assert_eq!(parse_draw(FULL_PAYLOAD).unwrap(), parse_draw(FULL_PAYLOAD).unwrap());
    }

    #[test]
    fn config_defaults_to_public_feed() {
        let config = MegaMillionsConfig::new();
        assert!(config.feed_url.contains("megamillions.com"));
        assert_eq!(config.timeout, Duration::from_secs(8));
    }
}
