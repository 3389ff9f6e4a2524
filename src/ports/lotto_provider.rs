//! Lottery port: next-drawing figures from the lottery feed.

use async_trait::async_trait;

use crate::domain::{AdapterError, LottoDraw};

/// Fetches and normalizes the next lottery drawing.
///
/// # Contract
///
/// - Takes no input; the feed URL is adapter configuration
/// - All three draw fields are required; a feed missing any of them is a
///   `Shape` error, never a partial success
/// - The three failure stages stay distinct: `Extraction` (XML unwrap
///   failed), `Shape{stage: "parse"}` (recovered payload is not JSON),
///   `Shape{stage: "missing-field"}` (JSON lacks a required field)
#[async_trait]
pub trait LottoProvider: Send + Sync {
    /// Returns the next drawing's jackpot figures and date.
    async fn next_draw(&self) -> Result<LottoDraw, AdapterError>;
}
