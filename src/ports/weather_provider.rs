//! Weather port: current conditions for a coordinate pair.

use async_trait::async_trait;

use crate::domain::{AdapterError, Coordinates, WeatherReport};

/// Fetches and normalizes current weather conditions.
///
/// # Contract
///
/// - `None` coordinates mean "use the configured default location"; the
///   root dashboard uses this mode
/// - Weather is best-effort data: a 2xx upstream response always yields
///   `Ok`, with absent fields left `None` in the report, never a shape
///   error
/// - Non-2xx responses map to `AdapterError::Transport` carrying the
///   upstream status and its best-effort `message`
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Returns current conditions at `coordinates`, or at the configured
    /// default location when `None`.
    async fn fetch_current(
        &self,
        coordinates: Option<Coordinates>,
    ) -> Result<WeatherReport, AdapterError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_provider_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherProvider>();
    }
}
