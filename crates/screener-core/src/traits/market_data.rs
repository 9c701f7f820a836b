//! Market data source trait definition.

use crate::error::DataError;
use crate::types::{Fundamentals, PriceBar};
use async_trait::async_trait;

/// Trait for external market data providers.
///
/// The engine depends on this boundary but does not implement it; all
/// failures are per-ticker and the scan loop absorbs them.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch daily OHLCV history for a ticker.
    ///
    /// # Arguments
    /// * `ticker` - The symbol to fetch
    /// * `range` - Provider lookback range (e.g. "2y")
    ///
    /// # Returns
    /// Bars ordered from oldest to newest. An empty or missing series
    /// is an error, not an empty vector.
    async fn fetch_history(&self, ticker: &str, range: &str) -> Result<Vec<PriceBar>, DataError>;

    /// Fetch static fundamental attributes for a ticker.
    ///
    /// Individual missing fields are not errors; they come back as
    /// `None` inside the record. An `Err` means the provider could not
    /// be queried at all.
    async fn fetch_fundamentals(&self, ticker: &str) -> Result<Fundamentals, DataError>;

    /// Get the data source name.
    fn name(&self) -> &str;
}
