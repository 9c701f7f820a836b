//! Per-ticker snapshot records.

use serde::{Deserialize, Serialize};

/// Static fundamental attributes as reported by the provider.
///
/// Every field is optional: the provider omits what it does not know,
/// and absence must never be confused with zero. Ratio fields
/// (returns, margins, growth, yield) are raw fractions here; the
/// metrics assembler converts them to percentages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fundamentals {
    /// Trailing price-to-earnings ratio
    pub trailing_pe: Option<f64>,
    /// Price-to-book ratio
    pub price_to_book: Option<f64>,
    /// Trailing twelve-month price-to-sales ratio
    pub price_to_sales: Option<f64>,
    /// Dividend yield as a fraction (0.02 = 2%)
    pub dividend_yield: Option<f64>,
    /// Return on equity as a fraction
    pub return_on_equity: Option<f64>,
    /// Operating margin as a fraction
    pub operating_margin: Option<f64>,
    /// Year-over-year revenue growth as a fraction
    pub revenue_growth: Option<f64>,
    /// Market capitalization in dollars
    pub market_cap: Option<f64>,
}

/// The central per-ticker, per-scan record.
///
/// Built once per scan from the latest bar with every technical
/// indicator defined. Partial technical data means no snapshot at all;
/// partial fundamental data is tolerated and stays `None`.
///
/// Percentage-style fundamentals (`roe`, `operating_margin`,
/// `revenue_growth`, `dividend_yield`) and the `perf_*` fields are in
/// percent, not fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerSnapshot {
    pub ticker: String,
    /// Latest closing price
    pub price: f64,
    pub sma50: f64,
    pub sma100: f64,
    pub sma200: f64,
    /// 14-day relative strength index
    pub rsi: f64,
    /// 14-day average true range, in price units
    pub atr: f64,
    /// Latest daily volume
    pub volume: f64,
    /// 20-day average volume
    pub avg_volume20: f64,
    /// Trailing 1-month performance, percent
    pub perf_1m: Option<f64>,
    /// Trailing 3-month performance, percent
    pub perf_3m: Option<f64>,
    /// Trailing 6-month performance, percent
    pub perf_6m: Option<f64>,
    pub pe: Option<f64>,
    pub pb: Option<f64>,
    pub ps: Option<f64>,
    /// Dividend yield in percent; `None` when the provider omits it
    pub dividend_yield: Option<f64>,
    /// Return on equity in percent
    pub roe: Option<f64>,
    /// Operating margin in percent
    pub operating_margin: Option<f64>,
    /// Revenue growth in percent
    pub revenue_growth: Option<f64>,
    pub market_cap: Option<f64>,
}
