//! Yahoo Finance data source.
//!
//! Daily OHLCV history comes from the v8 chart endpoint, static
//! fundamentals from the v10 quoteSummary endpoint. Both responses are
//! sparse: rows with missing fields are skipped and absent fundamental
//! modules simply leave their fields as `None`.

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use screener_core::error::DataError;
use screener_core::traits::MarketDataSource;
use screener_core::types::{Fundamentals, PriceBar};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Yahoo endpoint configuration.
#[derive(Debug, Clone)]
pub struct YahooConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Bounded per-request timeout; a stalled provider call fails the
    /// ticker instead of the whole scan.
    pub timeout: Duration,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Yahoo Finance client.
pub struct YahooSource {
    config: YahooConfig,
    client: Client,
}

impl YahooSource {
    /// Create a client with the given configuration.
    pub fn new(config: YahooConfig) -> Result<Self, DataError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| DataError::Connection(e.to_string()))?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl MarketDataSource for YahooSource {
    async fn fetch_history(&self, ticker: &str, range: &str) -> Result<Vec<PriceBar>, DataError> {
        let url = format!(
            "{}/v8/finance/chart/{}?interval=1d&range={}",
            self.config.base_url, ticker, range
        );
        debug!(ticker, range, "fetching price history");

        let response: ChartResponse = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DataError::Connection(e.to_string()))?
            .json()
            .await
            .map_err(|e| DataError::Parse(e.to_string()))?;

        bars_from_chart(ticker, response)
    }

    async fn fetch_fundamentals(&self, ticker: &str) -> Result<Fundamentals, DataError> {
        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules=summaryDetail,financialData,defaultKeyStatistics",
            self.config.base_url, ticker
        );
        debug!(ticker, "fetching fundamentals");

        let response: QuoteSummaryResponse = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DataError::Connection(e.to_string()))?
            .json()
            .await
            .map_err(|e| DataError::Parse(e.to_string()))?;

        fundamentals_from_summary(ticker, response)
    }

    fn name(&self) -> &str {
        "yahoo"
    }
}

// Chart endpoint response shapes.

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<QuoteColumns>,
}

#[derive(Debug, Deserialize)]
struct QuoteColumns {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<i64>>,
}

fn bars_from_chart(ticker: &str, response: ChartResponse) -> Result<Vec<PriceBar>, DataError> {
    if let Some(error) = response.chart.error {
        if error.code.eq_ignore_ascii_case("not found") {
            return Err(DataError::SymbolNotFound(ticker.to_string()));
        }
        return Err(DataError::Api(format!("{}: {}", error.code, error.description)));
    }

    let data = response
        .chart
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or(DataError::NoDataAvailable)?;

    let quote = data
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or(DataError::NoDataAvailable)?;

    let mut bars = Vec::with_capacity(data.timestamp.len());
    for (i, &ts) in data.timestamp.iter().enumerate() {
        let open = quote.open.get(i).and_then(|v| *v);
        let high = quote.high.get(i).and_then(|v| *v);
        let low = quote.low.get(i).and_then(|v| *v);
        let close = quote.close.get(i).and_then(|v| *v);
        let volume = quote.volume.get(i).and_then(|v| *v);

        let date = match DateTime::from_timestamp(ts, 0) {
            Some(dt) => dt.date_naive(),
            None => continue,
        };

        if let (Some(o), Some(h), Some(l), Some(c), Some(v)) = (open, high, low, close, volume) {
            bars.push(PriceBar::new(date, o, h, l, c, v as f64));
        }
    }

    if bars.is_empty() {
        return Err(DataError::NoDataAvailable);
    }

    bars.sort_by_key(|b| b.date);
    Ok(bars)
}

// quoteSummary endpoint response shapes. Numeric fields arrive as
// `{"raw": 0.021, "fmt": "2.10%"}` objects with the raw value itself
// sometimes missing.

#[derive(Debug, Deserialize)]
struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummary,
}

#[derive(Debug, Deserialize)]
struct QuoteSummary {
    result: Option<Vec<SummaryModules>>,
    error: Option<ApiError>,
}

#[derive(Debug, Default, Deserialize)]
struct SummaryModules {
    #[serde(rename = "summaryDetail", default)]
    summary_detail: SummaryDetail,
    #[serde(rename = "financialData", default)]
    financial_data: FinancialData,
    #[serde(rename = "defaultKeyStatistics", default)]
    key_statistics: KeyStatistics,
}

#[derive(Debug, Default, Deserialize)]
struct SummaryDetail {
    #[serde(rename = "trailingPE")]
    trailing_pe: Option<RawNum>,
    #[serde(rename = "priceToSalesTrailing12Months")]
    price_to_sales: Option<RawNum>,
    #[serde(rename = "dividendYield")]
    dividend_yield: Option<RawNum>,
    #[serde(rename = "marketCap")]
    market_cap: Option<RawNum>,
}

#[derive(Debug, Default, Deserialize)]
struct FinancialData {
    #[serde(rename = "returnOnEquity")]
    return_on_equity: Option<RawNum>,
    #[serde(rename = "operatingMargins")]
    operating_margins: Option<RawNum>,
    #[serde(rename = "revenueGrowth")]
    revenue_growth: Option<RawNum>,
}

#[derive(Debug, Default, Deserialize)]
struct KeyStatistics {
    #[serde(rename = "priceToBook")]
    price_to_book: Option<RawNum>,
}

#[derive(Debug, Deserialize)]
struct RawNum {
    raw: Option<f64>,
}

fn fundamentals_from_summary(
    ticker: &str,
    response: QuoteSummaryResponse,
) -> Result<Fundamentals, DataError> {
    if let Some(error) = response.quote_summary.error {
        if error.code.eq_ignore_ascii_case("not found") {
            return Err(DataError::SymbolNotFound(ticker.to_string()));
        }
        return Err(DataError::Api(format!("{}: {}", error.code, error.description)));
    }

    let modules = response
        .quote_summary
        .result
        .and_then(|r| r.into_iter().next())
        .unwrap_or_default();

    Ok(Fundamentals {
        trailing_pe: raw(modules.summary_detail.trailing_pe),
        price_to_book: raw(modules.key_statistics.price_to_book),
        price_to_sales: raw(modules.summary_detail.price_to_sales),
        dividend_yield: raw(modules.summary_detail.dividend_yield),
        return_on_equity: raw(modules.financial_data.return_on_equity),
        operating_margin: raw(modules.financial_data.operating_margins),
        revenue_growth: raw(modules.financial_data.revenue_growth),
        market_cap: raw(modules.summary_detail.market_cap),
    })
}

fn raw(num: Option<RawNum>) -> Option<f64> {
    num.and_then(|n| n.raw)
}
