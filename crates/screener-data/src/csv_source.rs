//! CSV directory data source.
//!
//! Reads per-ticker daily history from `{dir}/{TICKER}.csv` for
//! offline scans and tests. Fundamentals are not available offline and
//! come back empty.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use screener_core::error::DataError;
use screener_core::traits::MarketDataSource;
use screener_core::types::{Fundamentals, PriceBar};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CSV record format.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date")]
    date: String,
    #[serde(alias = "Open", alias = "open")]
    open: f64,
    #[serde(alias = "High", alias = "high")]
    high: f64,
    #[serde(alias = "Low", alias = "low")]
    low: f64,
    #[serde(alias = "Close", alias = "close", alias = "Adj Close")]
    close: f64,
    #[serde(alias = "Volume", alias = "volume", default)]
    volume: f64,
}

/// Directory of per-ticker CSV files.
pub struct CsvDirSource {
    dir: PathBuf,
}

impl CsvDirSource {
    /// Create a source over an existing directory.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, DataError> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(DataError::NoDataAvailable);
        }
        Ok(Self { dir })
    }

    fn ticker_path(&self, ticker: &str) -> Option<PathBuf> {
        let candidates = [
            self.dir.join(format!("{}.csv", ticker)),
            self.dir.join(format!("{}.csv", ticker.to_lowercase())),
        ];
        candidates.into_iter().find(|p| p.exists())
    }
}

#[async_trait]
impl MarketDataSource for CsvDirSource {
    async fn fetch_history(&self, ticker: &str, _range: &str) -> Result<Vec<PriceBar>, DataError> {
        let path = self
            .ticker_path(ticker)
            .ok_or_else(|| DataError::SymbolNotFound(ticker.to_string()))?;
        load_bars(&path)
    }

    async fn fetch_fundamentals(&self, _ticker: &str) -> Result<Fundamentals, DataError> {
        Ok(Fundamentals::default())
    }

    fn name(&self) -> &str {
        "csv"
    }
}

fn load_bars(path: &Path) -> Result<Vec<PriceBar>, DataError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| DataError::Parse(e.to_string()))?;

    let mut bars = Vec::new();

    for result in reader.deserialize() {
        let record: CsvRecord = result.map_err(|e| DataError::Parse(e.to_string()))?;
        let date = parse_date(&record.date)?;

        bars.push(PriceBar::new(
            date,
            record.open,
            record.high,
            record.low,
            record.close,
            record.volume,
        ));
    }

    if bars.is_empty() {
        return Err(DataError::NoDataAvailable);
    }

    bars.sort_by_key(|b| b.date);
    Ok(bars)
}

/// Parse various date formats.
fn parse_date(date_str: &str) -> Result<NaiveDate, DataError> {
    let date_formats = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];
    for format in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            return Ok(d);
        }
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.date());
    }

    Err(DataError::Parse(format!(
        "Could not parse date: {}",
        date_str
    )))
}
