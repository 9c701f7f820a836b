//! Daily OHLCV bar types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day of OHLCV data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Trading date
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Trading volume
    pub volume: f64,
}

impl PriceBar {
    /// Create a new bar.
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

}

/// Column extraction helpers over an ordered bar slice.
///
/// A price series is an ordered `&[PriceBar]`, oldest first; indicator
/// functions consume the extracted columns.
pub trait BarSliceExt {
    /// Extract close prices.
    fn closes(&self) -> Vec<f64>;
    /// Extract high prices.
    fn highs(&self) -> Vec<f64>;
    /// Extract low prices.
    fn lows(&self) -> Vec<f64>;
    /// Extract volumes.
    fn volumes(&self) -> Vec<f64>;
    /// The most recent bar, if any.
    fn latest(&self) -> Option<&PriceBar>;
}

impl BarSliceExt for [PriceBar] {
    fn closes(&self) -> Vec<f64> {
        self.iter().map(|b| b.close).collect()
    }

    fn highs(&self) -> Vec<f64> {
        self.iter().map(|b| b.high).collect()
    }

    fn lows(&self) -> Vec<f64> {
        self.iter().map(|b| b.low).collect()
    }

    fn volumes(&self) -> Vec<f64> {
        self.iter().map(|b| b.volume).collect()
    }

    fn latest(&self) -> Option<&PriceBar> {
        self.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_column_extraction() {
        let bars = vec![
            PriceBar::new(date(1), 100.0, 101.0, 99.0, 100.5, 1000.0),
            PriceBar::new(date(2), 100.5, 102.0, 100.0, 101.5, 2000.0),
        ];

        assert_eq!(bars.closes(), vec![100.5, 101.5]);
        assert_eq!(bars.volumes(), vec![1000.0, 2000.0]);
        assert_eq!(bars.latest().unwrap().date, date(2));
    }
}
