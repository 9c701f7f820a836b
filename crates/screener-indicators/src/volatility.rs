//! Volatility indicators.

use crate::moving_average::Sma;
use screener_core::traits::Indicator;

/// Average True Range (ATR).
///
/// Measures volatility as the trailing-window mean of the daily true
/// range: max(high-low, |high-prevClose|, |low-prevClose|). The first
/// bar has no previous close and is excluded, so the first defined
/// value sits at bar index `period`.
#[derive(Debug, Clone)]
pub struct Atr {
    period: usize,
}

impl Atr {
    /// Create a new ATR indicator.
    ///
    /// The screener uses the common 14-day period.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }

    /// Calculate ATR from OHLC data.
    pub fn calculate_ohlc(&self, high: &[f64], low: &[f64], close: &[f64]) -> Vec<f64> {
        let len = high.len().min(low.len()).min(close.len());
        if len < self.period + 1 {
            return vec![];
        }

        // True range, starting at the second bar
        let mut tr = Vec::with_capacity(len - 1);
        for i in 1..len {
            let high_low = high[i] - low[i];
            let high_close = (high[i] - close[i - 1]).abs();
            let low_close = (low[i] - close[i - 1]).abs();
            tr.push(high_low.max(high_close).max(low_close));
        }

        Sma::new(self.period).calculate(&tr)
    }
}

impl Default for Atr {
    fn default() -> Self {
        Self::new(14)
    }
}

impl Indicator for Atr {
    type Output = f64;

    /// Calculate using close prices only, approximating the true range
    /// with the absolute close-to-close change. Prefer
    /// [`Atr::calculate_ohlc`] when full bars are available.
    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        if data.len() < self.period + 1 {
            return vec![];
        }

        let mut tr = Vec::with_capacity(data.len() - 1);
        for i in 1..data.len() {
            tr.push((data[i] - data[i - 1]).abs());
        }

        Sma::new(self.period).calculate(&tr)
    }

    fn period(&self) -> usize {
        self.period + 1
    }

    fn name(&self) -> &str {
        "ATR"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atr_ohlc() {
        let atr = Atr::new(3);
        let high = vec![10.0, 11.0, 12.0, 11.0, 13.0, 14.0];
        let low = vec![8.0, 9.0, 10.0, 9.0, 11.0, 12.0];
        let close = vec![9.0, 10.0, 11.0, 10.0, 12.0, 13.0];

        let result = atr.calculate_ohlc(&high, &low, &close);
        // 5 true ranges, window 3 -> 3 values, last aligned with latest bar
        assert_eq!(result.len(), 3);
        for value in &result {
            assert!(*value > 0.0);
        }
    }

    #[test]
    fn test_atr_trailing_mean() {
        let atr = Atr::new(2);
        // Constant 2-point daily ranges, no gaps: TR is always 2
        let high = vec![12.0, 12.0, 12.0, 12.0];
        let low = vec![10.0, 10.0, 10.0, 10.0];
        let close = vec![11.0, 11.0, 11.0, 11.0];

        let result = atr.calculate_ohlc(&high, &low, &close);
        assert_eq!(result.len(), 2);
        for value in &result {
            assert!((value - 2.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_atr_gap_counts_against_prev_close() {
        let atr = Atr::new(1);
        // Second bar gaps up: TR = |high - prevClose| = 25
        let high = vec![110.0, 130.0];
        let low = vec![95.0, 125.0];
        let close = vec![105.0, 128.0];

        let result = atr.calculate_ohlc(&high, &low, &close);
        assert_eq!(result.len(), 1);
        assert!((result[0] - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_atr_insufficient_data() {
        let atr = Atr::new(14);
        let high = vec![10.0; 14];
        let low = vec![9.0; 14];
        let close = vec![9.5; 14];
        assert!(atr.calculate_ohlc(&high, &low, &close).is_empty());
    }
}
