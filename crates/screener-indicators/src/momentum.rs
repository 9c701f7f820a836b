//! Momentum indicators.

use crate::moving_average::Sma;
use screener_core::traits::Indicator;

/// Relative Strength Index (RSI).
///
/// Measures the speed and magnitude of recent price changes to
/// evaluate overbought or oversold conditions. Average gain and
/// average loss are plain trailing-window means of the daily deltas
/// (losses as positive magnitudes).
///
/// RSI = 100 - 100 / (1 + avgGain / avgLoss). When the average loss is
/// zero the value is 100 if there was any gain, and NaN when the
/// window saw no movement at all; callers must treat non-finite
/// outputs as undefined.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Create a new RSI indicator.
    ///
    /// The screener uses the common 14-day period.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }
}

impl Default for Rsi {
    fn default() -> Self {
        Self::new(14)
    }
}

impl Indicator for Rsi {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        if data.len() <= self.period {
            return vec![];
        }

        // Split daily deltas into gains and losses
        let mut gains = Vec::with_capacity(data.len() - 1);
        let mut losses = Vec::with_capacity(data.len() - 1);

        for i in 1..data.len() {
            let change = data[i] - data[i - 1];
            if change > 0.0 {
                gains.push(change);
                losses.push(0.0);
            } else {
                gains.push(0.0);
                losses.push(-change);
            }
        }

        let window = Sma::new(self.period);
        let avg_gains = window.calculate(&gains);
        let avg_losses = window.calculate(&losses);

        avg_gains
            .iter()
            .zip(avg_losses.iter())
            .map(|(&gain, &loss)| {
                if loss == 0.0 {
                    if gain > 0.0 {
                        100.0
                    } else {
                        // No movement in the whole window: RSI undefined
                        f64::NAN
                    }
                } else {
                    100.0 - (100.0 / (1.0 + gain / loss))
                }
            })
            .collect()
    }

    fn period(&self) -> usize {
        self.period + 1 // Need period+1 data points for period deltas
    }

    fn name(&self) -> &str {
        "RSI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_bounds() {
        let rsi = Rsi::new(14);
        let data: Vec<f64> = (0..60)
            .map(|i| 100.0 + (i as f64 * 0.5).sin() * 5.0)
            .collect();

        let result = rsi.calculate(&data);
        assert_eq!(result.len(), data.len() - 14);

        for value in &result {
            assert!(*value >= 0.0 && *value <= 100.0);
        }
    }

    #[test]
    fn test_rsi_all_gains() {
        let rsi = Rsi::new(5);
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let result = rsi.calculate(&data);

        assert!(!result.is_empty());
        assert!((result[0] - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_rsi_all_losses() {
        let rsi = Rsi::new(5);
        let data = vec![7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        let result = rsi.calculate(&data);

        assert!(!result.is_empty());
        assert!(result[0].abs() < 1e-10);
    }

    #[test]
    fn test_rsi_balanced_moves_is_50() {
        // Equal-magnitude alternating up/down moves: avgGain == avgLoss.
        let rsi = Rsi::new(4);
        let data = vec![100.0, 101.0, 100.0, 101.0, 100.0, 101.0, 100.0];
        let result = rsi.calculate(&data);

        assert!(!result.is_empty());
        for value in &result {
            assert!((value - 50.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_rsi_flat_series_undefined() {
        let rsi = Rsi::new(5);
        let data = vec![100.0; 10];
        let result = rsi.calculate(&data);

        assert!(!result.is_empty());
        for value in &result {
            assert!(value.is_nan());
        }
    }

    #[test]
    fn test_rsi_insufficient_data() {
        let rsi = Rsi::new(14);
        let data = vec![100.0; 14]; // period+1 points required
        assert!(rsi.calculate(&data).is_empty());
    }
}
