//! Moving average indicators.

use screener_core::traits::Indicator;

/// Simple Moving Average (SMA).
///
/// Calculates the arithmetic mean of the last N values. The screener
/// evaluates SMA over closes (trend windows 50/100/200) and over
/// volumes (20-day average volume).
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    /// Create a new SMA with the specified period.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }
}

impl Indicator for Sma {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        if data.len() < self.period {
            return vec![];
        }

        let mut result = Vec::with_capacity(data.len() - self.period + 1);
        let period_f64 = self.period as f64;

        // Initial sum
        let mut sum: f64 = data[..self.period].iter().sum();
        result.push(sum / period_f64);

        // Sliding window
        for i in self.period..data.len() {
            sum = sum - data[i - self.period] + data[i];
            result.push(sum / period_f64);
        }

        result
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "SMA"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma() {
        let sma = Sma::new(3);
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = sma.calculate(&data);

        assert_eq!(result.len(), 3);
        assert!((result[0] - 2.0).abs() < 1e-10); // (1+2+3)/3
        assert!((result[1] - 3.0).abs() < 1e-10); // (2+3+4)/3
        assert!((result[2] - 4.0).abs() < 1e-10); // (3+4+5)/3
    }

    #[test]
    fn test_sma_insufficient_data() {
        let sma = Sma::new(5);
        let data = vec![1.0, 2.0, 3.0];
        let result = sma.calculate(&data);

        assert!(result.is_empty());
    }

    #[test]
    fn test_sma_window_mean_property() {
        // SMA at index i equals the mean of data[i-w+1..=i] for all i >= w-1.
        let data: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.7).sin() * 8.0).collect();
        let w = 20;
        let result = Sma::new(w).calculate(&data);

        assert_eq!(result.len(), data.len() - w + 1);
        for (j, value) in result.iter().enumerate() {
            let i = j + w - 1;
            let expected: f64 = data[i + 1 - w..=i].iter().sum::<f64>() / w as f64;
            assert!((value - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sma_determinism() {
        let sma = Sma::new(7);
        let data: Vec<f64> = (0..40).map(|i| (i as f64).cos() * 3.0 + 50.0).collect();
        assert_eq!(sma.calculate(&data), sma.calculate(&data));
    }
}
