//! Indicator trait definition.

use crate::error::DataError;

/// Trait for batch technical indicators.
///
/// Indicators are pure functions over an ordered input series:
/// identical input always yields identical output, and the input is
/// never mutated. Values are undefined until the trailing window is
/// full, so the output vector is shorter than the input; the last
/// output always corresponds to the last input point.
pub trait Indicator: Send + Sync {
    /// The output type of the indicator.
    type Output;

    /// Calculate indicator values for the given data.
    ///
    /// Returns an empty vector when the series is shorter than the
    /// minimum window.
    fn calculate(&self, data: &[f64]) -> Vec<Self::Output>;

    /// Get the minimum data points required for one output value.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Validate that there's enough data.
    fn validate_data(&self, data: &[f64]) -> Result<(), DataError> {
        if data.len() < self.period() {
            return Err(DataError::InsufficientHistory {
                required: self.period(),
                available: data.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestIndicator {
        period: usize,
    }

    impl Indicator for TestIndicator {
        type Output = f64;

        fn calculate(&self, data: &[f64]) -> Vec<f64> {
            if data.len() < self.period {
                return vec![];
            }
            data.windows(self.period).map(|w| w.iter().sum()).collect()
        }

        fn period(&self) -> usize {
            self.period
        }

        fn name(&self) -> &str {
            "test"
        }
    }

    #[test]
    fn test_indicator_validation() {
        let indicator = TestIndicator { period: 5 };

        assert!(indicator.validate_data(&[1.0, 2.0, 3.0]).is_err());
        assert!(indicator.validate_data(&[1.0, 2.0, 3.0, 4.0, 5.0]).is_ok());
    }

    #[test]
    fn test_indicator_output_alignment() {
        let indicator = TestIndicator { period: 3 };
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = indicator.calculate(&data);

        assert_eq!(result.len(), 3);
        assert!((result[2] - 12.0).abs() < 0.001); // 3+4+5 ends at latest point
    }
}
