//! Error types for the screener.

use thiserror::Error;

/// Top-level screener error, returned by the shell's commands.
#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Market data gateway errors.
///
/// All variants are per-ticker: the scan loop catches them at the
/// ticker boundary, logs, and excludes the ticker from results.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("No data available for the requested range")]
    NoDataAvailable,

    #[error("Insufficient history: need {required} bars, have {available}")]
    InsufficientHistory { required: usize, available: usize },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Provider API error: {0}")]
    Api(String),
}

/// Result type alias for screener operations.
pub type ScreenerResult<T> = Result<T, ScreenerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_error_wraps_into_screener_error() {
        fn fails() -> ScreenerResult<()> {
            let result: Result<(), DataError> = Err(DataError::NoDataAvailable);
            result?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(matches!(err, ScreenerError::Data(DataError::NoDataAvailable)));
        assert!(err.to_string().contains("No data available"));
    }
}
