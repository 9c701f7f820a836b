//! Market data gateways.
//!
//! Implementations of [`screener_core::MarketDataSource`]:
//! - [`YahooSource`] fetches daily history and fundamentals from the
//!   Yahoo Finance chart and quoteSummary endpoints.
//! - [`CsvDirSource`] reads per-ticker CSV files from a directory for
//!   offline scans and tests (no fundamentals).

mod csv_source;
mod yahoo;

pub use csv_source::CsvDirSource;
pub use yahoo::{YahooConfig, YahooSource};
