//! Core traits for the screener.

mod indicator;
mod market_data;

pub use indicator::Indicator;
pub use market_data::MarketDataSource;
