//! Core types and traits for the QVM screener.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (PriceBar, slice helpers)
//! - The per-ticker snapshot record combining technicals and fundamentals
//! - The market data source trait
//! - The error taxonomy

pub mod error;
pub mod traits;
pub mod types;

pub use error::{DataError, ScreenerError, ScreenerResult};
pub use traits::*;
pub use types::*;
