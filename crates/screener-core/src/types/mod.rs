//! Data types for the screener.

mod bar;
mod snapshot;

pub use bar::{BarSliceExt, PriceBar};
pub use snapshot::{Fundamentals, TickerSnapshot};
