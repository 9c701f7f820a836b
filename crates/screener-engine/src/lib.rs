//! Metrics and scoring engine for the QVM screener.
//!
//! The pipeline per ticker is fetch -> assemble -> evaluate + score:
//! - [`assembler`] turns a price series plus fundamentals into one
//!   [`screener_core::TickerSnapshot`], or nothing when the history is
//!   too short for the indicators.
//! - [`criteria`] applies the four boolean swing-trading screens.
//! - [`scoring`] maps the snapshot into Quality/Value/Momentum
//!   sub-scores and the composite QVM score.
//! - [`scan`] runs the pipeline over a watchlist with bounded
//!   concurrency and deterministic final ordering.
//!
//! Everything here is stateless per invocation; failed tickers are
//! logged and excluded, never fatal to the batch.

pub mod assembler;
pub mod criteria;
pub mod scan;
pub mod scoring;

pub use assembler::{assemble, MIN_BARS};
pub use criteria::{evaluate, CriteriaParams, CriteriaResult};
pub use scan::{scan, ScanEntry, ScanOutcome, ScanParams};
pub use scoring::{score, ScoreResult};
