//! Technical indicators for the QVM screener.
//!
//! Pure numeric functions over ordered daily series:
//! - Simple moving average (SMA)
//! - Relative strength index (RSI)
//! - Average true range (ATR)
//!
//! RSI and ATR use plain trailing-window means (not Wilder smoothing),
//! matching how the screening rules are calibrated. All indicators
//! follow the "undefined until the window is full" convention: output
//! vectors are shorter than the input and end at the latest point.

pub mod momentum;
pub mod moving_average;
pub mod volatility;

pub use momentum::Rsi;
pub use moving_average::Sma;
pub use volatility::Atr;
