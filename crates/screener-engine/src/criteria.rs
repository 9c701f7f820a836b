//! Swing-trading criteria evaluator.
//!
//! Four independent boolean screens over one snapshot. All four are
//! always evaluated and reported individually; "passes all" is derived
//! by the caller, not stored.

use screener_core::types::TickerSnapshot;
use serde::{Deserialize, Serialize};

/// Caller-supplied screening thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriteriaParams {
    /// Volume must exceed the 20-day average times this multiplier.
    pub volume_multiplier: f64,
    /// ATR relative to price must exceed this fraction (0.02 = 2%).
    pub atr_threshold: f64,
}

impl Default for CriteriaParams {
    fn default() -> Self {
        Self {
            volume_multiplier: 1.5,
            atr_threshold: 0.02,
        }
    }
}

/// Outcome of the four swing screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaResult {
    /// Price above SMA50 and SMA50 above SMA100
    pub trend: bool,
    /// Volume above the scaled 20-day average
    pub volume: bool,
    /// ATR/price above the threshold fraction
    pub volatility: bool,
    /// RSI inside the 30-70 band (inclusive)
    pub momentum: bool,
}

impl CriteriaResult {
    /// Whether every screen passed.
    pub fn passes_all(&self) -> bool {
        self.trend && self.volume && self.volatility && self.momentum
    }
}

/// Apply the four screens to a snapshot.
pub fn evaluate(snapshot: &TickerSnapshot, params: &CriteriaParams) -> CriteriaResult {
    CriteriaResult {
        trend: snapshot.price > snapshot.sma50 && snapshot.sma50 > snapshot.sma100,
        volume: snapshot.volume > snapshot.avg_volume20 * params.volume_multiplier,
        volatility: snapshot.atr / snapshot.price > params.atr_threshold,
        momentum: (30.0..=70.0).contains(&snapshot.rsi),
    }
}
