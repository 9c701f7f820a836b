//! Quality-Value-Momentum scorer.
//!
//! Each sub-score averages only the sub-metrics that are present;
//! absent fundamentals are skipped, not counted as zero. A sub-score
//! with zero contributors defaults to the neutral midpoint of 50.
//! Values are kept unrounded here; rounding to one decimal is a
//! presentation concern.

use screener_core::types::TickerSnapshot;
use serde::{Deserialize, Serialize};

/// Quality benchmarks: a 30% ROE or operating margin, or 20% revenue
/// growth, scores the full 100.
const ROE_BENCHMARK: f64 = 30.0;
const MARGIN_BENCHMARK: f64 = 30.0;
const GROWTH_BENCHMARK: f64 = 20.0;

/// Value benchmarks: P/E of 20 or P/B of 3 scores the midpoint 50,
/// a 5% dividend yield scores 100.
const PE_BENCHMARK: f64 = 20.0;
const PB_BENCHMARK: f64 = 3.0;
const YIELD_SCALE: f64 = 20.0;

/// Momentum term weights. The RSI term is always present; performance
/// weights drop out of the denominator when the figure is absent.
const WEIGHT_1M: f64 = 0.2;
const WEIGHT_3M: f64 = 0.3;
const WEIGHT_6M: f64 = 0.5;
const WEIGHT_RSI: f64 = 0.2;

/// The three sub-scores and their composite, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub quality: f64,
    pub value: f64,
    pub momentum: f64,
    /// Unweighted mean of the three sub-scores.
    pub qvm: f64,
}

/// Score a snapshot.
pub fn score(snapshot: &TickerSnapshot) -> ScoreResult {
    let quality = quality_score(snapshot);
    let value = value_score(snapshot);
    let momentum = momentum_score(snapshot);

    ScoreResult {
        quality,
        value,
        momentum,
        qvm: (quality + value + momentum) / 3.0,
    }
}

fn quality_score(s: &TickerSnapshot) -> f64 {
    let parts: Vec<f64> = [
        s.roe.map(|roe| clamp(roe / ROE_BENCHMARK * 100.0)),
        s.operating_margin
            .map(|margin| clamp(margin / MARGIN_BENCHMARK * 100.0)),
        s.revenue_growth
            .map(|growth| clamp(growth / GROWTH_BENCHMARK * 100.0)),
    ]
    .into_iter()
    .flatten()
    .collect();

    mean_or_neutral(&parts)
}

fn value_score(s: &TickerSnapshot) -> f64 {
    // Non-positive P/E or P/B carries no value signal and is excluded
    // rather than producing an infinite or negative score.
    let parts: Vec<f64> = [
        s.pe.filter(|&pe| pe > 0.0)
            .map(|pe| clamp(PE_BENCHMARK / pe * 50.0)),
        s.pb.filter(|&pb| pb > 0.0)
            .map(|pb| clamp(PB_BENCHMARK / pb * 50.0)),
        s.dividend_yield.map(|y| clamp(y * YIELD_SCALE)),
    ]
    .into_iter()
    .flatten()
    .collect();

    mean_or_neutral(&parts)
}

fn momentum_score(s: &TickerSnapshot) -> f64 {
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;

    if let Some(perf) = s.perf_1m {
        weighted_sum += clamp(50.0 + perf * 2.0) * WEIGHT_1M;
        weight_total += WEIGHT_1M;
    }
    if let Some(perf) = s.perf_3m {
        weighted_sum += clamp(50.0 + perf * 1.5) * WEIGHT_3M;
        weight_total += WEIGHT_3M;
    }
    if let Some(perf) = s.perf_6m {
        weighted_sum += clamp(50.0 + perf) * WEIGHT_6M;
        weight_total += WEIGHT_6M;
    }

    // RSI closeness to 50; always defined when the snapshot exists
    weighted_sum += clamp(100.0 - (s.rsi - 50.0).abs() * 2.0) * WEIGHT_RSI;
    weight_total += WEIGHT_RSI;

    weighted_sum / weight_total
}

fn clamp(v: f64) -> f64 {
    v.clamp(0.0, 100.0)
}

fn mean_or_neutral(parts: &[f64]) -> f64 {
    if parts.is_empty() {
        50.0
    } else {
        parts.iter().sum::<f64>() / parts.len() as f64
    }
}
