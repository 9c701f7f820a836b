//! Watchlist scan orchestration.
//!
//! One scan fetches, assembles, evaluates and scores each ticker
//! independently, with bounded concurrency since the data provider's
//! network round-trip dominates. Per-ticker failures are logged and
//! excluded; the batch never aborts.

use crate::assembler::assemble;
use crate::criteria::{evaluate, CriteriaParams, CriteriaResult};
use crate::scoring::{score, ScoreResult};
use futures::stream::{self, StreamExt};
use screener_core::traits::MarketDataSource;
use screener_core::types::{Fundamentals, TickerSnapshot};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::{debug, warn};

/// Default bounded worker pool size for concurrent fetches.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Parameters for one scan invocation.
#[derive(Debug, Clone)]
pub struct ScanParams {
    pub criteria: CriteriaParams,
    /// Provider lookback range (e.g. "2y"); must cover 200 bars.
    pub range: String,
    /// Maximum in-flight ticker fetches.
    pub concurrency: usize,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            criteria: CriteriaParams::default(),
            range: "2y".to_string(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

/// One ticker's complete scan result.
#[derive(Debug, Clone, Serialize)]
pub struct ScanEntry {
    pub snapshot: TickerSnapshot,
    pub criteria: CriteriaResult,
    pub score: ScoreResult,
}

/// All surviving entries plus how many input tickers were dropped.
#[derive(Debug, Serialize)]
pub struct ScanOutcome {
    /// Entries ordered by descending QVM score, ties broken by ticker.
    pub entries: Vec<ScanEntry>,
    /// Tickers excluded for fetch failure or insufficient history.
    pub dropped: usize,
}

/// Scan a watchlist against a market data source.
///
/// Fetch order between tickers is unordered; the returned entries are
/// re-ordered deterministically regardless of completion order.
pub async fn scan(
    source: &dyn MarketDataSource,
    tickers: &[String],
    params: &ScanParams,
) -> ScanOutcome {
    let results: Vec<Option<ScanEntry>> = stream::iter(
        tickers
            .iter()
            .map(|ticker| scan_ticker(source, ticker, params)),
    )
    .buffer_unordered(params.concurrency.max(1))
    .collect()
    .await;

    let mut entries: Vec<ScanEntry> = results.into_iter().flatten().collect();
    let dropped = tickers.len() - entries.len();
    rank(&mut entries);

    ScanOutcome { entries, dropped }
}

async fn scan_ticker(
    source: &dyn MarketDataSource,
    ticker: &str,
    params: &ScanParams,
) -> Option<ScanEntry> {
    let bars = match source.fetch_history(ticker, &params.range).await {
        Ok(bars) => bars,
        Err(err) => {
            warn!(ticker, error = %err, "dropping ticker: history fetch failed");
            return None;
        }
    };

    // Missing fundamentals never drop a ticker; scoring degrades to
    // its neutral defaults instead.
    let fundamentals = match source.fetch_fundamentals(ticker).await {
        Ok(fundamentals) => fundamentals,
        Err(err) => {
            debug!(ticker, error = %err, "fundamentals unavailable");
            Fundamentals::default()
        }
    };

    let snapshot = match assemble(ticker, &bars, &fundamentals) {
        Some(snapshot) => snapshot,
        None => {
            warn!(
                ticker,
                bars = bars.len(),
                "dropping ticker: insufficient history for indicators"
            );
            return None;
        }
    };

    let criteria = evaluate(&snapshot, &params.criteria);
    let score = score(&snapshot);

    Some(ScanEntry {
        snapshot,
        criteria,
        score,
    })
}

/// Order entries by descending QVM score, ties broken by ticker symbol.
pub fn rank(entries: &mut [ScanEntry]) {
    entries.sort_by(|a, b| {
        b.score
            .qvm
            .partial_cmp(&a.score.qvm)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.snapshot.ticker.cmp(&b.snapshot.ticker))
    });
}
