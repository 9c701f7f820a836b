//! Scan command implementation.

use screener_config::load_config;
use screener_core::error::{ScreenerError, ScreenerResult};
use screener_core::traits::MarketDataSource;
use screener_data::{CsvDirSource, YahooConfig, YahooSource};
use screener_engine::{scan, CriteriaParams, ScanParams};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::cli::{ScanArgs, View};
use crate::presenter;

pub async fn run(args: ScanArgs, config_path: &Path) -> ScreenerResult<()> {
    let config = load_config(config_path).map_err(|e| ScreenerError::Config(e.to_string()))?;

    let params = ScanParams {
        criteria: CriteriaParams {
            volume_multiplier: args
                .volume_multiplier
                .unwrap_or(config.scan.volume_multiplier),
            // Thresholds are given in percent, the screen compares ratios.
            atr_threshold: args.atr_threshold.unwrap_or(config.scan.atr_threshold_pct) / 100.0,
        },
        range: args
            .range
            .clone()
            .unwrap_or_else(|| config.provider.lookback_range.clone()),
        concurrency: args.concurrency.unwrap_or(config.scan.concurrency),
    };

    let source: Box<dyn MarketDataSource> = match &args.data {
        Some(dir) => Box::new(CsvDirSource::new(dir.clone())?),
        None => Box::new(YahooSource::new(YahooConfig {
            base_url: config.provider.base_url.clone(),
            user_agent: config.provider.user_agent.clone(),
            timeout: Duration::from_secs(config.provider.timeout_secs),
        })?),
    };

    info!(
        source = source.name(),
        tickers = args.tickers.len(),
        "Starting scan"
    );

    let outcome = scan(source.as_ref(), &args.tickers, &params).await;

    info!(
        ranked = outcome.entries.len(),
        dropped = outcome.dropped,
        "Scan complete"
    );

    match args.output.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&outcome.entries)
                .map_err(|e| ScreenerError::Serialization(e.to_string()))?;
            println!("{}", json);
        }
        _ => {
            let text = match args.view {
                View::Ranking => presenter::render_ranking(&outcome),
                View::Cards => presenter::render_cards(&outcome),
            };
            print!("{}", text);
        }
    }

    Ok(())
}
