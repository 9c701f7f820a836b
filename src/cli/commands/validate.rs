//! Validate configuration command.

use screener_config::load_config;
use screener_core::error::{ScreenerError, ScreenerResult};
use std::path::Path;

pub async fn run(config_path: &Path) -> ScreenerResult<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Provider: {}", config.provider.base_url);
            println!("Lookback range: {}", config.provider.lookback_range);
            println!("Volume multiplier: {}x", config.scan.volume_multiplier);
            println!("ATR threshold: {}%", config.scan.atr_threshold_pct);
            println!("Concurrency: {}", config.scan.concurrency);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(ScreenerError::Config(e.to_string()));
        }
    }

    Ok(())
}
