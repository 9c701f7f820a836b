//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, LoggingConfig, ProviderSettings, ScanSettings};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
///
/// The file is optional; every setting has a default and any of them
/// can be overridden with `SCREENER__`-prefixed environment variables
/// (e.g. `SCREENER__SCAN__CONCURRENCY=4`).
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("SCREENER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_config(Path::new("/no/such/config.toml")).unwrap();

        assert_eq!(config.scan.volume_multiplier, 1.5);
        assert_eq!(config.scan.atr_threshold_pct, 2.0);
        assert_eq!(config.scan.concurrency, 8);
        assert_eq!(config.provider.lookback_range, "2y");
    }
}
