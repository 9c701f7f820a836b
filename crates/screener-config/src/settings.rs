//! Configuration structures.

use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub provider: ProviderSettings,
    #[serde(default)]
    pub scan: ScanSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "qvm-screener".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Market data provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    pub base_url: String,
    pub user_agent: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// History lookback range; must cover at least 200 trading days.
    pub lookback_range: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            timeout_secs: 10,
            lookback_range: "2y".to_string(),
        }
    }
}

/// Scan defaults, overridable per invocation from the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSettings {
    /// Volume screen multiplier over the 20-day average.
    pub volume_multiplier: f64,
    /// ATR/price volatility threshold, in percent.
    pub atr_threshold_pct: f64,
    /// Bounded worker pool size for concurrent fetches.
    pub concurrency: usize,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            volume_multiplier: 1.5,
            atr_threshold_pct: 2.0,
            concurrency: 8,
        }
    }
}
