//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "screener")]
#[command(author, version, about = "Quality-Value-Momentum watchlist screener")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a watchlist and rank it by QVM score
    Scan(ScanArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Tickers to scan (comma-separated)
    #[arg(short = 'S', long, value_delimiter = ',', required = true)]
    pub tickers: Vec<String>,

    /// Volume screen multiplier over the 20-day average
    #[arg(long)]
    pub volume_multiplier: Option<f64>,

    /// ATR/price volatility threshold, in percent
    #[arg(long)]
    pub atr_threshold: Option<f64>,

    /// Concurrent fetch limit
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// History range to request (e.g. 1y, 2y, 5y)
    #[arg(long)]
    pub range: Option<String>,

    /// View (ranking, cards)
    #[arg(long, default_value = "ranking")]
    pub view: View,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,

    /// Directory of per-ticker CSV files instead of the live provider
    #[arg(long)]
    pub data: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
pub enum View {
    Ranking,
    Cards,
}
