//! CLI Command Definitions
//!
//! Clap surface for the memescout screener.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Memescout - Trending Memecoin Screener
#[derive(Parser, Debug)]
#[command(
    name = "memescout",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Trending memecoin screener backed by CoinGecko market data",
    long_about = "Memescout scans CoinGecko's trending list, scores each token with a \
                  momentum heuristic, attaches a risk label, and reports the candidates \
                  worth a human look. It screens; it never trades."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Screen the trending list once, or continuously with --interval
    Scan(ScanCmd),

    /// Run several independent continuous screeners in parallel
    Pool(PoolCmd),
}

/// Screening flags shared by both commands. Flags left unset fall back to
/// the config file (if given) and then to built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct ScreeningArgs {
    /// Score required to report a coin [default: 25]
    #[arg(long, value_name = "SCORE")]
    pub threshold: Option<f64>,

    /// Maximum number of results per run [default: 10]
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Chain a token must be deployed on [default: solana]
    #[arg(long, value_name = "CHAIN")]
    pub chain: Option<String>,

    /// File that continuous mode appends results to [default: memecoin_log.txt]
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Screen the trending list
#[derive(Parser, Debug)]
pub struct ScanCmd {
    #[command(flatten)]
    pub screening: ScreeningArgs,

    /// Run continuously, sleeping this many seconds between runs
    #[arg(long, value_name = "SECONDS")]
    pub interval: Option<u64>,
}

/// Run parallel continuous screeners
#[derive(Parser, Debug)]
pub struct PoolCmd {
    #[command(flatten)]
    pub screening: ScreeningArgs,

    /// Number of parallel screening workers
    #[arg(long, value_name = "N", default_value_t = 2)]
    pub workers: usize,

    /// Seconds between runs within each worker
    #[arg(long, value_name = "SECONDS", default_value_t = 3600)]
    pub interval: u64,
}
