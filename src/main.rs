//! Memescout - Trending Memecoin Screener
//!
//! Flags high-momentum Solana tokens from CoinGecko trending data.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use memescout::adapters::cli::{CliApp, Command, PoolCmd, ScanCmd, ScreeningArgs};
use memescout::adapters::coingecko::{CoinGeckoClient, CoinGeckoConfig};
use memescout::application::{CandidateAssembler, PollingScheduler, WorkerPool};
use memescout::config::{load_config, ScoutConfig, ScreeningConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (API keys go here, not in config files)
    dotenvy::dotenv().ok();

    let app = CliApp::parse();
    init_logging(app.verbose, app.debug)?;

    match app.command {
        Command::Scan(cmd) => scan_command(cmd).await,
        Command::Pool(cmd) => pool_command(cmd).await,
    }
}

fn init_logging(verbose: bool, debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt().with_env_filter(filter).with_target(false).init();
    Ok(())
}

/// Merge the config file (if any), environment, and CLI flags into the
/// effective settings. CLI flags win over file values; the API key can also
/// come from the COINGECKO_API_KEY environment variable.
fn resolve_settings(args: &ScreeningArgs) -> Result<(ScreeningConfig, CoinGeckoConfig, PathBuf)> {
    let file_config = match &args.config {
        Some(path) => load_config(path).context("Failed to load configuration")?,
        None => ScoutConfig::default(),
    };

    let mut screening = file_config.screening.clone();
    if let Some(threshold) = args.threshold {
        screening.threshold = threshold;
    }
    if let Some(limit) = args.limit {
        screening.limit = limit;
    }
    if let Some(ref chain) = args.chain {
        screening.target_chain = chain.clone();
    }
    screening
        .validate()
        .context("Invalid screening settings")?;

    let mut provider = CoinGeckoConfig::from(&file_config.provider);
    if provider.api_key.is_none() {
        provider.api_key = std::env::var("COINGECKO_API_KEY").ok();
    }

    let log_file = args
        .log_file
        .clone()
        .unwrap_or(file_config.report.log_file);
    let log_path = PathBuf::from(shellexpand::tilde(&log_file).to_string());

    Ok((screening, provider, log_path))
}

async fn scan_command(cmd: ScanCmd) -> Result<()> {
    let (screening, provider_config, log_path) = resolve_settings(&cmd.screening)?;

    let provider = CoinGeckoClient::with_config(provider_config)
        .context("Failed to create CoinGecko client")?;
    let assembler = CandidateAssembler::new(provider, screening);

    match cmd.interval {
        Some(secs) => {
            let scheduler = PollingScheduler::new(assembler, log_path)
                .with_interval(Duration::from_secs(secs));
            scheduler
                .run_forever()
                .await
                .context("Screening loop aborted")?;
            Ok(())
        }
        None => {
            let scheduler = PollingScheduler::new(assembler, log_path);
            scheduler
                .run_once()
                .await
                .context("Screening run failed")?;
            Ok(())
        }
    }
}

async fn pool_command(cmd: PoolCmd) -> Result<()> {
    let (screening, provider_config, log_path) = resolve_settings(&cmd.screening)?;
    let interval = Duration::from_secs(cmd.interval);

    let mut schedulers = Vec::with_capacity(cmd.workers);
    for _ in 0..cmd.workers {
        // Each worker gets its own client: no shared connection pool, no
        // shared rate limiting
        let provider = CoinGeckoClient::with_config(provider_config.clone())
            .context("Failed to create CoinGecko client")?;
        let assembler = CandidateAssembler::new(provider, screening.clone());
        schedulers.push(
            PollingScheduler::new(assembler, log_path.clone()).with_interval(interval),
        );
    }

    let pool = WorkerPool::new(schedulers);
    tracing::info!("Launching {} screening workers", pool.size());
    pool.run().await;

    Ok(())
}
