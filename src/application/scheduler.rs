//! Polling Scheduler
//!
//! Runs the candidate assembler once, or forever at a fixed interval. In
//! continuous mode each iteration stamps a local timestamp, holds the log
//! sink as a scoped append handle (dropped on every exit path), and reports
//! to both the console and the sink. A provider failure ends the loop by
//! propagating; there is no built-in restart.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;
use thiserror::Error;

use super::assembler::CandidateAssembler;
use super::report;
use crate::domain::Candidate;
use crate::ports::{MarketDataError, MarketDataPort};

/// Default pause between continuous-mode iterations
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3600);

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("market data failure: {0}")]
    MarketData(#[from] MarketDataError),
    #[error("report sink failure: {0}")]
    Sink(#[from] std::io::Error),
}

/// Drives repeated screening runs and owns the reporting
#[derive(Debug)]
pub struct PollingScheduler<P: MarketDataPort> {
    assembler: CandidateAssembler<P>,
    interval: Duration,
    log_path: PathBuf,
}

impl<P: MarketDataPort> PollingScheduler<P> {
    /// Create a scheduler with the default poll interval
    pub fn new(assembler: CandidateAssembler<P>, log_path: PathBuf) -> Self {
        Self {
            assembler,
            interval: DEFAULT_POLL_INTERVAL,
            log_path,
        }
    }

    /// Set a custom poll interval
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Run one screening pass and report without a timestamp prefix.
    ///
    /// Single-shot mode never touches the log sink.
    pub async fn run_once(&self) -> Result<Vec<Candidate>, SchedulerError> {
        let candidates = self.assembler.evaluate().await?;
        self.emit(&candidates, None, None)?;
        Ok(candidates)
    }

    /// Loop forever at the configured interval.
    ///
    /// Iterations are never skipped or compressed: the interval sleep
    /// starts after each iteration's work completes. Returns only by
    /// propagating a failure.
    pub async fn run_forever(&self) -> Result<(), SchedulerError> {
        tracing::info!(
            "Starting continuous screening, interval {:?}, log {}",
            self.interval,
            self.log_path.display()
        );

        loop {
            self.poll_iteration().await?;
            tokio::time::sleep(self.interval).await;
        }
    }

    /// One continuous-mode iteration: stamp, evaluate, report.
    ///
    /// The sink handle lives exactly as long as this call; it is released
    /// on success and failure alike.
    pub async fn poll_iteration(&self) -> Result<(), SchedulerError> {
        let timestamp = Local::now().format(report::TIMESTAMP_FORMAT).to_string();

        let mut sink = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        let candidates = self.assembler.evaluate().await?;
        self.emit(&candidates, Some(&timestamp), Some(&mut sink))?;

        tracing::debug!("Iteration reported {} candidates", candidates.len());
        Ok(())
    }

    fn emit(
        &self,
        candidates: &[Candidate],
        timestamp: Option<&str>,
        sink: Option<&mut std::fs::File>,
    ) -> std::io::Result<()> {
        let chain = &self.assembler.config().target_chain;

        if candidates.is_empty() {
            println!("{}", report::empty_line(chain, timestamp));
            return Ok(());
        }

        println!("{}", report::header(chain, timestamp));
        for candidate in candidates {
            println!("{}", report::candidate_line(candidate));
        }

        if let (Some(ts), Some(sink)) = (timestamp, sink) {
            for candidate in candidates {
                sink.write_all(report::sink_line(ts, candidate).as_bytes())?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScreeningConfig;
    use crate::ports::{MarketSnapshot, ScriptedMarketData, TokenDetail, TrendingItem};

    fn scripted_provider() -> ScriptedMarketData {
        ScriptedMarketData::new()
            .with_trending(vec![TrendingItem::new("bonk", "Bonk", "BONK")])
            .with_detail(
                "bonk",
                TokenDetail {
                    platforms: ["solana".to_string()].into_iter().collect(),
                    market: MarketSnapshot {
                        price_change_24h_pct: Some(60.0),
                        market_cap_usd: Some(40_000_000.0),
                        circulating_supply: Some(500_000_000.0),
                        volume_24h_usd: Some(2_000_000.0),
                    },
                    ..Default::default()
                },
            )
    }

    fn scheduler_for(
        provider: ScriptedMarketData,
        log_path: PathBuf,
    ) -> PollingScheduler<ScriptedMarketData> {
        let assembler = CandidateAssembler::new(provider, ScreeningConfig::default())
            .with_fetch_delay(Duration::ZERO);
        PollingScheduler::new(assembler, log_path).with_interval(Duration::from_millis(1))
    }

    #[tokio::test]
    async fn test_run_once_returns_candidates_without_touching_sink() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("scout.log");
        let scheduler = scheduler_for(scripted_provider(), log_path.clone());

        let candidates = scheduler.run_once().await.unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, "bonk");

        // Single-shot mode never opens the sink
        assert!(!log_path.exists());
    }

    #[tokio::test]
    async fn test_poll_iteration_appends_sink_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("scout.log");
        let scheduler = scheduler_for(scripted_provider(), log_path.clone());

        scheduler.poll_iteration().await.unwrap();
        scheduler.poll_iteration().await.unwrap();

        let contents = std::fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            assert!(line.contains("Bonk (BONK): low risk - https://www.coingecko.com/en/coins/bonk"));
        }
    }

    #[tokio::test]
    async fn test_poll_iteration_propagates_provider_failure() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("scout.log");
        let provider = ScriptedMarketData::new()
            .with_trending_failure(MarketDataError::Transport("down".into()));
        let scheduler = scheduler_for(provider, log_path.clone());

        let result = scheduler.poll_iteration().await;
        assert!(matches!(result, Err(SchedulerError::MarketData(_))));

        // The sink was opened for the iteration and released on the failure path
        assert!(log_path.exists());
        assert_eq!(std::fs::read_to_string(&log_path).unwrap(), "");
    }

    #[tokio::test]
    async fn test_empty_results_write_nothing_to_sink() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("scout.log");
        let provider = ScriptedMarketData::new().with_trending(Vec::new());
        let scheduler = scheduler_for(provider, log_path.clone());

        scheduler.poll_iteration().await.unwrap();
        assert_eq!(std::fs::read_to_string(&log_path).unwrap(), "");
    }
}
