//! Worker Pool
//!
//! Spawns N independent continuous schedulers as tokio tasks. Each worker
//! owns its own provider client and polls on its own clock: no shared
//! state, no coordination of rate limiting, no cross-worker deduplication.
//! Throughput comes from duplication, not partitioning.

use super::scheduler::PollingScheduler;
use crate::ports::MarketDataPort;

/// A fleet of identically configured screening workers
pub struct WorkerPool<P: MarketDataPort> {
    schedulers: Vec<PollingScheduler<P>>,
}

impl<P: MarketDataPort + 'static> WorkerPool<P> {
    /// Create a pool from pre-built schedulers, one per worker
    pub fn new(schedulers: Vec<PollingScheduler<P>>) -> Self {
        Self { schedulers }
    }

    /// Number of workers in the pool
    pub fn size(&self) -> usize {
        self.schedulers.len()
    }

    /// Launch every worker and wait for all of them.
    ///
    /// A worker's loop only ends when its provider fails; the failure is
    /// logged and the worker is not restarted. Returns once every worker
    /// has stopped.
    pub async fn run(self) {
        let mut handles = Vec::with_capacity(self.schedulers.len());

        for (worker_id, scheduler) in self.schedulers.into_iter().enumerate() {
            handles.push(tokio::spawn(async move {
                tracing::info!(worker_id, "screening worker started");
                if let Err(e) = scheduler.run_forever().await {
                    tracing::error!(worker_id, "screening worker stopped: {}", e);
                }
            }));
        }

        for handle in handles {
            if let Err(e) = handle.await {
                tracing::error!("screening worker task panicked: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::application::assembler::CandidateAssembler;
    use crate::config::ScreeningConfig;
    use crate::ports::{MarketDataError, ScriptedMarketData};

    fn failing_scheduler(
        provider: ScriptedMarketData,
    ) -> PollingScheduler<ScriptedMarketData> {
        let assembler = CandidateAssembler::new(provider, ScreeningConfig::default())
            .with_fetch_delay(Duration::ZERO);
        PollingScheduler::new(assembler, std::env::temp_dir().join("memescout-pool-test.log"))
            .with_interval(Duration::from_millis(1))
    }

    #[tokio::test]
    async fn test_pool_size() {
        let schedulers = (0..3)
            .map(|_| {
                failing_scheduler(
                    ScriptedMarketData::new()
                        .with_trending_failure(MarketDataError::Transport("down".into())),
                )
            })
            .collect();

        let pool = WorkerPool::new(schedulers);
        assert_eq!(pool.size(), 3);
    }

    #[tokio::test]
    async fn test_pool_returns_after_all_workers_fail() {
        // Each worker's provider fails on the first trending call, so every
        // loop terminates and run() completes.
        let providers: Vec<ScriptedMarketData> = (0..2)
            .map(|_| {
                ScriptedMarketData::new()
                    .with_trending_failure(MarketDataError::Transport("down".into()))
            })
            .collect();
        let call_logs: Vec<ScriptedMarketData> = providers.clone();

        let schedulers = providers.into_iter().map(failing_scheduler).collect();
        WorkerPool::new(schedulers).run().await;

        // Every worker issued its own trending call - no shared gate
        for provider in call_logs {
            assert_eq!(provider.calls(), vec!["trending".to_string()]);
        }
    }
}
