//! Candidate Assembler
//!
//! Drives the market data port for each trending item, filters by chain
//! membership and score threshold, and applies the result-count limit.
//! Strictly sequential within one run: every detail fetch completes before
//! the next begins, with a fixed pause between successive fetches to respect
//! the provider's implicit rate limit.

use std::time::Duration;

use crate::config::ScreeningConfig;
use crate::domain::{assess_risk_now, momentum_score, Candidate};
use crate::ports::{MarketDataError, MarketDataPort};

/// Pause between successive detail fetches
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_secs(1);

/// Assembles ranked candidates from the provider's trending list
#[derive(Debug)]
pub struct CandidateAssembler<P: MarketDataPort> {
    provider: P,
    config: ScreeningConfig,
    fetch_delay: Duration,
}

impl<P: MarketDataPort> CandidateAssembler<P> {
    /// Create a new assembler over the given provider
    pub fn new(provider: P, config: ScreeningConfig) -> Self {
        Self {
            provider,
            config,
            fetch_delay: DEFAULT_FETCH_DELAY,
        }
    }

    /// Override the inter-fetch delay (tests zero it)
    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    /// Get the screening configuration
    pub fn config(&self) -> &ScreeningConfig {
        &self.config
    }

    /// Run one evaluation pass over the trending list.
    ///
    /// Candidates come back in the provider's trending order, at most
    /// `limit` of them; iteration stops as soon as the limit is reached.
    /// Items not deployed on the target chain are skipped and do not count
    /// toward the limit. Any provider failure aborts the pass with no
    /// partial results.
    pub async fn evaluate(&self) -> Result<Vec<Candidate>, MarketDataError> {
        let trending = self.provider.list_trending().await?;
        tracing::info!("Fetched {} trending tokens", trending.len());

        let mut candidates = Vec::new();
        for (index, item) in trending.iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(self.fetch_delay).await;
            }

            let detail = self.provider.get_detail(&item.id).await?;

            if !detail.on_platform(&self.config.target_chain) {
                tracing::debug!(
                    "{} is not deployed on {}, skipping",
                    item.id,
                    self.config.target_chain
                );
                continue;
            }

            let score = momentum_score(&detail);
            let risk = assess_risk_now(&detail);

            if score >= self.config.threshold {
                tracing::info!(
                    "{} ({}) scored {:.2} with {} risk",
                    item.name,
                    item.symbol,
                    score,
                    risk.label
                );
                candidates.push(Candidate::from_evaluation(item, score, risk));

                if candidates.len() >= self.config.limit {
                    break;
                }
            }
        }

        Ok(candidates)
    }
}
