//! Market Data Port
//!
//! Trait abstraction over the market-data provider: listing trending tokens
//! and fetching per-token metadata. The screening pipeline depends on this
//! port only; the CoinGecko adapter implements it.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Market data error type
#[derive(Error, Debug, Clone)]
pub enum MarketDataError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("provider returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("failed to decode provider response: {0}")]
    Decode(String),
}

/// A token currently on the provider's trending list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingItem {
    /// Provider-assigned token id, used for detail lookups
    pub id: String,
    /// Token name
    pub name: String,
    /// Token symbol
    pub symbol: String,
}

impl TrendingItem {
    pub fn new(id: &str, name: &str, symbol: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
        }
    }
}

/// Market metrics for a single token. Every field is optional; absence is
/// neutral, never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// 24-hour price change in percent
    pub price_change_24h_pct: Option<f64>,
    /// Market capitalization in USD
    pub market_cap_usd: Option<f64>,
    /// Circulating supply in token units
    pub circulating_supply: Option<f64>,
    /// 24-hour trading volume in USD
    pub volume_24h_usd: Option<f64>,
}

/// Per-token metadata returned by the provider's detail endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenDetail {
    /// Chains the token is deployed on
    pub platforms: HashSet<String>,
    /// Market metrics
    pub market: MarketSnapshot,
    /// Token genesis date as a "YYYY-MM-DD" string, if the provider knows it
    pub genesis_date: Option<String>,
}

impl TokenDetail {
    /// Whether the token is deployed on the given chain
    pub fn on_platform(&self, chain: &str) -> bool {
        self.platforms.contains(chain)
    }
}

/// Market data port trait
///
/// Failures are not recovered here: transport and decode errors propagate to
/// the caller unmodified.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketDataPort: Send + Sync {
    /// List the provider's currently trending tokens, in trending order
    async fn list_trending(&self) -> Result<Vec<TrendingItem>, MarketDataError>;

    /// Fetch metadata for a token by provider id
    async fn get_detail(&self, id: &str) -> Result<TokenDetail, MarketDataError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_platform() {
        let detail = TokenDetail {
            platforms: ["solana".to_string(), "ethereum".to_string()]
                .into_iter()
                .collect(),
            ..Default::default()
        };

        assert!(detail.on_platform("solana"));
        assert!(detail.on_platform("ethereum"));
        assert!(!detail.on_platform("base"));
    }

    #[test]
    fn test_default_detail_is_empty() {
        let detail = TokenDetail::default();
        assert!(detail.platforms.is_empty());
        assert!(detail.market.price_change_24h_pct.is_none());
        assert!(detail.market.market_cap_usd.is_none());
        assert!(detail.market.circulating_supply.is_none());
        assert!(detail.market.volume_24h_usd.is_none());
        assert!(detail.genesis_date.is_none());
    }

    #[test]
    fn test_market_data_error_display() {
        let err = MarketDataError::Transport("connection refused".into());
        assert!(err.to_string().contains("connection refused"));

        let err = MarketDataError::Api {
            status: 429,
            body: "rate limited".into(),
        };
        assert!(err.to_string().contains("429"));

        let err = MarketDataError::Decode("missing field".into());
        assert!(err.to_string().contains("missing field"));
    }
}
