//! CoinGecko API Client
//!
//! HTTP client for the CoinGecko v3 API, implementing the market data port.
//! Covers the trending list and per-coin detail endpoints. Failures are
//! surfaced as-is: no retry, no backoff. Rate-limit pacing between detail
//! fetches is the assembler's responsibility, not the client's.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::types::{CoinDetailResponse, TrendingResponse};
use crate::config::{ProviderSection, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::ports::{MarketDataError, MarketDataPort, TokenDetail, TrendingItem};

/// CoinGecko client configuration
#[derive(Debug, Clone)]
pub struct CoinGeckoConfig {
    /// Base URL for the CoinGecko API
    pub api_base_url: String,
    /// Optional API key for higher rate limits
    pub api_key: Option<String>,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl From<&ProviderSection> for CoinGeckoConfig {
    fn from(section: &ProviderSection) -> Self {
        Self {
            api_base_url: section.api_url.clone(),
            api_key: section.api_key.clone(),
            timeout: Duration::from_secs(section.timeout_secs),
        }
    }
}

/// CoinGecko market data client
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    config: CoinGeckoConfig,
    http: Client,
}

impl CoinGeckoClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self, MarketDataError> {
        Self::with_config(CoinGeckoConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: CoinGeckoConfig) -> Result<Self, MarketDataError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                MarketDataError::Transport(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, http })
    }

    /// Create a new client with an API key
    pub fn with_api_key(api_key: String) -> Result<Self, MarketDataError> {
        let config = CoinGeckoConfig {
            api_key: Some(api_key),
            ..Default::default()
        };
        Self::with_config(config)
    }

    /// Get the configured API base URL
    pub fn api_base_url(&self) -> &str {
        &self.config.api_base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, MarketDataError> {
        let url = format!("{}/{}", self.config.api_base_url, path);

        let mut req = self.http.get(&url);
        if let Some(ref api_key) = self.config.api_key {
            req = req.header("x-cg-pro-api-key", api_key);
        }

        let response = req
            .send()
            .await
            .map_err(|e| MarketDataError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| MarketDataError::Decode(e.to_string()))
    }
}

#[async_trait]
impl MarketDataPort for CoinGeckoClient {
    async fn list_trending(&self) -> Result<Vec<TrendingItem>, MarketDataError> {
        let response: TrendingResponse = self.get_json("search/trending").await?;
        Ok(response
            .coins
            .into_iter()
            .map(|entry| entry.item.into())
            .collect())
    }

    async fn get_detail(&self, id: &str) -> Result<TokenDetail, MarketDataError> {
        let response: CoinDetailResponse = self.get_json(&format!("coins/{}", id)).await?;
        Ok(response.into())
    }
}
