use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::market_data::{MarketDataError, MarketDataPort, TokenDetail, TrendingItem};

/// Scripted market data provider that records calls and serves canned
/// responses. Used by integration tests; no network involved.
#[derive(Debug, Clone)]
pub struct ScriptedMarketData {
    calls: Arc<Mutex<Vec<String>>>,
    trending: Arc<Mutex<Result<Vec<TrendingItem>, MarketDataError>>>,
    details: Arc<Mutex<HashMap<String, Result<TokenDetail, MarketDataError>>>>,
}

impl ScriptedMarketData {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            trending: Arc::new(Mutex::new(Ok(Vec::new()))),
            details: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Builder method to set the trending list
    pub fn with_trending(self, items: Vec<TrendingItem>) -> Self {
        *self.trending.lock().unwrap() = Ok(items);
        self
    }

    /// Builder method to make the trending call fail
    pub fn with_trending_failure(self, err: MarketDataError) -> Self {
        *self.trending.lock().unwrap() = Err(err);
        self
    }

    /// Builder method to set the detail response for a given id
    pub fn with_detail(self, id: &str, detail: TokenDetail) -> Self {
        self.details
            .lock()
            .unwrap()
            .insert(id.to_string(), Ok(detail));
        self
    }

    /// Builder method to make the detail call for a given id fail
    pub fn with_detail_failure(self, id: &str, err: MarketDataError) -> Self {
        self.details
            .lock()
            .unwrap()
            .insert(id.to_string(), Err(err));
        self
    }

    /// Get all recorded calls, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of detail fetches issued so far
    pub fn detail_fetch_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.starts_with("detail:"))
            .count()
    }
}

#[async_trait]
impl MarketDataPort for ScriptedMarketData {
    async fn list_trending(&self) -> Result<Vec<TrendingItem>, MarketDataError> {
        self.calls.lock().unwrap().push("trending".to_string());
        self.trending.lock().unwrap().clone()
    }

    async fn get_detail(&self, id: &str) -> Result<TokenDetail, MarketDataError> {
        self.calls.lock().unwrap().push(format!("detail:{}", id));
        self.details
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .unwrap_or_else(|| {
                Err(MarketDataError::Decode(format!(
                    "no scripted response for id '{}'",
                    id
                )))
            })
    }
}

impl Default for ScriptedMarketData {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_trending() {
        let mock = ScriptedMarketData::new()
            .with_trending(vec![TrendingItem::new("bonk", "Bonk", "BONK")]);

        let items = mock.list_trending().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "bonk");
        assert_eq!(mock.calls(), vec!["trending".to_string()]);
    }

    #[tokio::test]
    async fn test_scripted_detail_and_call_recording() {
        let mock = ScriptedMarketData::new().with_detail("bonk", TokenDetail::default());

        let detail = mock.get_detail("bonk").await.unwrap();
        assert!(detail.platforms.is_empty());

        let missing = mock.get_detail("unknown").await;
        assert!(missing.is_err());

        assert_eq!(
            mock.calls(),
            vec!["detail:bonk".to_string(), "detail:unknown".to_string()]
        );
        assert_eq!(mock.detail_fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_scripted_failures() {
        let mock = ScriptedMarketData::new()
            .with_trending_failure(MarketDataError::Transport("timeout".into()));

        assert!(mock.list_trending().await.is_err());
    }
}
