//! CoinGecko wire types
//!
//! Serde models for the two endpoints the screener uses, plus conversions
//! into the port-level domain shapes. Unknown fields are ignored; optional
//! fields default so a sparse payload still decodes.

use std::collections::HashMap;

use serde::Deserialize;

use crate::ports::{MarketSnapshot, TokenDetail, TrendingItem};

/// `GET /search/trending` response
#[derive(Debug, Deserialize)]
pub struct TrendingResponse {
    #[serde(default)]
    pub coins: Vec<TrendingEntry>,
}

/// One entry of the trending list; the payload nests the coin under "item"
#[derive(Debug, Deserialize)]
pub struct TrendingEntry {
    pub item: TrendingCoin,
}

/// The coin identity carried by a trending entry
#[derive(Debug, Deserialize)]
pub struct TrendingCoin {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

impl From<TrendingCoin> for TrendingItem {
    fn from(coin: TrendingCoin) -> Self {
        TrendingItem {
            id: coin.id,
            name: coin.name,
            symbol: coin.symbol,
        }
    }
}

/// `GET /coins/{id}` response, reduced to the fields the screener reads
#[derive(Debug, Deserialize)]
pub struct CoinDetailResponse {
    /// Chain name -> contract address (null for native assets)
    #[serde(default)]
    pub platforms: HashMap<String, Option<String>>,
    #[serde(default)]
    pub market_data: WireMarketData,
    #[serde(default)]
    pub genesis_date: Option<String>,
}

/// Nested market data block
#[derive(Debug, Default, Deserialize)]
pub struct WireMarketData {
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub market_cap: WireUsd,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub total_volume: WireUsd,
}

/// Per-currency map reduced to its USD entry
#[derive(Debug, Default, Deserialize)]
pub struct WireUsd {
    #[serde(default)]
    pub usd: Option<f64>,
}

impl From<CoinDetailResponse> for TokenDetail {
    fn from(raw: CoinDetailResponse) -> Self {
        TokenDetail {
            platforms: raw.platforms.into_keys().collect(),
            market: MarketSnapshot {
                price_change_24h_pct: raw.market_data.price_change_percentage_24h,
                market_cap_usd: raw.market_data.market_cap.usd,
                circulating_supply: raw.market_data.circulating_supply,
                volume_24h_usd: raw.market_data.total_volume.usd,
            },
            genesis_date: raw.genesis_date,
        }
    }
}
