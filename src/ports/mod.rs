//! Ports Layer - Trait definitions for external dependencies
//!
//! This module defines the interfaces (ports) that adapters must implement.
//! Following hexagonal architecture, these traits abstract:
//! - Market data (trending list, per-token metadata)

pub mod market_data;
pub mod mocks;

pub use market_data::{
    MarketDataError, MarketDataPort, MarketSnapshot, TokenDetail, TrendingItem,
};
pub use mocks::ScriptedMarketData;
