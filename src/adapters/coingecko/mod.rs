//! CoinGecko Adapter
//!
//! Implementation of the market data port against the CoinGecko v3 API.

pub mod client;
pub mod types;

pub use client::{CoinGeckoClient, CoinGeckoConfig};
