//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - CoinGecko: market data API client
//! - CLI: command-line interface definitions

pub mod cli;
pub mod coingecko;

pub use cli::CliApp;
pub use coingecko::{CoinGeckoClient, CoinGeckoConfig};
