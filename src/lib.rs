#![allow(dead_code, unused_imports, unused_variables)]
//! Memescout - Trending Memecoin Screener Library
//!
//! Scans CoinGecko's trending list, scores tokens with a momentum heuristic,
//! attaches a risk label, and reports high-potential candidates for a human
//! operator. A screening tool, never a trading system.
//!
//! # Modules
//!
//! - `domain`: Pure screening logic (scoring, risk, Candidate)
//! - `ports`: Trait abstractions (MarketDataPort) and test mocks
//! - `adapters`: External implementations (CoinGecko, CLI)
//! - `application`: Assembler, scheduler, worker pool
//! - `config`: Configuration loading and validation

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
