//! CLI Adapter
//!
//! Command-line surface for the screener.

pub mod commands;

pub use commands::{CliApp, Command, PoolCmd, ScanCmd, ScreeningArgs};
