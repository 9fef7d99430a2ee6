//! Configuration
//!
//! Screening, provider, and report settings with validated defaults.
//! An optional TOML file supplies the same structure; CLI flags override
//! individual screening fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default score threshold for reporting a token
pub const DEFAULT_THRESHOLD: f64 = 25.0;

/// Default maximum number of candidates per run
pub const DEFAULT_LIMIT: usize = 10;

/// Default target chain
pub const DEFAULT_CHAIN: &str = "solana";

/// Default provider API base URL
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Default provider request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default report log file
pub const DEFAULT_LOG_FILE: &str = "memecoin_log.txt";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Screening parameters driving the candidate pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningConfig {
    /// Score required to report a coin
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Maximum number of candidates per run
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Chain a token must be deployed on to qualify
    #[serde(default = "default_chain")]
    pub target_chain: String,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            limit: DEFAULT_LIMIT,
            target_chain: DEFAULT_CHAIN.to_string(),
        }
    }
}

impl ScreeningConfig {
    /// Create config with a custom threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Create config with a custom result limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Create config with a custom target chain
    pub fn with_chain(mut self, chain: &str) -> Self {
        self.target_chain = chain.to_string();
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(ConfigError::ValidationError(
                "threshold must be a non-negative number".into(),
            ));
        }
        if self.limit == 0 {
            return Err(ConfigError::ValidationError("limit must be > 0".into()));
        }
        if self.target_chain.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "target_chain must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Provider connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSection {
    /// Provider API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Optional API key for higher rate limits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderSection {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Report sink settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    /// File that continuous mode appends timestamped results to
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

/// Full configuration as loaded from a TOML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoutConfig {
    #[serde(default)]
    pub screening: ScreeningConfig,
    #[serde(default)]
    pub provider: ProviderSection,
    #[serde(default)]
    pub report: ReportSection,
}

impl ScoutConfig {
    /// Validate all sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.screening.validate()?;
        if self.provider.api_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "provider.api_url must not be empty".into(),
            ));
        }
        if self.provider.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "provider.timeout_secs must be > 0".into(),
            ));
        }
        Ok(())
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_chain() -> String {
    DEFAULT_CHAIN.to_string()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_log_file() -> String {
    DEFAULT_LOG_FILE.to_string()
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ScoutConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: ScoutConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
