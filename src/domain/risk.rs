//! Risk Assessment
//!
//! Accumulates independent 20-point penalties over a token's market snapshot
//! and age. Thin volume and micro caps stack two penalties each; absent
//! volume/market-cap fields default to zero and therefore trip the
//! "less than" checks, so a token with no market data at all lands at 80.

use std::fmt;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::ports::TokenDetail;

/// Penalty added per triggered risk check
pub const RISK_PENALTY: f64 = 20.0;

/// 24h volume below this is thin
pub const THIN_VOLUME_USD: f64 = 1_000_000.0;

/// 24h volume below this is dust; stacks on top of the thin-volume penalty
pub const DUST_VOLUME_USD: f64 = 100_000.0;

/// Market cap below this is micro
pub const MICRO_CAP_USD: f64 = 10_000_000.0;

/// Market cap below this is nano; stacks on top of the micro-cap penalty
pub const NANO_CAP_USD: f64 = 1_000_000.0;

/// Absolute 24h change above this is treated as excessive volatility
pub const VOLATILITY_LIMIT_PCT: f64 = 50.0;

/// Tokens younger than this many days are penalized
pub const YOUNG_TOKEN_AGE_DAYS: i64 = 30;

/// Risk score below this labels as low
pub const MEDIUM_RISK_FLOOR: f64 = 40.0;

/// Risk score at or above this labels as high
pub const HIGH_RISK_FLOOR: f64 = 80.0;

/// Risk bucket derived from the accumulated risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLabel {
    Low,
    Medium,
    High,
}

impl RiskLabel {
    /// Bucket a risk score into a label
    pub fn from_score(score: f64) -> Self {
        if score < MEDIUM_RISK_FLOOR {
            RiskLabel::Low
        } else if score < HIGH_RISK_FLOOR {
            RiskLabel::Medium
        } else {
            RiskLabel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Low => "low",
            RiskLabel::Medium => "medium",
            RiskLabel::High => "high",
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk score and its label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: f64,
    pub label: RiskLabel,
}

/// Parse a provider genesis date ("YYYY-MM-DD").
///
/// The error case is a first-class outcome: an unparseable date means no age
/// information, and the risk computation adds no penalty for it.
pub fn parse_genesis_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
}

/// Assess a token's risk as of the given date.
pub fn assess_risk(detail: &TokenDetail, today: NaiveDate) -> RiskAssessment {
    let market = &detail.market;
    let volume = market.volume_24h_usd.unwrap_or(0.0);
    let cap = market.market_cap_usd.unwrap_or(0.0);
    let change = market.price_change_24h_pct.unwrap_or(0.0);

    let mut score = 0.0;
    if volume < THIN_VOLUME_USD {
        score += RISK_PENALTY;
    }
    if volume < DUST_VOLUME_USD {
        score += RISK_PENALTY;
    }
    if cap < MICRO_CAP_USD {
        score += RISK_PENALTY;
    }
    if cap < NANO_CAP_USD {
        score += RISK_PENALTY;
    }
    if change.abs() > VOLATILITY_LIMIT_PCT {
        score += RISK_PENALTY;
    }
    if let Some(raw) = &detail.genesis_date {
        match parse_genesis_date(raw) {
            Ok(genesis) => {
                if (today - genesis).num_days() < YOUNG_TOKEN_AGE_DAYS {
                    score += RISK_PENALTY;
                }
            }
            // No age information; contributes nothing
            Err(_) => {}
        }
    }

    RiskAssessment {
        score,
        label: RiskLabel::from_score(score),
    }
}

/// Assess a token's risk as of today (UTC).
pub fn assess_risk_now(detail: &TokenDetail) -> RiskAssessment {
    assess_risk(detail, Utc::now().date_naive())
}
