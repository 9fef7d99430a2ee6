//! Screening Candidate
//!
//! The unit of output: a trending token that passed the chain filter and the
//! score threshold, together with its score and risk assessment.

use serde::{Deserialize, Serialize};

use crate::domain::risk::{RiskAssessment, RiskLabel};
use crate::ports::TrendingItem;

/// Base URL for per-token provider pages
pub const PROVIDER_COIN_URL: &str = "https://www.coingecko.com/en/coins";

/// A token flagged by the screening pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Provider token id
    pub id: String,
    /// Token name
    pub name: String,
    /// Token symbol
    pub symbol: String,
    /// Momentum score, non-negative
    pub score: f64,
    /// Accumulated risk score
    pub risk: f64,
    /// Risk bucket
    pub risk_label: RiskLabel,
    /// Provider page for the operator to inspect
    pub url: String,
}

impl Candidate {
    /// Build a candidate from a trending item and its evaluation results
    pub fn from_evaluation(item: &TrendingItem, score: f64, risk: RiskAssessment) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            symbol: item.symbol.clone(),
            score,
            risk: risk.score,
            risk_label: risk.label,
            url: format!("{}/{}", PROVIDER_COIN_URL, item.id),
        }
    }
}
