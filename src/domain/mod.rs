//! Domain Layer - Core screening logic
//!
//! Pure types and heuristics with no external dependencies. All provider
//! interaction happens through the ports layer.
//!
//! - `scoring`: additive momentum/opportunity score
//! - `risk`: stacked risk penalties and labeling
//! - `candidate`: the reported output unit

pub mod candidate;
pub mod risk;
pub mod scoring;

pub use candidate::{Candidate, PROVIDER_COIN_URL};
pub use risk::{
    assess_risk, assess_risk_now, parse_genesis_date, RiskAssessment, RiskLabel,
};
pub use scoring::momentum_score;
