//! Momentum Scoring
//!
//! Additive opportunity heuristic over one token's market snapshot. Rewards
//! upward 24h momentum and small-cap/tight-supply profiles. Pure; absent
//! fields contribute nothing.

use crate::ports::TokenDetail;

/// Market cap below which the small-cap bonus applies
pub const SMALL_CAP_CEILING_USD: f64 = 50_000_000.0;

/// Bonus for a nonzero market cap under the small-cap ceiling
pub const SMALL_CAP_BONUS: f64 = 20.0;

/// Circulating supply below which the tight-supply bonus applies
pub const TIGHT_SUPPLY_CEILING: f64 = 1_000_000_000.0;

/// Bonus for a nonzero circulating supply under the tight-supply ceiling
pub const TIGHT_SUPPLY_BONUS: f64 = 10.0;

/// Compute the momentum score for a token.
///
/// Negative 24h change contributes nothing; only upward momentum is
/// rewarded. The result is non-negative and unbounded above.
pub fn momentum_score(detail: &TokenDetail) -> f64 {
    let market = &detail.market;
    let mut score = 0.0;

    if let Some(change) = market.price_change_24h_pct {
        score += change.max(0.0);
    }
    if let Some(cap) = market.market_cap_usd {
        if cap != 0.0 && cap < SMALL_CAP_CEILING_USD {
            score += SMALL_CAP_BONUS;
        }
    }
    if let Some(supply) = market.circulating_supply {
        if supply != 0.0 && supply < TIGHT_SUPPLY_CEILING {
            score += TIGHT_SUPPLY_BONUS;
        }
    }

    score
}
