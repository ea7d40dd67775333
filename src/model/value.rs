//! Bet value scoring and recommendation selection.

use crate::types::Side;

/// Expected return per unit staked: `probability * decimal_odds - 1`.
/// Positive means the model sees an edge over the bookmaker's implied
/// probability ("value bet").
pub fn bet_value(probability: f64, decimal_odds: f64) -> f64 {
    probability * decimal_odds - 1.0
}

/// Pick the side to recommend for one market.
///
/// Over is recommended only when its value is strictly higher than the
/// Under value AND strictly positive. Ties and non-positive Over values
/// both fall through to Under, even when Over is the larger figure.
pub fn recommend(over_value: f64, under_value: f64) -> Side {
    if over_value > under_value && over_value > 0.0 {
        Side::Over
    } else {
        Side::Under
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
