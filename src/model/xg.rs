//! Expected goals (xG) calculator.
//!
//! Blends a team's scoring average with the opponent's conceding average
//! and applies the injury dampening multiplier.

/// `xg = (avg_scored + opp_avg_conceded) / 2 * adjustment`.
///
/// `adjustment` is the injury multiplier, expected in (0, 1]; pass 1.0 for
/// a fully fit squad. Pure function over non-negative averages.
pub fn expected_goals(avg_scored: f64, opp_avg_conceded: f64, adjustment: f64) -> f64 {
    (avg_scored + opp_avg_conceded) / 2.0 * adjustment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula() {
        let xg = expected_goals(2.0, 1.2, 0.9);
        assert!((xg - 1.44).abs() < 1e-12);
    }

    #[test]
    fn test_unit_adjustment_is_plain_average() {
        // adjustment = 1.0 must behave like no adjustment at all
        let xg = expected_goals(1.8, 0.6, 1.0);
        assert!((xg - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_away_side_fixture_value() {
        let xg = expected_goals(1.5, 1.0, 0.95);
        assert!((xg - 1.1875).abs() < 1e-12);
    }

    #[test]
    fn test_zero_averages_give_zero() {
        assert_eq!(expected_goals(0.0, 0.0, 0.5), 0.0);
    }
}
