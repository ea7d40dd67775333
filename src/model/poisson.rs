//! Over/under probabilities from a Poisson goal model.
//!
//! Total goals in a period are modeled as Poisson with mean equal to the
//! sum of both teams' expected goals (independence/additivity assumption).
//! Over/under splits use a half-integer continuity correction, so for the
//! half-integer lines used here the two sides partition the full mass.

use statrs::distribution::{DiscreteCDF, Poisson};

/// Cumulative Poisson probability P(X ≤ x) for mean `lambda`.
///
/// `lambda = 0` is a valid degenerate case (all mass at zero goals), which
/// `statrs` rejects, so it is handled before constructing the distribution.
pub fn poisson_cdf(lambda: f64, x: f64) -> f64 {
    if x < 0.0 {
        return 0.0;
    }
    if lambda <= 0.0 {
        return 1.0;
    }
    match Poisson::new(lambda) {
        Ok(dist) => dist.cdf(x.floor() as u64),
        // lambda is finite and positive here; new() cannot fail
        Err(_) => 1.0,
    }
}

/// Over/under probabilities for a goal line.
///
/// `threshold` is a half-integer line (2.5, 1.5), so
/// `over = P(X > threshold)` and `under = P(X < threshold)` land on
/// adjacent integers and sum to exactly 1.
pub fn over_under(team_a_xg: f64, team_b_xg: f64, threshold: f64) -> (f64, f64) {
    let total_xg = team_a_xg + team_b_xg;
    let over = 1.0 - poisson_cdf(total_xg, threshold - 0.5);
    let under = poisson_cdf(total_xg, threshold + 0.5);
    (over, under)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
