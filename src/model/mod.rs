//! Prediction engine — expected goals, Poisson probabilities, and value scoring.

pub mod poisson;
pub mod value;
pub mod xg;

use tracing::{debug, info};

use crate::data::StatsProvider;
use crate::types::{
    BetMarket, MarketPrediction, MatchInput, MatchStatistics, PredictError, PredictionResult,
};
use poisson::over_under;
use value::{bet_value, recommend};
use xg::expected_goals;

/// Reject blank team names before any computation runs.
pub fn validate(input: &MatchInput) -> Result<(), PredictError> {
    if input.team_a.trim().is_empty() || input.team_b.trim().is_empty() {
        return Err(PredictError::Validation(
            "Please enter valid team names.".to_string(),
        ));
    }
    Ok(())
}

/// Pipelines validation → statistics lookup → domain check → per-market
/// computation. Holds the statistics provider so the engine is callable
/// headlessly, independent of any form trigger.
pub struct PredictionEngine {
    provider: Box<dyn StatsProvider>,
}

impl PredictionEngine {
    pub fn new(provider: Box<dyn StatsProvider>) -> Self {
        Self { provider }
    }

    /// Run the full prediction pipeline for one submission.
    pub fn predict(&self, input: &MatchInput) -> Result<PredictionResult, PredictError> {
        validate(input)?;

        let stats = self.provider.stats_for(input);
        stats.check_domain()?;

        let markets: Vec<MarketPrediction> = BetMarket::ALL
            .iter()
            .map(|&market| predict_market(&stats, market))
            .collect();

        info!(
            match_label = %stats.match_label,
            date = %stats.date_label,
            "Predictions computed"
        );

        Ok(PredictionResult {
            match_label: stats.match_label,
            date_label: stats.date_label,
            markets,
        })
    }
}

/// Compute one market: xG for both sides, over/under split, value scores,
/// and the recommended side.
fn predict_market(stats: &MatchStatistics, market: BetMarket) -> MarketPrediction {
    let (home_scored, home_conceded) = stats.home.averages(market);
    let (away_scored, away_conceded) = stats.away.averages(market);

    // Each side's xG blends its scoring average with what the opponent
    // concedes in the same period.
    let home_xg = expected_goals(home_scored, away_conceded, stats.home.injury_adjustment);
    let away_xg = expected_goals(away_scored, home_conceded, stats.away.injury_adjustment);

    let (over_prob, under_prob) = over_under(home_xg, away_xg, market.threshold());

    let odds = stats.odds(market);
    let over_value = bet_value(over_prob, odds.over);
    let under_value = bet_value(under_prob, odds.under);
    let recommended = recommend(over_value, under_value);

    debug!(
        market = %market,
        home_xg = format!("{home_xg:.4}"),
        away_xg = format!("{away_xg:.4}"),
        over_prob = format!("{:.1}%", over_prob * 100.0),
        under_prob = format!("{:.1}%", under_prob * 100.0),
        over_value = format!("{over_value:.2}"),
        under_value = format!("{under_value:.2}"),
        recommended = %recommended,
        "Market priced"
    );

    MarketPrediction {
        market,
        expected_goals: home_xg + away_xg,
        over_prob,
        under_prob,
        over_value,
        under_value,
        recommended,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
