//! Shared types for MATCHCAST.
//!
//! These types form the data model used across all modules: the raw
//! submission, the per-match statistics fixture, the structured prediction
//! output, and the error taxonomy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Submission input
// ---------------------------------------------------------------------------

/// One form submission: two team names and an optional match date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchInput {
    pub team_a: String,
    pub team_b: String,
    /// Absent dates render as the literal string "N/A".
    #[serde(default)]
    pub match_date: Option<NaiveDate>,
}

impl MatchInput {
    pub fn new(team_a: impl Into<String>, team_b: impl Into<String>) -> Self {
        Self {
            team_a: team_a.into(),
            team_b: team_b.into(),
            match_date: None,
        }
    }

    /// "Team A vs. Team B" label used in the results table and PDF.
    pub fn match_label(&self) -> String {
        format!("{} vs. {}", self.team_a, self.team_b)
    }

    /// Date column value: ISO date or "N/A".
    pub fn date_label(&self) -> String {
        match self.match_date {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => "N/A".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Match statistics fixture
// ---------------------------------------------------------------------------

/// Scoring/conceding averages for one team, split by period, plus the
/// injury dampening multiplier applied to that team's expected goals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TeamForm {
    pub avg_goals_full: f64,
    pub avg_conceded_full: f64,
    pub avg_goals_ht: f64,
    pub avg_conceded_ht: f64,
    pub avg_goals_2h: f64,
    pub avg_conceded_2h: f64,
    /// Expected in (0, 1]. 1.0 means a fully fit squad.
    pub injury_adjustment: f64,
}

impl TeamForm {
    /// (avg goals scored, avg goals conceded) for a market's period.
    pub fn averages(&self, market: BetMarket) -> (f64, f64) {
        match market {
            BetMarket::FullTime => (self.avg_goals_full, self.avg_conceded_full),
            BetMarket::FirstHalf => (self.avg_goals_ht, self.avg_conceded_ht),
            BetMarket::SecondHalf => (self.avg_goals_2h, self.avg_conceded_2h),
        }
    }
}

/// Decimal bookmaker odds for one over/under market.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MarketOdds {
    pub over: f64,
    pub under: f64,
}

/// Per-match constants: identifiers, period-split averages for both teams,
/// and the bookmaker odds for the three markets. Constructed once per
/// submission, immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchStatistics {
    pub match_label: String,
    pub date_label: String,
    /// Team A plays at home.
    pub home: TeamForm,
    /// Team B plays away.
    pub away: TeamForm,
    pub odds_full_2_5: MarketOdds,
    pub odds_ht_1_5: MarketOdds,
    pub odds_2h_1_5: MarketOdds,
}

impl MatchStatistics {
    pub fn odds(&self, market: BetMarket) -> MarketOdds {
        match market {
            BetMarket::FullTime => self.odds_full_2_5,
            BetMarket::FirstHalf => self.odds_ht_1_5,
            BetMarket::SecondHalf => self.odds_2h_1_5,
        }
    }

    /// Domain check: averages non-negative, decimal odds strictly above 1.0,
    /// injury multipliers in (0, 1]. Statistics can come from a config file,
    /// so out-of-domain values must fail loudly rather than produce
    /// nonsensical probabilities.
    pub fn check_domain(&self) -> Result<(), PredictError> {
        for (side, form) in [("home", &self.home), ("away", &self.away)] {
            let averages = [
                form.avg_goals_full,
                form.avg_conceded_full,
                form.avg_goals_ht,
                form.avg_conceded_ht,
                form.avg_goals_2h,
                form.avg_conceded_2h,
            ];
            if averages.iter().any(|a| !a.is_finite() || *a < 0.0) {
                return Err(PredictError::Domain(format!(
                    "{side} team has a negative or non-finite goal average"
                )));
            }
            if !form.injury_adjustment.is_finite()
                || form.injury_adjustment <= 0.0
                || form.injury_adjustment > 1.0
            {
                return Err(PredictError::Domain(format!(
                    "{side} injury adjustment {} outside (0, 1]",
                    form.injury_adjustment
                )));
            }
        }
        for market in BetMarket::ALL {
            let odds = self.odds(*market);
            for price in [odds.over, odds.under] {
                if !price.is_finite() || price <= 1.0 {
                    return Err(PredictError::Domain(format!(
                        "{market} odds {price} not a decimal price above 1.0"
                    )));
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Markets and sides
// ---------------------------------------------------------------------------

/// The three over/under markets priced per match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BetMarket {
    /// Full match, 2.5 goal line.
    FullTime,
    /// First half, 1.5 goal line.
    FirstHalf,
    /// Second half, 1.5 goal line.
    SecondHalf,
}

impl BetMarket {
    /// All markets in table/chart order.
    pub const ALL: &'static [BetMarket] = &[
        BetMarket::FullTime,
        BetMarket::FirstHalf,
        BetMarket::SecondHalf,
    ];

    /// Goal line for this market (always a half-integer).
    pub fn threshold(&self) -> f64 {
        match self {
            BetMarket::FullTime => 2.5,
            BetMarket::FirstHalf => 1.5,
            BetMarket::SecondHalf => 1.5,
        }
    }

    /// Market suffix as it appears in bet labels: "2.5", "1.5 HT", "1.5 2H".
    pub fn line_label(&self) -> &'static str {
        match self {
            BetMarket::FullTime => "2.5",
            BetMarket::FirstHalf => "1.5 HT",
            BetMarket::SecondHalf => "1.5 2H",
        }
    }

    /// Short period tag used in the combined value column.
    pub fn period_label(&self) -> &'static str {
        match self {
            BetMarket::FullTime => "Full",
            BetMarket::FirstHalf => "HT",
            BetMarket::SecondHalf => "2H",
        }
    }
}

impl fmt::Display for BetMarket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Over/Under {}", self.line_label())
    }
}

/// Side of an over/under market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Over,
    Under,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Over => write!(f, "Over"),
            Side::Under => write!(f, "Under"),
        }
    }
}

// ---------------------------------------------------------------------------
// Prediction output
// ---------------------------------------------------------------------------

/// Model output for one over/under market.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketPrediction {
    pub market: BetMarket,
    /// Total expected goals (λ) for the market's period.
    pub expected_goals: f64,
    pub over_prob: f64,
    pub under_prob: f64,
    pub over_value: f64,
    pub under_value: f64,
    pub recommended: Side,
}

impl MarketPrediction {
    /// The larger of the two value figures, shown in the value column.
    pub fn best_value(&self) -> f64 {
        self.over_value.max(self.under_value)
    }

    /// Display label of the recommended bet, e.g. "Under 1.5 HT".
    pub fn recommendation_label(&self) -> String {
        format!("{} {}", self.recommended, self.market.line_label())
    }
}

/// Structured prediction bundle for one submission. String formatting is a
/// presentation concern and lives in `report`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub match_label: String,
    pub date_label: String,
    /// One entry per market, in `BetMarket::ALL` order.
    pub markets: Vec<MarketPrediction>,
}

impl PredictionResult {
    pub fn market(&self, market: BetMarket) -> &MarketPrediction {
        self.markets
            .iter()
            .find(|m| m.market == market)
            .expect("all three markets are always populated")
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for MATCHCAST.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// User input rejected before any computation runs.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Fixture statistics outside the supported numeric domain.
    #[error("Domain error: {0}")]
    Domain(String),

    /// PDF renderer fault. Aborts the download, not the displayed table.
    #[error("Render error: {0}")]
    Render(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
