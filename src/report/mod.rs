//! Result formatting — table row and chart payload.
//!
//! Pure data-shaping over `PredictionResult`. The numeric core stays in
//! `model`; everything string-shaped for the page and the PDF lives here.
//! Precision is an observable contract: probabilities render to one decimal
//! place as percentages, value figures to two decimals.

pub mod pdf;

use serde::Serialize;

use crate::types::{MarketPrediction, PredictionResult, Side};

/// Column headers, in display order.
pub const TABLE_HEADER: [&str; 6] = [
    "Match",
    "Over/Under 2.5 Prob",
    "Over/Under 1.5 HT Prob",
    "Over/Under 1.5 2H Prob",
    "Recommended Bet",
    "Value",
];

/// Bar colors alternate over/under across all three markets.
const OVER_COLOR: &str = "#FF6384";
const UNDER_COLOR: &str = "#36A2EB";

/// One formatted table row (the table always has exactly one).
#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    pub match_label: String,
    pub full_probs: String,
    pub ht_probs: String,
    pub sh_probs: String,
    pub recommended: String,
    pub value: String,
}

impl TableRow {
    /// Cells in header order, for generic table renderers.
    pub fn cells(&self) -> [&str; 6] {
        [
            &self.match_label,
            &self.full_probs,
            &self.ht_probs,
            &self.sh_probs,
            &self.recommended,
            &self.value,
        ]
    }
}

/// Bar-chart series: six labeled probabilities in [0, 1].
#[derive(Debug, Clone, Serialize)]
pub struct ChartPayload {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<&'static str>,
}

/// Assemble the single results row.
pub fn table_row(result: &PredictionResult) -> TableRow {
    let recommended = result
        .markets
        .iter()
        .map(|m| m.recommendation_label())
        .collect::<Vec<_>>()
        .join(", ");

    let value = result
        .markets
        .iter()
        .map(|m| format!("{}: {:.2}", m.market.period_label(), m.best_value()))
        .collect::<Vec<_>>()
        .join(", ");

    let mut probs = result.markets.iter().map(percent_pair);

    TableRow {
        match_label: result.match_label.clone(),
        full_probs: probs.next().unwrap_or_default(),
        ht_probs: probs.next().unwrap_or_default(),
        sh_probs: probs.next().unwrap_or_default(),
        recommended,
        value,
    }
}

/// Assemble the six-bar chart series (over/under per market).
pub fn chart_payload(result: &PredictionResult) -> ChartPayload {
    let mut labels = Vec::with_capacity(6);
    let mut values = Vec::with_capacity(6);
    let mut colors = Vec::with_capacity(6);

    for m in &result.markets {
        for (side, prob, color) in [
            (Side::Over, m.over_prob, OVER_COLOR),
            (Side::Under, m.under_prob, UNDER_COLOR),
        ] {
            labels.push(format!("{side} {}", m.market.line_label()));
            values.push(prob);
            colors.push(color);
        }
    }

    ChartPayload {
        labels,
        values,
        colors,
    }
}

/// "Over: 48.8%, Under: 73.0%" — one decimal place, matching the table
/// contract exactly.
fn percent_pair(m: &MarketPrediction) -> String {
    format!(
        "Over: {:.1}%, Under: {:.1}%",
        m.over_prob * 100.0,
        m.under_prob * 100.0
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StatisticsConfig;
    use crate::data::FixtureProvider;
    use crate::model::PredictionEngine;
    use crate::types::MatchInput;

    fn fixture_result() -> PredictionResult {
        let engine =
            PredictionEngine::new(Box::new(FixtureProvider::new(StatisticsConfig::default())));
        engine.predict(&MatchInput::new("Arsenal", "Chelsea")).unwrap()
    }

    #[test]
    fn test_table_row_exact_strings() {
        let row = table_row(&fixture_result());
        assert_eq!(row.match_label, "Arsenal vs. Chelsea");
        assert_eq!(row.full_probs, "Over: 48.8%, Under: 73.0%");
        assert_eq!(row.ht_probs, "Over: 30.3%, Under: 89.9%");
        assert_eq!(row.sh_probs, "Over: 45.0%, Under: 80.3%");
        assert_eq!(row.recommended, "Under 2.5, Under 1.5 HT, Under 1.5 2H");
        assert_eq!(row.value, "Full: 0.24, HT: 0.62, 2H: 0.49");
    }

    #[test]
    fn test_table_header_order() {
        assert_eq!(TABLE_HEADER[0], "Match");
        assert_eq!(TABLE_HEADER[4], "Recommended Bet");
        assert_eq!(TABLE_HEADER[5], "Value");
    }

    #[test]
    fn test_cells_match_header_arity() {
        let row = table_row(&fixture_result());
        assert_eq!(row.cells().len(), TABLE_HEADER.len());
        assert_eq!(row.cells()[1], "Over: 48.8%, Under: 73.0%");
    }

    #[test]
    fn test_chart_payload_labels_and_bounds() {
        let chart = chart_payload(&fixture_result());
        assert_eq!(
            chart.labels,
            vec![
                "Over 2.5",
                "Under 2.5",
                "Over 1.5 HT",
                "Under 1.5 HT",
                "Over 1.5 2H",
                "Under 1.5 2H",
            ]
        );
        assert_eq!(chart.values.len(), 6);
        assert!(chart.values.iter().all(|v| (0.0..=1.0).contains(v)));
        assert_eq!(chart.colors[0], OVER_COLOR);
        assert_eq!(chart.colors[1], UNDER_COLOR);
        assert_eq!(chart.colors[4], OVER_COLOR);
    }

    #[test]
    fn test_chart_values_match_result_order() {
        let result = fixture_result();
        let chart = chart_payload(&result);
        assert_eq!(chart.values[0], result.markets[0].over_prob);
        assert_eq!(chart.values[1], result.markets[0].under_prob);
        assert_eq!(chart.values[5], result.markets[2].under_prob);
    }
}
