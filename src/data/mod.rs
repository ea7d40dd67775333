//! Match statistics providers.
//!
//! Defines the `StatsProvider` trait and the config-backed placeholder
//! implementation. The engine only sees the trait, so a real statistics
//! feed can be dropped in without touching computation logic.

use crate::config::StatisticsConfig;
use crate::types::{MatchInput, MatchStatistics};

/// Abstraction over the source of per-match statistics.
pub trait StatsProvider: Send + Sync {
    /// Build the statistics record for one submission. The provider fills
    /// in averages and odds; identifiers come from the user's input.
    fn stats_for(&self, input: &MatchInput) -> MatchStatistics;
}

/// Placeholder provider: serves the same compiled-in (or config-overridden)
/// averages and odds for every match, keyed only by the submitted names.
pub struct FixtureProvider {
    statistics: StatisticsConfig,
}

impl FixtureProvider {
    pub fn new(statistics: StatisticsConfig) -> Self {
        Self { statistics }
    }
}

impl StatsProvider for FixtureProvider {
    fn stats_for(&self, input: &MatchInput) -> MatchStatistics {
        MatchStatistics {
            match_label: input.match_label(),
            date_label: input.date_label(),
            home: self.statistics.home_form(),
            away: self.statistics.away_form(),
            odds_full_2_5: self.statistics.odds_full_2_5(),
            odds_ht_1_5: self.statistics.odds_ht_1_5(),
            odds_2h_1_5: self.statistics.odds_2h_1_5(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fixture_provider_labels_from_input() {
        let provider = FixtureProvider::new(StatisticsConfig::default());
        let mut input = MatchInput::new("Arsenal", "Chelsea");
        input.match_date = NaiveDate::from_ymd_opt(2026, 8, 23);

        let stats = provider.stats_for(&input);
        assert_eq!(stats.match_label, "Arsenal vs. Chelsea");
        assert_eq!(stats.date_label, "2026-08-23");
    }

    #[test]
    fn test_fixture_provider_serves_config_values() {
        let mut cfg = StatisticsConfig::default();
        cfg.odds_over_2_5 = 2.45;
        let provider = FixtureProvider::new(cfg);

        let stats = provider.stats_for(&MatchInput::new("A", "B"));
        assert_eq!(stats.odds_full_2_5.over, 2.45);
        assert_eq!(stats.home.avg_goals_full, 2.0);
        assert_eq!(stats.away.injury_adjustment, 0.95);
    }

    #[test]
    fn test_fixture_stats_pass_domain_check() {
        let provider = FixtureProvider::new(StatisticsConfig::default());
        let stats = provider.stats_for(&MatchInput::new("A", "B"));
        assert!(stats.check_domain().is_ok());
    }
}
