//! Configuration loading from TOML.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs. Every
//! section has compiled-in defaults (the placeholder fixture statistics), so
//! the service runs with no config file present. Overriding the statistics
//! section swaps the data source without touching computation logic.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::types::{MarketOdds, TeamForm};

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub defaults: DefaultsConfig,
    pub statistics: StatisticsConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// Pre-filled team names for the form page.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DefaultsConfig {
    pub team_a: String,
    pub team_b: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            team_a: "Arsenal".to_string(),
            team_b: "Chelsea".to_string(),
        }
    }
}

/// Placeholder per-match statistics and bookmaker prices. Team A is the
/// home side, team B the away side.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StatisticsConfig {
    pub team_a_avg_goals_home: f64,
    pub team_a_avg_conceded_home: f64,
    pub team_b_avg_goals_away: f64,
    pub team_b_avg_conceded_away: f64,
    pub team_a_avg_goals_ht_home: f64,
    pub team_a_avg_conceded_ht_home: f64,
    pub team_b_avg_goals_ht_away: f64,
    pub team_b_avg_conceded_ht_away: f64,
    pub team_a_avg_goals_2h_home: f64,
    pub team_a_avg_conceded_2h_home: f64,
    pub team_b_avg_goals_2h_away: f64,
    pub team_b_avg_conceded_2h_away: f64,
    pub odds_over_2_5: f64,
    pub odds_under_2_5: f64,
    pub odds_over_1_5_ht: f64,
    pub odds_under_1_5_ht: f64,
    pub odds_over_1_5_2h: f64,
    pub odds_under_1_5_2h: f64,
    pub injury_adjustment_team_a: f64,
    pub injury_adjustment_team_b: f64,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            team_a_avg_goals_home: 2.0,
            team_a_avg_conceded_home: 1.0,
            team_b_avg_goals_away: 1.5,
            team_b_avg_conceded_away: 1.2,
            team_a_avg_goals_ht_home: 0.9,
            team_a_avg_conceded_ht_home: 0.4,
            team_b_avg_goals_ht_away: 0.6,
            team_b_avg_conceded_ht_away: 0.5,
            team_a_avg_goals_2h_home: 1.1,
            team_a_avg_conceded_2h_home: 0.6,
            team_b_avg_goals_2h_away: 0.9,
            team_b_avg_conceded_2h_away: 0.7,
            odds_over_2_5: 2.30,
            odds_under_2_5: 1.70,
            odds_over_1_5_ht: 2.10,
            odds_under_1_5_ht: 1.80,
            odds_over_1_5_2h: 1.95,
            odds_under_1_5_2h: 1.85,
            injury_adjustment_team_a: 0.90,
            injury_adjustment_team_b: 0.95,
        }
    }
}

impl StatisticsConfig {
    /// Period-split form for the home side (team A).
    pub fn home_form(&self) -> TeamForm {
        TeamForm {
            avg_goals_full: self.team_a_avg_goals_home,
            avg_conceded_full: self.team_a_avg_conceded_home,
            avg_goals_ht: self.team_a_avg_goals_ht_home,
            avg_conceded_ht: self.team_a_avg_conceded_ht_home,
            avg_goals_2h: self.team_a_avg_goals_2h_home,
            avg_conceded_2h: self.team_a_avg_conceded_2h_home,
            injury_adjustment: self.injury_adjustment_team_a,
        }
    }

    /// Period-split form for the away side (team B).
    pub fn away_form(&self) -> TeamForm {
        TeamForm {
            avg_goals_full: self.team_b_avg_goals_away,
            avg_conceded_full: self.team_b_avg_conceded_away,
            avg_goals_ht: self.team_b_avg_goals_ht_away,
            avg_conceded_ht: self.team_b_avg_conceded_ht_away,
            avg_goals_2h: self.team_b_avg_goals_2h_away,
            avg_conceded_2h: self.team_b_avg_conceded_2h_away,
            injury_adjustment: self.injury_adjustment_team_b,
        }
    }

    pub fn odds_full_2_5(&self) -> MarketOdds {
        MarketOdds {
            over: self.odds_over_2_5,
            under: self.odds_under_2_5,
        }
    }

    pub fn odds_ht_1_5(&self) -> MarketOdds {
        MarketOdds {
            over: self.odds_over_1_5_ht,
            under: self.odds_under_1_5_ht,
        }
    }

    pub fn odds_2h_1_5(&self) -> MarketOdds {
        MarketOdds {
            over: self.odds_over_1_5_2h,
            under: self.odds_under_1_5_2h,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        Ok(config)
    }

    /// Load from a TOML file, falling back to compiled-in defaults when the
    /// file doesn't exist. A malformed file is still a hard error.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            info!(path, "No config file found, using built-in defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }
}
