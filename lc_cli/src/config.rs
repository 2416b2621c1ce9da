//! CLI configuration management.
//!
//! Consolidates environment variable reads and command-line overrides into
//! one validated configuration.

use league_core::{LeagueConfig, LeagueError};
use std::ops::RangeInclusive;

/// Lowest simulated score unless `SIM_MIN_SCORE` says otherwise.
pub const DEFAULT_SIM_MIN_SCORE: u32 = 80;

/// Highest simulated score unless `SIM_MAX_SCORE` says otherwise.
pub const DEFAULT_SIM_MAX_SCORE: u32 = 120;

/// Complete CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Core scheduling and bracket tunables
    pub league: LeagueConfig,
    /// Lowest score a simulated team can post
    pub sim_min_score: u32,
    /// Highest score a simulated team can post
    pub sim_max_score: u32,
    /// Seed for reproducible simulations
    pub seed: Option<u64>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            league: LeagueConfig::default(),
            sim_min_score: DEFAULT_SIM_MIN_SCORE,
            sim_max_score: DEFAULT_SIM_MAX_SCORE,
            seed: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `LEAGUE_ROUND_SPACING_DAYS`, `LEAGUE_PLAY_DAYS`,
    ///   `LEAGUE_MAX_DATE_SEARCH_DAYS`: see [`LeagueConfig::from_env`]
    /// - `SIM_MIN_SCORE` / `SIM_MAX_SCORE`: simulated score range (default: 80-120)
    /// - `SIM_SEED`: RNG seed (default: random)
    ///
    /// `seed_override` comes from `--seed` and wins over `SIM_SEED`.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but malformed, or the result
    /// fails [`CliConfig::validate`].
    pub fn from_env(seed_override: Option<u64>) -> Result<Self, ConfigError> {
        let league = LeagueConfig::from_env()?;

        let seed = match seed_override {
            Some(seed) => Some(seed),
            None => parse_env("SIM_SEED")?,
        };

        let config = CliConfig {
            league,
            sim_min_score: parse_env("SIM_MIN_SCORE")?.unwrap_or(DEFAULT_SIM_MIN_SCORE),
            sim_max_score: parse_env("SIM_MAX_SCORE")?.unwrap_or(DEFAULT_SIM_MAX_SCORE),
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Two distinct scores are needed to avoid ties
        if self.sim_max_score <= self.sim_min_score {
            return Err(ConfigError::Invalid {
                var: "SIM_MAX_SCORE".to_string(),
                reason: format!(
                    "Must be greater than SIM_MIN_SCORE ({})",
                    self.sim_min_score
                ),
            });
        }

        self.league.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn score_range(&self) -> RangeInclusive<u32> {
        self.sim_min_score..=self.sim_max_score
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },

    #[error(transparent)]
    League(#[from] LeagueError),
}

/// Parse an environment variable, `None` when unset
fn parse_env<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid {
                var: key.to_string(),
                reason: format!("Could not parse {raw:?}"),
            }),
        Err(_) => Ok(None),
    }
}
