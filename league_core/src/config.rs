//! League configuration.
//!
//! Provides the tunables for schedule dating and bracket round spacing.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::env;

use crate::errors::{LeagueError, LeagueResult};
use crate::schedule::PlayDays;

/// Days between consecutive bracket rounds unless configured otherwise.
pub const DEFAULT_ROUND_SPACING_DAYS: u32 = 7;

/// Upper bound on the gap between two consecutive schedule dates.
pub const DEFAULT_MAX_DATE_SEARCH_DAYS: u32 = 3660;

/// League configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    /// Days between one bracket round and the next
    pub round_spacing_days: u32,

    /// Weekdays used when a schedule request names none.
    /// Empty means "the weekday of the start date".
    pub default_play_days: Vec<Weekday>,

    /// Longest forward walk, in days, from one schedule date to the next
    pub max_date_search_days: u32,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            round_spacing_days: DEFAULT_ROUND_SPACING_DAYS,
            default_play_days: Vec::new(),
            max_date_search_days: DEFAULT_MAX_DATE_SEARCH_DAYS,
        }
    }
}

impl LeagueConfig {
    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `LEAGUE_ROUND_SPACING_DAYS`: days between bracket rounds (default: 7)
    /// - `LEAGUE_PLAY_DAYS`: comma separated weekdays, e.g. `tue,sat` (default: none)
    /// - `LEAGUE_MAX_DATE_SEARCH_DAYS`: longest gap between schedule dates (default: 3660)
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if a variable is set but malformed, or if the
    /// resulting configuration fails [`LeagueConfig::validate`].
    pub fn from_env() -> LeagueResult<Self> {
        let defaults = Self::default();

        let round_spacing_days =
            parse_env_or("LEAGUE_ROUND_SPACING_DAYS", defaults.round_spacing_days)?;
        let max_date_search_days =
            parse_env_or("LEAGUE_MAX_DATE_SEARCH_DAYS", defaults.max_date_search_days)?;

        let default_play_days = match env::var("LEAGUE_PLAY_DAYS") {
            Ok(raw) if !raw.trim().is_empty() => PlayDays::parse(&raw)
                .map_err(|e| LeagueError::InvalidConfig {
                    field: "LEAGUE_PLAY_DAYS".to_string(),
                    reason: e.to_string(),
                })?
                .into_vec(),
            _ => Vec::new(),
        };

        let config = Self {
            round_spacing_days,
            default_play_days,
            max_date_search_days,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> LeagueResult<()> {
        if self.round_spacing_days == 0 {
            return Err(LeagueError::InvalidConfig {
                field: "round_spacing_days".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.max_date_search_days < 7 {
            return Err(LeagueError::InvalidConfig {
                field: "max_date_search_days".to_string(),
                reason: "Must cover at least one full week".to_string(),
            });
        }

        Ok(())
    }

    /// Play days to use for a request, falling back to the configured default.
    #[must_use]
    pub fn play_days_or_default(&self, requested: &PlayDays) -> PlayDays {
        if requested.is_empty() {
            PlayDays::new(self.default_play_days.iter().copied())
        } else {
            requested.clone()
        }
    }
}

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> LeagueResult<T> {
    match env::var(var) {
        Ok(raw) => raw.trim().parse().map_err(|_| LeagueError::InvalidConfig {
            field: var.to_string(),
            reason: format!("Could not parse {raw:?}"),
        }),
        Err(_) => Ok(default),
    }
}
