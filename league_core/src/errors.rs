//! Error types for scheduling, seeding and bracket progression.

use thiserror::Error;

use crate::bracket::MatchRef;

/// Errors reported by league operations
#[derive(Debug, Error)]
pub enum LeagueError {
    /// Fewer than two distinct teams were supplied
    #[error("Insufficient teams: need at least 2, have {0}")]
    InsufficientTeams(usize),

    /// The league already has a regular-season schedule
    #[error("Schedule already exists for league {0}")]
    ScheduleAlreadyExists(String),

    /// Date could not be parsed or date arithmetic overflowed
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Weekday name could not be parsed
    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    /// Equal scores were submitted as a result
    #[error("Tie games are not allowed ({home_score}-{away_score})")]
    TieNotAllowed { home_score: u32, away_score: u32 },

    /// Match is not owned by the league or bracket
    #[error("Unknown match: {0}")]
    UnknownMatch(String),

    /// Bracket coordinate is out of bounds
    #[error("Unknown bracket slot {0}")]
    UnknownSlot(MatchRef),

    /// Requested seed count cannot form a bracket
    #[error("Invalid seed count: requested {requested}, available {available}")]
    InvalidSeedCount { requested: usize, available: usize },

    /// Team name already registered (case-insensitive)
    #[error("Team already exists: {0}")]
    DuplicateTeam(String),

    /// Team name is blank or collides with a reserved label
    #[error("Invalid team name: {0:?}")]
    InvalidTeamName(String),

    /// Team is not registered in the league
    #[error("Team not found: {0}")]
    TeamNotFound(String),

    /// Declared winner is not a side of the match or did not outscore the opponent
    #[error("Invalid winner {winner} for {home} vs {away}")]
    InvalidWinner {
        winner: String,
        home: String,
        away: String,
    },

    /// Match already holds a result
    #[error("Result already recorded for {0}")]
    ResultAlreadyRecorded(String),

    /// Match still has a TBD or BYE side
    #[error("Matchup not resolved yet: {0}")]
    UnresolvedMatchup(String),

    /// Configuration value out of range
    #[error("Invalid configuration for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    /// League description could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LeagueError {
    /// Short message suitable for showing to whoever entered the request
    ///
    /// Decoder details are collapsed, everything else is already
    /// phrased for the caller.
    pub fn client_message(&self) -> String {
        match self {
            LeagueError::Serialization(_) => "League description is malformed".to_string(),
            LeagueError::UnknownSlot(_) => "Bracket game not found".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for league operations
pub type LeagueResult<T> = Result<T, LeagueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tie_message() {
        let err = LeagueError::TieNotAllowed {
            home_score: 3,
            away_score: 3,
        };
        assert_eq!(err.to_string(), "Tie games are not allowed (3-3)");
    }

    #[test]
    fn test_client_message_hides_decoder_details() {
        let err: LeagueError = serde_json::from_str::<u32>("{").unwrap_err().into();
        assert_eq!(err.client_message(), "League description is malformed");

        let err = LeagueError::UnknownSlot(MatchRef::new(4, 2));
        assert_eq!(err.client_message(), "Bracket game not found");
    }
}
