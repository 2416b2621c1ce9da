use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{LeagueError, LeagueResult};

/// Label of a side that received an automatic advancement.
pub const BYE_LABEL: &str = "BYE";

/// Label of a bracket side still waiting for an earlier winner.
pub const TBD_LABEL: &str = "TBD";

/// One side of a match.
///
/// Serialized as the plain label so stored schedules read the same as
/// the printed ones: the team name, `"BYE"` or `"TBD"`.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Participant {
    Team(String),
    Bye,
    Tbd,
}

impl Participant {
    #[must_use]
    pub fn team(name: impl Into<String>) -> Self {
        Self::Team(name.into())
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Team(name) => name,
            Self::Bye => BYE_LABEL,
            Self::Tbd => TBD_LABEL,
        }
    }

    #[must_use]
    pub fn team_name(&self) -> Option<&str> {
        match self {
            Self::Team(name) => Some(name),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_team(&self) -> bool {
        matches!(self, Self::Team(_))
    }

    #[must_use]
    pub fn is_tbd(&self) -> bool {
        matches!(self, Self::Tbd)
    }

    #[must_use]
    pub fn is_bye(&self) -> bool {
        matches!(self, Self::Bye)
    }

    /// True when `name` is one of the reserved sentinel labels.
    #[must_use]
    pub fn is_reserved_label(name: &str) -> bool {
        same_team(name, BYE_LABEL) || same_team(name, TBD_LABEL)
    }
}

/// Lookup key for a team name: trimmed and lowercased.
#[must_use]
pub fn team_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// True when two names refer to the same team.
#[must_use]
pub fn same_team(a: &str, b: &str) -> bool {
    team_key(a) == team_key(b)
}

impl From<String> for Participant {
    fn from(value: String) -> Self {
        match value.as_str() {
            BYE_LABEL => Self::Bye,
            TBD_LABEL => Self::Tbd,
            _ => Self::Team(value),
        }
    }
}

impl From<&str> for Participant {
    fn from(value: &str) -> Self {
        value.to_string().into()
    }
}

impl From<Participant> for String {
    fn from(value: Participant) -> Self {
        match value {
            Participant::Team(name) => name,
            other => other.label().to_string(),
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Home or away side of a match.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
        }
    }
}

/// Final outcome of a match.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MatchResult {
    pub winner: Participant,
    pub home_score: u32,
    pub away_score: u32,
}

/// Lifecycle of a match.
///
/// `Unscheduled` while any side is still `TBD`; `Scheduled` once both
/// sides are known (a team against a team, or a team against `BYE`);
/// `Completed` once a result is attached. Only completed matches feed
/// the next bracket round.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum MatchState {
    Unscheduled,
    Scheduled,
    Completed,
}

/// A dated fixture between two sides.
///
/// Date and sides never change after construction. Filling a bracket
/// slot builds a replacement match; the only in-place mutation is
/// attaching a result, which happens at most once.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Match {
    date: NaiveDate,
    home: Participant,
    away: Participant,
    result: Option<MatchResult>,
}

impl Match {
    #[must_use]
    pub fn new(date: NaiveDate, home: Participant, away: Participant) -> Self {
        Self {
            date,
            home,
            away,
            result: None,
        }
    }

    /// Placeholder fixture for a later bracket round.
    #[must_use]
    pub fn placeholder(date: NaiveDate) -> Self {
        Self::new(date, Participant::Tbd, Participant::Tbd)
    }

    /// Completed bye: `team` advances with a 0-0 result.
    #[must_use]
    pub fn bye(date: NaiveDate, team: impl Into<String>) -> Self {
        let team = Participant::Team(team.into());
        Self {
            date,
            home: team.clone(),
            away: Participant::Bye,
            result: Some(MatchResult {
                winner: team,
                home_score: 0,
                away_score: 0,
            }),
        }
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn home(&self) -> &Participant {
        &self.home
    }

    #[must_use]
    pub fn away(&self) -> &Participant {
        &self.away
    }

    #[must_use]
    pub fn side(&self, side: Side) -> &Participant {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Participant> {
        self.result.as_ref().map(|r| &r.winner)
    }

    #[must_use]
    pub fn loser(&self) -> Option<&Participant> {
        let winner = self.winner()?;
        if *winner == self.home {
            Some(&self.away)
        } else {
            Some(&self.home)
        }
    }

    /// Winner and loser team names, once a result between two teams exists.
    #[must_use]
    pub fn decided_teams(&self) -> Option<(&str, &str)> {
        let winner = self.winner()?.team_name()?;
        let loser = self.loser()?.team_name()?;
        Some((winner, loser))
    }

    #[must_use]
    pub fn is_bye(&self) -> bool {
        self.home.is_bye() || self.away.is_bye()
    }

    /// True if the team `name` (case-insensitive) plays in this match.
    #[must_use]
    pub fn involves(&self, name: &str) -> bool {
        [&self.home, &self.away]
            .iter()
            .any(|p| p.team_name().is_some_and(|n| same_team(n, name)))
    }

    #[must_use]
    pub fn state(&self) -> MatchState {
        if self.result.is_some() {
            MatchState::Completed
        } else if self.home.is_tbd() || self.away.is_tbd() {
            MatchState::Unscheduled
        } else {
            MatchState::Scheduled
        }
    }

    /// Copy of this match with one side replaced.
    ///
    /// The date and the other side are kept, the result is not.
    #[must_use]
    pub fn with_side(&self, side: Side, participant: Participant) -> Self {
        let (home, away) = match side {
            Side::Home => (participant, self.away.clone()),
            Side::Away => (self.home.clone(), participant),
        };
        Self::new(self.date, home, away)
    }

    /// Attach a result with the winner derived from the higher score.
    pub fn record_score(&mut self, home_score: u32, away_score: u32) -> LeagueResult<()> {
        let winner = if home_score > away_score {
            self.home.clone()
        } else {
            self.away.clone()
        };
        self.record_result(&winner, home_score, away_score)
    }

    /// Attach a result.
    ///
    /// # Errors
    ///
    /// - `UnresolvedMatchup` if a side is still `TBD` or is a `BYE`
    /// - `ResultAlreadyRecorded` if a result is already attached
    /// - `TieNotAllowed` on equal scores
    /// - `InvalidWinner` if `winner` is not a side or did not score more
    pub fn record_result(
        &mut self,
        winner: &Participant,
        home_score: u32,
        away_score: u32,
    ) -> LeagueResult<()> {
        if !self.home.is_team() || !self.away.is_team() {
            return Err(LeagueError::UnresolvedMatchup(self.matchup()));
        }

        if self.result.is_some() {
            return Err(LeagueError::ResultAlreadyRecorded(self.matchup()));
        }

        if home_score == away_score {
            warn!("Rejected tied result {home_score}-{away_score} for {}", self.matchup());
            return Err(LeagueError::TieNotAllowed {
                home_score,
                away_score,
            });
        }

        let expected = if home_score > away_score {
            &self.home
        } else {
            &self.away
        };
        if winner != expected {
            return Err(LeagueError::InvalidWinner {
                winner: winner.to_string(),
                home: self.home.to_string(),
                away: self.away.to_string(),
            });
        }

        self.result = Some(MatchResult {
            winner: winner.clone(),
            home_score,
            away_score,
        });
        Ok(())
    }

    /// `"<date>: home vs away"`, used in error messages.
    #[must_use]
    pub fn matchup(&self) -> String {
        format!("{}: {} vs {}", self.date, self.home, self.away)
    }

    /// `"W def L (hi-lo)"` or `"Not played yet"`.
    #[must_use]
    pub fn outcome(&self) -> String {
        match (&self.result, self.loser()) {
            (Some(result), Some(loser)) => format!(
                "{} def {} ({}-{})",
                result.winner,
                loser,
                result.home_score.max(result.away_score),
                result.home_score.min(result.away_score)
            ),
            _ => "Not played yet".to_string(),
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.matchup(), self.outcome())
    }
}
