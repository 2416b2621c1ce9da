//! League data models.

use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::bracket::Bracket;
use crate::config::LeagueConfig;
use crate::errors::{LeagueError, LeagueResult};
use crate::game::{Match, Participant, team_key};

/// Team with its win/loss record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
}

impl Team {
    /// Create a team with an empty record
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_record(name, 0, 0)
    }

    pub fn with_record(name: impl Into<String>, wins: u32, losses: u32) -> Self {
        Self {
            name: name.into(),
            wins,
            losses,
        }
    }

    pub fn add_win(&mut self) {
        self.wins += 1;
    }

    pub fn add_loss(&mut self) {
        self.losses += 1;
    }

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (W:{} L:{})", self.name, self.wins, self.losses)
    }
}

/// League file contents: a name and the registered teams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueDescription {
    pub name: String,
    #[serde(default)]
    pub teams: Vec<Team>,
}

/// A league: teams, the regular season and the playoff bracket.
///
/// Teams are keyed by lowercase name, so lookups are case-insensitive and
/// iteration is alphabetical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    pub(super) name: String,
    pub(super) teams: BTreeMap<String, Team>,
    pub(super) games: Vec<Match>,
    pub(super) schedule_created: bool,
    pub(super) bracket: Option<Bracket>,
    #[serde(default)]
    pub(super) config: LeagueConfig,
}

impl League {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, LeagueConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: LeagueConfig) -> Self {
        Self {
            name: name.into(),
            teams: BTreeMap::new(),
            games: Vec::new(),
            schedule_created: false,
            bracket: None,
            config,
        }
    }

    /// Build a league from its description, registering every team.
    ///
    /// # Errors
    ///
    /// Same as [`League::add_team`] for each team.
    pub fn from_description(
        description: LeagueDescription,
        config: LeagueConfig,
    ) -> LeagueResult<Self> {
        let mut league = Self::with_config(description.name, config);
        for team in description.teams {
            league.add_team(team)?;
        }
        info!("Loaded league {} with {} teams", league.name, league.teams.len());
        Ok(league)
    }

    /// Parse a JSON league description.
    ///
    /// # Errors
    ///
    /// `Serialization` on malformed JSON, otherwise as [`League::from_description`].
    pub fn from_json(json: &str, config: LeagueConfig) -> LeagueResult<Self> {
        let description: LeagueDescription = serde_json::from_str(json)?;
        Self::from_description(description, config)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn config(&self) -> &LeagueConfig {
        &self.config
    }

    /// Register a team.
    ///
    /// The name is trimmed before it is stored.
    ///
    /// # Errors
    ///
    /// - `InvalidTeamName` if the name is blank or is `BYE`/`TBD`
    /// - `DuplicateTeam` if a team with the same name (any case) exists
    pub fn add_team(&mut self, team: Team) -> LeagueResult<()> {
        let name = team.name.trim().to_string();
        if name.is_empty() || Participant::is_reserved_label(&name) {
            return Err(LeagueError::InvalidTeamName(team.name));
        }

        let key = team_key(&name);
        if self.teams.contains_key(&key) {
            return Err(LeagueError::DuplicateTeam(name));
        }

        self.teams.insert(key, Team { name, ..team });
        Ok(())
    }

    /// Look up a team, case-insensitive.
    #[must_use]
    pub fn team(&self, name: &str) -> Option<&Team> {
        self.teams.get(&team_key(name))
    }

    /// Teams in alphabetical order.
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    #[must_use]
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Add a win to `winner` and a loss to `loser`.
    ///
    /// Both teams are checked before either record changes.
    pub(super) fn credit_result(&mut self, winner: &str, loser: &str) -> LeagueResult<()> {
        for name in [winner, loser] {
            if self.team(name).is_none() {
                return Err(LeagueError::TeamNotFound(name.to_string()));
            }
        }

        if let Some(team) = self.teams.get_mut(&team_key(winner)) {
            team.add_win();
        }
        if let Some(team) = self.teams.get_mut(&team_key(loser)) {
            team.add_loss();
        }
        Ok(())
    }

    /// Fail with `TeamNotFound` if a real side of `game` is not registered.
    pub(super) fn check_sides(&self, game: &Match) -> LeagueResult<()> {
        let missing = [game.home(), game.away()]
            .into_iter()
            .filter_map(Participant::team_name)
            .find(|name| self.team(name).is_none());

        match missing {
            Some(name) => Err(LeagueError::TeamNotFound(name.to_string())),
            None => Ok(()),
        }
    }
}
