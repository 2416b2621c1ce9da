//! Seed ordering and bye padding.

use log::debug;
use serde::Serialize;

use crate::errors::{LeagueError, LeagueResult};
use crate::game::{Participant, same_team, team_key};
use crate::league::Team;

/// Teams in seed order, best first.
///
/// Only [`BracketSeeder`] can produce this, so a bracket is never built
/// from an unsorted list and byes always land on the top seeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seeds(Vec<Team>);

impl Seeds {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.0.iter()
    }

    /// Seed number (1-indexed) of `name`, case-insensitive.
    #[must_use]
    pub fn seed_of(&self, name: &str) -> Option<usize> {
        self.0
            .iter()
            .position(|team| same_team(&team.name, name))
            .map(|index| index + 1)
    }
}

/// Slot layout for a field of seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotPlan {
    /// Smallest power of two holding every seed
    pub slots: usize,
    /// Slots left empty, each one a bye for a top seed
    pub byes: usize,
}

/// Orders teams into seeds and sizes the bracket.
pub struct BracketSeeder;

impl BracketSeeder {
    /// Sort teams by wins (most first), then losses (fewest first), then
    /// name (case-insensitive).
    ///
    /// # Errors
    ///
    /// - `InsufficientTeams` if fewer than two teams are supplied
    /// - `InvalidTeamName` if a team is named `BYE` or `TBD`
    pub fn seed(teams: &[Team]) -> LeagueResult<Seeds> {
        if teams.len() < 2 {
            return Err(LeagueError::InsufficientTeams(teams.len()));
        }
        if let Some(team) = teams.iter().find(|team| Participant::is_reserved_label(&team.name)) {
            return Err(LeagueError::InvalidTeamName(team.name.clone()));
        }

        let mut ordered = teams.to_vec();
        ordered.sort_by(|a, b| {
            b.wins
                .cmp(&a.wins)
                .then_with(|| a.losses.cmp(&b.losses))
                .then_with(|| team_key(&a.name).cmp(&team_key(&b.name)))
                .then_with(|| a.name.cmp(&b.name))
        });

        debug!(
            "Seeded {} teams, top seed {}",
            ordered.len(),
            ordered[0].name
        );
        Ok(Seeds(ordered))
    }

    /// Seed every team and keep the best `count`.
    ///
    /// # Errors
    ///
    /// `InvalidSeedCount` if `count` is below two or exceeds the team count.
    pub fn seed_top(teams: &[Team], count: usize) -> LeagueResult<Seeds> {
        if count < 2 || count > teams.len() {
            return Err(LeagueError::InvalidSeedCount {
                requested: count,
                available: teams.len(),
            });
        }

        let Seeds(mut ordered) = Self::seed(teams)?;
        ordered.truncate(count);
        Ok(Seeds(ordered))
    }

    /// Smallest power-of-two slot count holding `seed_count` seeds, and the
    /// number of byes that leaves.
    #[must_use]
    pub fn compute_byes(seed_count: usize) -> SlotPlan {
        let slots = seed_count.next_power_of_two();
        SlotPlan {
            slots,
            byes: slots - seed_count,
        }
    }
}
