//! Double round-robin generation using the circle method.

use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::calendar::{PlayDays, round_dates};
use crate::config::LeagueConfig;
use crate::errors::{LeagueError, LeagueResult};
use crate::game::{Match, Participant, same_team, team_key};

/// Home/away pairing before a date is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub home: String,
    pub away: String,
}

impl Pairing {
    #[must_use]
    pub fn mirrored(&self) -> Self {
        Self {
            home: self.away.clone(),
            away: self.home.clone(),
        }
    }
}

/// Builds regular-season schedules.
#[derive(Debug, Clone, Default)]
pub struct RoundRobinScheduler {
    config: LeagueConfig,
}

impl RoundRobinScheduler {
    pub fn new(config: LeagueConfig) -> Self {
        Self { config }
    }

    /// Team names in schedule order: trimmed, blanks removed, sorted
    /// case-insensitively and deduplicated case-insensitively.
    pub fn order_teams<I, S>(team_names: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = team_names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        names.sort_by(|a, b| team_key(a).cmp(&team_key(b)).then_with(|| a.cmp(b)));
        names.dedup_by(|a, b| same_team(a, b));
        names
    }

    /// Pairings for every round of a double round-robin.
    ///
    /// The first `n - 1` rounds are a single round-robin; the next `n - 1`
    /// repeat them with home and away swapped. With an odd number of teams
    /// one team sits out each round and that pairing is left out.
    ///
    /// # Errors
    ///
    /// - `InsufficientTeams` if fewer than two distinct names remain
    /// - `InvalidTeamName` if a name is `BYE` or `TBD`
    pub fn rounds<I, S>(team_names: I) -> LeagueResult<Vec<Vec<Pairing>>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = Self::order_teams(team_names);
        if let Some(reserved) = names.iter().find(|name| Participant::is_reserved_label(name)) {
            return Err(LeagueError::InvalidTeamName(reserved.clone()));
        }
        if names.len() < 2 {
            return Err(LeagueError::InsufficientTeams(names.len()));
        }

        // `None` is the synthetic bye entry
        let mut slots: Vec<Option<String>> = names.into_iter().map(Some).collect();
        if slots.len() % 2 == 1 {
            slots.push(None);
        }

        let n = slots.len();
        let mut first_half = Vec::with_capacity(n - 1);

        for round in 0..n - 1 {
            let mut pairings = Vec::with_capacity(n / 2);
            for i in 0..n / 2 {
                match (&slots[i], &slots[n - 1 - i]) {
                    (Some(home), Some(away)) => pairings.push(Pairing {
                        home: home.clone(),
                        away: away.clone(),
                    }),
                    (Some(team), None) | (None, Some(team)) => {
                        debug!("Round {}: {team} sits out", round + 1);
                    }
                    (None, None) => {}
                }
            }
            first_half.push(pairings);

            // Position 0 stays fixed, everyone else moves one seat
            slots[1..].rotate_right(1);
        }

        let second_half: Vec<Vec<Pairing>> = first_half
            .iter()
            .map(|round| round.iter().map(Pairing::mirrored).collect())
            .collect();

        first_half.extend(second_half);
        Ok(first_half)
    }

    /// Generate a dated double round-robin schedule.
    ///
    /// Each round takes the next date on or after `start` whose weekday is
    /// in `play_days` (or the configured default, or `start`'s weekday).
    /// Matches come back in round order with no results.
    pub fn generate<I, S>(
        &self,
        team_names: I,
        play_days: &PlayDays,
        start: NaiveDate,
    ) -> LeagueResult<Vec<Match>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rounds = Self::rounds(team_names)?;
        let play_days = self.config.play_days_or_default(play_days);
        let dates = round_dates(
            start,
            &play_days,
            rounds.len(),
            self.config.max_date_search_days,
        )?;

        let matches: Vec<Match> = rounds
            .into_iter()
            .zip(dates)
            .flat_map(|(pairings, date)| {
                pairings.into_iter().map(move |pairing| {
                    Match::new(
                        date,
                        Participant::Team(pairing.home),
                        Participant::Team(pairing.away),
                    )
                })
            })
            .collect();

        info!(
            "Generated {} matches starting {start} on {:?}",
            matches.len(),
            play_days.resolve(start).as_slice()
        );
        Ok(matches)
    }
}
