//! Bracket construction from seeds.

use chrono::NaiveDate;
use log::{debug, info};

use super::models::{Bracket, BracketRound, MatchRef};
use super::seeding::{BracketSeeder, Seeds};
use crate::config::LeagueConfig;
use crate::errors::{LeagueError, LeagueResult};
use crate::game::{Match, Participant};
use crate::league::Team;
use crate::schedule::add_days;

/// Builds single-elimination brackets.
#[derive(Debug, Clone, Default)]
pub struct BracketBuilder {
    config: LeagueConfig,
}

impl BracketBuilder {
    pub fn new(config: LeagueConfig) -> Self {
        Self { config }
    }

    /// Build a bracket from `seeds`.
    ///
    /// Seeds are padded with empty slots up to a power of two, then paired
    /// outside-in: best against worst, second best against second worst,
    /// and so on. A seed facing an empty slot gets a completed bye. Later
    /// rounds start as `TBD` placeholders, each one `round_spacing_days`
    /// after the previous round. Bye winners are advanced before the
    /// bracket is returned.
    ///
    /// # Errors
    ///
    /// - `InvalidSeedCount` if fewer than two seeds are supplied
    /// - `InvalidDate` if a round date would fall off the calendar
    pub fn build(&self, seeds: &Seeds, first_round_date: NaiveDate) -> LeagueResult<Bracket> {
        if seeds.len() < 2 {
            return Err(LeagueError::InvalidSeedCount {
                requested: seeds.len(),
                available: seeds.len(),
            });
        }

        let plan = BracketSeeder::compute_byes(seeds.len());
        let mut slots: Vec<Option<&Team>> = seeds.iter().map(Some).collect();
        slots.resize(plan.slots, None);

        let mut opening = Vec::with_capacity(plan.slots / 2);
        let mut bye_games = Vec::with_capacity(plan.byes);
        let (mut left, mut right) = (0, plan.slots - 1);

        while left < right {
            match (slots[left], slots[right]) {
                (Some(home), Some(away)) => opening.push(Match::new(
                    first_round_date,
                    Participant::team(&home.name),
                    Participant::team(&away.name),
                )),
                (Some(team), None) | (None, Some(team)) => {
                    debug!("{} receives a bye", team.name);
                    bye_games.push(opening.len());
                    opening.push(Match::bye(first_round_date, &team.name));
                }
                (None, None) => {}
            }
            left += 1;
            right -= 1;
        }

        let mut teams_next_round = opening.len();
        let mut rounds = vec![BracketRound::new(1, first_round_date, opening)];
        let mut round_date = first_round_date;

        while teams_next_round > 1 {
            let games = teams_next_round / 2;
            round_date = add_days(round_date, self.config.round_spacing_days)?;
            rounds.push(BracketRound::new(
                rounds.len() + 1,
                round_date,
                vec![Match::placeholder(round_date); games],
            ));
            teams_next_round = games;
        }

        let mut bracket = Bracket::new(rounds);
        for game in bye_games {
            bracket.advance_winner(MatchRef::new(0, game))?;
        }

        info!(
            "Built bracket: {} seeds, {} slots, {} byes, {} rounds",
            seeds.len(),
            plan.slots,
            plan.byes,
            bracket.round_count()
        );
        Ok(bracket)
    }
}
