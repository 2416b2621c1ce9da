//! Regular-season operations on a league.

use chrono::NaiveDate;
use log::info;

use super::models::League;
use crate::errors::{LeagueError, LeagueResult};
use crate::game::{Match, same_team};
use crate::schedule::{PlayDays, RoundRobinScheduler};

impl League {
    /// Generate the double round-robin schedule for every registered team.
    ///
    /// # Errors
    ///
    /// - `ScheduleAlreadyExists` if a schedule was generated and not cleared
    /// - `InsufficientTeams` with fewer than two teams
    /// - `InvalidDate` if no valid date is found for a round
    pub fn generate_schedule(
        &mut self,
        play_days: &PlayDays,
        start: NaiveDate,
    ) -> LeagueResult<&[Match]> {
        if self.schedule_created {
            return Err(LeagueError::ScheduleAlreadyExists(self.name.clone()));
        }

        let scheduler = RoundRobinScheduler::new(self.config.clone());
        let games = scheduler.generate(self.teams().map(|team| team.name.as_str()), play_days, start)?;

        info!("League {}: schedule created with {} games", self.name, games.len());
        self.games = games;
        self.schedule_created = true;
        Ok(&self.games)
    }

    /// Drop the schedule so a new one can be generated.
    ///
    /// Team records are left as they are.
    pub fn clear_schedule(&mut self) {
        self.games.clear();
        self.schedule_created = false;
    }

    #[must_use]
    pub fn is_schedule_created(&self) -> bool {
        self.schedule_created
    }

    /// Regular-season games in generation order.
    #[must_use]
    pub fn games(&self) -> &[Match] {
        &self.games
    }

    /// Unplayed games on or after `from`, earliest first.
    pub fn upcoming_games(&self, from: NaiveDate) -> Vec<&Match> {
        let mut upcoming: Vec<&Match> = self
            .games
            .iter()
            .filter(|game| !game.has_result() && game.date() >= from)
            .collect();
        upcoming.sort_by_key(|game| game.date());
        upcoming
    }

    /// Record the result of the fixture `home` vs `away` on `date` and
    /// update both teams' records.
    ///
    /// # Errors
    ///
    /// - `UnknownMatch` if the league has no such fixture
    /// - `TeamNotFound` if a side is not registered
    /// - whatever [`Match::record_score`] rejects
    pub fn record_result(
        &mut self,
        date: NaiveDate,
        home: &str,
        away: &str,
        home_score: u32,
        away_score: u32,
    ) -> LeagueResult<()> {
        let index = self
            .games
            .iter()
            .position(|game| {
                game.date() == date
                    && game.home().team_name().is_some_and(|n| same_team(n, home))
                    && game.away().team_name().is_some_and(|n| same_team(n, away))
            })
            .ok_or_else(|| {
                LeagueError::UnknownMatch(format!("{date}: {} vs {}", home.trim(), away.trim()))
            })?;

        self.check_sides(&self.games[index])?;
        self.games[index].record_score(home_score, away_score)?;

        let Some((winner, loser)) = self.games[index]
            .decided_teams()
            .map(|(w, l)| (w.to_string(), l.to_string()))
        else {
            return Ok(());
        };
        self.credit_result(&winner, &loser)
    }
}
