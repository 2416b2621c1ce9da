//! Playoff operations on a league.

use chrono::NaiveDate;
use log::info;

use super::models::{League, Team};
use crate::bracket::{Advancement, Bracket, BracketBuilder, BracketSeeder, MatchRef};
use crate::errors::{LeagueError, LeagueResult};

impl League {
    /// Seed the teams from their current records and build the bracket.
    ///
    /// With `top_n` only the best `top_n` teams qualify. Any previous
    /// bracket is replaced.
    ///
    /// # Errors
    ///
    /// - `InsufficientTeams` with fewer than two teams
    /// - `InvalidSeedCount` if `top_n` is below two or above the team count
    /// - `InvalidDate` if a round date falls off the calendar
    pub fn create_bracket(
        &mut self,
        top_n: Option<usize>,
        first_round_date: NaiveDate,
    ) -> LeagueResult<&Bracket> {
        let teams: Vec<Team> = self.teams().cloned().collect();
        let seeds = match top_n {
            Some(count) => BracketSeeder::seed_top(&teams, count)?,
            None => BracketSeeder::seed(&teams)?,
        };

        let bracket = BracketBuilder::new(self.config.clone()).build(&seeds, first_round_date)?;
        info!(
            "League {}: bracket created for {} of {} teams",
            self.name,
            seeds.len(),
            teams.len()
        );
        Ok(&*self.bracket.insert(bracket))
    }

    #[must_use]
    pub fn bracket(&self) -> Option<&Bracket> {
        self.bracket.as_ref()
    }

    #[must_use]
    pub fn has_bracket(&self) -> bool {
        self.bracket.is_some()
    }

    /// Record a playoff result, update both teams' records and advance the
    /// winner.
    ///
    /// # Errors
    ///
    /// - `UnknownSlot` if there is no bracket or no game at `at`
    /// - `TeamNotFound` if a side is not registered
    /// - whatever [`crate::game::Match::record_score`] rejects
    pub fn record_bracket_result(
        &mut self,
        at: MatchRef,
        home_score: u32,
        away_score: u32,
    ) -> LeagueResult<Advancement> {
        let game = self
            .bracket
            .as_ref()
            .and_then(|bracket| bracket.get(at))
            .ok_or(LeagueError::UnknownSlot(at))?;
        self.check_sides(game)?;

        let bracket = self.bracket.as_mut().ok_or(LeagueError::UnknownSlot(at))?;
        let advancement = bracket.record_and_advance(at, home_score, away_score)?;

        let decided = bracket
            .get(at)
            .and_then(|game| game.decided_teams())
            .map(|(w, l)| (w.to_string(), l.to_string()));
        if let Some((winner, loser)) = decided {
            self.credit_result(&winner, &loser)?;
        }
        Ok(advancement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Side;

    fn ymd(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn league() -> League {
        let mut league = League::new("Metro");
        for (name, wins, losses) in [
            ("Hawks", 10, 2),
            ("Owls", 8, 4),
            ("Bears", 6, 6),
            ("Wolves", 4, 8),
            ("Foxes", 2, 10),
        ] {
            league.add_team(Team::with_record(name, wins, losses)).unwrap();
        }
        league
    }

    #[test]
    fn test_create_bracket_from_standings() {
        let mut league = league();
        assert!(!league.has_bracket());

        let bracket = league.create_bracket(None, ymd(4, 5)).unwrap();
        assert_eq!(bracket.round_count(), 3);
        let byes = bracket.rounds()[0].games().iter().filter(|g| g.is_bye()).count();
        assert_eq!(byes, 3);
        assert!(league.has_bracket());
    }

    #[test]
    fn test_create_bracket_top_n() {
        let mut league = league();
        let bracket = league.create_bracket(Some(4), ymd(4, 5)).unwrap();
        let opening: Vec<String> = bracket.rounds()[0]
            .games()
            .iter()
            .map(|g| g.matchup())
            .collect();
        assert_eq!(
            opening,
            vec!["2025-04-05: Hawks vs Wolves", "2025-04-05: Owls vs Bears"]
        );

        assert!(matches!(
            league.create_bracket(Some(6), ymd(4, 5)),
            Err(LeagueError::InvalidSeedCount { .. })
        ));
    }

    #[test]
    fn test_record_bracket_result_updates_records_and_advances() {
        let mut league = league();
        league.create_bracket(Some(4), ymd(4, 5)).unwrap();

        let advancement = league
            .record_bracket_result(MatchRef::new(0, 1), 55, 60)
            .unwrap();
        assert_eq!(
            advancement,
            Advancement::Advanced {
                target: MatchRef::new(1, 0),
                side: Side::Home
            }
        );

        let bears = league.team("Bears").unwrap();
        let owls = league.team("Owls").unwrap();
        assert_eq!((bears.wins, bears.losses), (7, 6));
        assert_eq!((owls.wins, owls.losses), (8, 5));
    }

    #[test]
    fn test_record_bracket_result_errors() {
        let mut league = league();
        assert!(matches!(
            league.record_bracket_result(MatchRef::new(0, 0), 1, 0),
            Err(LeagueError::UnknownSlot(_))
        ));

        league.create_bracket(Some(4), ymd(4, 5)).unwrap();
        assert!(matches!(
            league.record_bracket_result(MatchRef::new(1, 0), 1, 0),
            Err(LeagueError::UnresolvedMatchup(_))
        ));

        let err = league
            .record_bracket_result(MatchRef::new(0, 0), 3, 3)
            .unwrap_err();
        assert!(matches!(err, LeagueError::TieNotAllowed { .. }));
        assert_eq!(league.team("Hawks").unwrap().wins, 10);
    }

    #[test]
    fn test_full_playoff_crowns_champion() {
        let mut league = league();
        league.create_bracket(Some(4), ymd(4, 5)).unwrap();

        league.record_bracket_result(MatchRef::new(0, 0), 81, 70).unwrap();
        league.record_bracket_result(MatchRef::new(0, 1), 66, 64).unwrap();
        league.record_bracket_result(MatchRef::new(1, 0), 90, 85).unwrap();

        let bracket = league.bracket().unwrap();
        assert!(bracket.is_complete());
        assert_eq!(bracket.champion(), Some("Hawks"));
        assert_eq!(bracket.runner_up(), Some("Owls"));
        assert_eq!(league.team("Hawks").unwrap().wins, 12);
    }
}
