//! Winner advancement and bracket queries.

use log::{debug, info};
use serde::Serialize;
use std::fmt;

use super::models::{Bracket, MatchRef};
use crate::errors::{LeagueError, LeagueResult};
use crate::game::{Match, MatchState, Side};

/// What a call to [`Bracket::advance_winner`] did.
///
/// Everything except `Advanced` is a no-op, not an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Advancement {
    /// Winner written into `side` of the game at `target`
    Advanced { target: MatchRef, side: Side },
    /// Game has no result yet
    NotCompleted,
    /// Game is the final, nothing to feed
    FinalRound,
    /// Next round has no game at the computed index
    OutOfRange,
    /// Winner already occupies a side of the next game
    AlreadyAdvanced,
    /// Both sides of the next game are already filled
    SlotsFilled,
}

/// Display name of a round, based on how far it is from the final.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum RoundLabel {
    Final,
    Semifinals,
    Quarterfinals,
    Round(usize),
}

impl fmt::Display for RoundLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundLabel::Final => write!(f, "Final"),
            RoundLabel::Semifinals => write!(f, "Semifinals"),
            RoundLabel::Quarterfinals => write!(f, "Quarterfinals"),
            RoundLabel::Round(number) => write!(f, "Round {number}"),
        }
    }
}

impl Bracket {
    /// Move the winner of the game at `at` into the next round.
    ///
    /// The winner takes the home side of game `at.game / 2` in the next
    /// round if it is still `TBD`, otherwise the away side. Calling this
    /// again for the same game changes nothing.
    ///
    /// # Errors
    ///
    /// `UnknownSlot` if `at` is not a game of this bracket.
    pub fn advance_winner(&mut self, at: MatchRef) -> LeagueResult<Advancement> {
        let game = self.get(at).ok_or(LeagueError::UnknownSlot(at))?;

        let Some(winner) = game.winner().cloned() else {
            return Ok(Advancement::NotCompleted);
        };

        if at.round + 1 >= self.rounds.len() {
            return Ok(Advancement::FinalRound);
        }

        let target = at.feeds();
        let Some(next) = self.get(target) else {
            return Ok(Advancement::OutOfRange);
        };

        if next.home() == &winner || next.away() == &winner {
            return Ok(Advancement::AlreadyAdvanced);
        }

        let side = if next.home().is_tbd() {
            Side::Home
        } else if next.away().is_tbd() {
            Side::Away
        } else {
            return Ok(Advancement::SlotsFilled);
        };

        let replacement = next.with_side(side, winner.clone());
        self.rounds[target.round].games[target.game] = replacement;

        debug!("{winner} advances from {at} to {side} of {target}");
        Ok(Advancement::Advanced { target, side })
    }

    /// Advance the winner of a game identified by value.
    ///
    /// # Errors
    ///
    /// `UnknownMatch` if no game of this bracket equals `game`.
    pub fn advance_match(&mut self, game: &Match) -> LeagueResult<Advancement> {
        let at = self
            .locate(game)
            .ok_or_else(|| LeagueError::UnknownMatch(game.matchup()))?;
        self.advance_winner(at)
    }

    /// Attach a result to the game at `at` without advancing it.
    ///
    /// # Errors
    ///
    /// `UnknownSlot` for a bad coordinate, otherwise whatever
    /// [`Match::record_score`] rejects.
    pub fn record_result(
        &mut self,
        at: MatchRef,
        home_score: u32,
        away_score: u32,
    ) -> LeagueResult<()> {
        self.get_mut(at)
            .ok_or(LeagueError::UnknownSlot(at))?
            .record_score(home_score, away_score)
    }

    /// Attach a result and advance the winner.
    pub fn record_and_advance(
        &mut self,
        at: MatchRef,
        home_score: u32,
        away_score: u32,
    ) -> LeagueResult<Advancement> {
        self.record_result(at, home_score, away_score)?;
        let advancement = self.advance_winner(at)?;

        if let Some(champion) = self.champion() {
            info!("Bracket complete, champion: {champion}");
        }
        Ok(advancement)
    }

    /// True once every game of the final round has a result.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.rounds
            .last()
            .is_some_and(|round| !round.games.is_empty() && round.games.iter().all(Match::has_result))
    }

    /// Winner of the final, once the bracket is complete.
    #[must_use]
    pub fn champion(&self) -> Option<&str> {
        if !self.is_complete() {
            return None;
        }
        self.final_game()?.winner()?.team_name()
    }

    /// Loser of the final, once the bracket is complete.
    #[must_use]
    pub fn runner_up(&self) -> Option<&str> {
        if !self.is_complete() {
            return None;
        }
        self.final_game()?.loser()?.team_name()
    }

    /// Label for a 1-indexed round number.
    #[must_use]
    pub fn round_label(&self, number: usize) -> RoundLabel {
        match self.rounds.len().checked_sub(number) {
            Some(0) => RoundLabel::Final,
            Some(1) => RoundLabel::Semifinals,
            Some(2) => RoundLabel::Quarterfinals,
            _ => RoundLabel::Round(number),
        }
    }

    /// Games with both teams known and no result yet, in bracket order.
    pub fn pending_games(&self) -> Vec<(MatchRef, &Match)> {
        self.games()
            .filter(|(_, game)| game.state() == MatchState::Scheduled)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bracket::{BracketBuilder, BracketSeeder};
    use crate::game::Participant;
    use crate::league::Team;
    use chrono::NaiveDate;

    fn bracket(count: usize) -> Bracket {
        let teams: Vec<Team> = (1..=count)
            .map(|i| Team::with_record(format!("T{i}"), (100 - i) as u32, 0))
            .collect();
        let seeds = BracketSeeder::seed(&teams).unwrap();
        BracketBuilder::default()
            .build(&seeds, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
            .unwrap()
    }

    #[test]
    fn test_unplayed_game_does_not_advance() {
        let mut b = bracket(4);
        assert_eq!(
            b.advance_winner(MatchRef::new(0, 0)).unwrap(),
            Advancement::NotCompleted
        );
    }

    #[test]
    fn test_advance_fills_home_then_away() {
        let mut b = bracket(4);

        let first = b.record_and_advance(MatchRef::new(0, 1), 70, 60).unwrap();
        assert_eq!(
            first,
            Advancement::Advanced {
                target: MatchRef::new(1, 0),
                side: Side::Home
            }
        );

        let second = b.record_and_advance(MatchRef::new(0, 0), 50, 65).unwrap();
        assert_eq!(
            second,
            Advancement::Advanced {
                target: MatchRef::new(1, 0),
                side: Side::Away
            }
        );

        let final_game = b.final_game().unwrap();
        assert_eq!(final_game.home(), &Participant::team("T2"));
        assert_eq!(final_game.away(), &Participant::team("T4"));
        assert_eq!(final_game.state(), MatchState::Scheduled);
    }

    #[test]
    fn test_advance_is_idempotent() {
        let mut b = bracket(4);
        b.record_and_advance(MatchRef::new(0, 0), 80, 70).unwrap();
        let snapshot = b.clone();

        assert_eq!(
            b.advance_winner(MatchRef::new(0, 0)).unwrap(),
            Advancement::AlreadyAdvanced
        );
        assert_eq!(b, snapshot);
        assert!(b.final_game().unwrap().away().is_tbd());
    }

    #[test]
    fn test_final_round_is_a_no_op() {
        let mut b = bracket(2);
        assert_eq!(
            b.record_and_advance(MatchRef::new(0, 0), 3, 1).unwrap(),
            Advancement::FinalRound
        );
        assert!(b.is_complete());
        assert_eq!(b.champion(), Some("T1"));
        assert_eq!(b.runner_up(), Some("T2"));
    }

    #[test]
    fn test_unknown_slot() {
        let mut b = bracket(4);
        assert!(matches!(
            b.advance_winner(MatchRef::new(0, 9)),
            Err(LeagueError::UnknownSlot(_))
        ));
        assert!(matches!(
            b.record_result(MatchRef::new(7, 0), 1, 0),
            Err(LeagueError::UnknownSlot(_))
        ));
    }

    #[test]
    fn test_advance_match_by_value() {
        let mut b = bracket(4);
        b.record_result(MatchRef::new(0, 0), 9, 3).unwrap();
        let played = b.get(MatchRef::new(0, 0)).unwrap().clone();

        assert!(matches!(
            b.advance_match(&played).unwrap(),
            Advancement::Advanced { .. }
        ));

        let stranger = Match::new(played.date(), "X".into(), "Y".into());
        assert!(matches!(
            b.advance_match(&stranger),
            Err(LeagueError::UnknownMatch(_))
        ));
    }

    #[test]
    fn test_tie_leaves_game_open() {
        let mut b = bracket(4);
        let err = b.record_and_advance(MatchRef::new(0, 0), 5, 5).unwrap_err();
        assert!(matches!(err, LeagueError::TieNotAllowed { .. }));
        assert!(!b.get(MatchRef::new(0, 0)).unwrap().has_result());
        assert!(b.final_game().unwrap().home().is_tbd());
    }

    #[test]
    fn test_completion_and_champion() {
        let mut b = bracket(4);
        assert!(!b.is_complete());
        assert_eq!(b.champion(), None);

        b.record_and_advance(MatchRef::new(0, 0), 80, 70).unwrap();
        b.record_and_advance(MatchRef::new(0, 1), 60, 75).unwrap();
        assert!(!b.is_complete());
        assert_eq!(b.runner_up(), None);

        b.record_and_advance(MatchRef::new(1, 0), 90, 91).unwrap();
        assert!(b.is_complete());
        assert_eq!(b.champion(), Some("T3"));
        assert_eq!(b.runner_up(), Some("T1"));
    }

    #[test]
    fn test_round_labels() {
        let b = bracket(16);
        assert_eq!(b.round_count(), 4);
        assert_eq!(b.round_label(1), RoundLabel::Round(1));
        assert_eq!(b.round_label(2), RoundLabel::Quarterfinals);
        assert_eq!(b.round_label(3), RoundLabel::Semifinals);
        assert_eq!(b.round_label(4), RoundLabel::Final);
        assert_eq!(b.round_label(9).to_string(), "Round 9");
    }

    #[test]
    fn test_pending_games_skip_byes_and_placeholders() {
        let b = bracket(6);
        let pending: Vec<MatchRef> = b.pending_games().into_iter().map(|(at, _)| at).collect();
        assert_eq!(
            pending,
            vec![MatchRef::new(0, 2), MatchRef::new(0, 3), MatchRef::new(1, 0)]
        );
    }
}
