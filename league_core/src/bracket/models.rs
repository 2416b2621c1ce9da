//! Bracket data models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::game::Match;

/// Coordinate of a game inside a bracket.
///
/// Both indices are zero-based: `round` 0 is the opening round and `game`
/// is the position within that round. Position matters: games `2k` and
/// `2k + 1` of one round feed game `k` of the next.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct MatchRef {
    pub round: usize,
    pub game: usize,
}

impl MatchRef {
    #[must_use]
    pub const fn new(round: usize, game: usize) -> Self {
        Self { round, game }
    }

    /// Slot in the following round that this game's winner moves into.
    #[must_use]
    pub const fn feeds(&self) -> Self {
        Self {
            round: self.round + 1,
            game: self.game / 2,
        }
    }
}

impl fmt::Display for MatchRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "round {} game {}", self.round + 1, self.game + 1)
    }
}

/// One round of a single-elimination bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketRound {
    /// Round number (1-indexed)
    pub number: usize,
    /// Date shared by every game of the round
    pub date: NaiveDate,
    pub(super) games: Vec<Match>,
}

impl BracketRound {
    pub(super) fn new(number: usize, date: NaiveDate, games: Vec<Match>) -> Self {
        Self {
            number,
            date,
            games,
        }
    }

    #[must_use]
    pub fn games(&self) -> &[Match] {
        &self.games
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

/// A single-elimination bracket, opening round first and final last.
///
/// The shape is fixed at construction. Afterwards only `TBD` sides get
/// filled in and results get attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    pub(super) rounds: Vec<BracketRound>,
}

impl Bracket {
    pub(super) fn new(rounds: Vec<BracketRound>) -> Self {
        Self { rounds }
    }

    #[must_use]
    pub fn rounds(&self) -> &[BracketRound] {
        &self.rounds
    }

    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Round by its 1-indexed number.
    #[must_use]
    pub fn round(&self, number: usize) -> Option<&BracketRound> {
        number
            .checked_sub(1)
            .and_then(|index| self.rounds.get(index))
    }

    #[must_use]
    pub fn get(&self, at: MatchRef) -> Option<&Match> {
        self.rounds.get(at.round)?.games.get(at.game)
    }

    pub(super) fn get_mut(&mut self, at: MatchRef) -> Option<&mut Match> {
        self.rounds.get_mut(at.round)?.games.get_mut(at.game)
    }

    /// Coordinate of the first game equal to `game`.
    #[must_use]
    pub fn locate(&self, game: &Match) -> Option<MatchRef> {
        self.games()
            .find(|(_, candidate)| *candidate == game)
            .map(|(at, _)| at)
    }

    /// Every game with its coordinate, round by round.
    pub fn games(&self) -> impl Iterator<Item = (MatchRef, &Match)> {
        self.rounds.iter().enumerate().flat_map(|(round, r)| {
            r.games
                .iter()
                .enumerate()
                .map(move |(game, m)| (MatchRef::new(round, game), m))
        })
    }

    /// The championship game.
    #[must_use]
    pub fn final_game(&self) -> Option<&Match> {
        self.rounds.last()?.games.first()
    }
}
