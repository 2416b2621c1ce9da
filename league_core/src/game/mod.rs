//! Fixtures shared by the season schedule and the playoff bracket.
//!
//! A [`Match`] is a dated pairing of two [`Participant`]s with an optional
//! result. Sides are either real teams or the `BYE`/`TBD` sentinels.

pub mod entities;

pub use entities::{
    BYE_LABEL, Match, MatchResult, MatchState, Participant, Side, TBD_LABEL, same_team, team_key,
};
