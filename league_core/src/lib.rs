//! # League Core
//!
//! Season scheduling and playoff brackets for a sports league.
//!
//! The crate covers two algorithms and the small league aggregate around
//! them:
//!
//! - **Regular season**: a double round-robin built with the circle method,
//!   one date per round, restricted to chosen weekdays
//! - **Playoffs**: a single-elimination bracket seeded from standings, padded
//!   to a power of two with byes for the top seeds, where each result moves
//!   the winner into the next round
//!
//! ## Core Modules
//!
//! - [`game`]: The shared [`Match`] fixture and its participants
//! - [`schedule`]: Round-robin pairings and date assignment
//! - [`bracket`]: Seeding, construction and progression of brackets
//! - [`league`]: Teams, schedule and bracket owned by one [`League`]
//! - [`config`]: Tunables read from the environment
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use league_core::{League, MatchRef, PlayDays, Team};
//!
//! let mut league = League::new("Metro");
//! for (name, wins) in [("Hawks", 9), ("Owls", 7), ("Bears", 5), ("Wolves", 3)] {
//!     league.add_team(Team::with_record(name, wins, 10 - wins)).unwrap();
//! }
//!
//! let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
//! let games = league.generate_schedule(&PlayDays::default(), start).unwrap();
//! assert_eq!(games.len(), 12);
//!
//! let playoffs = NaiveDate::from_ymd_opt(2025, 4, 5).unwrap();
//! let bracket = league.create_bracket(None, playoffs).unwrap();
//! assert_eq!(bracket.round_count(), 2);
//!
//! league.record_bracket_result(MatchRef::new(0, 0), 70, 60).unwrap();
//! ```

/// Error taxonomy shared by every module.
pub mod errors;
pub use errors::{LeagueError, LeagueResult};

/// Runtime tunables.
pub mod config;
pub use config::LeagueConfig;

/// Match fixtures and participants.
pub mod game;
pub use game::{Match, MatchResult, MatchState, Participant, Side};

/// Regular-season scheduling.
pub mod schedule;
pub use schedule::{PlayDays, RoundRobinScheduler};

/// Playoff brackets.
pub mod bracket;
pub use bracket::{Advancement, Bracket, BracketBuilder, BracketSeeder, MatchRef, Seeds};

/// League aggregate.
pub mod league;
pub use league::{League, Team};
