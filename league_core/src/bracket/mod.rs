//! Single-elimination playoff brackets.
//!
//! This module implements:
//! - Seeding from standings (wins, then losses, then name)
//! - Power-of-two slot padding with byes for the top seeds
//! - Round skeletons with `TBD` placeholders
//! - Winner advancement addressed by [`MatchRef`] coordinates
//! - Completion, champion and runner-up queries
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use league_core::bracket::{BracketBuilder, BracketSeeder, MatchRef};
//! use league_core::league::Team;
//!
//! let teams = vec![
//!     Team::with_record("Hawks", 9, 1),
//!     Team::with_record("Owls", 7, 3),
//!     Team::with_record("Bears", 4, 6),
//! ];
//!
//! let seeds = BracketSeeder::seed(&teams).unwrap();
//! let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
//! let mut bracket = BracketBuilder::default().build(&seeds, date).unwrap();
//!
//! // Hawks have a bye and already wait in the final
//! assert_eq!(bracket.final_game().unwrap().home().to_string(), "Hawks");
//!
//! bracket.record_and_advance(MatchRef::new(0, 1), 66, 59).unwrap();
//! bracket.record_and_advance(MatchRef::new(1, 0), 71, 80).unwrap();
//! assert_eq!(bracket.champion(), Some("Owls"));
//! ```

pub mod builder;
pub mod format;
pub mod models;
pub mod progression;
pub mod seeding;

pub use builder::BracketBuilder;
pub use models::{Bracket, BracketRound, MatchRef};
pub use progression::{Advancement, RoundLabel};
pub use seeding::{BracketSeeder, Seeds, SlotPlan};
