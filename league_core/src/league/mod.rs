//! League aggregate tying teams, the regular season and the playoffs together.
//!
//! [`League`] owns its teams, the generated schedule and at most one
//! bracket. All mutating calls take `&mut self`, so a single owner
//! serializes them.
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use league_core::league::{League, Team};
//! use league_core::schedule::PlayDays;
//!
//! let mut league = League::new("Metro");
//! league.add_team(Team::new("Hawks")).unwrap();
//! league.add_team(Team::new("Owls")).unwrap();
//!
//! let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
//! league.generate_schedule(&PlayDays::default(), start).unwrap();
//! assert!(league.generate_schedule(&PlayDays::default(), start).is_err());
//!
//! league.record_result(start, "Hawks", "Owls", 70, 62).unwrap();
//! assert_eq!(league.team("hawks").unwrap().wins, 1);
//! ```

pub mod models;
pub mod playoffs;
pub mod season;

pub use models::{League, LeagueDescription, Team};
