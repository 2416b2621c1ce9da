//! Regular-season scheduling.
//!
//! This module provides:
//! - Double round-robin pairings via the circle method
//! - Weekday-constrained date assignment, one date per round
//! - Date and weekday parsing helpers
//!
//! ## Example
//!
//! ```
//! use chrono::{NaiveDate, Weekday};
//! use league_core::schedule::{PlayDays, RoundRobinScheduler};
//!
//! let scheduler = RoundRobinScheduler::default();
//! let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
//! let days = PlayDays::new([Weekday::Tue, Weekday::Sat]);
//!
//! let games = scheduler
//!     .generate(["Hawks", "Owls", "Bears", "Wolves"], &days, start)
//!     .unwrap();
//! assert_eq!(games.len(), 12);
//! ```

pub mod calendar;
pub mod round_robin;

pub use calendar::{PlayDays, add_days, parse_date, round_dates};
pub use round_robin::{Pairing, RoundRobinScheduler};
