//! Date helpers for the season schedule.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::{LeagueError, LeagueResult};

/// Ordered set of weekdays on which rounds may be played.
///
/// Order follows first mention and duplicates are ignored. An empty set
/// means "whatever weekday the schedule starts on".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayDays(Vec<Weekday>);

impl PlayDays {
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mut unique = Vec::with_capacity(7);
        for day in days {
            if !unique.contains(&day) {
                unique.push(day);
            }
        }
        Self(unique)
    }

    /// Parse a comma separated list such as `"tue,sat"` or `"Monday, Friday"`.
    ///
    /// Blank input yields an empty set.
    pub fn parse(raw: &str) -> LeagueResult<Self> {
        let days = raw
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<Weekday>()
                    .map_err(|_| LeagueError::InvalidWeekday(part.to_string()))
            })
            .collect::<LeagueResult<Vec<_>>>()?;
        Ok(Self::new(days))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, day: Weekday) -> bool {
        self.0.contains(&day)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Weekday] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Weekday> {
        self.0
    }

    /// Concrete days for a schedule starting on `start`.
    #[must_use]
    pub fn resolve(&self, start: NaiveDate) -> Self {
        if self.is_empty() {
            Self(vec![start.weekday()])
        } else {
            self.clone()
        }
    }
}

impl FromIterator<Weekday> for PlayDays {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> LeagueResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| LeagueError::InvalidDate(format!("{raw:?}: {e}")))
}

/// Add `days` to `date`, reporting overflow as an invalid date.
pub fn add_days(date: NaiveDate, days: u32) -> LeagueResult<NaiveDate> {
    date.checked_add_days(chrono::Days::new(u64::from(days)))
        .ok_or_else(|| LeagueError::InvalidDate(format!("{date} + {days} days is out of range")))
}

/// Pick `count` strictly increasing dates on or after `start`, each on one
/// of `play_days` (or on `start`'s weekday when the set is empty).
///
/// `max_search_days` bounds the gap between one date and the next, not the
/// length of the whole season.
///
/// # Errors
///
/// `InvalidDate` if the walk passes the end of the calendar or a gap
/// exceeds `max_search_days` days.
pub fn round_dates(
    start: NaiveDate,
    play_days: &PlayDays,
    count: usize,
    max_search_days: u32,
) -> LeagueResult<Vec<NaiveDate>> {
    let play_days = play_days.resolve(start);
    let mut dates = Vec::with_capacity(count);
    let mut current = start;
    let mut gap: u32 = 0;

    while dates.len() < count {
        if play_days.contains(current.weekday()) {
            dates.push(current);
            if dates.len() == count {
                break;
            }
            gap = 0;
        }

        gap += 1;
        if gap > max_search_days {
            return Err(LeagueError::InvalidDate(format!(
                "no play day within {max_search_days} days after {current}"
            )));
        }
        current = current.succ_opt().ok_or_else(|| {
            LeagueError::InvalidDate(format!("no calendar date after {current}"))
        })?;
    }

    Ok(dates)
}
