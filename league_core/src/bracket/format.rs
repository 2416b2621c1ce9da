//! Text rendering of a bracket.

use std::fmt;

use super::models::Bracket;

pub(crate) const RESULTS_PENDING: &str =
    "Bracket results are not yet available. Some games are still unplayed.";

impl fmt::Display for Bracket {
    /// Each round under its label and date, one game per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rounds.is_empty() {
            return writeln!(f, "No bracket has been scheduled.");
        }

        for round in &self.rounds {
            writeln!(f, "{} ({})", self.round_label(round.number), round.date)?;
            for game in &round.games {
                writeln!(f, "  {} vs {} - {}", game.home(), game.away(), game.outcome())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Bracket {
    /// Champion and runner-up, or a notice while games remain unplayed.
    #[must_use]
    pub fn results_summary(&self) -> String {
        let (Some(champion), Some(runner_up)) = (self.champion(), self.runner_up()) else {
            return RESULTS_PENDING.to_string();
        };

        format!(
            "Bracket Results\n====================\nChampion: {champion}\nRunner-up: {runner_up}\n"
        )
    }
}
