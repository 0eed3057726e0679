//! Running win/loss tally across games
//!
//! Kept in memory for the life of the process only.

use super::GameStatus;

/// Results of the finished games played so far
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: u32,
    pub games_won: u32,
    /// `win_distribution[n]` counts wins that took `n` attempts
    pub win_distribution: Vec<u32>,
}

impl Statistics {
    /// Record a finished game
    ///
    /// Games still in progress (for example abandoned by a reset) are ignored.
    pub fn record(&mut self, status: GameStatus, attempts_used: u32) {
        match status {
            GameStatus::InProgress => {}
            GameStatus::Lost => self.games_played += 1,
            GameStatus::Won => {
                self.games_played += 1;
                self.games_won += 1;
                let slot = attempts_used as usize;
                if self.win_distribution.len() <= slot {
                    self.win_distribution.resize(slot + 1, 0);
                }
                self.win_distribution[slot] += 1;
            }
        }
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played) * 100.0
        }
    }

    /// Mean attempts per win, if any game was won
    #[must_use]
    pub fn average_attempts(&self) -> Option<f64> {
        if self.games_won == 0 {
            return None;
        }
        let total: u64 = self
            .win_distribution
            .iter()
            .enumerate()
            .map(|(attempts, &count)| attempts as u64 * u64::from(count))
            .sum();
        Some(total as f64 / f64::from(self.games_won))
    }
}
