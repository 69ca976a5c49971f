//! Running win/loss/tie tally.

use serde::{Deserialize, Serialize};

use crate::rules::Verdict;

/// Counters for one session.
///
/// `total()` always equals the number of rounds recorded since the last
/// reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scoreboard {
    pub player_wins: u64,
    pub computer_wins: u64,
    pub tie_games: u64,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one round.
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::PlayerWins => self.player_wins += 1,
            Verdict::ComputerWins => self.computer_wins += 1,
            Verdict::Tie => self.tie_games += 1,
        }
    }

    /// Zero all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Rounds recorded.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.player_wins + self.computer_wins + self.tie_games
    }

    /// Counter for a verdict.
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> u64 {
        match verdict {
            Verdict::PlayerWins => self.player_wins,
            Verdict::ComputerWins => self.computer_wins,
            Verdict::Tie => self.tie_games,
        }
    }

    /// "Player Wins: 1,234"
    #[must_use]
    pub fn player_wins_text(&self) -> String {
        format!("Player Wins: {}", group_thousands(self.player_wins))
    }

    /// "Computer Wins: 1,234"
    #[must_use]
    pub fn computer_wins_text(&self) -> String {
        format!("Computer Wins: {}", group_thousands(self.computer_wins))
    }

    /// "Tie Games: 1,234"
    #[must_use]
    pub fn tie_games_text(&self) -> String {
        format!("Tie Games: {}", group_thousands(self.tie_games))
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | {}",
            self.player_wins_text(),
            self.computer_wins_text(),
            self.tie_games_text()
        )
    }
}

/// Format with comma thousands separators.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
