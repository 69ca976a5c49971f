//! Statistics for a finished simulation batch.

use serde::{Deserialize, Serialize};

use crate::core::Element;
use crate::rules::RoundOutcome;
use crate::session::Scoreboard;

/// Summary of one simulation run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Rounds requested.
    pub games: u64,

    /// Rounds actually played.
    pub completed: u64,

    /// True if the run stopped before `games` rounds.
    pub cancelled: bool,

    /// Outcome tally for this batch alone.
    pub batch: Scoreboard,

    /// Session counters when the batch ended.
    pub session: Scoreboard,

    /// Player choices by element index.
    pub player_draws: [u64; Element::COUNT],

    /// Computer choices by element index.
    pub computer_draws: [u64; Element::COUNT],

    /// Wall time spent in the worker (microseconds).
    pub time_us: u64,
}

impl SimulationReport {
    pub fn new(games: u64) -> Self {
        Self {
            games,
            ..Self::default()
        }
    }

    /// Count one simulated round.
    pub fn observe(&mut self, outcome: &RoundOutcome) {
        self.completed += 1;
        self.batch.record(outcome.verdict);
        self.player_draws[outcome.player.index()] += 1;
        self.computer_draws[outcome.computer.index()] += 1;
    }

    /// Observed share of computer draws that were `element`.
    #[must_use]
    pub fn computer_frequency(&self, element: Element) -> f64 {
        if self.completed == 0 {
            0.0
        } else {
            self.computer_draws[element.index()] as f64 / self.completed as f64
        }
    }

    /// Observed share of player draws that were `element`.
    #[must_use]
    pub fn player_frequency(&self, element: Element) -> f64 {
        if self.completed == 0 {
            0.0
        } else {
            self.player_draws[element.index()] as f64 / self.completed as f64
        }
    }

    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.completed as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::resolve;

    #[test]
    fn test_report_default() {
        let report = SimulationReport::new(10);
        assert_eq!(report.games, 10);
        assert_eq!(report.completed, 0);
        assert_eq!(report.computer_frequency(Element::Rock), 0.0);
        assert_eq!(report.games_per_second(), 0.0);
    }

    #[test]
    fn test_observe() {
        let mut report = SimulationReport::new(4);
        report.observe(&resolve(Element::Rock, Element::Scissors));
        report.observe(&resolve(Element::Rock, Element::Paper));
        report.observe(&resolve(Element::Lizard, Element::Paper));
        report.observe(&resolve(Element::Spock, Element::Spock));

        assert_eq!(report.completed, 4);
        assert_eq!(report.batch.player_wins, 2);
        assert_eq!(report.batch.computer_wins, 1);
        assert_eq!(report.batch.tie_games, 1);
        assert_eq!(report.player_draws[Element::Rock.index()], 2);
        assert_eq!(report.computer_frequency(Element::Paper), 0.5);
        assert_eq!(report.player_frequency(Element::Spock), 0.25);
    }

    #[test]
    fn test_games_per_second() {
        let mut report = SimulationReport::new(1000);
        report.completed = 1000;
        report.time_us = 500_000;
        assert_eq!(report.games_per_second(), 2000.0);
    }

    #[test]
    fn test_serialization() {
        let mut report = SimulationReport::new(1);
        report.observe(&resolve(Element::Paper, Element::Rock));
        let json = serde_json::to_string(&report).unwrap();
        let back: SimulationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }
}
