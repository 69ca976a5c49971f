//! Round resolution.

use serde::{Deserialize, Serialize};

use super::table;
use crate::core::Element;

/// Narration for a drawn round.
pub const TIE_MESSAGE: &str = "Tie game.";
const WIN_SUFFIX: &str = " You win!";
const LOSE_SUFFIX: &str = " You lose.";

/// Who took a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    PlayerWins,
    ComputerWins,
    Tie,
}

impl Verdict {
    /// The verdict seen from the other side of the table.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Verdict::PlayerWins => Verdict::ComputerWins,
            Verdict::ComputerWins => Verdict::PlayerWins,
            Verdict::Tie => Verdict::Tie,
        }
    }
}

/// A resolved round: both choices, the verdict, and its narration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundOutcome {
    pub player: Element,
    pub computer: Element,
    pub verdict: Verdict,
    /// Pair sentence such as "Rock crushes lizard.". `None` on a tie.
    pub narration: Option<&'static str>,
}

impl RoundOutcome {
    /// Full result text shown to the player.
    ///
    /// ```
    /// use rpsls::core::Element;
    /// use rpsls::rules::resolve;
    ///
    /// let outcome = resolve(Element::Spock, Element::Lizard);
    /// assert_eq!(outcome.message(), "Lizard poisons Spock. You lose.");
    /// ```
    #[must_use]
    pub fn message(&self) -> String {
        match (self.verdict, self.narration) {
            (Verdict::PlayerWins, Some(n)) => format!("{n}{WIN_SUFFIX}"),
            (Verdict::ComputerWins, Some(n)) => format!("{n}{LOSE_SUFFIX}"),
            _ => TIE_MESSAGE.to_string(),
        }
    }
}

/// Resolve a round between two known choices. Pure.
#[must_use]
pub fn resolve(player: Element, computer: Element) -> RoundOutcome {
    let (verdict, narration) = match table::relation(player, computer) {
        None => (Verdict::Tie, None),
        Some(r) if r.winner == player => (Verdict::PlayerWins, Some(r.narration)),
        Some(r) => (Verdict::ComputerWins, Some(r.narration)),
    };

    RoundOutcome {
        player,
        computer,
        verdict,
        narration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rock_beats_scissors() {
        let outcome = resolve(Element::Rock, Element::Scissors);
        assert_eq!(outcome.verdict, Verdict::PlayerWins);
        assert_eq!(outcome.message(), "Rock smashes scissors. You win!");
    }

    #[test]
    fn test_spock_loses_to_lizard() {
        let outcome = resolve(Element::Spock, Element::Lizard);
        assert_eq!(outcome.verdict, Verdict::ComputerWins);
        assert_eq!(outcome.narration, Some("Lizard poisons Spock."));
    }

    #[test]
    fn test_ties() {
        for e in Element::ALL {
            let outcome = resolve(e, e);
            assert_eq!(outcome.verdict, Verdict::Tie);
            assert_eq!(outcome.narration, None);
            assert_eq!(outcome.message(), "Tie game.");
        }
    }

    #[test]
    fn test_swapped_sides_flip_verdict() {
        for a in Element::ALL {
            for b in Element::ALL {
                let ab = resolve(a, b);
                let ba = resolve(b, a);
                assert_eq!(ab.verdict.flipped(), ba.verdict);
                assert_eq!(ab.narration, ba.narration);
            }
        }
    }

    #[test]
    fn test_rock_crushes_lizard_punctuation() {
        assert_eq!(
            resolve(Element::Lizard, Element::Rock).message(),
            "Rock crushes lizard. You lose."
        );
    }
}
