//! The fixed rule table.
//!
//! Each of the ten unordered pairs of distinct elements has exactly one
//! winner and one narration sentence. The sentence is the same whichever
//! side holds the winning element.

use crate::core::Element;

/// A winning relation between two distinct elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Relation {
    pub winner: Element,
    pub loser: Element,
    pub narration: &'static str,
}

const fn rel(winner: Element, loser: Element, narration: &'static str) -> Relation {
    Relation {
        winner,
        loser,
        narration,
    }
}

/// All ten relations, grouped by winner.
pub static RELATIONS: [Relation; 10] = [
    rel(Element::Rock, Element::Scissors, "Rock smashes scissors."),
    rel(Element::Rock, Element::Lizard, "Rock crushes lizard."),
    rel(Element::Paper, Element::Rock, "Paper covers rock."),
    rel(Element::Paper, Element::Spock, "Paper disproves Spock."),
    rel(Element::Scissors, Element::Paper, "Scissors cuts paper."),
    rel(Element::Scissors, Element::Lizard, "Scissors decapitate lizard."),
    rel(Element::Lizard, Element::Paper, "Lizard eats paper."),
    rel(Element::Lizard, Element::Spock, "Lizard poisons Spock."),
    rel(Element::Spock, Element::Rock, "Spock vaporizes rock."),
    rel(Element::Spock, Element::Scissors, "Spock smashes scissors."),
];

/// Find the relation between two elements, in either order.
///
/// Returns `None` only when `a == b`.
#[must_use]
pub fn relation(a: Element, b: Element) -> Option<&'static Relation> {
    RELATIONS
        .iter()
        .find(|r| (r.winner == a && r.loser == b) || (r.winner == b && r.loser == a))
}

/// Does `a` beat `b`?
#[must_use]
pub fn beats(a: Element, b: Element) -> bool {
    relation(a, b).is_some_and(|r| r.winner == a)
}

/// Narration sentence for a pair of distinct elements.
#[must_use]
pub fn narration(a: Element, b: Element) -> Option<&'static str> {
    relation(a, b).map(|r| r.narration)
}

/// Elements that `element` defeats.
pub fn defeats(element: Element) -> impl Iterator<Item = Element> {
    RELATIONS
        .iter()
        .filter(move |r| r.winner == element)
        .map(|r| r.loser)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_total_and_antisymmetric() {
        for a in Element::ALL {
            for b in Element::ALL {
                if a == b {
                    assert!(!beats(a, b));
                    assert!(relation(a, b).is_none());
                } else {
                    assert!(beats(a, b) ^ beats(b, a), "{a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn test_each_element_beats_two() {
        for e in Element::ALL {
            assert_eq!(defeats(e).count(), 2, "{e}");
        }
    }

    #[test]
    fn test_pairs_are_unique() {
        for (i, r) in RELATIONS.iter().enumerate() {
            for other in &RELATIONS[i + 1..] {
                let same = (r.winner == other.winner && r.loser == other.loser)
                    || (r.winner == other.loser && r.loser == other.winner);
                assert!(!same);
            }
        }
    }

    #[test]
    fn test_narration_is_order_independent() {
        assert_eq!(
            narration(Element::Rock, Element::Scissors),
            Some("Rock smashes scissors.")
        );
        assert_eq!(
            narration(Element::Scissors, Element::Rock),
            Some("Rock smashes scissors.")
        );
        assert_eq!(narration(Element::Spock, Element::Spock), None);
    }

    #[test]
    fn test_rule_rows() {
        let rows = [
            (Element::Rock, [Element::Scissors, Element::Lizard]),
            (Element::Paper, [Element::Rock, Element::Spock]),
            (Element::Scissors, [Element::Paper, Element::Lizard]),
            (Element::Lizard, [Element::Paper, Element::Spock]),
            (Element::Spock, [Element::Rock, Element::Scissors]),
        ];
        for (winner, losers) in rows {
            for loser in losers {
                assert!(beats(winner, loser), "{winner} should beat {loser}");
            }
        }
    }
}
