//! Property tests over the rule table and session counters.

use proptest::prelude::*;

use rpsls::{resolve, Element, Engine, Verdict};

fn element() -> impl Strategy<Value = Element> {
    (0..Element::COUNT).prop_map(|i| Element::ALL[i])
}

proptest! {
    #[test]
    fn swapped_choices_flip_winner(a in element(), b in element()) {
        let ab = resolve(a, b);
        let ba = resolve(b, a);

        prop_assert_eq!(ab.verdict.flipped(), ba.verdict);
        prop_assert_eq!(ab.narration, ba.narration);
    }

    #[test]
    fn only_identical_choices_tie(a in element(), b in element()) {
        let outcome = resolve(a, b);
        prop_assert_eq!(outcome.verdict == Verdict::Tie, a == b);
        if a == b {
            prop_assert_eq!(outcome.message(), "Tie game.");
        }
    }

    #[test]
    fn message_ends_with_verdict(a in element(), b in element()) {
        let outcome = resolve(a, b);
        let message = outcome.message();
        match outcome.verdict {
            Verdict::PlayerWins => prop_assert!(message.ends_with(" You win!")),
            Verdict::ComputerWins => prop_assert!(message.ends_with(" You lose.")),
            Verdict::Tie => prop_assert_eq!(message, "Tie game."),
        }
    }

    #[test]
    fn counters_sum_to_rounds_since_reset(
        seed in any::<u64>(),
        before in prop::collection::vec(element(), 0..20),
        after in prop::collection::vec(element(), 0..50),
    ) {
        let engine = Engine::with_seed(seed);
        for e in &before {
            engine.resolve_round(*e);
        }
        engine.reset();
        for e in &after {
            engine.resolve_round(*e);
        }

        prop_assert_eq!(engine.scoreboard().total(), after.len() as u64);
    }

    #[test]
    fn simulation_count_parses_digits(n in 1u64..=1_000_000) {
        prop_assert_eq!(
            rpsls::parse_simulation_count(&n.to_string(), 1_000_000).unwrap(),
            n
        );
    }
}
