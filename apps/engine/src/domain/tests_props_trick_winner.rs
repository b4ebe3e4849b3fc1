use proptest::prelude::*;

use crate::domain::tricks::winning_index;
use crate::domain::{test_gens, test_prelude, Card, Suit};

/// Independent formulation: Wild first, else best trump, else best led card,
/// else the first card (all Nulls).
fn oracle_winner(cards: &[Card], trump: Option<Suit>) -> usize {
    if let Some(i) = cards.iter().position(Card::is_wild) {
        return i;
    }
    let best_of = |suit: Suit| {
        cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_numbered_of(suit))
            .max_by_key(|(_, c)| c.rank())
            .map(|(i, _)| i)
    };
    if let Some(i) = trump.and_then(best_of) {
        return i;
    }
    let led = cards.iter().find_map(|c| c.suit());
    led.and_then(best_of).unwrap_or(0)
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: if any Wild is present, the first Wild wins regardless of trump.
    #[test]
    fn prop_first_wild_always_wins(
        trick in test_gens::trick_with_wild(),
        trump in test_gens::trump(),
    ) {
        let first = trick.iter().position(Card::is_wild).unwrap();
        prop_assert_eq!(winning_index(&trick, trump), first);
    }

    /// Property: the scan agrees with the direct rule statement.
    #[test]
    fn prop_winner_matches_oracle(
        trick in test_gens::trick(),
        trump in test_gens::trump(),
    ) {
        prop_assert_eq!(
            winning_index(&trick, trump),
            oracle_winner(&trick, trump),
            "trick={:?} trump={:?}", trick, trump
        );
    }

    /// Property: a Null never wins unless every card is a Null.
    #[test]
    fn prop_null_wins_only_all_null_tricks(
        trick in test_gens::trick(),
        trump in test_gens::trump(),
    ) {
        let w = winning_index(&trick, trump);
        if trick[w].is_null() {
            prop_assert!(trick.iter().all(Card::is_null));
            prop_assert_eq!(w, 0);
        }
    }
}
