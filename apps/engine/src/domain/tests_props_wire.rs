use proptest::prelude::*;
use proptest::sample::select;

use crate::domain::dealing::full_deck;
use crate::domain::{test_prelude, Card, CardRef};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: wire JSON and the canonical string both parse back to the
    /// same card, and a hand of one resolves its own reference.
    #[test]
    fn prop_card_forms_round_trip(card in select(full_deck())) {
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, card);

        let parsed: Card = card.to_string().parse().unwrap();
        prop_assert_eq!(parsed, card);

        let wire = CardRef::from(card);
        prop_assert_eq!(wire.resolve(&[card]).unwrap(), card);
    }
}
