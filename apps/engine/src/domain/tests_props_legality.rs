use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::domain::cards_logic::hand_has_suit;
use crate::domain::state::RoundState;
use crate::domain::test_state_helpers::playing_round;
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: while a player holds the led suit, every legal move is that
    /// suit or a Wild/Null; otherwise the whole hand is legal.
    #[test]
    fn prop_legal_moves_respect_led_suit(
        (seats, cards, dealer, seed) in test_gens::round_params(),
    ) {
        let mut r = playing_round(seats, cards, dealer, seed);
        let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed);

        while r.state == RoundState::Playing {
            for seat in 0..seats as u8 {
                let hand = r.players[seat as usize].hand.clone();
                let moves = r.valid_moves(seat);
                prop_assert!(moves.iter().all(|c| hand.contains(c)));
                prop_assert_eq!(moves.is_empty(), hand.is_empty());

                match r.current_led_suit() {
                    Some(led) if hand_has_suit(&hand, led) => {
                        for c in &moves {
                            prop_assert!(c.suit().is_none() || c.is_numbered_of(led),
                                "{} offered while holding {}", c, led);
                        }
                    }
                    _ => prop_assert_eq!(moves.len(), hand.len()),
                }
            }

            let seat = r.turn;
            let choice = *r.valid_moves(seat).choose(&mut rng).unwrap();
            r.play_card(seat, choice).unwrap();
        }
    }
}
