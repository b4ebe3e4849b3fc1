use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::domain::state::RoundState;
use crate::domain::test_state_helpers::playing_round;
use crate::domain::{test_gens, test_prelude, Card};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: no card is ever duplicated or lost. From every seat's point
    /// of view, other hands + table + history account for every dealt card
    /// not in its own hand.
    #[test]
    fn prop_cards_are_conserved(
        (seats, cards, dealer, seed) in test_gens::round_params(),
    ) {
        let mut r = playing_round(seats, cards, dealer, seed);
        let mut rng = StdRng::seed_from_u64(seed.rotate_left(17));
        let dealt = seats * cards as usize;
        let mut voids_before: Vec<_> = (0..seats as u8).map(|s| r.memory.voids(s)).collect();

        loop {
            for me in 0..seats {
                let others: usize = r.players.iter().enumerate()
                    .filter(|(i, _)| *i != me)
                    .map(|(_, p)| p.hand.len())
                    .sum();
                prop_assert_eq!(
                    others + r.table.len() + r.history.len(),
                    dealt - r.players[me].hand.len()
                );
            }
            let all: Vec<Card> = r.players.iter().flat_map(|p| p.hand.iter().copied())
                .chain(r.table.iter().map(|(_, c)| *c))
                .chain(r.history.iter().map(|(_, c)| *c))
                .collect();
            prop_assert_eq!(all.iter().collect::<HashSet<_>>().len(), dealt);

            for s in 0..seats as u8 {
                let now = r.memory.voids(s);
                for suit in voids_before[s as usize].iter() {
                    prop_assert!(now.contains(suit), "void sets only grow");
                }
                voids_before[s as usize] = now;
            }

            if r.state != RoundState::Playing {
                break;
            }
            let seat = r.turn;
            let choice = *r.valid_moves(seat).choose(&mut rng).unwrap();
            r.play_card(seat, choice).unwrap();
        }

        prop_assert_eq!(r.state, RoundState::Finished);
        prop_assert_eq!(r.tricks_completed, cards);
        prop_assert_eq!(r.tricks_won().iter().map(|t| *t as usize).sum::<usize>(), cards as usize);
        prop_assert_eq!(r.history.len(), dealt);
    }
}
