use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::ai::determinizer::{Determinizer, DeterminizerStats};
use crate::domain::player_view::PlayerView;
use crate::domain::state::{RoundState, Seat};
use crate::domain::test_state_helpers::playing_round;
use crate::domain::{test_gens, test_prelude, Card};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: at any point of a random round, a sample fills every hidden
    /// hand to its real size from the unknown pool without duplicates, keeps
    /// the observer's hand, and honours known voids unless degraded.
    #[test]
    fn prop_samples_are_consistent_with_observations(
        (seats, cards, dealer, seed) in test_gens::round_params(),
        plays in 0usize..40,
        observer in 0u8..6,
    ) {
        let observer = observer % seats as Seat;
        let mut r = playing_round(seats, cards, dealer, seed);
        let mut rng = StdRng::seed_from_u64(seed.rotate_left(7));
        for _ in 0..plays {
            if r.state != RoundState::Playing {
                break;
            }
            let seat = r.turn;
            let card = *r.valid_moves(seat).choose(&mut rng).unwrap();
            r.play_card(seat, card).unwrap();
        }

        let view = PlayerView::for_seat(&r, observer).unwrap();
        let stats = DeterminizerStats::default();
        let det = Determinizer::new(&view, 10, &stats);
        let unknown: HashSet<Card> = det.unknown_pool().iter().copied().collect();

        for _ in 0..5 {
            let sample = det.sample(&mut rng);
            let mut dealt = HashSet::new();
            for (i, p) in sample.round.players.iter().enumerate() {
                prop_assert_eq!(p.hand.len(), r.players[i].hand.len());
                if i == observer as usize {
                    prop_assert_eq!(&p.hand, &r.players[i].hand);
                    continue;
                }
                for c in &p.hand {
                    prop_assert!(unknown.contains(c), "{} is not unknown to the observer", c);
                    prop_assert!(dealt.insert(*c), "{} dealt twice", c);
                    if !sample.degraded {
                        prop_assert!(view.round.memory.voids(i as Seat).admits(c));
                    }
                }
            }
            prop_assert_eq!(&sample.round.table, &r.table);
            prop_assert_eq!(sample.round.turn, r.turn);
        }
    }
}
