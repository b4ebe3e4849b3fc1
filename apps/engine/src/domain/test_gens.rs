// Proptest generators for domain types.
// Cards are drawn from a shuffled real deck so every generated set is unique.

use proptest::prelude::*;

use crate::domain::dealing::full_deck;
use crate::domain::state::Seat;
use crate::domain::{Card, Suit};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Hearts),
        Just(Suit::Diamonds),
        Just(Suit::Clubs),
        Just(Suit::Spades),
    ]
}

/// Generate an optional trump (None = no trump this deal)
pub fn trump() -> impl Strategy<Value = Option<Suit>> {
    prop_oneof![1 => Just(None), 4 => suit().prop_map(Some)]
}

/// Generate a vector of `count` distinct cards
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(full_deck())
        .prop_shuffle()
        .prop_map(move |deck| deck.into_iter().take(count).collect())
}

/// A full trick for 3..=6 seats
pub fn trick() -> impl Strategy<Value = Vec<Card>> {
    (3usize..=6).prop_flat_map(unique_cards)
}

/// A full trick containing at least one Wild
pub fn trick_with_wild() -> impl Strategy<Value = Vec<Card>> {
    (3usize..=6, any::<prop::sample::Index>(), 0u8..4).prop_flat_map(|(n, at, wild_id)| {
        unique_cards(n).prop_map(move |mut cards| {
            let wild = Card::Wild(wild_id);
            cards.retain(|c| *c != wild);
            cards.truncate(n - 1);
            cards.insert(at.index(n), wild);
            cards
        })
    })
}

/// Table shape for a random round: (seats, cards per player, dealer, seed)
pub fn round_params() -> impl Strategy<Value = (usize, u8, Seat, u64)> {
    (3usize..=6).prop_flat_map(|seats| {
        let max_cards = (60 / seats).min(10) as u8;
        (
            Just(seats),
            1u8..=max_cards,
            0..seats as Seat,
            any::<u64>(),
        )
    })
}
