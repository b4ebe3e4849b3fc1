//! Deck construction, shuffling and dealing.

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::rules::{validate_hand_size, validate_player_count, DECK_SIZE};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

static DECK: Lazy<Vec<Card>> = Lazy::new(build_deck);

/// The 60-card deck: 52 numbered cards, then four Wilds and four Nulls.
pub fn full_deck() -> Vec<Card> {
    DECK.clone()
}

/// Read-only view of the deck in [`full_deck`] order.
pub fn deck() -> &'static [Card] {
    &DECK
}

fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::all() {
            deck.push(Card::Numbered { suit, rank });
        }
    }
    for id in 0..Card::SPECIAL_COPIES {
        deck.push(Card::Wild(id));
    }
    for id in 0..Card::SPECIAL_COPIES {
        deck.push(Card::Null(id));
    }
    deck
}

/// Uniform Fisher-Yates permutation driven by the caller's generator.
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// Deal `hand_size` cards to each of `players` seats, one card per seat in
/// seat order, taking from the top (end) of `deck`. Hands come back sorted.
pub fn deal_hands(
    deck: &mut Vec<Card>,
    players: usize,
    hand_size: u8,
) -> Result<Vec<Vec<Card>>, DomainError> {
    validate_player_count(players)?;
    validate_hand_size(players, hand_size)?;

    let mut hands: Vec<Vec<Card>> = (0..players)
        .map(|_| Vec::with_capacity(hand_size as usize))
        .collect();
    for _ in 0..hand_size {
        for hand in hands.iter_mut() {
            let card = deck.pop().ok_or_else(|| {
                DomainError::validation_other("Deck exhausted while dealing")
            })?;
            hand.push(card);
        }
    }
    for hand in hands.iter_mut() {
        hand.sort();
    }
    Ok(hands)
}
