//! Round builders for unit tests.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::state::{Round, RoundState, Seat};
use crate::domain::{Card, Suit};

pub fn seat_names(seats: usize) -> Vec<String> {
    (0..seats).map(|i| format!("p{i}")).collect()
}

/// A dealt round in `Bidding`. A Wild indicator is settled as Spades.
pub fn bidding_round(seats: usize, cards: u8, dealer: Seat) -> Round {
    let mut r = Round::with_names(&seat_names(seats), cards, dealer).unwrap();
    r.setup(&mut StdRng::seed_from_u64(7)).unwrap();
    if r.state == RoundState::AwaitingTrumpChoice {
        r.set_trump_suit(dealer, Suit::Spades).unwrap();
    }
    r
}

/// A dealt round in `Playing`: everyone bids the first legal value.
pub fn playing_round(seats: usize, cards: u8, dealer: Seat, seed: u64) -> Round {
    let mut r = Round::with_names(&seat_names(seats), cards, dealer).unwrap();
    r.setup(&mut StdRng::seed_from_u64(seed)).unwrap();
    if r.state == RoundState::AwaitingTrumpChoice {
        r.set_trump_suit(dealer, Suit::Hearts).unwrap();
    }
    while r.state == RoundState::Bidding {
        let seat = r.turn;
        let bid = r.legal_bids(seat)[0];
        r.make_bid(seat, bid).unwrap();
    }
    r
}

/// A `Playing` round with hand-picked hands; every seat bid 0, turn at
/// `first_to_act`.
pub fn round_from_hands(hands: Vec<Vec<Card>>, dealer: Seat, trump: Option<Suit>) -> Round {
    let seats = hands.len();
    let cards = hands.iter().map(Vec::len).max().unwrap_or(1).max(1) as u8;
    let mut r = Round::with_names(&seat_names(seats), cards, dealer).unwrap();
    for (player, hand) in r.players.iter_mut().zip(hands) {
        player.hand = hand;
        player.bid = Some(0);
    }
    r.trump = trump;
    r.state = RoundState::Playing;
    r.turn = r.first_to_act;
    r
}

/// A `Finished` round from `(bid, tricks)` per seat.
pub fn finished_round(bid_tricks: &[(u8, u8)]) -> Round {
    let total: u32 = bid_tricks.iter().map(|(_, t)| *t as u32).sum();
    let cards = total.max(1) as u8;
    let mut r = Round::with_names(&seat_names(bid_tricks.len()), cards, 0).unwrap();
    for (player, (bid, tricks)) in r.players.iter_mut().zip(bid_tricks) {
        player.bid = Some(*bid);
        player.tricks_won = *tricks;
    }
    r.tricks_completed = total as u8;
    r.state = RoundState::Finished;
    r
}
