//! What one seat is entitled to see.
//!
//! The decision engine only ever receives a [`PlayerView`]: a copy of the
//! round with every other seat's hand removed. Hand sizes stay available so
//! hidden hands can be re-sampled.

use crate::domain::state::{invalid_seat, Round, RoundState, Seat};
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone)]
pub struct PlayerView {
    pub seat: Seat,
    /// Round with hidden hands emptied.
    pub round: Round,
    /// Real hand size per seat, including hidden ones.
    pub hand_sizes: Vec<usize>,
    /// Opponents' cards shown face-out (open-hand bidding only).
    pub face_up: Vec<(Seat, Card)>,
}

impl PlayerView {
    pub fn for_seat(round: &Round, seat: Seat) -> Result<Self, DomainError> {
        if seat as usize >= round.seat_count() {
            return Err(invalid_seat(seat));
        }
        let hand_sizes: Vec<usize> = round.players.iter().map(|p| p.hand.len()).collect();
        let open_bidding = round.open_hand
            && round.cards_per_player == 1
            && matches!(
                round.state,
                RoundState::Bidding | RoundState::AwaitingTrumpChoice
            );

        let mut face_up = Vec::new();
        let mut visible = round.clone();
        for (i, player) in visible.players.iter_mut().enumerate() {
            let other = i as Seat;
            if other == seat {
                if open_bidding {
                    player.hand.clear();
                }
                continue;
            }
            if open_bidding {
                face_up.extend(player.hand.iter().map(|&c| (other, c)));
            }
            player.hand.clear();
        }

        Ok(Self {
            seat,
            round: visible,
            hand_sizes,
            face_up,
        })
    }

    /// Own hand; empty while it is held face-out in open-hand bidding.
    pub fn hand(&self) -> &[Card] {
        &self.round.players[self.seat as usize].hand
    }

    pub fn is_my_turn(&self) -> bool {
        self.round.turn == self.seat
    }

    pub fn legal_bids(&self) -> Vec<u8> {
        self.round.legal_bids(self.seat)
    }

    pub fn legal_plays(&self) -> Vec<Card> {
        if !self.is_my_turn() {
            return Vec::new();
        }
        self.round.valid_moves(self.seat)
    }

    pub fn legal_trumps(&self) -> Vec<Suit> {
        if self.round.state == RoundState::AwaitingTrumpChoice && self.is_my_turn() {
            Suit::ALL.to_vec()
        } else {
            Vec::new()
        }
    }

    /// Every card this seat can see: own hand, table, history, the trump
    /// indicator and any face-up opponent cards.
    pub fn visible_cards(&self) -> Vec<Card> {
        let r = &self.round;
        self.hand()
            .iter()
            .copied()
            .chain(r.table.iter().map(|(_, c)| *c))
            .chain(r.history.iter().map(|(_, c)| *c))
            .chain(r.trump_card)
            .chain(self.face_up.iter().map(|(_, c)| *c))
            .collect()
    }

    /// The bid this seat committed to, 0 before bidding.
    pub fn my_bid(&self) -> u8 {
        self.round.players[self.seat as usize].bid.unwrap_or(0)
    }
}
