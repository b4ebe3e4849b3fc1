//! Trump selection and bidding.

use crate::domain::state::{next_seat, Round, RoundState, Seat};
use crate::domain::Suit;
use crate::errors::domain::{DomainError, ValidationKind};

impl Round {
    /// The dealer names trump after a Wild indicator.
    pub fn set_trump_suit(&mut self, seat: Seat, suit: Suit) -> Result<(), DomainError> {
        self.require_state(RoundState::AwaitingTrumpChoice, "set_trump_suit")?;
        self.require_turn(seat, "set_trump_suit")?;

        self.trump = Some(suit);
        self.state = RoundState::Bidding;
        self.turn = self.first_to_act;
        tracing::debug!(seat, trump = %suit, "trump named");
        Ok(())
    }

    /// The one value the dealer may not bid, if any.
    pub fn forbidden_bid(&self) -> Option<u8> {
        let others = self.bids_sum();
        let target = self.cards_per_player as u32;
        (others <= target).then(|| (target - others) as u8)
    }

    /// Record `seat`'s bid. The dealer, bidding last, may not make the total
    /// equal the number of cards dealt.
    pub fn make_bid(&mut self, seat: Seat, value: u8) -> Result<(), DomainError> {
        self.require_state(RoundState::Bidding, "make_bid")?;
        self.require_turn(seat, "make_bid")?;

        if value > self.cards_per_player {
            return Err(DomainError::validation(
                ValidationKind::InvalidBid,
                format!("Bid {value} exceeds {} cards dealt", self.cards_per_player),
            ));
        }
        if self.is_last_bidder(seat) && self.forbidden_bid() == Some(value) {
            return Err(DomainError::validation(
                ValidationKind::InvalidBid,
                format!(
                    "Dealer cannot bid {value}: total would equal {} cards dealt",
                    self.cards_per_player
                ),
            ));
        }

        let seats = self.seat_count();
        self.players[seat as usize].bid = Some(value);
        tracing::debug!(seat, bid = value, "bid recorded");

        if self.players.iter().all(|p| p.bid.is_some()) {
            self.state = RoundState::Playing;
            self.turn = self.first_to_act;
        } else {
            self.turn = next_seat(seat, seats);
        }
        Ok(())
    }

    /// Every bid `make_bid` would accept from `seat` right now.
    pub fn legal_bids(&self, seat: Seat) -> Vec<u8> {
        if self.state != RoundState::Bidding || self.turn != seat {
            return Vec::new();
        }
        let forbidden = self.is_last_bidder(seat).then(|| self.forbidden_bid()).flatten();
        (0..=self.cards_per_player)
            .filter(|b| Some(*b) != forbidden)
            .collect()
    }
}
