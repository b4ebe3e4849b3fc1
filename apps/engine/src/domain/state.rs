use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::dealing::{deal_hands, full_deck, shuffle_deck};
use crate::domain::round_memory::RoundMemory;
use crate::domain::rules::{validate_hand_size, validate_player_count};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

/// Positional index of a player at the table.
pub type Seat = u8;

/// Round progression states.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundState {
    /// Players bid in seat order starting left of the dealer.
    Bidding,
    /// A Wild was turned up; the dealer must name trump.
    AwaitingTrumpChoice,
    /// Tricks are being played.
    Playing,
    /// All hands are empty.
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub hand: Vec<Card>,
    pub bid: Option<u8>,
    pub tricks_won: u8,
    /// Cumulative across rounds; owned by the game and carried into each round.
    pub score: i32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            bid: None,
            tricks_won: 0,
            score: 0,
        }
    }

    pub fn reset_round(&mut self) {
        self.hand.clear();
        self.bid = None;
        self.tricks_won = 0;
    }
}

/// One deal: bidding, trump selection, trick play and scoring.
///
/// Plain data throughout, so `clone()` yields a fully independent round that
/// simulations can mutate freely.
#[derive(Debug, Clone)]
pub struct Round {
    pub players: Vec<Player>,
    pub cards_per_player: u8,
    pub dealer: Seat,
    /// Seat left of the dealer; bids first and leads the first trick.
    pub first_to_act: Seat,
    pub state: RoundState,
    /// `None` means no trump this deal.
    pub trump: Option<Suit>,
    /// Face-up card turned after the deal, if the deck had one left.
    pub trump_card: Option<Card>,
    pub turn: Seat,
    /// Cards of the trick in progress, in play order.
    pub table: Vec<(Seat, Card)>,
    pub tricks_completed: u8,
    /// Every card from completed tricks, in play order.
    pub history: Vec<(Seat, Card)>,
    pub memory: RoundMemory,
    pub points_earned: Vec<Option<i32>>,
    pub last_trick: Vec<(Seat, Card)>,
    pub last_trick_winner: Option<Seat>,
    /// First-round variant: each player sees the others' single card while bidding.
    pub open_hand: bool,
    pub(crate) scored: bool,
}

/// Seat / turn math. Clockwise is positive.
#[inline]
pub fn seat_offset(seat: Seat, delta: i16, seats: usize) -> Seat {
    let n = seats.max(1) as i16;
    (seat as i16 + delta).rem_euclid(n) as Seat
}

#[inline]
pub fn next_seat(seat: Seat, seats: usize) -> Seat {
    seat_offset(seat, 1, seats)
}

/// Round-start seat (player to the left of the dealer).
#[inline]
pub fn round_start_seat(dealer: Seat, seats: usize) -> Seat {
    next_seat(dealer, seats)
}

impl Round {
    pub fn new(
        players: Vec<Player>,
        cards_per_player: u8,
        dealer: Seat,
    ) -> Result<Self, DomainError> {
        let seats = players.len();
        validate_player_count(seats)?;
        validate_hand_size(seats, cards_per_player)?;
        if dealer as usize >= seats {
            return Err(DomainError::validation(
                ValidationKind::InvalidSeat,
                format!("Dealer seat {dealer} out of range for {seats} players"),
            ));
        }
        for (i, p) in players.iter().enumerate() {
            if players[..i].iter().any(|q| q.name == p.name) {
                return Err(DomainError::validation_other(format!(
                    "Duplicate player name: {}",
                    p.name
                )));
            }
        }

        let first_to_act = round_start_seat(dealer, seats);
        Ok(Self {
            players,
            cards_per_player,
            dealer,
            first_to_act,
            state: RoundState::Bidding,
            trump: None,
            trump_card: None,
            turn: first_to_act,
            table: Vec::with_capacity(seats),
            tricks_completed: 0,
            history: Vec::new(),
            memory: RoundMemory::new(seats),
            points_earned: vec![None; seats],
            last_trick: Vec::new(),
            last_trick_winner: None,
            open_hand: false,
            scored: false,
        })
    }

    /// Convenience constructor from names with zero scores.
    pub fn with_names<S: AsRef<str>>(
        names: &[S],
        cards_per_player: u8,
        dealer: Seat,
    ) -> Result<Self, DomainError> {
        let players = names.iter().map(|n| Player::new(n.as_ref())).collect();
        Self::new(players, cards_per_player, dealer)
    }

    /// Shuffle, deal and turn the trump indicator.
    ///
    /// A Wild indicator hands the turn to the dealer to name trump; a Null or
    /// an exhausted deck means no trump.
    pub fn setup<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), DomainError> {
        let mut deck = full_deck();
        shuffle_deck(&mut deck, rng);
        let hands = deal_hands(&mut deck, self.seat_count(), self.cards_per_player)?;

        for (player, hand) in self.players.iter_mut().zip(hands) {
            player.reset_round();
            player.hand = hand;
        }
        self.table.clear();
        self.history.clear();
        self.tricks_completed = 0;
        self.memory.clear();
        self.points_earned = vec![None; self.seat_count()];
        self.last_trick.clear();
        self.last_trick_winner = None;
        self.scored = false;

        self.trump_card = deck.pop();
        self.trump = None;
        self.state = RoundState::Bidding;
        self.turn = self.first_to_act;
        match self.trump_card {
            Some(Card::Wild(_)) => {
                self.state = RoundState::AwaitingTrumpChoice;
                self.turn = self.dealer;
            }
            Some(Card::Numbered { suit, .. }) => self.trump = Some(suit),
            Some(Card::Null(_)) | None => {}
        }

        tracing::debug!(
            cards = self.cards_per_player,
            dealer = self.dealer,
            indicator = ?self.trump_card.map(|c| c.to_string()),
            trump = ?self.trump,
            state = ?self.state,
            "round set up"
        );
        Ok(())
    }

    pub fn seat_count(&self) -> usize {
        self.players.len()
    }

    pub fn seat_of(&self, name: &str) -> Result<Seat, DomainError> {
        self.players
            .iter()
            .position(|p| p.name == name)
            .map(|i| i as Seat)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Player, name.to_string()))
    }

    pub fn player(&self, seat: Seat) -> Result<&Player, DomainError> {
        self.players.get(seat as usize).ok_or_else(|| invalid_seat(seat))
    }

    pub fn hand(&self, seat: Seat) -> Result<&[Card], DomainError> {
        Ok(&self.player(seat)?.hand)
    }

    /// The dealer bids last; the hook rule applies only to them.
    pub fn is_last_bidder(&self, seat: Seat) -> bool {
        seat == self.dealer
    }

    pub fn bids_sum(&self) -> u32 {
        self.players.iter().filter_map(|p| p.bid).map(u32::from).sum()
    }

    pub fn tricks_won(&self) -> Vec<u8> {
        self.players.iter().map(|p| p.tricks_won).collect()
    }

    pub fn is_scored(&self) -> bool {
        self.scored
    }

    /// Cards still in play for this deal: hands, table and history.
    pub fn cards_in_play(&self) -> usize {
        self.players.iter().map(|p| p.hand.len()).sum::<usize>()
            + self.table.len()
            + self.history.len()
    }

    pub(crate) fn require_state(
        &self,
        expected: RoundState,
        ctx: &'static str,
    ) -> Result<(), DomainError> {
        if self.state != expected {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!("{ctx}: expected {expected:?}, round is {:?}", self.state),
            ));
        }
        Ok(())
    }

    pub(crate) fn require_turn(&self, seat: Seat, ctx: &'static str) -> Result<(), DomainError> {
        self.player(seat)?;
        if self.turn != seat {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                format!("{ctx}: seat {seat} acted but it is seat {}'s turn", self.turn),
            ));
        }
        Ok(())
    }
}

pub(crate) fn invalid_seat(seat: Seat) -> DomainError {
    DomainError::validation(ValidationKind::InvalidSeat, format!("No seat {seat}"))
}
