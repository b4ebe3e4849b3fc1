use crate::domain::cards_logic::{card_beats, hand_has_suit, led_suit};
use crate::domain::cards_serde::CardRef;
use crate::domain::state::{next_seat, Round, RoundState, Seat};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether this play filled the table and closed the trick.
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<Seat>,
    /// Completed tricks after this play.
    pub tricks_completed: u8,
    /// State transitioned to, if any (None means still playing).
    pub state_transitioned: Option<RoundState>,
}

/// Index of the winning card among `cards`, in play order.
///
/// The first Wild wins outright. Otherwise the running best is replaced
/// only by a strictly stronger card, see [`card_beats`].
///
/// `cards` must be non-empty.
pub fn winning_index(cards: &[Card], trump: Option<Suit>) -> usize {
    debug_assert!(!cards.is_empty(), "winning_index on an empty trick");
    if let Some(first_wild) = cards.iter().position(Card::is_wild) {
        return first_wild;
    }
    let led = led_suit(cards);
    let mut best = 0usize;
    for (i, card) in cards.iter().enumerate().skip(1) {
        if card_beats(*card, cards[best], led, trump) {
            best = i;
        }
    }
    best
}

impl Round {
    /// Led suit of the trick in progress.
    pub fn current_led_suit(&self) -> Option<Suit> {
        led_suit(self.table.iter().map(|(_, c)| c))
    }

    /// Cards `seat` may legally play now, in hand order, independent of whose
    /// turn it is. Empty outside `Playing`.
    pub fn valid_moves(&self, seat: Seat) -> Vec<Card> {
        if self.state != RoundState::Playing {
            return Vec::new();
        }
        let Some(player) = self.players.get(seat as usize) else {
            return Vec::new();
        };
        let hand = &player.hand;

        if let Some(led) = self.current_led_suit() {
            if hand_has_suit(hand, led) {
                return hand
                    .iter()
                    .copied()
                    .filter(|c| c.suit().is_none() || c.is_numbered_of(led))
                    .collect();
            }
        }
        hand.clone()
    }

    /// Play a card into the current trick, enforcing state, turn and
    /// suit-following. Either the whole play applies or nothing changes.
    pub fn play_card(&mut self, seat: Seat, card: Card) -> Result<PlayCardResult, DomainError> {
        self.require_state(RoundState::Playing, "play_card")?;
        self.require_turn(seat, "play_card")?;

        let Some(pos) = self.players[seat as usize]
            .hand
            .iter()
            .position(|&c| c == card)
        else {
            return Err(DomainError::validation(
                ValidationKind::CardNotInHand,
                format!("{card} not in seat {seat}'s hand"),
            ));
        };
        if !self.valid_moves(seat).contains(&card) {
            return Err(DomainError::validation(
                ValidationKind::MustFollowSuit,
                format!(
                    "{card} does not follow {}",
                    self.current_led_suit()
                        .map(|s| s.to_string())
                        .unwrap_or_default()
                ),
            ));
        }

        let removed = self.players[seat as usize].hand.remove(pos);
        self.table.push((seat, removed));
        self.memory.record_play(&self.table, seat, removed);

        let seats = self.seat_count();
        let mut result = PlayCardResult {
            trick_completed: false,
            trick_winner: None,
            tricks_completed: self.tricks_completed,
            state_transitioned: None,
        };

        if self.table.len() < seats {
            self.turn = next_seat(seat, seats);
            return Ok(result);
        }

        let winner = self.resolve_trick();
        result.trick_completed = true;
        result.trick_winner = Some(winner);
        result.tricks_completed = self.tricks_completed;

        if self.players.iter().all(|p| p.hand.is_empty()) {
            self.state = RoundState::Finished;
            result.state_transitioned = Some(RoundState::Finished);
            tracing::debug!(tricks = ?self.tricks_won(), "round finished");
        }
        Ok(result)
    }

    /// Play by external reference; see [`CardRef::resolve`].
    pub fn play_card_ref(
        &mut self,
        seat: Seat,
        card_ref: &CardRef,
    ) -> Result<PlayCardResult, DomainError> {
        self.require_state(RoundState::Playing, "play_card")?;
        self.require_turn(seat, "play_card")?;
        let card = card_ref.resolve(&self.players[seat as usize].hand)?;
        self.play_card(seat, card)
    }

    /// Close the full table: credit the winner, move cards to history and
    /// hand the lead to the winner.
    fn resolve_trick(&mut self) -> Seat {
        let cards: Vec<Card> = self.table.iter().map(|(_, c)| *c).collect();
        let winner = self.table[winning_index(&cards, self.trump)].0;

        self.players[winner as usize].tricks_won += 1;
        self.tricks_completed += 1;
        self.history.extend(self.table.iter().copied());
        self.last_trick = std::mem::take(&mut self.table);
        self.last_trick_winner = Some(winner);
        self.turn = winner;
        tracing::trace!(winner, trick = self.tricks_completed, "trick resolved");
        winner
    }
}
