//! Per-round public knowledge: which seats are known to be void in a suit.
//!
//! A seat that plays a numbered card off the led suit cannot hold that suit
//! (it would have been forced to follow). That is the only hidden-hand fact
//! a play leaks, so it is the only constraint the determinizer honors.

use super::cards_logic::led_suit;
use super::cards_types::{Card, Suit};
use super::state::Seat;

/// Small set of suits backed by a bitmask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SuitSet(u8);

impl SuitSet {
    pub const fn empty() -> Self {
        SuitSet(0)
    }

    pub fn insert(&mut self, suit: Suit) {
        self.0 |= 1 << suit.index();
    }

    pub const fn contains(&self, suit: Suit) -> bool {
        self.0 & (1 << suit.index()) != 0
    }

    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Suit> + '_ {
        Suit::ALL.into_iter().filter(|s| self.contains(*s))
    }

    /// Whether a card may sit in a hand that is void in every suit of this set.
    pub fn admits(&self, card: &Card) -> bool {
        match card.suit() {
            Some(suit) => !self.contains(suit),
            None => true,
        }
    }
}

/// Known-void suits per seat. Sets only grow during a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundMemory {
    voids: Vec<SuitSet>,
}

impl RoundMemory {
    pub fn new(seats: usize) -> Self {
        Self {
            voids: vec![SuitSet::empty(); seats],
        }
    }

    pub fn voids(&self, seat: Seat) -> SuitSet {
        self.voids.get(seat as usize).copied().unwrap_or_default()
    }

    pub fn mark_void(&mut self, seat: Seat, suit: Suit) {
        if let Some(set) = self.voids.get_mut(seat as usize) {
            set.insert(suit);
        }
    }

    /// Update after `seat` played `card`; `table` already includes it.
    pub fn record_play(&mut self, table: &[(Seat, Card)], seat: Seat, card: Card) {
        if table.len() < 2 {
            return;
        }
        let Some(led) = led_suit(table.iter().map(|(_, c)| c)) else {
            return;
        };
        if let Some(played) = card.suit() {
            if played != led {
                tracing::trace!(seat, suit = %led, "inferred void");
                self.mark_void(seat, led);
            }
        }
    }

    pub fn clear(&mut self) {
        for set in self.voids.iter_mut() {
            *set = SuitSet::empty();
        }
    }
}
