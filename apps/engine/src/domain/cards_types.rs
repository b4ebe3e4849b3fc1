//! Core card-related types: Card, CardKind, Rank, Suit

use std::cmp::Ordering;

use crate::errors::domain::{DomainError, ValidationKind};

/// Declaration order is the display order used when sorting hands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub(crate) const fn index(self) -> usize {
        match self {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
        }
    }
}

/// Rank of a numbered card, 1..=13. Higher is stronger.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(u8);

impl Rank {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 13;

    pub fn new(value: u8) -> Result<Self, DomainError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("Rank out of range: {value}"),
            ));
        }
        Ok(Rank(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Rank> {
        (Self::MIN..=Self::MAX).map(Rank)
    }
}

/// Discriminant of [`Card`], used by the wire form and move references.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CardKind {
    Numbered,
    Wild,
    Null,
}

/// A playing card. Wild and Null carry an id (0..=3) that only keeps the
/// four copies distinct; it has no gameplay effect.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Card {
    Numbered { suit: Suit, rank: Rank },
    Wild(u8),
    Null(u8),
}

impl Card {
    /// Copies of each special card in a deck.
    pub const SPECIAL_COPIES: u8 = 4;

    pub fn numbered(suit: Suit, rank: u8) -> Result<Self, DomainError> {
        Ok(Card::Numbered {
            suit,
            rank: Rank::new(rank)?,
        })
    }

    pub fn wild(id: u8) -> Result<Self, DomainError> {
        require_special_id(id)?;
        Ok(Card::Wild(id))
    }

    pub fn null(id: u8) -> Result<Self, DomainError> {
        require_special_id(id)?;
        Ok(Card::Null(id))
    }

    pub const fn kind(&self) -> CardKind {
        match self {
            Card::Numbered { .. } => CardKind::Numbered,
            Card::Wild(_) => CardKind::Wild,
            Card::Null(_) => CardKind::Null,
        }
    }

    /// Suit of a numbered card; Wild and Null have none.
    pub const fn suit(&self) -> Option<Suit> {
        match self {
            Card::Numbered { suit, .. } => Some(*suit),
            _ => None,
        }
    }

    pub const fn rank(&self) -> Option<Rank> {
        match self {
            Card::Numbered { rank, .. } => Some(*rank),
            _ => None,
        }
    }

    pub const fn id(&self) -> Option<u8> {
        match self {
            Card::Wild(id) | Card::Null(id) => Some(*id),
            Card::Numbered { .. } => None,
        }
    }

    pub const fn is_wild(&self) -> bool {
        matches!(self, Card::Wild(_))
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Card::Null(_))
    }

    /// True for a numbered card of `suit`.
    pub fn is_numbered_of(&self, suit: Suit) -> bool {
        self.suit() == Some(suit)
    }
}

fn require_special_id(id: u8) -> Result<(), DomainError> {
    if id >= Card::SPECIAL_COPIES {
        return Err(DomainError::validation(
            ValidationKind::ParseCard,
            format!("Special card id out of range: {id}"),
        ));
    }
    Ok(())
}

// Ord on Card is display order only: Wild, then Null, then numbered by suit
// and descending rank. Never use it for trick resolution.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        fn key(card: &Card) -> (u8, usize, i16, u8) {
            match card {
                Card::Wild(id) => (0, 0, 0, *id),
                Card::Null(id) => (1, 0, 0, *id),
                Card::Numbered { suit, rank } => (2, suit.index(), -(rank.value() as i16), 0),
            }
        }
        key(self).cmp(&key(other))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
