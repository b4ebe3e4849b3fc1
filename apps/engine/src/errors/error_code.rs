//! Stable error codes for engine callers.
//!
//! All codes are SCREAMING_SNAKE_CASE. Add new codes here; never pass ad-hoc
//! strings as error codes.

use core::fmt;

use super::domain::{DomainError, NotFoundKind, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Rule violations
    /// Action outside its legal round state
    PhaseMismatch,
    /// Action by a seat that does not hold the turn
    OutOfTurn,
    /// Bid out of range or forbidden by the hook rule
    InvalidBid,
    /// Card not among the legal moves for this trick
    MustFollowSuit,
    /// Card not in hand
    CardNotInHand,

    // Input validation
    ParseCard,
    InvalidHandSize,
    InvalidPlayerCount,
    InvalidSeat,
    /// General validation error
    ValidationError,

    // Not found
    PlayerNotFound,
    RoundNotFound,
    NotFound,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::InvalidBid => "INVALID_BID",
            Self::MustFollowSuit => "MUST_FOLLOW_SUIT",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",

            Self::ParseCard => "PARSE_CARD",
            Self::InvalidHandSize => "INVALID_HAND_SIZE",
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::InvalidSeat => "INVALID_SEAT",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::RoundNotFound => "ROUND_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::PhaseMismatch => Self::PhaseMismatch,
                ValidationKind::OutOfTurn => Self::OutOfTurn,
                ValidationKind::InvalidBid => Self::InvalidBid,
                ValidationKind::MustFollowSuit => Self::MustFollowSuit,
                ValidationKind::CardNotInHand => Self::CardNotInHand,
                ValidationKind::ParseCard => Self::ParseCard,
                ValidationKind::InvalidHandSize => Self::InvalidHandSize,
                ValidationKind::InvalidPlayerCount => Self::InvalidPlayerCount,
                ValidationKind::InvalidSeat => Self::InvalidSeat,
                ValidationKind::Other(_) => Self::ValidationError,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Player => Self::PlayerNotFound,
                NotFoundKind::Round => Self::RoundNotFound,
                NotFoundKind::Other(_) => Self::NotFound,
            },
        }
    }
}

impl DomainError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::from(self)
    }
}
