//! Domain-level error type shared by the round engine, game wrapper and AI.
//!
//! Every gameplay rule violation is reported through [`DomainError::Validation`]
//! with a [`ValidationKind`] that tells callers which rule was broken. The
//! engine rejects before mutating, so receiving one of these means the round
//! is exactly as it was before the call.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Which rule a rejected action broke.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Action attempted outside its legal round state.
    PhaseMismatch,
    /// Action attempted by a seat other than the turn holder.
    OutOfTurn,
    /// Bid out of range or forbidden by the hook rule.
    InvalidBid,
    /// Card is in hand but not among the legal moves for this trick.
    MustFollowSuit,
    /// Referenced card is absent from the acting player's hand.
    CardNotInHand,
    ParseCard,
    InvalidHandSize,
    InvalidPlayerCount,
    InvalidSeat,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Player,
    Round,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or game rule violation
    Validation(ValidationKind, String),
    /// Missing entity in domain terms
    NotFound(NotFoundKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    /// Shorthand for invariant failures that have no dedicated kind.
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    /// The validation kind, if this is a rule violation.
    pub fn validation_kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(kind),
            DomainError::NotFound(..) => None,
        }
    }
}
