//! AI player trait definition.

use std::collections::HashMap;

use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::domain::player_view::PlayerView;
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

/// Errors that can occur during AI decision-making.
#[derive(Debug, Error)]
pub enum AiError {
    /// AI encountered an internal error
    #[error("AI internal error: {0}")]
    Internal(String),
    /// AI was asked to act with no legal option, or produced an illegal one
    #[error("AI invalid move: {0}")]
    InvalidMove(String),
    #[error("AI domain error: {0}")]
    Domain(#[from] DomainError),
}

/// Trait for AI players.
///
/// Implementations receive only the [`PlayerView`] of their own seat and
/// must pick a legal action from the view's legal-move helpers.
pub trait AiPlayer: Send + Sync {
    /// Choose a bid value from `view.legal_bids()`.
    fn choose_bid(&self, view: &PlayerView) -> Result<u8, AiError>;

    /// Choose a card from `view.legal_plays()`.
    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError>;

    /// Name trump after a Wild indicator.
    fn choose_trump(&self, view: &PlayerView) -> Result<Suit, AiError>;

    /// Implementation-specific counters for reporting.
    fn custom_metrics(&self) -> HashMap<String, JsonValue> {
        HashMap::new()
    }
}
