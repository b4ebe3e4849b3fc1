//! Table-size limits and scoring constants.

use crate::errors::domain::{DomainError, ValidationKind};

pub const DECK_SIZE: usize = 60;
pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 6;

/// Bonus for hitting the bid exactly, before per-trick points.
pub const EXACT_BID_BONUS: i32 = 20;
pub const POINTS_PER_TRICK: i32 = 10;
/// Deducted per trick of distance from the bid.
pub const PENALTY_PER_TRICK: i32 = 10;

pub fn validate_player_count(players: usize) -> Result<(), DomainError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!("Need {MIN_PLAYERS}..={MAX_PLAYERS} players, got {players}"),
        ));
    }
    Ok(())
}

/// Largest deal the deck supports for this many players.
pub const fn max_cards_per_player(players: usize) -> usize {
    if players == 0 {
        return 0;
    }
    DECK_SIZE / players
}

pub fn validate_hand_size(players: usize, cards_per_player: u8) -> Result<(), DomainError> {
    let cards = cards_per_player as usize;
    if cards == 0 || cards > max_cards_per_player(players) {
        return Err(DomainError::validation(
            ValidationKind::InvalidHandSize,
            format!(
                "Cannot deal {cards} cards to {players} players from a {DECK_SIZE}-card deck"
            ),
        ));
    }
    Ok(())
}

/// Points for one player's round: exact bids earn a bonus plus per-trick
/// points, anything else loses points per trick of distance.
pub fn round_points(bid: u8, tricks: u8) -> i32 {
    if bid == tricks {
        EXACT_BID_BONUS + POINTS_PER_TRICK * tricks as i32
    } else {
        -PENALTY_PER_TRICK * (tricks as i32 - bid as i32).abs()
    }
}
