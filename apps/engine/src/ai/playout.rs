use rand::seq::IndexedRandom;
use rand::Rng;

use crate::domain::state::{Round, RoundState};
use crate::errors::domain::{DomainError, ValidationKind};

/// Play the round out with uniformly random legal cards.
///
/// Returns tricks won per seat once the round is finished. A round that is
/// not in `Playing` is returned as-is.
pub fn playout<R: Rng + ?Sized>(round: &mut Round, rng: &mut R) -> Result<Vec<u8>, DomainError> {
    while round.state == RoundState::Playing {
        let seat = round.turn;
        let moves = round.valid_moves(seat);
        let Some(&card) = moves.choose(rng) else {
            return Err(DomainError::validation(
                ValidationKind::CardNotInHand,
                format!("seat {seat} has no card to play"),
            ));
        };
        round.play_card(seat, card)?;
    }
    Ok(round.tricks_won())
}
