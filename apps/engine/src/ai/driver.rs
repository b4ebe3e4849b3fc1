//! Explicit bot-driving loop.
//!
//! The turn holder is re-read after every action, so one bot acting several
//! times in a row (dealer naming trump then bidding, trick winner leading)
//! needs no special casing.

use rand::Rng;
use tracing::trace;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::game::Game;
use crate::domain::player_view::PlayerView;
use crate::domain::state::{Round, RoundState};

/// Drive `round` to `Finished`, one bot per seat.
pub fn drive_round(
    round: &mut Round,
    bots: &[Box<dyn AiPlayer + Send + Sync>],
) -> Result<(), AiError> {
    if bots.len() != round.seat_count() {
        return Err(AiError::Internal(format!(
            "{} bots for {} seats",
            bots.len(),
            round.seat_count()
        )));
    }

    loop {
        let seat = round.turn;
        let bot = &bots[seat as usize];
        match round.state {
            RoundState::Finished => return Ok(()),
            RoundState::AwaitingTrumpChoice => {
                let view = PlayerView::for_seat(round, seat)?;
                let suit = bot.choose_trump(&view)?;
                trace!(seat, %suit, "trump named");
                round.set_trump_suit(seat, suit)?;
            }
            RoundState::Bidding => {
                let view = PlayerView::for_seat(round, seat)?;
                let bid = bot.choose_bid(&view)?;
                trace!(seat, bid, "bid");
                round.make_bid(seat, bid)?;
            }
            RoundState::Playing => {
                let view = PlayerView::for_seat(round, seat)?;
                let card = bot.choose_play(&view)?;
                trace!(seat, %card, "play");
                round.play_card(seat, card)?;
            }
        }
    }
}

/// Play every remaining round of `game`, scoring each one.
pub fn drive_game<R: Rng + ?Sized>(
    game: &mut Game,
    bots: &[Box<dyn AiPlayer + Send + Sync>],
    rng: &mut R,
) -> Result<(), AiError> {
    while game.start_next_round(rng)? {
        drive_round(game.require_round_mut()?, bots)?;
        game.score_round()?;
    }
    Ok(())
}
