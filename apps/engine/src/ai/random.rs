//! Random AI player - makes uniformly random legal moves.
//!
//! Baseline opponent for the simulator and for tests.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::player_view::PlayerView;
use crate::domain::{Card, Suit};

pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` for reproducible play, `None` for OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn pick<T: Copy>(&self, options: &[T], what: &str) -> Result<T, AiError> {
        if options.is_empty() {
            return Err(AiError::InvalidMove(format!("No legal {what} available")));
        }
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        options
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal(format!("Failed to choose random {what}")))
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_bid(&self, view: &PlayerView) -> Result<u8, AiError> {
        self.pick(&view.legal_bids(), "bids")
    }

    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError> {
        self.pick(&view.legal_plays(), "plays")
    }

    fn choose_trump(&self, view: &PlayerView) -> Result<Suit, AiError> {
        self.pick(&view.legal_trumps(), "trumps")
    }
}
