//! In-memory game simulator.
//!
//! Runs complete games between bots through the engine's own round driver.
//! Every seed is derived from the game seed, so a game replays exactly.

use std::collections::HashMap;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use wizard_engine::domain::derive_dealing_seed;
use wizard_engine::domain::game::RoundSummary;
use wizard_engine::{
    create_ai, drive_round, AiConfig, AiError, AiPlayer, Card, DomainError, Game, GameConfig,
    Seat, Suit,
};

use crate::types::AiKind;

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("Unknown AI kind: {0}")]
    UnknownAi(String),
    #[error("AI error: {0}")]
    Ai(#[from] AiError),
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// One played round with the details the summary does not carry.
#[derive(Debug, Clone)]
pub struct RoundRecord {
    pub summary: RoundSummary,
    pub trump: Option<Suit>,
    pub trump_card: Option<Card>,
    /// Dealer who named trump after a Wild indicator.
    pub trump_selector: Option<Seat>,
    pub duration_ms: f64,
}

/// Result of simulating a complete game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub game_seed: u64,
    /// Final scores indexed by seat.
    pub final_scores: Vec<i32>,
    pub rounds: Vec<RoundRecord>,
    /// Per-seat counters reported by each bot.
    pub custom_metrics: Vec<HashMap<String, Value>>,
}

pub struct Simulator {
    seats: Vec<AiKind>,
    game_config: GameConfig,
    ai_config: AiConfig,
}

impl Simulator {
    /// `ai_config` is the template for every bot; seeds are filled per game.
    pub fn new(seats: Vec<AiKind>, game_config: GameConfig, ai_config: AiConfig) -> Self {
        Self {
            seats,
            game_config,
            ai_config,
        }
    }

    fn make_bots(
        &self,
        game_seed: u64,
    ) -> Result<Vec<Box<dyn AiPlayer + Send + Sync>>, SimulatorError> {
        self.seats
            .iter()
            .enumerate()
            .map(|(seat, kind)| {
                let mut config = self.ai_config.clone();
                config.seed = Some(bot_seed(game_seed, seat));
                create_ai(kind.as_str(), &config)
                    .ok_or_else(|| SimulatorError::UnknownAi(kind.as_str().to_string()))
            })
            .collect()
    }

    /// Play one full game from `game_seed`.
    pub fn simulate_game(&self, game_seed: u64) -> Result<GameResult, SimulatorError> {
        let names: Vec<String> = (0..self.seats.len()).map(|i| format!("seat{i}")).collect();
        let mut game = Game::new(&names, self.game_config.clone())?;
        let bots = self.make_bots(game_seed)?;

        let mut rounds = Vec::new();
        let mut round_index = 0;
        loop {
            let mut rng = StdRng::seed_from_u64(derive_dealing_seed(game_seed, round_index));
            if !game.start_next_round(&mut rng)? {
                break;
            }

            let started = Instant::now();
            let round = game.require_round_mut()?;
            let trump_selector =
                matches!(round.trump_card, Some(Card::Wild(_))).then_some(round.dealer);
            drive_round(round, &bots)?;
            let (trump, trump_card) = (round.trump, round.trump_card);
            game.score_round()?;

            let summary = game
                .history()
                .last()
                .cloned()
                .ok_or_else(|| SimulatorError::InvalidState("Scored round missing".into()))?;
            let duration_ms = started.elapsed().as_secs_f64() * 1000.0;
            debug!(
                round = round_index + 1,
                cards = summary.round_num,
                duration_ms,
                "round simulated"
            );
            rounds.push(RoundRecord {
                summary,
                trump,
                trump_card,
                trump_selector,
                duration_ms,
            });
            round_index += 1;
        }

        Ok(GameResult {
            game_seed,
            final_scores: game.players().iter().map(|p| p.score).collect(),
            rounds,
            custom_metrics: bots.iter().map(|b| b.custom_metrics()).collect(),
        })
    }
}

/// Per-seat bot seed, distinct for every seat of a game.
fn bot_seed(game_seed: u64, seat: usize) -> u64 {
    game_seed
        .rotate_left(17)
        .wrapping_add(0x9E37_79B9_7F4A_7C15u64.wrapping_mul(seat as u64 + 1))
}
