//! AI player module - automated bidding, trump and card decisions.
//!
//! This module provides:
//! - the `AiPlayer` trait every bot implements over a `PlayerView`
//! - `RandomPlayer`: uniformly random legal moves (seedable)
//! - `MonteCarloPlayer`: heuristic bids and determinized playouts for cards
//! - an explicit loop driving bots through rounds and games
//! - the factory registry and `create_ai`

mod config;
pub mod determinizer;
pub mod driver;
pub mod heuristic;
mod monte_carlo;
pub mod playout;
mod random;
pub mod registry;
mod trait_def;

#[cfg(test)]
mod tests_props_determinizer;

pub use config::AiConfig;
pub use determinizer::{Determinization, Determinizer, DeterminizerCounts, DeterminizerStats};
pub use driver::{drive_game, drive_round};
pub use monte_carlo::{CandidateScore, MonteCarloPlayer};
pub use playout::playout;
pub use random::RandomPlayer;
pub use trait_def::{AiError, AiPlayer};

/// Create an AI player by kind.
///
/// Accepts the short kinds `"random"` and `"monte-carlo"` as well as any
/// registered factory name. Returns `None` for an unknown kind.
pub fn create_ai(kind: &str, config: &AiConfig) -> Option<Box<dyn AiPlayer + Send + Sync>> {
    let name = match kind {
        "random" => RandomPlayer::NAME,
        "monte-carlo" | "montecarlo" | "mc" => MonteCarloPlayer::NAME,
        other => other,
    };
    registry::by_name(name).map(|factory| (factory.make)(config))
}
