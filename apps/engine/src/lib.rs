#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod errors;
pub mod telemetry;

// Re-exports for public API
pub use ai::{
    create_ai, drive_game, drive_round, AiConfig, AiError, AiPlayer, MonteCarloPlayer, RandomPlayer,
};
pub use config::GameConfig;
pub use domain::game::Game;
pub use domain::player_view::PlayerView;
pub use domain::state::{Player, Round, RoundState, Seat};
pub use domain::{Card, Rank, Suit};
pub use errors::{DomainError, ErrorCode};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
