//! How to register an AI
//!
//! 1) Implement `AiPlayer` for the type in its module.
//! 2) Add an `AiFactory` entry to the static list with a stable `name` and `version`.
//! 3) Keep ordering stable; constructors must not touch global state.
//! 4) Same config with a seed ⇒ same decisions.

use crate::ai::{AiConfig, AiPlayer, MonteCarloPlayer, RandomPlayer};

/// Factory definition for constructing AI implementations.
pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(config: &AiConfig) -> Box<dyn AiPlayer + Send + Sync>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
    AiFactory {
        name: MonteCarloPlayer::NAME,
        version: MonteCarloPlayer::VERSION,
        make: make_monte_carlo,
    },
];

/// Returns the statically registered AI factories.
pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

/// Finds a registered AI factory by its name.
pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais().iter().find(|factory| factory.name == name)
}

fn make_random_player(config: &AiConfig) -> Box<dyn AiPlayer + Send + Sync> {
    Box::new(RandomPlayer::new(config.seed()))
}

fn make_monte_carlo(config: &AiConfig) -> Box<dyn AiPlayer + Send + Sync> {
    Box::new(MonteCarloPlayer::new(config))
}
