//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per game, written as games finish
    Jsonl,
    /// A single JSON array written at the end
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AiKind {
    MonteCarlo,
    Random,
}

impl AiKind {
    /// Kind accepted by `wizard_engine::create_ai`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AiKind::MonteCarlo => "monte-carlo",
            AiKind::Random => "random",
        }
    }
}
