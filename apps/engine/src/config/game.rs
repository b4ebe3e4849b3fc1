//! Game configuration: which deals are played and table options.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::rules::{validate_hand_size, validate_player_count, MAX_PLAYERS};
use crate::errors::domain::{DomainError, ValidationKind};

/// # Example JSON Config
///
/// ```json
/// {"selected_rounds": [1, 2, 3], "first_round_open_cards": true, "max_players": 4}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards dealt to each player in each round, played in this order.
    #[serde(default = "default_rounds")]
    pub selected_rounds: Vec<u8>,

    /// Deal the first round face-out: each player sees the others' cards
    /// while bidding but not their own.
    #[serde(default)]
    pub first_round_open_cards: bool,

    #[serde(default = "default_max_players")]
    pub max_players: usize,
}

fn default_rounds() -> Vec<u8> {
    (1..=10).collect()
}

fn default_max_players() -> usize {
    MAX_PLAYERS
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            selected_rounds: default_rounds(),
            first_round_open_cards: false,
            max_players: default_max_players(),
        }
    }
}

impl GameConfig {
    /// Parse from optional JSON, falling back to defaults on absence.
    pub fn from_json(config: Option<&JsonValue>) -> Result<Self, DomainError> {
        match config {
            Some(json) => serde_json::from_value(json.clone()).map_err(|e| {
                DomainError::validation_other(format!("Invalid game config: {e}"))
            }),
            None => Ok(Self::default()),
        }
    }

    /// Check the configuration against a concrete player count.
    pub fn validate_for(&self, players: usize) -> Result<(), DomainError> {
        validate_player_count(players)?;
        if players > self.max_players {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!("{players} players exceed the table limit of {}", self.max_players),
            ));
        }
        if self.selected_rounds.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidHandSize,
                "No rounds selected",
            ));
        }
        for &cards in &self.selected_rounds {
            validate_hand_size(players, cards)?;
        }
        Ok(())
    }
}
