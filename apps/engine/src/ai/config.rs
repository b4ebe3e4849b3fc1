//! AI configuration handling.
//!
//! Standard fields are typed; anything else in the JSON is preserved in
//! `custom` for implementation-specific knobs.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Standard configuration for AI players.
///
/// # Example JSON Config
///
/// ```json
/// {"seed": 12345, "simulations": 200, "workers": 4}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Optional RNG seed. Same seed and same view give the same decision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Playouts per candidate card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulations: Option<u32>,

    /// Simulation thread pool size; 0 or absent uses rayon's global pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workers: Option<usize>,

    /// Constrained deal attempts before the determinizer gives up on voids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub determinization_retries: Option<u32>,

    /// AI-specific configuration.
    #[serde(flatten)]
    pub custom: JsonValue,
}

impl AiConfig {
    pub const DEFAULT_SIMULATIONS: u32 = 100;
    pub const DEFAULT_RETRIES: u32 = 10;

    /// Create an AiConfig from optional JSON value, falling back to an
    /// empty config when absent or malformed.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        match config {
            Some(json) => serde_json::from_value(json.clone()).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring malformed AI config");
                Self::empty()
            }),
            None => Self::empty(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn simulations(&self) -> u32 {
        self.simulations.unwrap_or(Self::DEFAULT_SIMULATIONS)
    }

    pub fn workers(&self) -> usize {
        self.workers.unwrap_or(0)
    }

    pub fn determinization_retries(&self) -> u32 {
        self.determinization_retries.unwrap_or(Self::DEFAULT_RETRIES)
    }

    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }

    /// Create an empty configuration (all defaults).
    pub fn empty() -> Self {
        Self {
            seed: None,
            simulations: None,
            workers: None,
            determinization_retries: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    /// Create a configuration with just a seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::empty()
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::empty()
    }
}
