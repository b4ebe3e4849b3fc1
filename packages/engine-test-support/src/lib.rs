//! Engine test support utilities
//!
//! Shared by the engine's integration tests and the simulator's tests:
//! unified logging initialization and reproducible test inputs.

pub mod logging;

/// Player names `"p0".."p{n-1}"`.
pub fn player_names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("p{i}")).collect()
}

/// Seed for randomized integration tests.
///
/// `TEST_SEED` overrides the fallback so a failing run can be replayed.
pub fn test_seed(fallback: u64) -> u64 {
    let seed = std::env::var("TEST_SEED")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback);
    tracing::info!(seed, "test seed");
    seed
}
