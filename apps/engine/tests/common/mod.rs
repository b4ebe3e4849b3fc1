#![allow(dead_code)]

use wizard_engine::{create_ai, AiConfig, AiPlayer};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    engine_test_support::logging::init();
}

/// Monte Carlo config kept small enough for debug-build test runs.
pub fn quick_mc_config(seed: u64) -> AiConfig {
    AiConfig {
        seed: Some(seed),
        simulations: Some(20),
        workers: Some(2),
        ..AiConfig::default()
    }
}

/// One bot per kind, each seeded from `seed` and its seat.
pub fn bots(kinds: &[&str], seed: u64) -> Vec<Box<dyn AiPlayer + Send + Sync>> {
    kinds
        .iter()
        .enumerate()
        .map(|(seat, kind)| {
            let config = quick_mc_config(seed.wrapping_add(seat as u64));
            create_ai(kind, &config).expect("known AI kind")
        })
        .collect()
}
