//! RNG seed derivation for deterministic dealing and simulation.
//!
//! Each context mixes its indices through SplitMix64 so neighbouring inputs
//! give unrelated seeds.

#[inline]
fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E3779B97F4A7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Seed for dealing round `round_index` (0-based) of a game.
pub fn derive_dealing_seed(game_seed: u64, round_index: usize) -> u64 {
    splitmix64(game_seed ^ splitmix64(round_index as u64).wrapping_add(2))
}

/// Seed for one Monte Carlo simulation: unique per (decision, candidate, run).
pub fn derive_simulation_seed(decision_seed: u64, candidate: usize, simulation: u32) -> u64 {
    let lane = ((candidate as u64) << 32) | simulation as u64;
    splitmix64(decision_seed ^ splitmix64(lane).wrapping_add(1))
}
