//! Configuration types.

pub mod game;

pub use game::GameConfig;
