//! Core types: sides, score, RNG, configuration.
//!
//! These carry no game flow of their own; the session drives them.

pub mod config;
pub mod rng;
pub mod score;
pub mod side;

pub use config::{CompareMode, GameConfig, Settings, TickSize};
pub use rng::{GameRng, GameRngState};
pub use score::{Score, ScoreEntry};
pub use side::{Side, SideMap};
