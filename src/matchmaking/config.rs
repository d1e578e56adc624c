//! Matchmaking search limits.

use serde::{Deserialize, Serialize};

/// Iteration caps for the matchmaking search.
///
/// The search runs at most `max_target_bumps * max_draws` random draws, each
/// scanning the deck once, so it always terminates within one call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// How many times the target may be widened before falling back.
    pub max_target_bumps: u32,

    /// Random player-card draws per target value.
    pub max_draws: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_target_bumps: 20,
            max_draws: 20,
        }
    }
}

impl SearchConfig {
    /// Set the outer (target widening) cap.
    #[must_use]
    pub fn with_max_target_bumps(mut self, bumps: u32) -> Self {
        self.max_target_bumps = bumps;
        self
    }

    /// Set the inner (random draw) cap.
    #[must_use]
    pub fn with_max_draws(mut self, draws: u32) -> Self {
        self.max_draws = draws;
        self
    }
}
