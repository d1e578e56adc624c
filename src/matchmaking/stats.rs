//! Per-deal telemetry from the matchmaking search.

use serde::{Deserialize, Serialize};

/// How a matchup was settled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeKind {
    /// An exact target match was found.
    #[default]
    Found,
    /// Nearest tracked pair after exhausting the caps.
    Fallback,
    /// Nothing tracked; first available opponent.
    Exhausted,
}

/// Statistics for one matchmaking search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Random player-card draws performed.
    pub attempts: u32,

    /// Times the target was widened.
    pub target_bumps: u32,

    /// Lead the search ran with.
    pub lead: i32,

    /// Target from the difficulty curve.
    pub initial_target: usize,

    /// Target in effect when the search stopped.
    pub final_target: usize,

    /// Categories the player card wins against the dealt opponent.
    pub wins: usize,

    /// Whether the deck was refilled before searching.
    pub deck_reset: bool,

    /// How the matchup was settled.
    pub outcome: OutcomeKind,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Distance between the dealt win count and the curve's target.
    #[must_use]
    pub fn miss(&self) -> usize {
        self.wins.abs_diff(self.initial_target)
    }
}
