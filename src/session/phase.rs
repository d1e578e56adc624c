//! Session phases.

use serde::{Deserialize, Serialize};

/// Where a session is in its round cycle.
///
/// ```text
/// Pregame -> InRound -> AwaitingResolution -> PeriodBoundary -> InRound ...
///                                                           \-> GameOver
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// No game started yet.
    #[default]
    Pregame,
    /// A matchup is dealt and waiting for a category.
    InRound,
    /// A category was resolved; the clock advances after a delay.
    AwaitingResolution,
    /// The clock has advanced; the next deal (or the end) is pending.
    PeriodBoundary,
    /// Final. Only a new game leaves this phase.
    GameOver,
}

impl GamePhase {
    /// Whether category selection is accepted.
    #[must_use]
    pub const fn accepts_input(self) -> bool {
        matches!(self, GamePhase::InRound)
    }
}
