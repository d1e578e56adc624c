//! Final game outcome.

use serde::{Deserialize, Serialize};

use crate::core::{Side, SideMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One side finished ahead.
    Winner(Side),
    /// Level scores.
    Draw,
}

impl GameResult {
    /// Decide the result from final totals.
    #[must_use]
    pub fn from_totals(totals: SideMap<u32>) -> Self {
        use std::cmp::Ordering;
        match totals.player.cmp(&totals.opponent) {
            Ordering::Greater => GameResult::Winner(Side::Player),
            Ordering::Less => GameResult::Winner(Side::Opponent),
            Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_totals() {
        assert_eq!(
            GameResult::from_totals(SideMap::new(40, 38)),
            GameResult::Winner(Side::Player)
        );
        assert_eq!(
            GameResult::from_totals(SideMap::new(10, 38)),
            GameResult::Winner(Side::Opponent)
        );
        assert_eq!(GameResult::from_totals(SideMap::new(7, 7)), GameResult::Draw);
    }

    #[test]
    fn test_is_winner() {
        let result = GameResult::Winner(Side::Opponent);
        assert!(result.is_winner(Side::Opponent));
        assert!(!result.is_winner(Side::Player));
        assert!(!GameResult::Draw.is_winner(Side::Player));
    }
}
