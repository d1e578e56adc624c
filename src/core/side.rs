//! The two sides of a game and per-side data storage.
//!
//! ## Side
//!
//! The human `Player` plays against the computer `Opponent`.
//!
//! ## SideMap
//!
//! One value per side with indexing by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One side of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Opponent,
}

impl Side {
    /// Both sides, player first.
    pub const ALL: [Side; 2] = [Side::Player, Side::Opponent];

    /// The other side.
    #[must_use]
    pub const fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Opponent => write!(f, "Opponent"),
        }
    }
}

/// Per-side data storage.
///
/// ```
/// use stat_trumps::core::{Side, SideMap};
///
/// let mut points: SideMap<u32> = SideMap::default();
/// points[Side::Opponent] += 3;
/// assert_eq!(points[Side::Player], 0);
/// assert_eq!(points[Side::Opponent], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    /// Value for the human player.
    pub player: T,
    /// Value for the opponent.
    pub opponent: T,
}

impl<T> SideMap<T> {
    /// Create a map from both values.
    pub const fn new(player: T, opponent: T) -> Self {
        Self { player, opponent }
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Player, &self.player), (Side::Opponent, &self.opponent)].into_iter()
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_other() {
        assert_eq!(Side::Player.other(), Side::Opponent);
        assert_eq!(Side::Opponent.other(), Side::Player);
        assert_eq!(format!("{}", Side::Player), "Player");
    }

    #[test]
    fn test_side_map_index() {
        let mut map = SideMap::new(1, 2);
        assert_eq!(map[Side::Player], 1);
        assert_eq!(map[Side::Opponent], 2);

        map[Side::Player] = 10;
        assert_eq!(map.player, 10);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::Player, &10), (Side::Opponent, &2)]);
    }
}
