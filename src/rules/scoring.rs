//! Category resolution and point values.
//!
//! A round is decided by one category: the card with the strictly greater
//! value scores that category's points, a tie scores nothing.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Category};
use crate::core::Side;

/// Points awarded per category.
///
/// Defaults: free throws, games played and minutes are worth 1; the three
/// three-point categories are worth 3; everything else is worth 2.
///
/// ```
/// use stat_trumps::cards::Category;
/// use stat_trumps::rules::PointTable;
///
/// let table = PointTable::default().with_points(Category::Blocks, 5);
/// assert_eq!(table.points(Category::Blocks), 5);
/// assert_eq!(table.points(Category::ThreesMade), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointTable {
    #[serde(default)]
    overrides: FxHashMap<Category, u32>,
}

impl PointTable {
    /// Built-in value for a category.
    #[must_use]
    pub const fn default_points(category: Category) -> u32 {
        match category {
            Category::GamesPlayed
            | Category::Minutes
            | Category::FreeThrowPct
            | Category::FreeThrowsMade => 1,
            Category::ThreesMade | Category::ThreesAttempted | Category::ThreePct => 3,
            _ => 2,
        }
    }

    /// Override one category's value.
    #[must_use]
    pub fn with_points(mut self, category: Category, points: u32) -> Self {
        self.overrides.insert(category, points);
        self
    }

    /// Points for winning `category`.
    #[must_use]
    pub fn points(&self, category: Category) -> u32 {
        self.overrides
            .get(&category)
            .copied()
            .unwrap_or_else(|| Self::default_points(category))
    }
}

/// How the player's card compares in one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    /// Player value is greater.
    Higher,
    /// Player value is smaller.
    Lower,
    /// Equal values.
    Tie,
}

impl Marker {
    /// Compare a player value with an opponent value.
    #[must_use]
    pub fn compare(player: f64, opponent: f64) -> Self {
        if player > opponent {
            Marker::Higher
        } else if player < opponent {
            Marker::Lower
        } else {
            Marker::Tie
        }
    }

    /// Side that wins under this marker, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Marker::Higher => Some(Side::Player),
            Marker::Lower => Some(Side::Opponent),
            Marker::Tie => None,
        }
    }
}

/// Outcome of comparing one chosen category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundResolution {
    /// The chosen category.
    pub category: Category,
    /// Winning side, `None` on a tie.
    pub winner: Option<Side>,
    /// Points awarded to the winner (0 on a tie).
    pub points: u32,
    /// Per-category markers from the player's perspective, in category order.
    pub markers: Vec<(Category, Marker)>,
}

/// Compare `player` and `opponent` on `category` and price the result.
#[must_use]
pub fn resolve_category(
    player: &Card,
    opponent: &Card,
    category: Category,
    table: &PointTable,
) -> RoundResolution {
    let markers: Vec<_> = Category::all()
        .map(|c| (c, Marker::compare(player.value(c), opponent.value(c))))
        .collect();
    let winner = markers[category.index()].1.winner();
    let points = if winner.is_some() {
        table.points(category)
    } else {
        0
    };

    RoundResolution {
        category,
        winner,
        points,
        markers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> (Card, Card) {
        let player = Card::new("P", "T")
            .with_stat(Category::ThreesMade, 3.1)
            .with_stat(Category::FreeThrowPct, 80.0)
            .with_stat(Category::Points, 20.0)
            .with_stat(Category::Rebounds, 6.0);
        let opponent = Card::new("O", "T")
            .with_stat(Category::ThreesMade, 1.2)
            .with_stat(Category::FreeThrowPct, 91.0)
            .with_stat(Category::Points, 25.0)
            .with_stat(Category::Rebounds, 6.0);
        (player, opponent)
    }

    #[test]
    fn test_default_points() {
        let table = PointTable::default();
        assert_eq!(table.points(Category::ThreesMade), 3);
        assert_eq!(table.points(Category::ThreePct), 3);
        assert_eq!(table.points(Category::FreeThrowPct), 1);
        assert_eq!(table.points(Category::GamesPlayed), 1);
        assert_eq!(table.points(Category::Minutes), 1);
        assert_eq!(table.points(Category::Points), 2);
        assert_eq!(table.points(Category::Steals), 2);
    }

    #[test]
    fn test_three_pointers_award_three() {
        let (p, o) = pair();
        let r = resolve_category(&p, &o, Category::ThreesMade, &PointTable::default());
        assert_eq!(r.winner, Some(Side::Player));
        assert_eq!(r.points, 3);
    }

    #[test]
    fn test_free_throw_pct_awards_one() {
        let (p, o) = pair();
        let r = resolve_category(&p, &o, Category::FreeThrowPct, &PointTable::default());
        assert_eq!(r.winner, Some(Side::Opponent));
        assert_eq!(r.points, 1);
    }

    #[test]
    fn test_points_award_two() {
        let (p, o) = pair();
        let r = resolve_category(&p, &o, Category::Points, &PointTable::default());
        assert_eq!(r.winner, Some(Side::Opponent));
        assert_eq!(r.points, 2);
    }

    #[test]
    fn test_tie_awards_nothing() {
        let (p, o) = pair();
        let r = resolve_category(&p, &o, Category::Rebounds, &PointTable::default());
        assert_eq!(r.winner, None);
        assert_eq!(r.points, 0);
    }

    #[test]
    fn test_markers_cover_every_category() {
        let (p, o) = pair();
        let r = resolve_category(&p, &o, Category::Points, &PointTable::default());
        assert_eq!(r.markers.len(), crate::cards::CATEGORY_COUNT);
        assert_eq!(r.markers[Category::ThreesMade.index()], (Category::ThreesMade, Marker::Higher));
        assert_eq!(r.markers[Category::Points.index()], (Category::Points, Marker::Lower));
        assert_eq!(r.markers[Category::Blocks.index()], (Category::Blocks, Marker::Tie));
    }

    #[test]
    fn test_table_serde() {
        let table = PointTable::default().with_points(Category::Assists, 4);
        let json = serde_json::to_string(&table).unwrap();
        let back: PointTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back.points(Category::Assists), 4);

        let empty: PointTable = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, PointTable::default());
    }
}
