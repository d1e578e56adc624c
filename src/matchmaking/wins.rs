//! Category win counting.

use crate::cards::{Card, Category};

/// Number of categories in which `a` strictly beats `b`.
///
/// Ties favour neither card.
#[must_use]
pub fn count_wins(a: &Card, b: &Card) -> usize {
    Category::all()
        .filter(|&c| a.value(c) > b.value(c))
        .count()
}
