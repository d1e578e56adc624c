//! The card repository for one league.
//!
//! A `Deck` keeps the pristine card list alongside the undealt cards. Dealt
//! cards are removed for good; when fewer than two remain the deck refills
//! from the pristine list. Both lists are `im::Vector`s, so a refill is an
//! O(1) structural copy.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::league::League;
use crate::error::DeckError;

/// Undealt cards plus the full deck they were dealt from.
///
/// Deserialization goes through the same size check as [`Deck::new`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "DeckRecord")]
pub struct Deck {
    league: League,
    original: Vector<Card>,
    cards: Vector<Card>,
    resets: u32,
}

/// Serialized form of a `Deck`, checked on the way in.
#[derive(Deserialize)]
struct DeckRecord {
    league: League,
    original: Vector<Card>,
    cards: Vector<Card>,
    #[serde(default)]
    resets: u32,
}

impl TryFrom<DeckRecord> for Deck {
    type Error = DeckError;

    fn try_from(record: DeckRecord) -> Result<Self, Self::Error> {
        if record.original.len() < 2 {
            return Err(DeckError::TooSmall {
                league: record.league,
                len: record.original.len(),
            });
        }
        Ok(Self {
            league: record.league,
            original: record.original,
            cards: record.cards,
            resets: record.resets,
        })
    }
}

impl Deck {
    /// Create a deck. At least two cards are needed to deal a matchup.
    pub fn new(league: League, cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() < 2 {
            return Err(DeckError::TooSmall {
                league,
                len: cards.len(),
            });
        }
        let original: Vector<Card> = cards.into_iter().collect();
        Ok(Self {
            league,
            cards: original.clone(),
            original,
            resets: 0,
        })
    }

    /// League this deck belongs to.
    #[must_use]
    pub fn league(&self) -> League {
        self.league
    }

    /// Number of undealt cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if no undealt cards remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Size of the full deck.
    #[must_use]
    pub fn full_len(&self) -> usize {
        self.original.len()
    }

    /// How many times the deck has been refilled.
    #[must_use]
    pub fn resets(&self) -> u32 {
        self.resets
    }

    /// Undealt card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Iterate over undealt cards in order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Refill with a fresh copy of the full deck.
    pub fn reset(&mut self) {
        self.cards = self.original.clone();
        self.resets += 1;
        tracing::info!(league = %self.league, cards = self.cards.len(), "deck refilled");
    }

    /// Refill if fewer than two cards remain. Returns true if a refill happened.
    pub fn ensure_pair(&mut self) -> bool {
        if self.cards.len() < 2 {
            self.reset();
            true
        } else {
            false
        }
    }

    /// Remove two distinct undealt cards, returning them in argument order.
    ///
    /// Removing the first card shifts every later index down by one, so the
    /// second index is adjusted when it sits after the first.
    ///
    /// Panics if the indices are equal or out of bounds.
    pub fn take_pair(&mut self, first: usize, second: usize) -> (Card, Card) {
        assert_ne!(first, second, "cannot deal the same card twice");
        let a = self.cards.remove(first);
        let second = if second > first { second - 1 } else { second };
        let b = self.cards.remove(second);
        (a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(n: usize) -> Deck {
        let cards = (0..n).map(|i| Card::new(format!("P{i}"), "T")).collect();
        Deck::new(League::Nba, cards).unwrap()
    }

    #[test]
    fn test_too_small() {
        let err = Deck::new(League::Wnba, vec![Card::new("Solo", "T")]).unwrap_err();
        assert!(matches!(err, DeckError::TooSmall { len: 1, .. }));
    }

    #[test]
    fn test_deserialize_checks_size() {
        let mut d = deck(4);
        d.take_pair(0, 1);
        let json = serde_json::to_value(&d).unwrap();
        let back: Deck = serde_json::from_value(json).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back.full_len(), 4);

        let solo = serde_json::json!({
            "league": "nba",
            "original": [Card::new("Solo", "T")],
            "cards": [Card::new("Solo", "T")],
            "resets": 0,
        });
        let err = serde_json::from_value::<Deck>(solo).unwrap_err();
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn test_take_pair_second_after_first() {
        let mut d = deck(5);
        let (a, b) = d.take_pair(1, 3);
        assert_eq!(a.name, "P1");
        assert_eq!(b.name, "P3");
        let names: Vec<_> = d.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["P0", "P2", "P4"]);
    }

    #[test]
    fn test_take_pair_second_before_first() {
        let mut d = deck(5);
        let (a, b) = d.take_pair(3, 0);
        assert_eq!(a.name, "P3");
        assert_eq!(b.name, "P0");
        assert_eq!(d.len(), 3);
    }

    #[test]
    #[should_panic(expected = "same card twice")]
    fn test_take_pair_same_index_panics() {
        let mut d = deck(3);
        d.take_pair(1, 1);
    }

    #[test]
    fn test_ensure_pair_refills() {
        let mut d = deck(3);
        d.take_pair(0, 1);
        assert_eq!(d.len(), 1);

        assert!(d.ensure_pair());
        assert_eq!(d.len(), 3);
        assert_eq!(d.resets(), 1);

        assert!(!d.ensure_pair());
        assert_eq!(d.resets(), 1);
    }

    #[test]
    fn test_reset_restores_original_order() {
        let mut d = deck(4);
        d.take_pair(2, 0);
        d.reset();
        let names: Vec<_> = d.iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, vec!["P0", "P1", "P2", "P3"]);
        assert_eq!(d.full_len(), 4);
    }
}
