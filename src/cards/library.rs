//! Decks for several leagues, one of them active.

use rustc_hash::FxHashMap;

use super::deck::Deck;
use super::league::League;
use crate::error::CardError;

/// Loaded decks keyed by league.
///
/// ```
/// use stat_trumps::cards::{Card, Deck, League, Library};
///
/// let deck = Deck::new(League::Wnba, vec![Card::new("A", "T"), Card::new("B", "T")]).unwrap();
/// let mut library = Library::new(deck);
/// assert_eq!(library.active_league(), League::Wnba);
/// assert!(library.set_active(League::Nba).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Library {
    decks: FxHashMap<League, Deck>,
    active: League,
}

impl Library {
    /// Create a library whose active deck is `deck`.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        let active = deck.league();
        let mut decks = FxHashMap::default();
        decks.insert(active, deck);
        Self { decks, active }
    }

    /// Add or replace a league's deck. The active league is unchanged.
    pub fn insert(&mut self, deck: Deck) {
        self.decks.insert(deck.league(), deck);
    }

    /// Switch the active league. Fails, keeping the current league, if no
    /// deck is loaded for `league`.
    pub fn set_active(&mut self, league: League) -> Result<(), CardError> {
        if !self.decks.contains_key(&league) {
            return Err(CardError::UnknownLeague(league));
        }
        self.active = league;
        Ok(())
    }

    /// The active league.
    #[must_use]
    pub fn active_league(&self) -> League {
        self.active
    }

    /// The active deck.
    #[must_use]
    pub fn active(&self) -> &Deck {
        &self.decks[&self.active]
    }

    /// The active deck, mutably.
    pub fn active_mut(&mut self) -> &mut Deck {
        self.decks
            .get_mut(&self.active)
            .expect("active league always has a deck")
    }

    /// Deck for a league, if loaded.
    #[must_use]
    pub fn get(&self, league: League) -> Option<&Deck> {
        self.decks.get(&league)
    }

    /// Loaded leagues.
    pub fn leagues(&self) -> impl Iterator<Item = League> + '_ {
        self.decks.keys().copied()
    }
}
