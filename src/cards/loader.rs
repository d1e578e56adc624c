//! Deck loading from the JSON record format.
//!
//! A deck file is a JSON array of records such as:
//!
//! ```json
//! [{ "player": "Jalen Brunson", "team": "NYK", "id": "1628973",
//!    "gp": "65", "min": "35.4", "pts": "26.0", "fgp": "48.8", "3pm": "2.4",
//!    "3pa": "6.6", "3pp": "36.5", "ftp": "81.9", "ftm": "6.5", "reb": "2.9",
//!    "ast": "7.3", "stl": "0.9", "blk": "0.1", "pic": "..." }]
//! ```
//!
//! Every record is validated here; a single bad record rejects the deck.

use std::path::Path;

use super::card::{Card, RawCard};
use super::deck::Deck;
use super::league::League;
use crate::error::DeckError;

/// Parse the cards of a deck file.
pub fn parse_cards(json: &str) -> Result<Vec<Card>, DeckError> {
    let raw: Vec<RawCard> = serde_json::from_str(json)?;
    let cards = raw
        .into_iter()
        .map(Card::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(cards)
}

/// Parse a deck for `league` from JSON text.
pub fn parse_deck(league: League, json: &str) -> Result<Deck, DeckError> {
    let cards = parse_cards(json)?;
    tracing::debug!(%league, cards = cards.len(), "deck parsed");
    Deck::new(league, cards)
}

/// Load `league`'s deck from `dir`, using the league's conventional file name.
pub fn load_deck(league: League, dir: impl AsRef<Path>) -> Result<Deck, DeckError> {
    let path = dir.as_ref().join(league.deck_file());
    let json = std::fs::read_to_string(&path)?;
    parse_deck(league, &json)
}
