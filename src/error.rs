//! Error types.
//!
//! Exhausted decks and matchmaking non-convergence are not errors: both are
//! absorbed inside the search. What remains is bad input at the edges.

use thiserror::Error;

use crate::cards::{Category, League};

/// A card record that cannot be used in matchmaking.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("card {card:?} is missing category {category}")]
    MissingCategory { card: String, category: Category },

    #[error("card {card:?} has unparseable {category} value {value:?}")]
    Unparseable {
        card: String,
        category: Category,
        value: String,
    },

    #[error("card {card:?} has non-finite {category} value")]
    NonFinite { card: String, category: Category },

    #[error("no deck loaded for league {0}")]
    UnknownLeague(League),
}

/// Errors raised while loading a deck.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Card(#[from] CardError),

    #[error("deck for {league} has {len} cards, at least 2 are required")]
    TooSmall { league: League, len: usize },
}

/// Rejected configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tick size {0} is not one of 1, 2, 3, 4 or 6")]
    InvalidTickSize(u32),

    #[error("a game needs at least one period of non-zero length")]
    EmptyGame,
}

/// Session construction and transition failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("category selection is disabled in phase {0:?}")]
    InputDisabled(crate::session::GamePhase),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Card(#[from] CardError),
}
