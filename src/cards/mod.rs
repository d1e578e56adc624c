//! Card system: categories, cards, decks and leagues.
//!
//! ## Key Types
//!
//! - `Category`: The fixed set of compared statistics
//! - `StatLine`: One value per category
//! - `Card`: An immutable player-season record
//! - `Deck`: The undealt cards of one league, refilled when exhausted
//! - `Library`: Decks for several leagues, one active

pub mod card;
pub mod category;
pub mod deck;
pub mod league;
pub mod library;
pub mod loader;

pub use card::{Card, RawCard};
pub use category::{Category, StatLine, CATEGORY_COUNT};
pub use deck::Deck;
pub use league::League;
pub use library::Library;
pub use loader::{load_deck, parse_cards, parse_deck};
