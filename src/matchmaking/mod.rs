//! Opponent matchmaking.
//!
//! ## Overview
//!
//! Each deal pairs a random player card with an opponent chosen so that the
//! player card wins a target number of categories. The target comes from a
//! [`DifficultyCurve`] over the current lead, keeping games close whichever
//! side is ahead.
//!
//! ## Usage
//!
//! ```rust
//! use stat_trumps::cards::{Card, Category, Deck, League};
//! use stat_trumps::core::GameRng;
//! use stat_trumps::matchmaking::{count_wins, MatchmakingSearch};
//!
//! let cards = (0..6)
//!     .map(|i| Card::new(format!("P{i}"), "T").with_stat(Category::Points, i as f64))
//!     .collect();
//! let mut deck = Deck::new(League::Nba, cards).unwrap();
//! let mut rng = GameRng::new(42);
//!
//! let mut search = MatchmakingSearch::default();
//! let matchup = search.search(&mut deck, 0, &mut rng).into_matchup();
//!
//! assert_eq!(deck.len(), 4);
//! assert_eq!(matchup.wins, count_wins(&matchup.player, &matchup.opponent));
//! ```

pub mod config;
pub mod difficulty;
pub mod search;
pub mod stats;
pub mod wins;

pub use config::SearchConfig;
pub use difficulty::DifficultyCurve;
pub use search::{select_matchup, Matchup, MatchmakingSearch, SearchOutcome};
pub use stats::{OutcomeKind, SearchStats};
pub use wins::count_wins;
