//! # stat-trumps
//!
//! A head-to-head stat-comparison card game against a computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Rubber-band matchmaking**: Each deal picks an opponent card so the
//!    player's card wins a target number of categories, where the target
//!    shrinks as the player's lead grows. Games stay close either way.
//!
//! 2. **Bounded search**: Matchmaking is capped in draws and target widenings
//!    and always returns two distinct cards, falling back to the nearest pair.
//!
//! 3. **Effects, not side effects**: The session never renders or sleeps. Each
//!    transition returns a list of `Effect`s for the host to apply, including
//!    timer requests that call back into the session.
//!
//! ## Modules
//!
//! - `core`: Sides, score and timeline, RNG, configuration
//! - `cards`: Categories, cards, decks, leagues and deck loading
//! - `matchmaking`: Win counting, difficulty curve, matchup search
//! - `rules`: Category resolution, point values, final result
//! - `session`: Clock, phases, effects, the `GameSession` state machine
//! - `error`: Error types

pub mod cards;
pub mod core;
pub mod error;
pub mod matchmaking;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    CompareMode, GameConfig, GameRng, Score, ScoreEntry, Settings, Side, SideMap, TickSize,
};

pub use crate::cards::{Card, Category, Deck, League, Library, StatLine, CATEGORY_COUNT};

pub use crate::matchmaking::{
    count_wins, select_matchup, DifficultyCurve, Matchup, MatchmakingSearch, OutcomeKind,
    SearchConfig, SearchOutcome, SearchStats,
};

pub use crate::rules::{resolve_category, GameResult, Marker, PointTable, RoundResolution};

pub use crate::session::{Effect, EffectSink, GamePhase, GameSession, TimerKind, TimerToken};

pub use crate::error::{CardError, ConfigError, DeckError, SessionError};
