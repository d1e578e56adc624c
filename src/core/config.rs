//! Game configuration and player-facing settings.
//!
//! - `GameConfig`: fixed game structure and tuning constants (periods,
//!   delays, difficulty curve, search caps, point table, seed)
//! - `Settings`: options the player can change between games (tick size,
//!   compare mode, league)
//!
//! Settings reject invalid values and keep the last valid one.

use serde::{Deserialize, Serialize};

use crate::cards::League;
use crate::error::ConfigError;
use crate::matchmaking::{DifficultyCurve, SearchConfig};
use crate::rules::PointTable;

/// Minutes taken off the clock per resolved round.
///
/// Only divisors of the default 12-minute period are accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TickSize(u32);

impl TickSize {
    /// Accepted tick sizes.
    pub const ALLOWED: [u32; 5] = [1, 2, 3, 4, 6];

    /// Validate a tick size.
    pub fn new(minutes: u32) -> Result<Self, ConfigError> {
        if Self::ALLOWED.contains(&minutes) {
            Ok(Self(minutes))
        } else {
            Err(ConfigError::InvalidTickSize(minutes))
        }
    }

    /// Minutes per tick.
    #[must_use]
    pub const fn minutes(self) -> u32 {
        self.0
    }
}

impl Default for TickSize {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<u32> for TickSize {
    type Error = ConfigError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Self::new(minutes)
    }
}

impl From<TickSize> for u32 {
    fn from(tick: TickSize) -> u32 {
        tick.0
    }
}

/// How much of the opponent card is revealed after a resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareMode {
    /// Markers for every category.
    #[default]
    RevealAll,
    /// Marker for the chosen category only.
    RevealOne,
}

/// Player-adjustable options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Clock minutes per round.
    pub tick_size: TickSize,
    /// Reveal behaviour after each round.
    pub compare_mode: CompareMode,
    /// Deck to deal from.
    pub league: League,
}

impl Settings {
    /// Change the tick size. An invalid value is rejected and the previous
    /// tick size kept.
    pub fn set_tick_size(&mut self, minutes: u32) -> Result<(), ConfigError> {
        self.tick_size = TickSize::new(minutes)?;
        Ok(())
    }

    /// Set the tick size (builder pattern).
    pub fn with_tick_size(mut self, minutes: u32) -> Result<Self, ConfigError> {
        self.set_tick_size(minutes)?;
        Ok(self)
    }

    /// Set the compare mode.
    #[must_use]
    pub fn with_compare_mode(mut self, mode: CompareMode) -> Self {
        self.compare_mode = mode;
        self
    }

    /// Set the league.
    #[must_use]
    pub fn with_league(mut self, league: League) -> Self {
        self.league = league;
        self
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of periods (quarters).
    pub periods: u32,

    /// Minutes per period.
    pub period_length: u32,

    /// Delay between a resolution and the clock advancing, for UI feedback.
    pub resolution_delay_ms: u64,

    /// Delay before dealing the next round within a period.
    pub next_round_delay_ms: u64,

    /// Delay before dealing the first round of a new period.
    pub period_break_delay_ms: u64,

    /// Lead to target win count.
    pub difficulty: DifficultyCurve,

    /// Matchmaking iteration caps.
    pub search: SearchConfig,

    /// Points per category.
    pub points: PointTable,

    /// Seed for the session RNG.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            periods: 4,
            period_length: 12,
            resolution_delay_ms: 1500,
            next_round_delay_ms: 0,
            period_break_delay_ms: 2000,
            difficulty: DifficultyCurve::default(),
            search: SearchConfig::default(),
            points: PointTable::default(),
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Check the game has a playable clock.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.periods == 0 || self.period_length == 0 {
            return Err(ConfigError::EmptyGame);
        }
        Ok(())
    }

    /// Set the number of periods.
    #[must_use]
    pub fn with_periods(mut self, periods: u32) -> Self {
        self.periods = periods;
        self
    }

    /// Set the period length.
    #[must_use]
    pub fn with_period_length(mut self, minutes: u32) -> Self {
        self.period_length = minutes;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the difficulty curve.
    #[must_use]
    pub fn with_difficulty(mut self, curve: DifficultyCurve) -> Self {
        self.difficulty = curve;
        self
    }

    /// Set the search caps.
    #[must_use]
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Set the point table.
    #[must_use]
    pub fn with_points(mut self, points: PointTable) -> Self {
        self.points = points;
        self
    }
}
