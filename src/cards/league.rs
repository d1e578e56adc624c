//! League contexts. Each league has its own deck.

use serde::{Deserialize, Serialize};

/// Which pool of player-season records a deck is drawn from.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum League {
    /// Current-season NBA league leaders.
    #[default]
    Nba,
    /// Current-season WNBA league leaders.
    Wnba,
    /// All-time per-game leaders.
    AllTime,
}

impl League {
    /// Conventional file name of the league's deck.
    #[must_use]
    pub fn deck_file(self) -> &'static str {
        match self {
            League::Nba => "data.json",
            League::Wnba => "data-wnba.json",
            League::AllTime => "alltime.json",
        }
    }
}
