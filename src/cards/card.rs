//! Cards: one player-season stat record each.
//!
//! A `Card` is immutable once built. Instances come either from the builder
//! (tests, fixtures) or from a raw deck record via `Card::try_from`, which
//! parses every category value up front.
//!
//! ## Example
//!
//! ```
//! use stat_trumps::cards::{Card, Category};
//!
//! let card = Card::new("Nikola Jokic", "DEN")
//!     .with_stat(Category::Points, 29.6)
//!     .with_stat(Category::Assists, 10.2);
//!
//! assert_eq!(card.value(Category::Assists), 10.2);
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::category::{Category, StatLine};
use crate::error::CardError;

/// A playable card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Source record id (may be empty).
    pub id: String,

    /// Player name.
    pub name: String,

    /// Team abbreviation.
    pub team: String,

    /// Image reference for the renderer.
    pub image: String,

    /// Parsed category values.
    pub stats: StatLine,
}

impl Card {
    /// Create a card with every category at zero.
    #[must_use]
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            team: team.into(),
            image: String::new(),
            stats: StatLine::zeroed(),
        }
    }

    /// Set one category value (builder pattern).
    #[must_use]
    pub fn with_stat(mut self, category: Category, value: f64) -> Self {
        self.stats.set(category, value);
        self
    }

    /// Replace the whole stat line.
    #[must_use]
    pub fn with_stats(mut self, stats: StatLine) -> Self {
        self.stats = stats;
        self
    }

    /// Set the record id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Value for one category.
    #[must_use]
    pub fn value(&self, category: Category) -> f64 {
        self.stats.get(category)
    }
}

/// A card record as it appears in a deck file.
///
/// All values are strings in the files produced by the data-preparation
/// scripts; plain JSON numbers are accepted too. Keys outside the category
/// set (`"#"`, `"fga"`, `"tov"`, ...) are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct RawCard {
    pub player: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub pic: String,
    #[serde(flatten)]
    pub fields: FxHashMap<String, serde_json::Value>,
}

impl TryFrom<RawCard> for Card {
    type Error = CardError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        let mut stats = StatLine::zeroed();
        for category in Category::all() {
            stats.set(category, parse_value(&raw, category)?);
        }

        Ok(Card {
            id: raw.id,
            name: raw.player,
            team: raw.team,
            image: raw.pic,
            stats,
        })
    }
}

fn parse_value(raw: &RawCard, category: Category) -> Result<f64, CardError> {
    let missing = || CardError::MissingCategory {
        card: raw.player.clone(),
        category,
    };
    let unparseable = |value: String| CardError::Unparseable {
        card: raw.player.clone(),
        category,
        value,
    };

    let value = match raw.fields.get(category.key()) {
        None | Some(serde_json::Value::Null) => return Err(missing()),
        Some(serde_json::Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| unparseable(s.clone()))?,
        Some(serde_json::Value::Number(n)) => {
            n.as_f64().ok_or_else(|| unparseable(n.to_string()))?
        }
        Some(other) => return Err(unparseable(other.to_string())),
    };

    if !value.is_finite() {
        return Err(CardError::NonFinite {
            card: raw.player.clone(),
            category,
        });
    }
    Ok(value)
}
