//! Statistical categories and per-card stat lines.
//!
//! The category set is fixed. Every card carries a value for every
//! category, so comparisons never depend on string lookups at play time.
//!
//! Keys match the record format the deck files use (`"pts"`, `"3pm"`, ...).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use strum::{EnumCount, IntoEnumIterator};

/// A compared statistic.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
)]
pub enum Category {
    #[serde(rename = "gp")]
    #[strum(to_string = "gp")]
    GamesPlayed,
    #[serde(rename = "min")]
    #[strum(to_string = "min")]
    Minutes,
    #[serde(rename = "pts")]
    #[strum(to_string = "pts")]
    Points,
    #[serde(rename = "fgp")]
    #[strum(to_string = "fgp")]
    FieldGoalPct,
    #[serde(rename = "3pm")]
    #[strum(to_string = "3pm")]
    ThreesMade,
    #[serde(rename = "3pa")]
    #[strum(to_string = "3pa")]
    ThreesAttempted,
    #[serde(rename = "3pp")]
    #[strum(to_string = "3pp")]
    ThreePct,
    #[serde(rename = "ftp")]
    #[strum(to_string = "ftp")]
    FreeThrowPct,
    #[serde(rename = "ftm")]
    #[strum(to_string = "ftm")]
    FreeThrowsMade,
    #[serde(rename = "reb")]
    #[strum(to_string = "reb")]
    Rebounds,
    #[serde(rename = "ast")]
    #[strum(to_string = "ast")]
    Assists,
    #[serde(rename = "stl")]
    #[strum(to_string = "stl")]
    Steals,
    #[serde(rename = "blk")]
    #[strum(to_string = "blk")]
    Blocks,
}

/// Number of compared categories.
pub const CATEGORY_COUNT: usize = Category::COUNT;

impl Category {
    /// Position in the fixed category order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// All categories in their fixed order.
    pub fn all() -> impl Iterator<Item = Category> {
        Category::iter()
    }

    /// Record key, e.g. `"3pm"`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Category::GamesPlayed => "gp",
            Category::Minutes => "min",
            Category::Points => "pts",
            Category::FieldGoalPct => "fgp",
            Category::ThreesMade => "3pm",
            Category::ThreesAttempted => "3pa",
            Category::ThreePct => "3pp",
            Category::FreeThrowPct => "ftp",
            Category::FreeThrowsMade => "ftm",
            Category::Rebounds => "reb",
            Category::Assists => "ast",
            Category::Steals => "stl",
            Category::Blocks => "blk",
        }
    }
}

/// One numeric value per category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatLine([f64; CATEGORY_COUNT]);

impl StatLine {
    /// A stat line with every category at zero.
    #[must_use]
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Build from values in category order.
    #[must_use]
    pub const fn from_values(values: [f64; CATEGORY_COUNT]) -> Self {
        Self(values)
    }

    /// Value for a category.
    #[must_use]
    pub fn get(&self, category: Category) -> f64 {
        self.0[category.index()]
    }

    /// Set a category value.
    pub fn set(&mut self, category: Category, value: f64) {
        self.0[category.index()] = value;
    }

    /// Iterate over (Category, value) pairs in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::iter().map(move |c| (c, self.get(c)))
    }
}

impl Index<Category> for StatLine {
    type Output = f64;

    fn index(&self, category: Category) -> &f64 {
        &self.0[category.index()]
    }
}

impl IndexMut<Category> for StatLine {
    fn index_mut(&mut self, category: Category) -> &mut f64 {
        &mut self.0[category.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_category_count_and_order() {
        assert_eq!(CATEGORY_COUNT, 13);
        let all: Vec<_> = Category::all().collect();
        assert_eq!(all.first(), Some(&Category::GamesPlayed));
        assert_eq!(all.last(), Some(&Category::Blocks));
        for (i, c) in all.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn test_keys_match_display_and_parse() {
        for category in Category::all() {
            assert_eq!(category.to_string(), category.key());
            assert_eq!(Category::from_str(category.key()), Ok(category));
        }
        assert_eq!(Category::ThreesMade.key(), "3pm");
        assert!(Category::from_str("tov").is_err());
    }

    #[test]
    fn test_category_serde_uses_record_keys() {
        let json = serde_json::to_string(&Category::ThreePct).unwrap();
        assert_eq!(json, "\"3pp\"");
        let parsed: Category = serde_json::from_str("\"ftp\"").unwrap();
        assert_eq!(parsed, Category::FreeThrowPct);
    }

    #[test]
    fn test_stat_line_access() {
        let mut line = StatLine::zeroed();
        line.set(Category::Points, 27.5);
        line[Category::Assists] = 8.0;

        assert_eq!(line.get(Category::Points), 27.5);
        assert_eq!(line[Category::Assists], 8.0);
        assert_eq!(line.get(Category::Blocks), 0.0);
        assert_eq!(line.iter().count(), CATEGORY_COUNT);
    }
}
