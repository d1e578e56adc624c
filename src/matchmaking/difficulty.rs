//! Rubber-band difficulty: score lead to target win count.

use serde::{Deserialize, Serialize};

use crate::cards::CATEGORY_COUNT;

/// Maps the player's lead to how many categories the dealt player card may
/// win against its opponent.
///
/// `allowed = max(0, base - floor(lead * multiplier))`, clamped to the
/// category count. A positive lead tightens the matchup, a deficit loosens
/// it. `multiplier` must be non-negative for the curve to be monotone.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifficultyCurve {
    /// Allowed wins at an even score.
    pub base: i32,
    /// Allowed wins lost per point of lead.
    pub multiplier: f64,
}

impl Default for DifficultyCurve {
    fn default() -> Self {
        Self {
            base: 2,
            multiplier: 0.25,
        }
    }
}

impl DifficultyCurve {
    /// Set the even-score target.
    #[must_use]
    pub fn with_base(mut self, base: i32) -> Self {
        self.base = base;
        self
    }

    /// Set the per-point slope.
    #[must_use]
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier.max(0.0);
        self
    }

    /// Target win count for `lead = player - opponent`.
    #[must_use]
    pub fn max_allowed_wins(&self, lead: i32) -> usize {
        let shift = (f64::from(lead) * self.multiplier).floor();
        let allowed = (f64::from(self.base) - shift).max(0.0);
        allowed.min(CATEGORY_COUNT as f64) as usize
    }
}
