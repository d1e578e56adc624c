//! Running score and the per-game score timeline.

use serde::{Deserialize, Serialize};

use super::side::{Side, SideMap};

/// One point in the score timeline, recorded after each resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// 1-based round number within the game.
    pub round: u32,
    /// Period the round was played in (0-based).
    pub period: u32,
    /// Time remaining in the period when the round was resolved.
    pub clock: u32,
    /// Player total after the round.
    pub player: u32,
    /// Opponent total after the round.
    pub opponent: u32,
    /// `player - opponent` after the round.
    pub lead: i32,
}

/// Running totals for one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    totals: SideMap<u32>,
    timeline: Vec<ScoreEntry>,
}

impl Score {
    /// A fresh 0-0 score with an empty timeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to 0-0 and clear the timeline.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Total for one side.
    #[must_use]
    pub fn total(&self, side: Side) -> u32 {
        self.totals[side]
    }

    /// Both totals.
    #[must_use]
    pub fn totals(&self) -> SideMap<u32> {
        self.totals
    }

    /// Player score minus opponent score.
    #[must_use]
    pub fn lead(&self) -> i32 {
        self.totals.player as i32 - self.totals.opponent as i32
    }

    /// Award points to one side.
    pub fn award(&mut self, side: Side, points: u32) {
        self.totals[side] += points;
    }

    /// Append the current totals to the timeline.
    pub fn record(&mut self, period: u32, clock: u32) {
        let entry = ScoreEntry {
            round: self.timeline.len() as u32 + 1,
            period,
            clock,
            player: self.totals.player,
            opponent: self.totals.opponent,
            lead: self.lead(),
        };
        self.timeline.push(entry);
    }

    /// Every recorded entry, oldest first.
    #[must_use]
    pub fn timeline(&self) -> &[ScoreEntry] {
        &self.timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_and_lead() {
        let mut score = Score::new();
        score.award(Side::Player, 3);
        score.award(Side::Opponent, 5);

        assert_eq!(score.total(Side::Player), 3);
        assert_eq!(score.total(Side::Opponent), 5);
        assert_eq!(score.lead(), -2);
    }

    #[test]
    fn test_timeline() {
        let mut score = Score::new();
        score.award(Side::Player, 2);
        score.record(0, 11);
        score.award(Side::Opponent, 3);
        score.record(0, 10);

        let timeline = score.timeline();
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].round, 1);
        assert_eq!(timeline[0].lead, 2);
        assert_eq!(timeline[1].round, 2);
        assert_eq!(timeline[1].lead, -1);
        assert_eq!(timeline[1].clock, 10);
    }

    #[test]
    fn test_reset_clears_timeline() {
        let mut score = Score::new();
        score.award(Side::Player, 2);
        score.record(0, 11);
        score.reset();

        assert_eq!(score.lead(), 0);
        assert!(score.timeline().is_empty());
    }
}
