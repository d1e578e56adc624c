//! Game clock: fixed periods counted down in whole minutes.

use serde::{Deserialize, Serialize};

/// What a clock tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tick {
    /// Time remains in the current period.
    Running,
    /// The period ran out; the clock now shows the start of `next`.
    PeriodEnded { next: u32 },
    /// The last period ran out.
    GameEnded,
}

/// Period index and remaining minutes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    periods: u32,
    period_length: u32,
    period: u32,
    remaining: u32,
}

impl GameClock {
    /// A clock at the start of the first period.
    #[must_use]
    pub fn new(periods: u32, period_length: u32) -> Self {
        Self {
            periods,
            period_length,
            period: 0,
            remaining: period_length,
        }
    }

    /// Back to the start of the first period.
    pub fn reset(&mut self) {
        self.period = 0;
        self.remaining = self.period_length;
    }

    /// Current period (0-based).
    #[must_use]
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Minutes left in the current period.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Number of periods in a game.
    #[must_use]
    pub fn periods(&self) -> u32 {
        self.periods
    }

    /// True once the last period has run out.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.period + 1 >= self.periods && self.remaining == 0
    }

    /// Take `minutes` off the clock, saturating at zero.
    pub fn tick(&mut self, minutes: u32) -> Tick {
        if self.is_over() {
            return Tick::GameEnded;
        }
        self.remaining = self.remaining.saturating_sub(minutes);
        if self.remaining > 0 {
            return Tick::Running;
        }
        if self.period + 1 < self.periods {
            self.period += 1;
            self.remaining = self.period_length;
            Tick::PeriodEnded { next: self.period }
        } else {
            Tick::GameEnded
        }
    }
}
