//! Session output: effects for the renderer and timer requests.
//!
//! Transitions never touch a display or a timer directly. They return a list
//! of `Effect`s, and the host applies them: drawing cards and scores, enabling
//! input, and arming single-shot timers that call back into
//! [`GameSession::on_timer`](super::GameSession::on_timer).

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::matchmaking::SearchStats;
use crate::rules::{GameResult, RoundResolution};

/// Which deferred transition a timer drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// `AwaitingResolution -> PeriodBoundary`.
    AdvanceClock,
    /// `PeriodBoundary -> InRound | GameOver`.
    NextRound,
}

/// Identifies a requested timer.
///
/// Tokens carry the game generation that armed them; a new game bumps the
/// generation, so callbacks armed earlier are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken {
    pub generation: u64,
    pub kind: TimerKind,
}

/// A newly dealt matchup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DealReport {
    /// Card shown to the player.
    pub player: Card,
    /// Opponent card, hidden until resolution.
    pub opponent: Card,
    /// Categories the player card wins.
    pub wins: usize,
    /// Matchmaking telemetry.
    pub stats: SearchStats,
}

/// Something the host should do.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    /// Enable or disable category selection.
    InputEnabled(bool),
    /// Show a new matchup.
    Dealt(DealReport),
    /// Show a round's result and markers.
    RoundResolved(RoundResolution),
    /// New score totals.
    ScoreChanged { player: u32, opponent: u32, lead: i32 },
    /// New clock reading.
    ClockChanged { period: u32, remaining: u32 },
    /// A new period started.
    PeriodAdvanced { period: u32 },
    /// Call `on_timer(token)` after `delay_ms`.
    Schedule { token: TimerToken, delay_ms: u64 },
    /// The game finished.
    GameOver(GameResult),
}

/// Consumer of session effects.
pub trait EffectSink {
    /// Apply one effect.
    fn apply(&mut self, effect: &Effect);
}

/// Apply every effect in order.
pub fn dispatch<S: EffectSink + ?Sized>(effects: &[Effect], sink: &mut S) {
    for effect in effects {
        sink.apply(effect);
    }
}

/// Sink that logs effects and does nothing else.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EffectSink for TracingSink {
    fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::Dealt(deal) => tracing::info!(
                player = %deal.player.name,
                opponent = %deal.opponent.name,
                wins = deal.wins,
                attempts = deal.stats.attempts,
                target = deal.stats.initial_target,
                miss = deal.stats.miss(),
                outcome = ?deal.stats.outcome,
                "dealt"
            ),
            Effect::RoundResolved(r) => tracing::info!(
                category = %r.category,
                winner = ?r.winner,
                points = r.points,
                "round resolved"
            ),
            Effect::GameOver(result) => tracing::info!(?result, "game over"),
            other => tracing::trace!(effect = ?other),
        }
    }
}

/// Collects effects; handy for hosts that batch rendering.
impl EffectSink for Vec<Effect> {
    fn apply(&mut self, effect: &Effect) {
        self.push(effect.clone());
    }
}
