//! Game flow: clock, phases, effects and the session state machine.
//!
//! ## Round cycle
//!
//! 1. `start` deals the first matchup (`InRound`).
//! 2. `select_category` resolves it (`AwaitingResolution`) and requests an
//!    `AdvanceClock` timer.
//! 3. The timer advances the clock (`PeriodBoundary`) and requests `NextRound`.
//! 4. `NextRound` deals again, or ends the game when the last period is out.
//!
//! Hosts feed `Schedule` effects into whatever single-shot timer facility
//! they have and call `on_timer` when each fires.

pub mod clock;
pub mod effect;
pub mod game;
pub mod phase;

pub use clock::{GameClock, Tick};
pub use effect::{dispatch, DealReport, Effect, EffectSink, TimerKind, TimerToken, TracingSink};
pub use game::GameSession;
pub use phase::GamePhase;
