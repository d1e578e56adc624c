//! The game session state machine.
//!
//! A `GameSession` owns everything one game touches: the decks, the score,
//! the clock, the RNG and the current round. All transitions are synchronous
//! and return the effects the host must perform; timed transitions come back
//! in through [`GameSession::on_timer`].

use crate::cards::{Category, Library};
use crate::core::{CompareMode, GameConfig, GameRng, GameRngState, Score, Settings, Side};
use crate::error::SessionError;
use crate::matchmaking::{Matchup, MatchmakingSearch, SearchStats};
use crate::rules::{resolve_category, GameResult};

use super::clock::{GameClock, Tick};
use super::effect::{DealReport, Effect, TimerKind, TimerToken};
use super::phase::GamePhase;

/// One player's game against the computer.
///
/// ## Example
///
/// ```
/// use stat_trumps::cards::{Card, Category, Deck, League, Library};
/// use stat_trumps::core::{GameConfig, Settings};
/// use stat_trumps::session::{Effect, GamePhase, GameSession};
///
/// let cards = (0..10)
///     .map(|i| Card::new(format!("P{i}"), "T").with_stat(Category::Points, i as f64))
///     .collect();
/// let library = Library::new(Deck::new(League::Nba, cards).unwrap());
/// let mut session =
///     GameSession::new(GameConfig::default(), Settings::default(), library).unwrap();
///
/// session.start().unwrap();
/// assert_eq!(session.phase(), GamePhase::InRound);
///
/// let effects = session.select_category(Category::Points).unwrap();
/// assert_eq!(session.phase(), GamePhase::AwaitingResolution);
/// assert!(effects.iter().any(|e| matches!(e, Effect::Schedule { .. })));
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    settings: Settings,
    tick_minutes: u32,
    library: Library,
    search: MatchmakingSearch,
    rng: GameRng,
    score: Score,
    clock: GameClock,
    phase: GamePhase,
    round: Option<Matchup>,
    generation: u64,
    result: Option<GameResult>,
}

impl GameSession {
    /// Create a session in `Pregame`.
    ///
    /// Fails if the config has no playable clock or no deck is loaded for the
    /// settings' league.
    pub fn new(
        config: GameConfig,
        settings: Settings,
        mut library: Library,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        library.set_active(settings.league)?;

        Ok(Self {
            search: MatchmakingSearch::new(config.search.clone(), config.difficulty),
            rng: GameRng::new(config.seed),
            clock: GameClock::new(config.periods, config.period_length),
            tick_minutes: settings.tick_size.minutes(),
            config,
            settings,
            library,
            score: Score::new(),
            phase: GamePhase::Pregame,
            round: None,
            generation: 0,
            result: None,
        })
    }

    // === Accessors ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Score and timeline of the current game.
    #[must_use]
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Game clock.
    #[must_use]
    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// The matchup in play, if any.
    #[must_use]
    pub fn round(&self) -> Option<&Matchup> {
        self.round.as_ref()
    }

    /// Final result once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Game configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Loaded decks.
    #[must_use]
    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Telemetry from the most recent deal.
    #[must_use]
    pub fn last_search(&self) -> &SearchStats {
        self.search.stats()
    }

    /// Current game generation. Bumped by every `start`.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// RNG position, for replaying a game from this point.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Continue drawing from a saved RNG position instead of the config seed.
    #[must_use]
    pub fn with_rng_state(mut self, state: &GameRngState) -> Self {
        self.rng = GameRng::from_state(state);
        self
    }

    /// Replace the settings.
    ///
    /// Compare mode applies from the next resolution; tick size and league
    /// apply from the next `start`.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    // === Transitions ===

    /// Start a new game: reset score and clock, deal the first matchup.
    ///
    /// Any timer armed by a previous game becomes stale. Fails, leaving the
    /// session untouched, if no deck is loaded for the configured league.
    pub fn start(&mut self) -> Result<Vec<Effect>, SessionError> {
        self.library.set_active(self.settings.league)?;
        self.generation += 1;
        self.tick_minutes = self.settings.tick_size.minutes();
        self.score.reset();
        self.clock.reset();
        self.round = None;
        self.result = None;

        tracing::info!(
            generation = self.generation,
            league = %self.library.active_league(),
            tick = self.tick_minutes,
            "game started"
        );

        let mut effects = vec![self.score_effect(), self.clock_effect()];
        self.deal(&mut effects);
        Ok(effects)
    }

    /// The player picked `category` for the round in play.
    ///
    /// Only accepted in `InRound`; input stays disabled until the next deal,
    /// so a round can't be resolved twice.
    pub fn select_category(&mut self, category: Category) -> Result<Vec<Effect>, SessionError> {
        if !self.phase.accepts_input() {
            return Err(SessionError::InputDisabled(self.phase));
        }
        let Some(round) = self.round.as_ref() else {
            return Err(SessionError::InputDisabled(self.phase));
        };

        let mut resolution =
            resolve_category(&round.player, &round.opponent, category, &self.config.points);
        if let Some(side) = resolution.winner {
            self.score.award(side, resolution.points);
        }
        self.score.record(self.clock.period(), self.clock.remaining());

        if self.settings.compare_mode == CompareMode::RevealOne {
            resolution.markers.retain(|(c, _)| *c == category);
        }

        tracing::debug!(
            %category,
            winner = ?resolution.winner,
            points = resolution.points,
            player = self.score.total(Side::Player),
            opponent = self.score.total(Side::Opponent),
            "category resolved"
        );

        self.phase = GamePhase::AwaitingResolution;
        Ok(vec![
            Effect::InputEnabled(false),
            Effect::RoundResolved(resolution),
            self.score_effect(),
            self.schedule(TimerKind::AdvanceClock, self.config.resolution_delay_ms),
        ])
    }

    /// A timer armed by a `Schedule` effect fired.
    ///
    /// Tokens from an earlier game, or that don't match the current phase,
    /// are ignored.
    pub fn on_timer(&mut self, token: TimerToken) -> Vec<Effect> {
        if token.generation != self.generation {
            tracing::debug!(
                stale = token.generation,
                current = self.generation,
                "ignoring timer from previous game"
            );
            return Vec::new();
        }

        match (token.kind, self.phase) {
            (TimerKind::AdvanceClock, GamePhase::AwaitingResolution) => self.advance_clock(),
            (TimerKind::NextRound, GamePhase::PeriodBoundary) => self.next_round(),
            (kind, phase) => {
                tracing::debug!(?kind, ?phase, "ignoring timer in unexpected phase");
                Vec::new()
            }
        }
    }

    fn advance_clock(&mut self) -> Vec<Effect> {
        self.round = None;
        let tick = self.clock.tick(self.tick_minutes);
        self.phase = GamePhase::PeriodBoundary;

        let mut effects = vec![self.clock_effect()];
        let delay = match tick {
            Tick::Running => self.config.next_round_delay_ms,
            Tick::PeriodEnded { next } => {
                tracing::debug!(period = next, "period advanced");
                effects.push(Effect::PeriodAdvanced { period: next });
                self.config.period_break_delay_ms
            }
            Tick::GameEnded => 0,
        };
        effects.push(self.schedule(TimerKind::NextRound, delay));
        effects
    }

    fn next_round(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.clock.is_over() {
            let result = GameResult::from_totals(self.score.totals());
            self.result = Some(result);
            self.phase = GamePhase::GameOver;
            tracing::info!(
                ?result,
                player = self.score.total(Side::Player),
                opponent = self.score.total(Side::Opponent),
                "game over"
            );
            effects.push(Effect::GameOver(result));
        } else {
            self.deal(&mut effects);
        }
        effects
    }

    fn deal(&mut self, effects: &mut Vec<Effect>) {
        let lead = self.score.lead();
        let matchup = self
            .search
            .search(self.library.active_mut(), lead, &mut self.rng)
            .into_matchup();

        effects.push(Effect::Dealt(DealReport {
            player: matchup.player.clone(),
            opponent: matchup.opponent.clone(),
            wins: matchup.wins,
            stats: self.search.stats().clone(),
        }));
        effects.push(Effect::InputEnabled(true));

        self.round = Some(matchup);
        self.phase = GamePhase::InRound;
    }

    fn schedule(&self, kind: TimerKind, delay_ms: u64) -> Effect {
        Effect::Schedule {
            token: TimerToken {
                generation: self.generation,
                kind,
            },
            delay_ms,
        }
    }

    fn score_effect(&self) -> Effect {
        Effect::ScoreChanged {
            player: self.score.total(Side::Player),
            opponent: self.score.total(Side::Opponent),
            lead: self.score.lead(),
        }
    }

    fn clock_effect(&self) -> Effect {
        Effect::ClockChanged {
            period: self.clock.period(),
            remaining: self.clock.remaining(),
        }
    }
}
