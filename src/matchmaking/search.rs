//! Difficulty-banded matchmaking search.
//!
//! Draws a random player card, scans the rest of the deck for opponents that
//! concede exactly the target number of categories, and picks one of those
//! uniformly. When no draw within the budget finds an exact match the target
//! is widened one step and the draws repeat. After the outer cap the nearest
//! pair seen so far is dealt instead.
//!
//! The widening direction follows the lead: when the player is ahead
//! (`lead >= 0`) the target moves up, otherwise down.

use smallvec::SmallVec;

use crate::cards::{Card, Deck, CATEGORY_COUNT};
use crate::core::GameRng;

use super::config::SearchConfig;
use super::difficulty::DifficultyCurve;
use super::stats::{OutcomeKind, SearchStats};
use super::wins::count_wins;

/// A dealt pair of cards.
#[derive(Clone, Debug, PartialEq)]
pub struct Matchup {
    /// Card shown to the human player.
    pub player: Card,
    /// Hidden opponent card.
    pub opponent: Card,
    /// Categories `player` wins against `opponent`.
    pub wins: usize,
}

/// Result of one search.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    /// An opponent conceding exactly the (possibly widened) target.
    Found(Matchup),
    /// The nearest pair tracked across all draws.
    Fallback(Matchup),
    /// No pair was tracked; the first available opponent was used.
    Exhausted(Matchup),
}

impl SearchOutcome {
    /// The dealt matchup.
    #[must_use]
    pub fn matchup(&self) -> &Matchup {
        match self {
            SearchOutcome::Found(m) | SearchOutcome::Fallback(m) | SearchOutcome::Exhausted(m) => m,
        }
    }

    /// Consume into the dealt matchup.
    #[must_use]
    pub fn into_matchup(self) -> Matchup {
        match self {
            SearchOutcome::Found(m) | SearchOutcome::Fallback(m) | SearchOutcome::Exhausted(m) => m,
        }
    }

    /// Which branch produced the matchup.
    #[must_use]
    pub fn kind(&self) -> OutcomeKind {
        match self {
            SearchOutcome::Found(_) => OutcomeKind::Found,
            SearchOutcome::Fallback(_) => OutcomeKind::Fallback,
            SearchOutcome::Exhausted(_) => OutcomeKind::Exhausted,
        }
    }
}

/// Deck positions of a chosen pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pairing {
    player: usize,
    opponent: usize,
    wins: usize,
}

/// Best non-exact pair seen so far, measured against the curve's target.
#[derive(Clone, Copy, Debug)]
struct Nearest {
    pairing: Pairing,
    distance: usize,
}

impl Nearest {
    /// Closer wins; on equal distance prefer more player wins when ahead and
    /// fewer when behind.
    fn is_better(&self, wins: usize, distance: usize, ahead: bool) -> bool {
        if distance != self.distance {
            return distance < self.distance;
        }
        if ahead {
            wins > self.pairing.wins
        } else {
            wins < self.pairing.wins
        }
    }
}

/// Matchmaking search context.
///
/// Owns the search limits and difficulty curve, and keeps statistics for the
/// most recent search.
#[derive(Clone, Debug, Default)]
pub struct MatchmakingSearch {
    config: SearchConfig,
    curve: DifficultyCurve,
    stats: SearchStats,
}

impl MatchmakingSearch {
    /// Create a search with the given limits and curve.
    #[must_use]
    pub fn new(config: SearchConfig, curve: DifficultyCurve) -> Self {
        Self {
            config,
            curve,
            stats: SearchStats::default(),
        }
    }

    /// Search limits.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Difficulty curve.
    #[must_use]
    pub fn curve(&self) -> &DifficultyCurve {
        &self.curve
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Deal a matchup for the given lead, removing both cards from `deck`.
    ///
    /// A deck holding fewer than two cards is refilled first, so this never
    /// fails and always returns two distinct cards.
    pub fn search(&mut self, deck: &mut Deck, lead: i32, rng: &mut GameRng) -> SearchOutcome {
        self.stats.reset();
        self.stats.lead = lead;
        self.stats.deck_reset = deck.ensure_pair();

        let (pairing, kind) = self.plan(deck, lead, rng);
        self.stats.wins = pairing.wins;
        self.stats.outcome = kind;

        tracing::debug!(
            attempts = self.stats.attempts,
            lead,
            target = self.stats.initial_target,
            final_target = self.stats.final_target,
            wins = pairing.wins,
            outcome = ?kind,
            "matchup selected"
        );

        let (player, opponent) = deck.take_pair(pairing.player, pairing.opponent);
        let matchup = Matchup {
            player,
            opponent,
            wins: pairing.wins,
        };

        match kind {
            OutcomeKind::Found => SearchOutcome::Found(matchup),
            OutcomeKind::Fallback => SearchOutcome::Fallback(matchup),
            OutcomeKind::Exhausted => SearchOutcome::Exhausted(matchup),
        }
    }

    /// Choose deck positions without mutating the deck.
    fn plan(&mut self, deck: &Deck, lead: i32, rng: &mut GameRng) -> (Pairing, OutcomeKind) {
        let cards: Vec<&Card> = deck.iter().collect();
        let ahead = lead >= 0;
        let ideal = self.curve.max_allowed_wins(lead);

        self.stats.initial_target = ideal;
        self.stats.final_target = ideal;
        let mut target = ideal;
        let mut nearest: Option<Nearest> = None;
        let mut last_drawn = None;

        for bump in 0..self.config.max_target_bumps {
            self.stats.final_target = target;

            for _ in 0..self.config.max_draws {
                self.stats.attempts += 1;
                let candidate = rng.gen_index(cards.len());
                last_drawn = Some(candidate);

                let mut exact: SmallVec<[usize; 8]> = SmallVec::new();
                for (idx, &other) in cards.iter().enumerate() {
                    if idx == candidate {
                        continue;
                    }
                    let wins = count_wins(cards[candidate], other);
                    if wins == target {
                        exact.push(idx);
                    }

                    let distance = wins.abs_diff(ideal);
                    if nearest.map_or(true, |n| n.is_better(wins, distance, ahead)) {
                        nearest = Some(Nearest {
                            pairing: Pairing {
                                player: candidate,
                                opponent: idx,
                                wins,
                            },
                            distance,
                        });
                    }
                }

                if let Some(&opponent) = rng.choose(&exact) {
                    let pairing = Pairing {
                        player: candidate,
                        opponent,
                        wins: target,
                    };
                    return (pairing, OutcomeKind::Found);
                }
            }

            if bump + 1 < self.config.max_target_bumps {
                target = widen(target, ahead);
                self.stats.target_bumps += 1;
            }
        }

        if let Some(n) = nearest {
            return (n.pairing, OutcomeKind::Fallback);
        }

        let player = last_drawn.unwrap_or(0);
        let opponent = if player == 0 { 1 } else { 0 };
        let wins = count_wins(cards[player], cards[opponent]);
        tracing::warn!(
            player,
            opponent,
            wins,
            "matchmaking tracked no pair, dealing first available"
        );
        (
            Pairing {
                player,
                opponent,
                wins,
            },
            OutcomeKind::Exhausted,
        )
    }
}

/// Move the target one step outward, staying within the category range.
fn widen(target: usize, ahead: bool) -> usize {
    if ahead {
        (target + 1).min(CATEGORY_COUNT)
    } else {
        target.saturating_sub(1)
    }
}

/// Deal a matchup with the default limits and curve.
pub fn select_matchup(deck: &mut Deck, lead: i32, rng: &mut GameRng) -> Matchup {
    MatchmakingSearch::default()
        .search(deck, lead, rng)
        .into_matchup()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Category, League};

    fn card(name: &str, pts: f64) -> Card {
        Card::new(name, "T").with_stat(Category::Points, pts)
    }

    /// Card whose first `n` categories are 1.0 and the rest 0.0.
    fn ladder(name: &str, n: usize) -> Card {
        let mut c = Card::new(name, "T");
        for cat in Category::all().take(n) {
            c = c.with_stat(cat, 1.0);
        }
        c
    }

    #[test]
    fn test_widen_clamps() {
        assert_eq!(widen(0, false), 0);
        assert_eq!(widen(3, false), 2);
        assert_eq!(widen(CATEGORY_COUNT, true), CATEGORY_COUNT);
        assert_eq!(widen(2, true), 3);
    }

    #[test]
    fn test_nearest_tie_break() {
        let n = Nearest {
            pairing: Pairing {
                player: 0,
                opponent: 1,
                wins: 1,
            },
            distance: 1,
        };
        assert!(n.is_better(3, 1, true));
        assert!(!n.is_better(0, 1, true));
        assert!(n.is_better(0, 1, false));
        assert!(n.is_better(9, 0, false));
        assert!(!n.is_better(1, 2, true));
    }

    #[test]
    fn test_three_card_deck_falls_back_when_no_exact() {
        // Only points differ: every pair yields 0 or 1 wins, never 2.
        let mut deck = Deck::new(
            League::Nba,
            vec![card("A", 30.0), card("B", 10.0), card("C", 20.0)],
        )
        .unwrap();
        let mut rng = GameRng::new(1);
        let mut search = MatchmakingSearch::default();

        let outcome = search.search(&mut deck, 0, &mut rng);

        // Ahead-or-even widens upward, so the target moves away from 0/1 and
        // the nearest pair (distance 1 from target 2) is dealt.
        assert_eq!(outcome.kind(), OutcomeKind::Fallback);
        assert_eq!(outcome.matchup().wins, 1);
        assert_eq!(deck.len(), 1);
        assert_eq!(search.stats().initial_target, 2);
        assert_eq!(search.stats().attempts, 400);
    }

    #[test]
    fn test_exact_match_found() {
        let mut deck = Deck::new(
            League::Nba,
            vec![ladder("L0", 0), ladder("L2", 2), ladder("L5", 5)],
        )
        .unwrap();
        let mut rng = GameRng::new(3);
        let mut search = MatchmakingSearch::new(
            SearchConfig::default().with_max_draws(200),
            DifficultyCurve::default(),
        );

        let outcome = search.search(&mut deck, 0, &mut rng);

        assert_eq!(outcome.kind(), OutcomeKind::Found);
        let m = outcome.matchup();
        assert_eq!(m.wins, 2);
        assert_eq!(count_wins(&m.player, &m.opponent), 2);
    }

    #[test]
    fn test_widening_finds_looser_target() {
        // Pairs yield 0 or 3 wins; target 2 with lead 0 widens up to 3.
        let mut deck =
            Deck::new(League::Nba, vec![ladder("L0", 0), ladder("L3", 3)]).unwrap();
        let mut rng = GameRng::new(11);
        let mut search = MatchmakingSearch::default();

        let outcome = search.search(&mut deck, 0, &mut rng);

        assert_eq!(outcome.kind(), OutcomeKind::Found);
        assert_eq!(outcome.matchup().player.name, "L3");
        assert_eq!(outcome.matchup().wins, 3);
        assert_eq!(search.stats().final_target, 3);
        assert_eq!(search.stats().target_bumps, 1);
    }

    #[test]
    fn test_big_lead_deals_toughest() {
        let mut deck = Deck::new(
            League::Nba,
            vec![ladder("L1", 1), ladder("L4", 4), ladder("L8", 8)],
        )
        .unwrap();
        let mut rng = GameRng::new(5);

        let m = select_matchup(&mut deck, 12, &mut rng);

        assert_eq!(m.wins, 0);
        assert_eq!(count_wins(&m.player, &m.opponent), 0);
    }

    #[test]
    fn test_big_deficit_deals_easiest_available() {
        // Target 5: L8 vs L3 concedes exactly 5.
        let mut deck = Deck::new(
            League::Nba,
            vec![ladder("L3", 3), ladder("L8", 8), ladder("L13", 13)],
        )
        .unwrap();
        let mut rng = GameRng::new(8);
        let mut search = MatchmakingSearch::default();

        let outcome = search.search(&mut deck, -12, &mut rng);

        assert_eq!(search.stats().initial_target, 5);
        assert_eq!(outcome.kind(), OutcomeKind::Found);
        assert_eq!(outcome.matchup().wins, 5);
    }

    #[test]
    fn test_refills_small_deck() {
        let mut deck = Deck::new(
            League::Nba,
            vec![card("A", 3.0), card("B", 2.0), card("C", 1.0)],
        )
        .unwrap();
        let mut rng = GameRng::new(2);
        let mut search = MatchmakingSearch::default();

        search.search(&mut deck, 0, &mut rng);
        assert_eq!(deck.len(), 1);

        search.search(&mut deck, 0, &mut rng);
        assert!(search.stats().deck_reset);
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.resets(), 1);
    }

    #[test]
    fn test_zero_caps_exhausts() {
        let mut deck =
            Deck::new(League::Nba, vec![card("A", 3.0), card("B", 2.0)]).unwrap();
        let mut rng = GameRng::new(2);
        let config = SearchConfig::default().with_max_target_bumps(0);
        let mut search = MatchmakingSearch::new(config, DifficultyCurve::default());

        let outcome = search.search(&mut deck, 0, &mut rng);

        assert_eq!(outcome.kind(), OutcomeKind::Exhausted);
        let m = outcome.into_matchup();
        assert_eq!(m.player.name, "A");
        assert_eq!(m.opponent.name, "B");
        assert_eq!(m.wins, 1);
        assert!(deck.is_empty());
    }
}
