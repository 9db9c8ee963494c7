//! Depth-bounded minimax with alpha-beta pruning.
//!
//! The AI is the maximizing side. Scores are small integers:
//!
//! | score        | meaning                                              |
//! |--------------|------------------------------------------------------|
//! | `WIN` (1)    | limit reached with the player slated to move         |
//! | `DRAW` (0)   | horizon reached, or the side to move has no cards   |
//! | `LOSS` (-1)  | limit reached with the AI slated to move             |
//! | `MAX_SCORE`  | the player side must move but every card overflows   |
//! | `MIN_SCORE`  | the AI must move but every card overflows            |
//!
//! A position at the limit is charged to the side slated to move in it,
//! so an AI play that lands on 99 searches as a win for the AI.
//!
//! `MIN_SCORE` and `MAX_SCORE` stand in for infinities and also seed the
//! alpha-beta window, so every returned value lies in `[-2, 2]`.

use crate::core::Position;

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Search score from the AI's point of view.
pub type Score = i32;

pub const LOSS: Score = -1;
pub const DRAW: Score = 0;
pub const WIN: Score = 1;

/// Lower sentinel, below every evaluated outcome.
pub const MIN_SCORE: Score = -2;
/// Upper sentinel, above every evaluated outcome.
pub const MAX_SCORE: Score = 2;

/// Minimax searcher.
///
/// Holds only configuration and counters. Every node works on its own
/// `Position` value, so nothing is shared between branches.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl Minimax {
    /// Create a new searcher.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Evaluate `position` looking `depth` plies ahead.
    ///
    /// `maximizing` is true when the side to move is the AI. Cards that
    /// would push the total past the limit are never explored. Once
    /// `beta <= alpha` the remaining cards at a node are skipped when
    /// pruning is enabled.
    ///
    /// Ties keep the first card in hand order.
    pub fn search(
        &mut self,
        position: &Position,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Score {
        self.stats.nodes += 1;

        // Charged to the side slated to move.
        if position.is_terminal() {
            self.stats.terminals += 1;
            return if maximizing { LOSS } else { WIN };
        }

        let hand = position.acting_hand();
        if hand.is_empty() || depth == 0 {
            self.stats.horizons += 1;
            return DRAW;
        }

        let mut best = if maximizing { MIN_SCORE } else { MAX_SCORE };

        for card in hand.distinct() {
            if !position.can_play(card) {
                self.stats.skipped += 1;
                continue;
            }

            let value = self.search(&position.play(card), depth - 1, alpha, beta, !maximizing);

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }

            if self.config.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                log::trace!(
                    "cutoff at total {} after {} (alpha {}, beta {})",
                    position.total,
                    card,
                    alpha,
                    beta
                );
                break;
            }
        }

        best
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub(crate) fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Evaluate a position with a fresh searcher.
///
/// The full window is `MIN_SCORE..MAX_SCORE`.
///
/// ```
/// use ninety_nine::core::{Card, Hand, Position, Side};
/// use ninety_nine::search::{minimax, LOSS, MAX_SCORE, MIN_SCORE};
///
/// // The player's only card lands exactly on 99, leaving the AI to move
/// // at the limit.
/// let position = Position::new(
///     98,
///     Hand::new(),
///     Hand::from_cards(&[Card::Ace]),
///     Side::Player,
/// );
/// let score = minimax(&position, 3, MIN_SCORE, MAX_SCORE, false);
/// assert_eq!(score, LOSS);
/// ```
pub fn minimax(position: &Position, depth: u32, alpha: Score, beta: Score, maximizing: bool) -> Score {
    Minimax::new(SearchConfig::default().with_depth(depth)).search(position, depth, alpha, beta, maximizing)
}
