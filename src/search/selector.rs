//! Choosing the AI's card.
//!
//! The selector scores each playable card in the AI's hand by searching
//! the position it leads to, with the player to move as the minimizing
//! side. The highest score wins; ties keep the earlier card.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::core::{Card, Hand, Position, Side};

use super::config::SearchConfig;
use super::minimax::{Minimax, Score, MAX_SCORE, MIN_SCORE};
use super::stats::SearchStats;

/// The card the AI will play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Card to play. Always drawn from the AI's hand.
    pub card: Card,

    /// Search score of the chosen card. `None` for forced plays.
    pub score: Option<Score>,

    /// Every card would push the total past the limit, so the first
    /// card in hand is played and the game is lost.
    pub forced: bool,
}

/// Move selector for the AI side.
#[derive(Clone, Debug, Default)]
pub struct MoveSelector {
    search: Minimax,
}

impl MoveSelector {
    /// Create a new selector.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            search: Minimax::new(config),
        }
    }

    /// Choose a card for the AI at `total`.
    ///
    /// # Panics
    ///
    /// Panics if `ai_hand` is empty.
    pub fn choose(&mut self, total: u32, ai_hand: &Hand, player_hand: &Hand) -> Decision {
        let position = Position::new(total, ai_hand.clone(), player_hand.clone(), Side::Ai);
        self.choose_for(&position)
    }

    /// Choose a card for the AI in `position`.
    ///
    /// # Panics
    ///
    /// Panics if it is not the AI's turn or the AI's hand is empty.
    pub fn choose_for(&mut self, position: &Position) -> Decision {
        assert!(position.is_ai_turn(), "Selector only moves for the AI");
        let Some(first) = position.ai_hand().first() else {
            panic!("AI hand must not be empty");
        };

        let start = Instant::now();
        self.search.stats_mut().reset();
        let depth = self.search.config().depth;

        let mut best: Option<(Card, Score)> = None;

        for card in position.ai_hand().distinct() {
            if !position.can_play(card) {
                self.search.stats_mut().skipped += 1;
                continue;
            }

            let score = self
                .search
                .search(&position.play(card), depth, MIN_SCORE, MAX_SCORE, false);
            log::trace!("candidate {} at total {} scores {}", card, position.total, score);

            if best.map_or(true, |(_, incumbent)| score > incumbent) {
                best = Some((card, score));
            }
        }

        self.search.stats_mut().time_us = start.elapsed().as_micros() as u64;

        match best {
            Some((card, score)) => {
                let stats = self.search.stats();
                log::debug!(
                    "AI plays {} at total {} (score {}, {} nodes, {} cutoffs)",
                    card,
                    position.total,
                    score,
                    stats.nodes,
                    stats.cutoffs
                );
                Decision {
                    card,
                    score: Some(score),
                    forced: false,
                }
            }
            None => {
                log::warn!(
                    "every card in {} overflows total {}, forced to play {}",
                    position.ai_hand(),
                    position.total,
                    first
                );
                Decision {
                    card: first,
                    score: None,
                    forced: true,
                }
            }
        }
    }

    /// Statistics from the most recent choice.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        self.search.stats()
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        self.search.config()
    }
}

/// Choose the AI's card with a fresh selector searching `depth` plies.
///
/// ```
/// use ninety_nine::core::{Card, Hand};
/// use ninety_nine::search::choose_move;
///
/// let ai = Hand::from_cards(&[Card::King, Card::King, Card::King]);
/// let player = Hand::from_cards(&[Card::Two]);
///
/// // 90 + 13 overflows whatever is played
/// assert_eq!(choose_move(90, &ai, &player, 3), Card::King);
/// ```
///
/// # Panics
///
/// Panics if `ai_hand` is empty.
pub fn choose_move(total: u32, ai_hand: &Hand, player_hand: &Hand, depth: u32) -> Card {
    MoveSelector::new(SearchConfig::default().with_depth(depth))
        .choose(total, ai_hand, player_hand)
        .card
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::minimax::WIN;

    fn hand(cards: &[Card]) -> Hand {
        Hand::from_cards(cards)
    }

    #[test]
    fn test_choice_comes_from_hand() {
        let ai = hand(&[Card::Four, Card::Eight, Card::Jack]);
        let player = hand(&[Card::Two, Card::Six, Card::Ten]);
        let decision = MoveSelector::default().choose(40, &ai, &player);
        assert!(ai.contains(decision.card));
        assert!(!decision.forced);
    }

    #[test]
    fn test_forced_play_returns_first_card() {
        let ai = hand(&[Card::Queen, Card::King, Card::Jack]);
        let player = hand(&[Card::Ace]);
        let mut selector = MoveSelector::default();
        let decision = selector.choose(90, &ai, &player);

        assert_eq!(decision.card, Card::Queen);
        assert!(decision.forced);
        assert_eq!(decision.score, None);
        assert_eq!(selector.stats().skipped, 3);
    }

    #[test]
    fn test_ties_keep_first_card() {
        // Nothing can end the game within the horizon from 0
        let ai = hand(&[Card::Five, Card::Ten, Card::Queen]);
        let player = hand(&[Card::Nine, Card::King, Card::Jack]);
        let decision = MoveSelector::default().choose(0, &ai, &player);

        assert_eq!(decision.card, Card::Five);
        assert_eq!(decision.score, Some(0));
    }

    #[test]
    fn test_play_onto_limit_scores_as_win() {
        // 90 + 9 lands on 99 with the player slated to move
        let ai = hand(&[Card::Nine, Card::Ace, Card::Two]);
        let player = hand(&[Card::Ace, Card::Two, Card::Three]);
        let decision = MoveSelector::default().choose(90, &ai, &player);

        assert_eq!(decision.card, Card::Nine);
        assert_eq!(decision.score, Some(WIN));
    }

    #[test]
    fn test_total_near_overflow_is_forced() {
        let ai = hand(&[Card::Two, Card::Ace]);
        let player = hand(&[Card::Three]);
        let mut selector = MoveSelector::default();
        let decision = selector.choose(u32::MAX - 1, &ai, &player);

        assert_eq!(decision.card, Card::Two);
        assert!(decision.forced);
        assert_eq!(selector.stats().skipped, 2);
    }

    #[test]
    fn test_stats_reset_between_calls() {
        let ai = hand(&[Card::Four, Card::Eight, Card::Jack]);
        let player = hand(&[Card::Two, Card::Six, Card::Ten]);
        let mut selector = MoveSelector::default();

        selector.choose(70, &ai, &player);
        let first = selector.stats().nodes;
        selector.choose(70, &ai, &player);

        assert_eq!(selector.stats().nodes, first);
    }

    #[test]
    #[should_panic(expected = "AI hand must not be empty")]
    fn test_empty_hand_panics() {
        MoveSelector::default().choose(10, &Hand::new(), &hand(&[Card::Two]));
    }

    #[test]
    #[should_panic(expected = "Selector only moves for the AI")]
    fn test_wrong_turn_panics() {
        let position = Position::new(10, hand(&[Card::Two]), hand(&[Card::Two]), Side::Player);
        MoveSelector::default().choose_for(&position);
    }
}
