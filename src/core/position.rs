//! Search positions.
//!
//! A `Position` is an immutable snapshot: running total, both hands and
//! the side to move. Playing a card produces a new position and leaves
//! the old one untouched, so sibling search branches never share state.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::hand::Hand;
use super::side::{Side, SideMap};

/// Running total at which the game ends. The side whose play brings the
/// total to this value or beyond loses.
pub const LIMIT: u32 = 99;

/// A game position as seen by the search engine.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Running total of all cards played so far.
    pub total: u32,
    /// Both hands.
    pub hands: SideMap<Hand>,
    /// Side whose turn it is.
    pub to_move: Side,
}

impl Position {
    #[must_use]
    pub fn new(total: u32, ai_hand: Hand, player_hand: Hand, to_move: Side) -> Self {
        Self {
            total,
            hands: SideMap::from_pair(ai_hand, player_hand),
            to_move,
        }
    }

    #[must_use]
    pub fn ai_hand(&self) -> &Hand {
        &self.hands[Side::Ai]
    }

    #[must_use]
    pub fn player_hand(&self) -> &Hand {
        &self.hands[Side::Player]
    }

    #[must_use]
    pub fn is_ai_turn(&self) -> bool {
        self.to_move == Side::Ai
    }

    /// Hand of the side to move.
    #[must_use]
    pub fn acting_hand(&self) -> &Hand {
        &self.hands[self.to_move]
    }

    /// The previous play reached the limit.
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.total >= LIMIT
    }

    /// Playing `card` keeps the total at or below the limit.
    #[inline]
    #[must_use]
    pub fn can_play(&self, card: Card) -> bool {
        self.total.saturating_add(card.value()) <= LIMIT
    }

    /// Successor position after the side to move plays `card`.
    ///
    /// One copy of `card` leaves the acting hand, the total grows by the
    /// card's value and the turn passes to the opponent.
    #[must_use]
    pub fn play(&self, card: Card) -> Self {
        let mut hands = self.hands.clone();
        hands[self.to_move].remove(card);
        Self {
            total: self.total.saturating_add(card.value()),
            hands,
            to_move: self.to_move.opponent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Position {
        Position::new(
            85,
            Hand::from_cards(&[Card::Nine, Card::King, Card::Two]),
            Hand::from_cards(&[Card::Five, Card::Three, Card::Four]),
            Side::Ai,
        )
    }

    #[test]
    fn test_play_builds_successor() {
        let position = sample();
        let next = position.play(Card::King);

        assert_eq!(next.total, 98);
        assert_eq!(next.ai_hand().as_slice(), &[Card::Nine, Card::Two]);
        assert_eq!(next.player_hand().len(), 3);
        assert_eq!(next.to_move, Side::Player);

        // Original untouched
        assert_eq!(position.total, 85);
        assert_eq!(position.ai_hand().len(), 3);
    }

    #[test]
    fn test_can_play_boundary() {
        let position = sample();
        assert!(position.can_play(Card::Nine)); // 94
        assert!(position.can_play(Card::King)); // 98
        let at_86 = Position::new(86, Hand::new(), Hand::new(), Side::Ai);
        assert!(at_86.can_play(Card::King)); // exactly 99
        let at_87 = Position::new(87, Hand::new(), Hand::new(), Side::Ai);
        assert!(!at_87.can_play(Card::King)); // 100
    }

    #[test]
    fn test_terminal_at_limit() {
        assert!(!Position::new(98, Hand::new(), Hand::new(), Side::Ai).is_terminal());
        assert!(Position::new(99, Hand::new(), Hand::new(), Side::Ai).is_terminal());
        assert!(Position::new(104, Hand::new(), Hand::new(), Side::Player).is_terminal());
    }

    #[test]
    fn test_total_saturates_near_max() {
        let position = Position::new(
            u32::MAX - 1,
            Hand::from_cards(&[Card::King]),
            Hand::from_cards(&[Card::Two]),
            Side::Ai,
        );
        assert!(position.is_terminal());
        assert!(!position.can_play(Card::King));

        let next = position.play(Card::King);
        assert_eq!(next.total, u32::MAX);
        assert!(next.ai_hand().is_empty());
    }

    #[test]
    fn test_acting_hand_follows_turn() {
        let position = sample();
        assert!(position.is_ai_turn());
        assert_eq!(position.acting_hand(), position.ai_hand());
        let next = position.play(Card::Two);
        assert_eq!(next.acting_hand(), next.player_hand());
    }
}
