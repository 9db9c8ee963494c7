//! A player's hand.
//!
//! Hands hold three cards between turns. Order carries no game meaning,
//! but it is kept stable so search tie-breaking is deterministic.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;

/// Cards held by one side.
///
/// SmallVec keeps the usual three cards inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 3]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hand from a slice of cards, preserving order.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: SmallVec::from_slice(cards),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// First card in hand order.
    #[must_use]
    pub fn first(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove one copy of `card`. Returns false if it was not held.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(idx) => {
                self.cards.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Copy of this hand with one copy of `card` removed.
    #[must_use]
    pub fn without(&self, card: Card) -> Self {
        let mut hand = self.clone();
        hand.remove(card);
        hand
    }

    /// Cards in hand order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Each rank held, once, in order of first occurrence.
    pub fn distinct(&self) -> impl Iterator<Item = Card> + '_ {
        let mut seen = 0u16;
        self.cards.iter().copied().filter(move |card| {
            let fresh = (seen & card.bit()) == 0;
            seen |= card.bit();
            fresh
        })
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}
