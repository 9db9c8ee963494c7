//! Card ranks and their point values.
//!
//! The game only models rank. There are no suits, so two hands may hold
//! the same rank at the same time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A card rank. The discriminant is the card's point value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Card {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Card {
    /// Every rank, in deck order.
    pub const ALL: [Card; 13] = [
        Card::Ace,
        Card::Two,
        Card::Three,
        Card::Four,
        Card::Five,
        Card::Six,
        Card::Seven,
        Card::Eight,
        Card::Nine,
        Card::Ten,
        Card::Jack,
        Card::Queen,
        Card::King,
    ];

    /// Point value added to the running total when this card is played.
    ///
    /// ```
    /// use ninety_nine::core::Card;
    ///
    /// assert_eq!(Card::Ace.value(), 1);
    /// assert_eq!(Card::Ten.value(), 10);
    /// assert_eq!(Card::King.value(), 13);
    /// ```
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// Bit used by rank sets (`1 << value`).
    #[inline]
    #[must_use]
    pub(crate) const fn bit(self) -> u16 {
        1 << (self as u16)
    }

    /// Face symbol: "A", "2".."10", "J", "Q" or "K".
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Card::Ace => "A",
            Card::Two => "2",
            Card::Three => "3",
            Card::Four => "4",
            Card::Five => "5",
            Card::Six => "6",
            Card::Seven => "7",
            Card::Eight => "8",
            Card::Nine => "9",
            Card::Ten => "10",
            Card::Jack => "J",
            Card::Queen => "Q",
            Card::King => "K",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error returned when a string is not a card symbol.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unrecognized card symbol: {0:?}")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a face symbol. "1" is accepted as the ace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let card = match s.trim() {
            "A" | "1" => Card::Ace,
            "2" => Card::Two,
            "3" => Card::Three,
            "4" => Card::Four,
            "5" => Card::Five,
            "6" => Card::Six,
            "7" => Card::Seven,
            "8" => Card::Eight,
            "9" => Card::Nine,
            "10" => Card::Ten,
            "J" => Card::Jack,
            "Q" => Card::Queen,
            "K" => Card::King,
            other => return Err(ParseCardError(other.to_string())),
        };
        Ok(card)
    }
}

/// Point value of a card symbol.
///
/// Unrecognized symbols are worth 0 rather than an error.
#[must_use]
pub fn card_value(symbol: &str) -> u32 {
    match symbol.parse::<Card>() {
        Ok(card) => card.value(),
        Err(err) => {
            log::trace!("{err}, valuing as 0");
            0
        }
    }
}
