//! Core game types: cards, hands, sides, positions, RNG.
//!
//! These are shared by the search engine and the session that runs a
//! live game.

pub mod card;
pub mod hand;
pub mod position;
pub mod rng;
pub mod side;

pub use card::{card_value, Card, ParseCardError};
pub use hand::Hand;
pub use position::{Position, LIMIT};
pub use rng::GameRng;
pub use side::{Side, SideMap};
