//! Adversarial search for the AI side.
//!
//! ## Overview
//!
//! The game tree is tiny: at most three cards per ply and a fixed
//! horizon (three plies below each candidate by default). Plain recursive
//! minimax with alpha-beta pruning covers it in well under a millisecond.
//!
//! - **Minimax**: scores a position from the AI's point of view
//! - **MoveSelector**: scores each playable card and picks the best
//! - **Deterministic**: no randomness, ties keep hand order
//!
//! ## Usage
//!
//! ```rust
//! use ninety_nine::core::{Card, Hand};
//! use ninety_nine::search::{MoveSelector, SearchConfig};
//!
//! let ai = Hand::from_cards(&[Card::Nine, Card::King, Card::Two]);
//! let player = Hand::from_cards(&[Card::Five, Card::Three, Card::Four]);
//!
//! let mut selector = MoveSelector::new(SearchConfig::default());
//! let decision = selector.choose(85, &ai, &player);
//! assert_eq!(decision.card, Card::King);
//! ```

pub mod config;
pub mod minimax;
pub mod selector;
pub mod stats;

pub use config::SearchConfig;
pub use minimax::{minimax, Minimax, Score, DRAW, LOSS, MAX_SCORE, MIN_SCORE, WIN};
pub use selector::{choose_move, Decision, MoveSelector};
pub use stats::SearchStats;
