//! # ninety-nine
//!
//! Engine for the two-player card game 99: players take turns adding a
//! card's value to a running total, and whoever brings the total to 99
//! or beyond loses.
//!
//! ## Design Principles
//!
//! 1. **Value-Semantics Search**: Every search node owns its own
//!    `Position`. No shared mutable state, no arena.
//!
//! 2. **Deterministic**: The search has no randomness and breaks ties by
//!    hand order. Randomness is confined to dealing, behind a seeded RNG.
//!
//! 3. **Explicit Session**: Live-game state lives in a `GameSession`
//!    passed around by the caller, never in globals.
//!
//! ## Modules
//!
//! - `core`: Cards and their values, hands, sides, positions, RNG
//! - `search`: Minimax with alpha-beta pruning and the AI move selector
//! - `session`: Dealing, refills, turn order, history and outcome

pub mod core;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{card_value, Card, GameRng, Hand, ParseCardError, Position, Side, SideMap, LIMIT};

pub use crate::search::{
    choose_move, minimax, Decision, Minimax, MoveSelector, Score, SearchConfig, SearchStats,
};

pub use crate::session::{GameSession, History, Outcome, PlayError, PlayRecord, TableConfig, Turn};
