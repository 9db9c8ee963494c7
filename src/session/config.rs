//! Table configuration.
//!
//! Covers the live-game bookkeeping around the search engine: deal size,
//! refill rule, history length and AI pacing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::Side;
use crate::search::SearchConfig;

/// Configuration for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Cards dealt to each hand at the start of a game (default: 3).
    pub hand_size: usize,

    /// Hand size that triggers a refill after a play (default: 1).
    pub refill_at: usize,

    /// Cards drawn on refill (default: 2).
    pub refill_count: usize,

    /// Plays kept in the history, newest first (default: 5).
    pub history_len: usize,

    /// Pause before the AI moves, in milliseconds (default: 1000).
    /// Pacing only; the session never sleeps on its own.
    pub ai_delay_ms: u64,

    /// Side that opens each game (default: player).
    pub first_turn: Side,

    /// Seed for dealing. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// AI search settings.
    pub search: SearchConfig,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            hand_size: 3,
            refill_at: 1,
            refill_count: 2,
            history_len: 5,
            ai_delay_ms: 1000,
            first_turn: Side::Player,
            seed: None,
            search: SearchConfig::default(),
        }
    }
}

impl TableConfig {
    /// Create a new config with a fixed dealing seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a custom AI search depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.search.depth = depth;
        self
    }

    /// Create a new config with a custom AI delay.
    pub fn with_ai_delay_ms(mut self, delay_ms: u64) -> Self {
        self.ai_delay_ms = delay_ms;
        self
    }

    /// Create a new config where `side` opens.
    pub fn with_first_turn(mut self, side: Side) -> Self {
        self.first_turn = side;
        self
    }

    /// Create a new config with a custom history length.
    pub fn with_history_len(mut self, len: usize) -> Self {
        self.history_len = len;
        self
    }

    /// AI pacing delay.
    #[must_use]
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TableConfig::default();
        assert_eq!(config.hand_size, 3);
        assert_eq!(config.refill_at, 1);
        assert_eq!(config.refill_count, 2);
        assert_eq!(config.history_len, 5);
        assert_eq!(config.ai_delay(), Duration::from_secs(1));
        assert_eq!(config.first_turn, Side::Player);
        assert_eq!(config.seed, None);
        assert_eq!(config.search.depth, 3);
    }

    #[test]
    fn test_builder_pattern() {
        let config = TableConfig::default()
            .with_seed(7)
            .with_depth(5)
            .with_ai_delay_ms(0)
            .with_first_turn(Side::Ai)
            .with_history_len(10);

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.search.depth, 5);
        assert_eq!(config.ai_delay(), Duration::ZERO);
        assert_eq!(config.first_turn, Side::Ai);
        assert_eq!(config.history_len, 10);
    }

    #[test]
    fn test_serialization() {
        let config = TableConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: TableConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
