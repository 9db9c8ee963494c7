//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies explored below each candidate move (default: 3).
    /// Positions at this horizon score as a draw.
    pub depth: u32,

    /// Alpha-beta cutoffs (default: on).
    /// Turning this off explores the full tree; the result is identical,
    /// only the work done changes.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            pruning: true,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with pruning enabled or disabled.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }
}
