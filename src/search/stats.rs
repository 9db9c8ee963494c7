//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one move selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited.
    pub nodes: u32,

    /// Positions where the limit had been reached.
    pub terminals: u32,

    /// Positions cut off by depth or an empty hand.
    pub horizons: u32,

    /// Alpha-beta cutoffs taken.
    pub cutoffs: u32,

    /// Cards skipped because they would push the total past the limit.
    pub skipped: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate positions visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.cutoffs, 0);
    }

    #[test]
    fn test_stats_nodes_per_second() {
        let mut stats = SearchStats::new();
        assert_eq!(stats.nodes_per_second(), 0.0);

        stats.nodes = 500;
        stats.time_us = 500_000;
        assert_eq!(stats.nodes_per_second(), 1000.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.nodes = 100;
        stats.skipped = 4;

        stats.reset();

        assert_eq!(stats, SearchStats::default());
    }
}
