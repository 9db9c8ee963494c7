//! Recent plays, newest first.
//!
//! Backed by an `im` persistent vector so session snapshots clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Card, Side};

/// One card played at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub side: Side,
    pub card: Card,
    /// Running total after the play.
    pub total: u32,
}

impl std::fmt::Display for PlayRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} added {} ({}), total: {}",
            self.side.label(),
            self.card,
            self.card.value(),
            self.total
        )
    }
}

/// Bounded play history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vector<PlayRecord>,
    capacity: usize,
}

impl History {
    /// Create an empty history keeping at most `capacity` plays.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vector::new(),
            capacity,
        }
    }

    /// Record a play, dropping the oldest beyond capacity.
    pub fn record(&mut self, play: PlayRecord) {
        self.entries.push_front(play);
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    /// Most recent play.
    #[must_use]
    pub fn latest(&self) -> Option<&PlayRecord> {
        self.entries.front()
    }

    /// Plays, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &PlayRecord> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
