//! The two sides at the table and per-side data storage.
//!
//! ## Side
//!
//! `Ai` is the computer opponent, the maximizing side in search.
//! `Player` is the human.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Ai,
    Player,
}

impl Side {
    /// Both sides, AI first.
    pub const BOTH: [Side; 2] = [Side::Ai, Side::Player];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Ai => Side::Player,
            Side::Player => Side::Ai,
        }
    }

    /// Slot index into a `SideMap`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Ai => 0,
            Side::Player => 1,
        }
    }

    /// Subject used in history lines ("AI added ...", "You added ...").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Side::Ai => "AI",
            Side::Player => "You",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Ai => write!(f, "AI"),
            Side::Player => write!(f, "player"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use ninety_nine::core::{Side, SideMap};
///
/// let mut picks: SideMap<u32> = SideMap::new(|_| 0);
/// picks[Side::Player] = 7;
/// assert_eq!(picks[Side::Ai], 0);
/// assert_eq!(picks[Side::Player], 7);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Ai), factory(Side::Player)],
        }
    }

    /// Create a SideMap from explicit AI and player values.
    pub fn from_pair(ai: T, player: T) -> Self {
        Self { data: [ai, player] }
    }

    /// Create a SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_pair(value.clone(), value)
    }

    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, AI first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::BOTH.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
