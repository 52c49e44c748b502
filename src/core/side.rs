//! Side identification and per-side data storage.
//!
//! A duel always has exactly two sides: the human player and the scripted
//! opponent. `Side` is the type-safe identifier and `SideMap` stores one
//! value per side with `Index`/`IndexMut` access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player.
    Player,
    /// The scripted opponent.
    Opponent,
}

impl Side {
    /// Both sides, player first.
    pub const BOTH: [Side; 2] = [Side::Player, Side::Opponent];

    /// Get the other side.
    #[must_use]
    pub const fn opposite(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Get a stable 0-based index (player = 0, opponent = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use card_duel::core::{Side, SideMap};
///
/// let mut score: SideMap<u32> = SideMap::default();
/// score[Side::Player] += 1;
///
/// assert_eq!(score[Side::Player], 1);
/// assert_eq!(score[Side::Opponent], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    ///
    /// The factory is called for the player first, then the opponent.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player), factory(Side::Opponent)],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to one side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to one side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over `(Side, &T)` pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::BOTH.iter().map(move |&s| (s, self.get(s)))
    }

    /// Apply a function to each side's value, producing a new map.
    pub fn map<U>(&self, f: impl Fn(Side, &T) -> U) -> SideMap<U> {
        SideMap::new(|s| f(s, self.get(s)))
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Side::Player.opposite(), Side::Opponent);
        assert_eq!(Side::Opponent.opposite(), Side::Player);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Side::Player), "player");
        assert_eq!(format!("{}", Side::Opponent), "opponent");
    }

    #[test]
    fn test_side_map_index() {
        let mut map: SideMap<i32> = SideMap::with_value(10);
        map[Side::Opponent] = 20;

        assert_eq!(map[Side::Player], 10);
        assert_eq!(map[Side::Opponent], 20);
    }

    #[test]
    fn test_side_map_factory() {
        let map = SideMap::new(|s| match s {
            Side::Player => "p",
            Side::Opponent => "o",
        });
        assert_eq!(map[Side::Player], "p");
        assert_eq!(map[Side::Opponent], "o");
    }

    #[test]
    fn test_side_map_iter() {
        let map: SideMap<u32> = SideMap::new(|s| s.index() as u32);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::Player, &0), (Side::Opponent, &1)]);
    }

    #[test]
    fn test_side_map_map() {
        let map: SideMap<u32> = SideMap::with_value(3);
        let doubled = map.map(|_, v| v * 2);
        assert_eq!(doubled[Side::Player], 6);
        assert_eq!(doubled[Side::Opponent], 6);
    }
}
