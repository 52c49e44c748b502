//! Match configuration.
//!
//! Callers configure a match at creation time: how many rounds, how many
//! cards per hand, and how large each side's modifier pools are. The engine
//! never hardcodes these - defaults match the classic three-round duel.

use serde::{Deserialize, Serialize};

/// Complete match configuration.
///
/// ## Defaults
///
/// - 3 rounds
/// - 3 hero cards per hand
/// - 2 equipment per side
/// - 1 terrain per side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of rounds before the match ends (it can end earlier if a
    /// hand empties).
    pub max_rounds: u32,

    /// Hero cards dealt to each side at setup.
    pub hand_size: usize,

    /// Equipment items each side carries into the match.
    pub equipment_pool_size: usize,

    /// Terrain cards each side carries into the match.
    pub terrain_pool_size: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_rounds: 3,
            hand_size: 3,
            equipment_pool_size: 2,
            terrain_pool_size: 1,
        }
    }
}

impl MatchConfig {
    /// Create a configuration with the default three-round setup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the round count.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        assert!(rounds > 0, "Must play at least 1 round");
        self.max_rounds = rounds;
        self
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Hands must hold at least 1 card");
        self.hand_size = size;
        self
    }

    /// Set the per-side equipment pool size.
    #[must_use]
    pub fn with_equipment_pool_size(mut self, size: usize) -> Self {
        self.equipment_pool_size = size;
        self
    }

    /// Set the per-side terrain pool size.
    #[must_use]
    pub fn with_terrain_pool_size(mut self, size: usize) -> Self {
        self.terrain_pool_size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.max_rounds, 3);
        assert_eq!(config.hand_size, 3);
        assert_eq!(config.equipment_pool_size, 2);
        assert_eq!(config.terrain_pool_size, 1);
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::new()
            .with_max_rounds(2)
            .with_hand_size(5)
            .with_equipment_pool_size(3)
            .with_terrain_pool_size(0);

        assert_eq!(config.max_rounds, 2);
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.equipment_pool_size, 3);
        assert_eq!(config.terrain_pool_size, 0);
    }

    #[test]
    #[should_panic(expected = "Must play at least 1 round")]
    fn test_zero_rounds_rejected() {
        MatchConfig::new().with_max_rounds(0);
    }
}
