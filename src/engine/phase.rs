//! Match phases.
//!
//! The original flow paused on a timer between a round's resolution and the
//! next round. Here that window is the explicit `RoundResolved` phase:
//! commits are rejected while it is active and the caller drives the
//! advance with `MatchEngine::advance_round`.

use serde::{Deserialize, Serialize};

/// Where the match currently is in its lifecycle.
///
/// ```text
/// Setup -> EquipmentSelection -> TerrainSelection -> Playing
///             Playing <-> RoundResolved -> Finished
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Hands are being dealt and the opponent's pools picked.
    Setup,
    /// The player is picking their equipment pool.
    EquipmentSelection,
    /// The player is picking their terrain.
    TerrainSelection,
    /// Turns 1 and 2 of a round are being played.
    Playing,
    /// A round outcome is recorded and waiting for `advance_round`.
    RoundResolved,
    /// Terminal. The overall winner is recorded; no action is legal.
    Finished,
}

impl Phase {
    /// True once the match has reached its terminal phase.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Phase::Finished
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Setup => "setup",
            Phase::EquipmentSelection => "equipment selection",
            Phase::TerrainSelection => "terrain selection",
            Phase::Playing => "playing",
            Phase::RoundResolved => "round resolved",
            Phase::Finished => "finished",
        };
        write!(f, "{name}")
    }
}
