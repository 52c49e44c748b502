//! Read-only snapshots of match state for rendering.
//!
//! A snapshot is a plain serializable value: the view layer renders from
//! it and can never mutate the live state through it. Card ids are
//! resolved against the catalog by the renderer.

use serde::{Deserialize, Serialize};

use crate::cards::{Attribute, EquipmentId, HeroId, TerrainId};
use crate::core::{Side, SideMap};
use crate::resolve::RoundOutcome;

use super::phase::Phase;
use super::state::{MatchResult, MatchState};

/// Everything a view needs to draw the current match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// Current lifecycle phase.
    pub phase: Phase,

    /// Round counter, 1..=max_rounds.
    pub round: u32,

    /// Configured round limit.
    pub max_rounds: u32,

    /// Turn within the round (1 or 2).
    pub turn: u8,

    /// Which side initiates the current round.
    pub initiator: Side,

    /// The side expected to act, if any.
    pub side_to_act: Option<Side>,

    /// Rounds won per side.
    pub scores: SideMap<u32>,

    /// Remaining cards per side.
    pub hands: SideMap<Vec<HeroId>>,

    /// Equipment still playable per side.
    pub available_equipment: SideMap<Vec<EquipmentId>>,

    /// Terrains still playable per side.
    pub available_terrains: SideMap<Vec<TerrainId>>,

    /// The round's locked attribute, once turn 1 has committed.
    pub round_attribute: Option<Attribute>,

    /// The round's locked terrain, if one was proposed.
    pub round_terrain: Option<TerrainId>,

    /// Cards committed so far this round.
    pub played_cards: SideMap<Option<HeroId>>,

    /// Equipment committed so far this round.
    pub played_equipment: SideMap<Option<EquipmentId>>,

    /// The initiative dice from match start.
    pub initiative_dice: Option<SideMap<u8>>,

    /// Outcome of the most recently resolved round.
    pub last_outcome: Option<RoundOutcome>,

    /// The card that won the last resolved round.
    pub winning_card: Option<HeroId>,

    /// Terminal result, once finished.
    pub result: Option<MatchResult>,
}

impl MatchSnapshot {
    /// Capture a snapshot of the given state.
    #[must_use]
    pub fn capture(state: &MatchState) -> Self {
        Self {
            phase: state.phase,
            round: state.round,
            max_rounds: state.config.max_rounds,
            turn: state.turn,
            initiator: state.initiator,
            side_to_act: state.side_to_act(),
            scores: state.scores,
            hands: state.hands.map(|_, hand| hand.to_vec()),
            available_equipment: SideMap::new(|s| state.available_equipment(s).to_vec()),
            available_terrains: SideMap::new(|s| state.available_terrains(s).to_vec()),
            round_attribute: state.round_attribute,
            round_terrain: state.round_terrain,
            played_cards: state.played_cards,
            played_equipment: state.played_equipment,
            initiative_dice: state.initiative_dice,
            last_outcome: state.last_outcome,
            winning_card: state.winning_card,
            result: state.result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchConfig;

    #[test]
    fn test_capture_reflects_state() {
        let mut state = MatchState::new(MatchConfig::default());
        state.phase = Phase::Playing;
        state.round = 2;
        state.scores[Side::Player] = 1;
        state.hands[Side::Player].push(HeroId::new(3));

        let snapshot = MatchSnapshot::capture(&state);

        assert_eq!(snapshot.phase, Phase::Playing);
        assert_eq!(snapshot.round, 2);
        assert_eq!(snapshot.max_rounds, 3);
        assert_eq!(snapshot.scores[Side::Player], 1);
        assert_eq!(snapshot.hands[Side::Player], vec![HeroId::new(3)]);
        assert_eq!(snapshot.side_to_act, Some(Side::Player));
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = MatchState::new(MatchConfig::default());
        let snapshot = MatchSnapshot::capture(&state);

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: MatchSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, Phase::Setup);
    }
}
