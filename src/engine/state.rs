//! Match state: everything mutable over the course of a duel.
//!
//! `MatchState` has exactly one writer, the `MatchEngine`. Everything else
//! (the opponent policy, snapshots for rendering) reads it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Attribute, EquipmentId, HeroId, TerrainId};
use crate::core::{MatchConfig, Side, SideMap};
use crate::resolve::RoundOutcome;

use super::phase::Phase;
use super::selection::Selection;

/// A side's hand of hero cards, in deal order.
pub type Hand = SmallVec<[HeroId; 3]>;

/// A side's equipment pool or used-equipment list.
pub type EquipmentPool = SmallVec<[EquipmentId; 2]>;

/// A side's terrain pool or used-terrain list.
pub type TerrainPool = SmallVec<[TerrainId; 1]>;

/// Overall result of a finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// One side took more rounds than the other.
    Winner(Side),
    /// Equal totals.
    Draw,
}

impl MatchResult {
    /// Check whether a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, MatchResult::Winner(s) if *s == side)
    }
}

/// The complete mutable state of one match.
///
/// Created at match start, mutated exclusively by the engine, replaced on
/// `start_new_match`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    /// Configuration the match was started with.
    pub config: MatchConfig,

    /// Current lifecycle phase.
    pub phase: Phase,

    /// Round counter, 1..=max_rounds.
    pub round: u32,

    /// Turn within the round: 1 (initiator) or 2 (responder). Resolution
    /// is the implicit third step performed on the turn-2 commit.
    pub turn: u8,

    /// Which side acts first this round. Meaningful once initiative has
    /// been rolled; alternates strictly every round after that.
    pub initiator: Side,

    /// Rounds won per side.
    pub scores: SideMap<u32>,

    /// Remaining hero cards per side. A played card never returns.
    pub hands: SideMap<Hand>,

    /// Equipment each side carries for the whole match.
    pub equipment_pools: SideMap<EquipmentPool>,

    /// Equipment already consumed. An item moves here exactly once.
    pub used_equipment: SideMap<EquipmentPool>,

    /// Terrain cards each side carries for the whole match.
    pub terrain_pools: SideMap<TerrainPool>,

    /// Terrains already consumed.
    pub used_terrains: SideMap<TerrainPool>,

    /// The attribute the current round is contested on, locked by turn 1.
    pub round_attribute: Option<Attribute>,

    /// The terrain in effect for the current round, locked by turn 1.
    pub round_terrain: Option<TerrainId>,

    /// Card each side has committed this round.
    pub played_cards: SideMap<Option<HeroId>>,

    /// Equipment each side has committed this round.
    pub played_equipment: SideMap<Option<EquipmentId>>,

    /// The initiative dice rolled after terrain selection.
    pub initiative_dice: Option<SideMap<u8>>,

    /// Outcome of the most recently resolved round.
    pub last_outcome: Option<RoundOutcome>,

    /// The card that won the last resolved round, if any.
    pub winning_card: Option<HeroId>,

    /// Terminal result, set when the phase reaches `Finished`.
    pub result: Option<MatchResult>,
}

impl MatchState {
    /// Fresh state for a new match in the `Setup` phase.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            phase: Phase::Setup,
            round: 1,
            turn: 1,
            initiator: Side::Player,
            scores: SideMap::default(),
            hands: SideMap::default(),
            equipment_pools: SideMap::default(),
            used_equipment: SideMap::default(),
            terrain_pools: SideMap::default(),
            used_terrains: SideMap::default(),
            round_attribute: None,
            round_terrain: None,
            played_cards: SideMap::default(),
            played_equipment: SideMap::default(),
            initiative_dice: None,
            last_outcome: None,
            winning_card: None,
            result: None,
        }
    }

    /// The side expected to act right now, if any.
    ///
    /// During the selection phases that is always the player (the
    /// opponent's pools are assigned at setup). `None` while an advance is
    /// pending or the match is over.
    #[must_use]
    pub fn side_to_act(&self) -> Option<Side> {
        match self.phase {
            Phase::EquipmentSelection | Phase::TerrainSelection => Some(Side::Player),
            Phase::Playing => {
                if self.turn == 1 {
                    Some(self.initiator)
                } else {
                    Some(self.initiator.opposite())
                }
            }
            Phase::Setup | Phase::RoundResolved | Phase::Finished => None,
        }
    }

    /// The legal-commit predicate for the current turn.
    #[must_use]
    pub fn can_commit(&self, selection: &Selection) -> bool {
        self.phase == Phase::Playing && selection.satisfies_turn(self.turn)
    }

    /// Equipment a side can still play.
    #[must_use]
    pub fn available_equipment(&self, side: Side) -> EquipmentPool {
        self.equipment_pools[side]
            .iter()
            .copied()
            .filter(|id| !self.used_equipment[side].contains(id))
            .collect()
    }

    /// Terrains a side can still propose.
    #[must_use]
    pub fn available_terrains(&self, side: Side) -> TerrainPool {
        self.terrain_pools[side]
            .iter()
            .copied()
            .filter(|id| !self.used_terrains[side].contains(id))
            .collect()
    }

    /// True once either side has run out of cards.
    #[must_use]
    pub fn any_hand_empty(&self) -> bool {
        self.hands[Side::Player].is_empty() || self.hands[Side::Opponent].is_empty()
    }

    /// The final result this state would produce from its score totals.
    #[must_use]
    pub fn result_from_scores(&self) -> MatchResult {
        use std::cmp::Ordering;
        match self.scores[Side::Player].cmp(&self.scores[Side::Opponent]) {
            Ordering::Greater => MatchResult::Winner(Side::Player),
            Ordering::Less => MatchResult::Winner(Side::Opponent),
            Ordering::Equal => MatchResult::Draw,
        }
    }

    /// Clear the per-round fields when a round ends.
    pub(crate) fn clear_round(&mut self) {
        self.round_attribute = None;
        self.round_terrain = None;
        self.played_cards = SideMap::default();
        self.played_equipment = SideMap::default();
    }
}
