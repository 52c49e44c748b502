//! The per-turn selection buffer.
//!
//! A `Selection` is the transient bundle of choices one side commits in a
//! turn. Which fields are required depends on the turn: the initiator
//! supplies card + attribute (equipment and terrain optional), the
//! responder supplies just a card (equipment optional).

use serde::{Deserialize, Serialize};

use crate::cards::{Attribute, EquipmentId, HeroId, TerrainId};

/// Pending choices for a single turn commit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// The hero card to play from hand.
    pub card: Option<HeroId>,

    /// The attribute to contest the round on (turn 1 only).
    pub attribute: Option<Attribute>,

    /// An unused equipment item to play alongside the card.
    pub equipment: Option<EquipmentId>,

    /// An unused terrain to lock in for the round (turn 1 only).
    pub terrain: Option<TerrainId>,
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the card.
    #[must_use]
    pub fn with_card(mut self, card: HeroId) -> Self {
        self.card = Some(card);
        self
    }

    /// Set the attribute.
    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attribute = Some(attribute);
        self
    }

    /// Set the equipment.
    #[must_use]
    pub fn with_equipment(mut self, equipment: EquipmentId) -> Self {
        self.equipment = Some(equipment);
        self
    }

    /// Set the terrain.
    #[must_use]
    pub fn with_terrain(mut self, terrain: TerrainId) -> Self {
        self.terrain = Some(terrain);
        self
    }

    /// The legal-commit predicate for a given turn within a round.
    ///
    /// Turn 1 requires card + attribute; turn 2 requires a card.
    #[must_use]
    pub fn satisfies_turn(&self, turn: u8) -> bool {
        match turn {
            1 => self.card.is_some() && self.attribute.is_some(),
            2 => self.card.is_some(),
            _ => false,
        }
    }
}
