//! The default scripted opponent.
//!
//! Deliberately simple, not minimax: uniform card and attribute picks,
//! coin-flip modifier usage. Good enough to exercise every rule.

use crate::cards::{Attribute, Catalog};
use crate::core::{DuelRng, Side};
use crate::engine::{MatchState, Selection};

use super::OpponentPolicy;

/// Uniform-random opponent.
///
/// - Card: uniform over the remaining hand.
/// - Attribute (when initiating): uniform over the five attributes.
/// - Equipment: 50% chance of playing one, uniform over unused items.
/// - Terrain (when initiating): 50% chance of proposing one, uniform over
///   unused terrains.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl OpponentPolicy for RandomPolicy {
    fn choose(&self, state: &MatchState, _catalog: &Catalog, rng: &mut DuelRng) -> Selection {
        let mut selection = Selection::new();

        if let Some(&card) = rng.choose(&state.hands[Side::Opponent]) {
            selection.card = Some(card);
        }

        let initiating = state.turn == 1;
        if initiating {
            selection.attribute = rng.choose(&Attribute::ALL).copied();

            let terrains = state.available_terrains(Side::Opponent);
            if !terrains.is_empty() && rng.gen_bool(0.5) {
                selection.terrain = rng.choose(&terrains).copied();
            }
        }

        let equipment = state.available_equipment(Side::Opponent);
        if !equipment.is_empty() && rng.gen_bool(0.5) {
            selection.equipment = rng.choose(&equipment).copied();
        }

        selection
    }
}
