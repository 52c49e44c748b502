//! Opponent decision-making.
//!
//! Policies are trait-based so a scripted opponent can be swapped for a
//! smarter one without touching the engine. A policy only proposes; the
//! engine validates and consumes on commit.

pub mod random;

pub use random::RandomPolicy;

use crate::cards::Catalog;
use crate::core::DuelRng;
use crate::engine::{MatchState, Selection};

/// Produces the opponent's selection for the turn it must play.
///
/// The contract is modest: given a state where the opponent is the acting
/// side, return a selection the engine will accept. Policies never mutate
/// state - consumption happens in the engine on commit.
pub trait OpponentPolicy {
    /// Choose the opponent's selection for the current turn.
    fn choose(&self, state: &MatchState, catalog: &Catalog, rng: &mut DuelRng) -> Selection;
}
