//! Error taxonomy for the duel engine.
//!
//! Every error here is recoverable: a rejected selection leaves the match
//! untouched and the caller resubmits a corrected one, and a catalog that
//! fails to load falls back to the builtin tables.

use thiserror::Error;

use super::side::Side;
use crate::engine::Phase;

/// Why a selection commit was rejected.
///
/// A rejected commit never mutates match state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The action does not belong in the current phase.
    #[error("action not legal in phase {phase:?}")]
    WrongPhase {
        /// Phase the match was in when the action arrived.
        phase: Phase,
    },

    /// A different side must act this turn.
    #[error("it is the {expected} side's turn")]
    NotYourTurn {
        /// Side that is expected to act.
        expected: Side,
    },

    /// The selection is missing required fields or contains illegal ones.
    #[error("invalid selection: {reason}")]
    InvalidSelection {
        /// Actionable description, e.g. "card and attribute required".
        reason: String,
    },

    /// The referenced card is not in the acting side's hand.
    #[error("card {id} is not in hand")]
    CardNotInHand {
        /// Raw hero card id.
        id: u32,
    },

    /// The referenced equipment is not in the acting side's pool.
    #[error("equipment {id} is not in this side's pool")]
    EquipmentNotOwned {
        /// Raw equipment id.
        id: u32,
    },

    /// The referenced terrain is not in the acting side's pool.
    #[error("terrain {id} is not in this side's pool")]
    TerrainNotOwned {
        /// Raw terrain id.
        id: u32,
    },

    /// The referenced item was already consumed earlier in the match.
    #[error("that item was already used this match")]
    AlreadyUsed,

    /// A round outcome is waiting to be advanced; no commits until then.
    #[error("round resolution pending, call advance_round first")]
    ResolutionPending,

    /// The match is over; nothing more can be committed.
    #[error("the match is already finished")]
    AlreadyFinished,
}

impl SelectionError {
    /// Convenience constructor for `InvalidSelection`.
    pub fn invalid(reason: impl Into<String>) -> Self {
        SelectionError::InvalidSelection {
            reason: reason.into(),
        }
    }
}

/// Why a catalog document could not be loaded.
///
/// Callers recover with `Catalog::load_or_builtin`, which substitutes the
/// builtin tables so a match can still start.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The JSON document did not parse or did not match the schema.
    #[error("malformed catalog document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The document parsed but contained no entries.
    #[error("catalog document for {kind} is empty")]
    Empty {
        /// Which catalog was empty ("heroes", "equipment", "terrains").
        kind: &'static str,
    },

    /// Two entries share an id.
    #[error("duplicate {kind} id {id}")]
    DuplicateId {
        /// Which catalog contained the duplicate.
        kind: &'static str,
        /// The offending raw id.
        id: u32,
    },
}
