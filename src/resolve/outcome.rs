//! Round outcome: compare two resolved values, dice on a tie.
//!
//! Called exactly once per round by the engine. The tie-break is a single
//! d6 per side; if the dice also tie the round is a double draw and no
//! score moves.

use serde::{Deserialize, Serialize};

use crate::core::{DuelRng, Side, SideMap};

/// The decision for one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// The winning side, or `None` for a draw.
    pub winner: Option<Side>,

    /// Each side's resolved attribute value.
    pub values: SideMap<u32>,

    /// The tie-break dice, present only when the values were equal.
    pub tie_roll: Option<SideMap<u8>>,
}

impl RoundOutcome {
    /// True when neither side scored.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

/// Decide a round from the two resolved values.
///
/// Higher value wins outright. Equal values trigger exactly one d6 per
/// side; the higher die wins and equal dice leave the round drawn. The
/// dice are the only source of non-determinism.
#[must_use]
pub fn resolve_round(values: SideMap<u32>, rng: &mut DuelRng) -> RoundOutcome {
    use std::cmp::Ordering;

    match values[Side::Player].cmp(&values[Side::Opponent]) {
        Ordering::Greater => RoundOutcome {
            winner: Some(Side::Player),
            values,
            tie_roll: None,
        },
        Ordering::Less => RoundOutcome {
            winner: Some(Side::Opponent),
            values,
            tie_roll: None,
        },
        Ordering::Equal => {
            let dice = SideMap::new(|_| rng.roll_die());
            let winner = match dice[Side::Player].cmp(&dice[Side::Opponent]) {
                Ordering::Greater => Some(Side::Player),
                Ordering::Less => Some(Side::Opponent),
                Ordering::Equal => None,
            };
            RoundOutcome {
                winner,
                values,
                tie_roll: Some(dice),
            }
        }
    }
}
