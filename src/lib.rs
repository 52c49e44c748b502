//! # card-duel
//!
//! A turn-based card battle resolver: two sides each hold a hand of hero
//! cards, a pool of equipment modifiers, and a terrain modifier; they
//! alternately commit a card, an attribute, and optional modifiers, and
//! the engine decides each round from the modified attribute values, with
//! a dice-roll tie-break.
//!
//! ## Design Principles
//!
//! 1. **Explicit session object**: a `MatchEngine` is constructed by the
//!    caller and passed around - no ambient global state.
//!
//! 2. **One writer**: the engine is the only code that mutates match
//!    state. Views render from `MatchSnapshot`; the opponent policy reads
//!    `MatchState` and only proposes.
//!
//! 3. **Deterministic replay**: every random decision (shuffle, dice,
//!    opponent choices) draws from one seeded `DuelRng`, so a seed replays
//!    a match exactly.
//!
//! 4. **Caller-driven time**: the pause after a round resolves is the
//!    `RoundResolved` phase, advanced explicitly with `advance_round` -
//!    no wall-clock timers in the core.
//!
//! ## Modules
//!
//! - `core`: sides, RNG, configuration, errors
//! - `cards`: attributes, hero/equipment/terrain records, the catalog
//! - `resolve`: effective-value resolution and round outcomes
//! - `engine`: the round/turn state machine
//! - `policy`: opponent decision-making

pub mod cards;
pub mod core;
pub mod engine;
pub mod policy;
pub mod resolve;

// Re-export commonly used types
pub use crate::core::{
    CatalogError, DuelRng, DuelRngState, MatchConfig, SelectionError, Side, SideMap,
};

pub use crate::cards::{
    Attribute, AttributeBonus, Catalog, EquipmentCard, EquipmentId, HeroCard, HeroId, TerrainCard,
    TerrainId,
};

pub use crate::resolve::{resolve_round, resolve_value, RoundOutcome};

pub use crate::engine::{MatchEngine, MatchResult, MatchSnapshot, MatchState, Phase, Selection};

pub use crate::policy::{OpponentPolicy, RandomPolicy};
