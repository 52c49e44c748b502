//! The round/turn state machine.
//!
//! `MatchEngine` owns all mutable match state and is its only writer;
//! everything else reads through `MatchState` or a `MatchSnapshot`.

pub mod engine;
pub mod phase;
pub mod selection;
pub mod snapshot;
pub mod state;

pub use engine::MatchEngine;
pub use phase::Phase;
pub use selection::Selection;
pub use snapshot::MatchSnapshot;
pub use state::{Hand, MatchResult, MatchState};
