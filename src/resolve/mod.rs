//! Value resolution and round outcomes.

pub mod outcome;
pub mod value;

pub use outcome::{resolve_round, RoundOutcome};
pub use value::resolve_value;
