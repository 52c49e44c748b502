//! Core engine types: sides, RNG, configuration, errors.
//!
//! These are the building blocks the rest of the crate is assembled from.

pub mod config;
pub mod error;
pub mod rng;
pub mod side;

pub use config::MatchConfig;
pub use error::{CatalogError, SelectionError};
pub use rng::{DuelRng, DuelRngState};
pub use side::{Side, SideMap};
