//! Card data: attributes, heroes, equipment, terrains, and the catalog.
//!
//! Everything in this module is immutable once loaded. Mutable match state
//! (hands, pools) lives in `engine` and refers to these records by id.

pub mod attribute;
pub mod catalog;
pub mod equipment;
pub mod hero;
pub mod terrain;

pub use attribute::{Attribute, AttributeBonus};
pub use catalog::Catalog;
pub use equipment::{EquipmentCard, EquipmentId};
pub use hero::{HeroCard, HeroId};
pub use terrain::{TerrainCard, TerrainId};
