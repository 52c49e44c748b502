//! Terrain cards - a paired buff and debuff applied to both sides.
//!
//! When a terrain is in effect for a round, its buff raises one attribute
//! and its debuff lowers another (possibly the same one) for *both* sides.
//! Catalog documents spell the debuff with a negative number:
//!
//! ```json
//! { "id": 1, "name": "Forest", "buff": {"dex": 1}, "debuff": {"str": -1},
//!   "description": "Dense woods where shadows dance." }
//! ```

use serde::{Deserialize, Serialize};

use super::attribute::{Attribute, AttributeBonus};
use super::equipment::bonus_map;

/// Unique identifier for a terrain card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TerrainId(pub u32);

impl TerrainId {
    /// Create a new terrain ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TerrainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Terrain({})", self.0)
    }
}

/// An immutable terrain card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainCard {
    /// Unique identity within the terrain catalog.
    pub id: TerrainId,

    /// Display name.
    pub name: String,

    /// Attribute raised while this terrain is in effect.
    #[serde(with = "bonus_map")]
    pub buff: AttributeBonus,

    /// Attribute lowered while this terrain is in effect. The stored
    /// amount is the magnitude; serialization restores the minus sign.
    #[serde(with = "debuff_map")]
    pub debuff: AttributeBonus,

    /// Free-text flavor description.
    #[serde(default)]
    pub description: String,
}

impl TerrainCard {
    /// Create a terrain card.
    #[must_use]
    pub fn new(
        id: TerrainId,
        name: impl Into<String>,
        buff: AttributeBonus,
        debuff: AttributeBonus,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            buff,
            debuff,
            description: String::new(),
        }
    }

    /// Set the flavor description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Net terrain adjustment for one attribute.
    ///
    /// Buff and debuff may target the same attribute, in which case both
    /// contributions sum here.
    #[must_use]
    pub fn net_modifier(&self, attribute: Attribute) -> i64 {
        i64::from(self.buff.amount_for(attribute)) - i64::from(self.debuff.amount_for(attribute))
    }
}

/// Like `bonus_map`, but serializes the amount negated to match the
/// catalog convention for debuffs.
mod debuff_map {
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};

    use crate::cards::attribute::AttributeBonus;
    use crate::cards::equipment::bonus_map;

    pub fn serialize<S>(bonus: &AttributeBonus, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(bonus.attribute.key(), &-(bonus.amount as i64))?;
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<AttributeBonus, D::Error>
    where
        D: Deserializer<'de>,
    {
        bonus_map::deserialize(deserializer)
    }
}
