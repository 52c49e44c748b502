//! Equipment cards - one-shot single-attribute bonuses.
//!
//! Catalog documents spell the bonus as a one-entry map:
//!
//! ```json
//! { "id": 2, "name": "Swift Boots", "buff": {"dex": 2},
//!   "description": "Enchanted boots that make the wearer dance." }
//! ```

use serde::{Deserialize, Serialize};

use super::attribute::AttributeBonus;

/// Unique identifier for an equipment card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EquipmentId(pub u32);

impl EquipmentId {
    /// Create a new equipment ID.
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

impl std::fmt::Display for EquipmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Equipment({})", self.0)
    }
}

/// An immutable equipment card granting a bonus to exactly one attribute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentCard {
    /// Unique identity within the equipment catalog.
    pub id: EquipmentId,

    /// Display name.
    pub name: String,

    /// The single-attribute bonus this item grants when played.
    #[serde(with = "bonus_map")]
    pub buff: AttributeBonus,

    /// Free-text flavor description.
    #[serde(default)]
    pub description: String,
}

impl EquipmentCard {
    /// Create an equipment card.
    #[must_use]
    pub fn new(id: EquipmentId, name: impl Into<String>, buff: AttributeBonus) -> Self {
        Self {
            id,
            name: name.into(),
            buff,
            description: String::new(),
        }
    }

    /// Set the flavor description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Serde representation of a single-attribute modifier as a one-entry map
/// keyed by the catalog short key, e.g. `{"str": 2}`.
///
/// Shared with the terrain card's buff/debuff fields.
pub(crate) mod bonus_map {
    use serde::de::Error as DeError;
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeMap;

    use crate::cards::attribute::{Attribute, AttributeBonus};

    pub fn serialize<S>(bonus: &AttributeBonus, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(bonus.attribute.key(), &(bonus.amount as i64))?;
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<AttributeBonus, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = BTreeMap::<String, i64>::deserialize(deserializer)?;
        let (key, value) = map
            .into_iter()
            .next()
            .ok_or_else(|| D::Error::custom("modifier map must contain one attribute"))?;

        let attribute = Attribute::from_key(&key)
            .ok_or_else(|| D::Error::custom(format!("unknown attribute key '{key}'")))?;
        if value == 0 {
            return Err(D::Error::custom("modifier amount must be non-zero"));
        }

        // Debuffs arrive as negative numbers; only the magnitude is stored.
        Ok(AttributeBonus::new(attribute, value.unsigned_abs() as u32))
    }
}
