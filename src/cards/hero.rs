//! Hero cards - the cards each side plays from its hand.
//!
//! A hero is immutable once loaded: an identity, a display name, and one
//! non-negative value per attribute. Hands and catalogs share heroes by id.

use serde::{Deserialize, Serialize};

use super::attribute::Attribute;

/// Unique identifier for a hero card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HeroId(pub u32);

impl HeroId {
    /// Create a new hero ID.
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

impl std::fmt::Display for HeroId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hero({})", self.0)
    }
}

/// An immutable hero card.
///
/// Catalog documents spell the attributes with short keys:
///
/// ```json
/// { "id": 1, "name": "Goliath Barbarian",
///   "str": 10, "dex": 4, "int": 3, "con": 8, "def": 5 }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroCard {
    /// Unique identity within the hero catalog.
    pub id: HeroId,

    /// Display name.
    pub name: String,

    #[serde(rename = "str")]
    pub strength: u32,

    #[serde(rename = "dex")]
    pub agility: u32,

    #[serde(rename = "int")]
    pub intellect: u32,

    #[serde(rename = "con")]
    pub constitution: u32,

    #[serde(rename = "def")]
    pub defense: u32,

    /// Free-text flavor description.
    #[serde(default)]
    pub description: String,
}

impl HeroCard {
    /// Create a hero with all attributes given in `Attribute::ALL` order.
    #[must_use]
    pub fn new(id: HeroId, name: impl Into<String>, values: [u32; 5]) -> Self {
        Self {
            id,
            name: name.into(),
            strength: values[0],
            agility: values[1],
            intellect: values[2],
            constitution: values[3],
            defense: values[4],
            description: String::new(),
        }
    }

    /// Set the flavor description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Get the base value of one attribute.
    #[must_use]
    pub fn attribute(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Agility => self.agility,
            Attribute::Intellect => self.intellect,
            Attribute::Constitution => self.constitution,
            Attribute::Defense => self.defense,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_lookup() {
        let hero = HeroCard::new(HeroId::new(1), "Test Hero", [10, 4, 3, 8, 5]);

        assert_eq!(hero.attribute(Attribute::Strength), 10);
        assert_eq!(hero.attribute(Attribute::Agility), 4);
        assert_eq!(hero.attribute(Attribute::Intellect), 3);
        assert_eq!(hero.attribute(Attribute::Constitution), 8);
        assert_eq!(hero.attribute(Attribute::Defense), 5);
    }

    #[test]
    fn test_json_short_keys() {
        let json = r#"{
            "id": 3, "name": "Forest Elf Rogue",
            "str": 4, "dex": 10, "int": 6, "con": 5, "def": 4
        }"#;

        let hero: HeroCard = serde_json::from_str(json).unwrap();
        assert_eq!(hero.id, HeroId::new(3));
        assert_eq!(hero.attribute(Attribute::Agility), 10);
        assert!(hero.description.is_empty());
    }
}
