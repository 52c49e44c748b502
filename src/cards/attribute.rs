//! The five hero attributes.
//!
//! Every hero card carries a value for each attribute; equipment and terrain
//! modifiers target exactly one of them. Catalog documents use the short
//! keys (`str`, `dex`, `int`, `con`, `def`) inherited from the data files.

use serde::{Deserialize, Serialize};

/// One of the five attributes a round can be contested on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Strength,
    Agility,
    Intellect,
    Constitution,
    Defense,
}

impl Attribute {
    /// All five attributes, in catalog order.
    pub const ALL: [Attribute; 5] = [
        Attribute::Strength,
        Attribute::Agility,
        Attribute::Intellect,
        Attribute::Constitution,
        Attribute::Defense,
    ];

    /// The short key used in catalog documents.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Attribute::Strength => "str",
            Attribute::Agility => "dex",
            Attribute::Intellect => "int",
            Attribute::Constitution => "con",
            Attribute::Defense => "def",
        }
    }

    /// Parse a catalog short key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Attribute> {
        match key {
            "str" => Some(Attribute::Strength),
            "dex" => Some(Attribute::Agility),
            "int" => Some(Attribute::Intellect),
            "con" => Some(Attribute::Constitution),
            "def" => Some(Attribute::Defense),
            _ => None,
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Attribute::Strength => "strength",
            Attribute::Agility => "agility",
            Attribute::Intellect => "intellect",
            Attribute::Constitution => "constitution",
            Attribute::Defense => "defense",
        };
        write!(f, "{name}")
    }
}

/// A single-attribute modifier: which attribute, and by how much.
///
/// Used for equipment bonuses and both halves of a terrain effect. The
/// amount is a magnitude; terrain debuffs apply it negatively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeBonus {
    /// The attribute this modifier targets.
    pub attribute: Attribute,
    /// Magnitude of the modifier (always positive).
    pub amount: u32,
}

impl AttributeBonus {
    /// Create a new bonus.
    #[must_use]
    pub const fn new(attribute: Attribute, amount: u32) -> Self {
        Self { attribute, amount }
    }

    /// The bonus amount if it targets `attribute`, else 0.
    #[must_use]
    pub fn amount_for(&self, attribute: Attribute) -> u32 {
        if self.attribute == attribute {
            self.amount
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for attr in Attribute::ALL {
            assert_eq!(Attribute::from_key(attr.key()), Some(attr));
        }
        assert_eq!(Attribute::from_key("cha"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Attribute::Agility), "agility");
        assert_eq!(format!("{}", Attribute::Defense), "defense");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Attribute::Intellect).unwrap();
        assert_eq!(json, "\"intellect\"");

        let back: Attribute = serde_json::from_str("\"strength\"").unwrap();
        assert_eq!(back, Attribute::Strength);
    }

    #[test]
    fn test_amount_for() {
        let bonus = AttributeBonus::new(Attribute::Strength, 2);
        assert_eq!(bonus.amount_for(Attribute::Strength), 2);
        assert_eq!(bonus.amount_for(Attribute::Agility), 0);
    }
}
