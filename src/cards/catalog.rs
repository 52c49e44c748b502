//! The resource catalog: heroes, equipment, and terrains.
//!
//! Catalogs are loaded once at startup from three JSON documents and are
//! immutable afterwards. A document that fails to load is replaced by a
//! small builtin table so a match can always start.
//!
//! Entries keep their document order so that a seeded shuffle deals the
//! same hands on every run.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::core::CatalogError;

use super::attribute::{Attribute, AttributeBonus};
use super::equipment::{EquipmentCard, EquipmentId};
use super::hero::{HeroCard, HeroId};
use super::terrain::{TerrainCard, TerrainId};

// Document shapes as served by the asset pipeline. "heros" is the
// historical spelling in the data files.
#[derive(Deserialize)]
struct HeroesDoc {
    heros: Vec<HeroCard>,
}

#[derive(Deserialize)]
struct EquipmentsDoc {
    equipments: Vec<EquipmentCard>,
}

#[derive(Deserialize)]
struct TerrainsDoc {
    terrains: Vec<TerrainCard>,
}

/// Immutable lookup tables for every card in the game.
#[derive(Clone, Debug)]
pub struct Catalog {
    heroes: Vec<HeroCard>,
    equipments: Vec<EquipmentCard>,
    terrains: Vec<TerrainCard>,

    hero_index: FxHashMap<HeroId, usize>,
    equipment_index: FxHashMap<EquipmentId, usize>,
    terrain_index: FxHashMap<TerrainId, usize>,
}

impl Catalog {
    /// Build a catalog from already-parsed card lists.
    ///
    /// Fails if the hero list is empty or any list contains a duplicate id.
    /// Equipment and terrain lists may be empty (pools can be sized 0).
    pub fn from_parts(
        heroes: Vec<HeroCard>,
        equipments: Vec<EquipmentCard>,
        terrains: Vec<TerrainCard>,
    ) -> Result<Self, CatalogError> {
        if heroes.is_empty() {
            return Err(CatalogError::Empty { kind: "heroes" });
        }

        let mut hero_index = FxHashMap::default();
        for (i, hero) in heroes.iter().enumerate() {
            if hero_index.insert(hero.id, i).is_some() {
                return Err(CatalogError::DuplicateId {
                    kind: "heroes",
                    id: hero.id.raw(),
                });
            }
        }

        let mut equipment_index = FxHashMap::default();
        for (i, item) in equipments.iter().enumerate() {
            if equipment_index.insert(item.id, i).is_some() {
                return Err(CatalogError::DuplicateId {
                    kind: "equipment",
                    id: item.id.raw(),
                });
            }
        }

        let mut terrain_index = FxHashMap::default();
        for (i, terrain) in terrains.iter().enumerate() {
            if terrain_index.insert(terrain.id, i).is_some() {
                return Err(CatalogError::DuplicateId {
                    kind: "terrains",
                    id: terrain.id.raw(),
                });
            }
        }

        Ok(Self {
            heroes,
            equipments,
            terrains,
            hero_index,
            equipment_index,
            terrain_index,
        })
    }

    /// Parse a catalog from the three JSON documents.
    pub fn from_json(
        heroes_json: &str,
        equipments_json: &str,
        terrains_json: &str,
    ) -> Result<Self, CatalogError> {
        let heroes: HeroesDoc = serde_json::from_str(heroes_json)?;
        let equipments: EquipmentsDoc = serde_json::from_str(equipments_json)?;
        let terrains: TerrainsDoc = serde_json::from_str(terrains_json)?;

        Self::from_parts(heroes.heros, equipments.equipments, terrains.terrains)
    }

    /// Parse the JSON documents, falling back to the builtin tables if any
    /// of them is missing or malformed. Loading failures never block a
    /// match from starting.
    #[must_use]
    pub fn load_or_builtin(
        heroes_json: Option<&str>,
        equipments_json: Option<&str>,
        terrains_json: Option<&str>,
    ) -> Self {
        match (heroes_json, equipments_json, terrains_json) {
            (Some(h), Some(e), Some(t)) => Self::from_json(h, e, t).unwrap_or_else(|err| {
                log::warn!("catalog load failed ({err}), using builtin tables");
                Self::builtin()
            }),
            _ => {
                log::warn!("catalog documents missing, using builtin tables");
                Self::builtin()
            }
        }
    }

    /// The builtin fallback catalog: five heroes, five equipment items,
    /// two terrains.
    #[must_use]
    pub fn builtin() -> Self {
        let heroes = vec![
            HeroCard::new(HeroId::new(1), "Goliath Barbarian", [10, 4, 3, 8, 5]),
            HeroCard::new(HeroId::new(2), "Half-Orc Warrior", [9, 5, 3, 7, 6]),
            HeroCard::new(HeroId::new(3), "Forest Elf Rogue", [4, 10, 6, 5, 4]),
            HeroCard::new(HeroId::new(5), "Tiefling Mage", [2, 4, 10, 4, 3]),
            HeroCard::new(HeroId::new(9), "Human Paladin", [7, 5, 5, 6, 10]),
        ];

        let equipments = vec![
            EquipmentCard::new(
                EquipmentId::new(1),
                "Black Knight's Helm",
                AttributeBonus::new(Attribute::Strength, 2),
            )
            .with_description("Forged in the dark of the abyss."),
            EquipmentCard::new(
                EquipmentId::new(2),
                "Swift Boots",
                AttributeBonus::new(Attribute::Agility, 2),
            )
            .with_description("Enchanted boots that make the wearer dance."),
            EquipmentCard::new(
                EquipmentId::new(3),
                "Sage's Amulet",
                AttributeBonus::new(Attribute::Intellect, 2),
            )
            .with_description("An ancient crystal humming with insight."),
            EquipmentCard::new(
                EquipmentId::new(4),
                "Belt of Vitality",
                AttributeBonus::new(Attribute::Constitution, 2),
            )
            .with_description("Woven from dragon-hide fibers."),
            EquipmentCard::new(
                EquipmentId::new(5),
                "Reinforced Shield",
                AttributeBonus::new(Attribute::Defense, 2),
            )
            .with_description("A legendary bulwark."),
        ];

        let terrains = vec![
            TerrainCard::new(
                TerrainId::new(1),
                "Forest",
                AttributeBonus::new(Attribute::Agility, 1),
                AttributeBonus::new(Attribute::Strength, 1),
            )
            .with_description("Dense woods where shadows dance."),
            TerrainCard::new(
                TerrainId::new(2),
                "Mountain",
                AttributeBonus::new(Attribute::Strength, 1),
                AttributeBonus::new(Attribute::Agility, 1),
            )
            .with_description("Rocky peaks hardened by freezing winds."),
        ];

        Self::from_parts(heroes, equipments, terrains)
            .expect("builtin catalog tables are well-formed")
    }

    /// Look up a hero by id.
    #[must_use]
    pub fn hero(&self, id: HeroId) -> Option<&HeroCard> {
        self.hero_index.get(&id).map(|&i| &self.heroes[i])
    }

    /// Look up an equipment item by id.
    #[must_use]
    pub fn equipment(&self, id: EquipmentId) -> Option<&EquipmentCard> {
        self.equipment_index.get(&id).map(|&i| &self.equipments[i])
    }

    /// Look up a terrain by id.
    #[must_use]
    pub fn terrain(&self, id: TerrainId) -> Option<&TerrainCard> {
        self.terrain_index.get(&id).map(|&i| &self.terrains[i])
    }

    /// All heroes, in document order.
    #[must_use]
    pub fn heroes(&self) -> &[HeroCard] {
        &self.heroes
    }

    /// All equipment items, in document order.
    #[must_use]
    pub fn equipments(&self) -> &[EquipmentCard] {
        &self.equipments
    }

    /// All terrains, in document order.
    #[must_use]
    pub fn terrains(&self) -> &[TerrainCard] {
        &self.terrains
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.heroes().len(), 5);
        assert_eq!(catalog.equipments().len(), 5);
        assert_eq!(catalog.terrains().len(), 2);

        let paladin = catalog.hero(HeroId::new(9)).unwrap();
        assert_eq!(paladin.name, "Human Paladin");
        assert_eq!(paladin.defense, 10);

        assert!(catalog.hero(HeroId::new(100)).is_none());
    }

    #[test]
    fn test_from_json() {
        let heroes = r#"{"heros": [
            {"id": 1, "name": "A", "str": 8, "dex": 1, "int": 1, "con": 1, "def": 1},
            {"id": 2, "name": "B", "str": 5, "dex": 2, "int": 2, "con": 2, "def": 2}
        ]}"#;
        let equipments = r#"{"equipments": [
            {"id": 1, "name": "Helm", "buff": {"str": 2}}
        ]}"#;
        let terrains = r#"{"terrains": [
            {"id": 1, "name": "Forest", "buff": {"dex": 1}, "debuff": {"str": -1}}
        ]}"#;

        let catalog = Catalog::from_json(heroes, equipments, terrains).unwrap();
        assert_eq!(catalog.heroes().len(), 2);
        assert_eq!(catalog.hero(HeroId::new(1)).unwrap().strength, 8);
    }

    #[test]
    fn test_duplicate_hero_rejected() {
        let hero = HeroCard::new(HeroId::new(1), "A", [1, 1, 1, 1, 1]);
        let result = Catalog::from_parts(vec![hero.clone(), hero], Vec::new(), Vec::new());
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateId { kind: "heroes", id: 1 })
        ));
    }

    #[test]
    fn test_empty_heroes_rejected() {
        let result = Catalog::from_parts(Vec::new(), Vec::new(), Vec::new());
        assert!(matches!(result, Err(CatalogError::Empty { kind: "heroes" })));
    }

    #[test]
    fn test_load_or_builtin_falls_back() {
        let catalog = Catalog::load_or_builtin(Some("not json"), None, None);
        assert_eq!(catalog.heroes().len(), 5);

        let catalog = Catalog::load_or_builtin(None, None, None);
        assert_eq!(catalog.terrains().len(), 2);
    }
}
