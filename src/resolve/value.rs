//! Effective attribute value resolution.
//!
//! Pure arithmetic: a hero's base attribute, plus the round terrain's buff
//! and debuff where they match, plus the played equipment's bonus where it
//! matches, clamped so the result never goes below zero.

use crate::cards::{Attribute, EquipmentCard, HeroCard, TerrainCard};

/// Compute the effective value of `attribute` for a played card.
///
/// Deterministic and side-effect free. Terrain applies to both sides of a
/// round, so callers pass the same terrain for each side's resolution.
///
/// ## Example
///
/// ```
/// use card_duel::cards::{Attribute, HeroCard, HeroId};
/// use card_duel::resolve::resolve_value;
///
/// let hero = HeroCard::new(HeroId::new(1), "Test", [8, 4, 3, 5, 2]);
/// assert_eq!(resolve_value(&hero, Attribute::Strength, None, None), 8);
/// ```
#[must_use]
pub fn resolve_value(
    card: &HeroCard,
    attribute: Attribute,
    equipment: Option<&EquipmentCard>,
    terrain: Option<&TerrainCard>,
) -> u32 {
    let mut value = i64::from(card.attribute(attribute));

    if let Some(terrain) = terrain {
        value += terrain.net_modifier(attribute);
    }

    if let Some(equipment) = equipment {
        value += i64::from(equipment.buff.amount_for(attribute));
    }

    // No negative effective power.
    value.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{AttributeBonus, EquipmentId, HeroId, TerrainId};

    fn hero(values: [u32; 5]) -> HeroCard {
        HeroCard::new(HeroId::new(1), "Test Hero", values)
    }

    #[test]
    fn test_base_value_no_modifiers() {
        let card = hero([8, 4, 3, 5, 2]);
        assert_eq!(resolve_value(&card, Attribute::Strength, None, None), 8);
        assert_eq!(resolve_value(&card, Attribute::Defense, None, None), 2);
    }

    #[test]
    fn test_equipment_bonus_applies_on_match() {
        let card = hero([8, 4, 3, 5, 2]);
        let helm = EquipmentCard::new(
            EquipmentId::new(1),
            "Helm",
            AttributeBonus::new(Attribute::Strength, 2),
        );

        assert_eq!(resolve_value(&card, Attribute::Strength, Some(&helm), None), 10);
        // Mismatched attribute: no effect.
        assert_eq!(resolve_value(&card, Attribute::Agility, Some(&helm), None), 4);
    }

    #[test]
    fn test_terrain_buff_and_debuff() {
        let card = hero([5, 5, 5, 5, 5]);
        let forest = TerrainCard::new(
            TerrainId::new(1),
            "Forest",
            AttributeBonus::new(Attribute::Agility, 2),
            AttributeBonus::new(Attribute::Strength, 1),
        );

        assert_eq!(resolve_value(&card, Attribute::Agility, None, Some(&forest)), 7);
        assert_eq!(resolve_value(&card, Attribute::Strength, None, Some(&forest)), 4);
        assert_eq!(resolve_value(&card, Attribute::Intellect, None, Some(&forest)), 5);
    }

    #[test]
    fn test_debuff_clamps_at_zero() {
        let card = hero([1, 0, 5, 5, 5]);
        let forest = TerrainCard::new(
            TerrainId::new(1),
            "Forest",
            AttributeBonus::new(Attribute::Agility, 2),
            AttributeBonus::new(Attribute::Strength, 1),
        );

        // base 1 - 1 = 0
        assert_eq!(resolve_value(&card, Attribute::Strength, None, Some(&forest)), 0);

        let card = hero([0, 0, 5, 5, 5]);
        // base 0 - 1 clamps to 0
        assert_eq!(resolve_value(&card, Attribute::Strength, None, Some(&forest)), 0);
    }

    #[test]
    fn test_buff_and_debuff_on_same_attribute_sum() {
        let card = hero([5, 5, 5, 5, 5]);
        let peak = TerrainCard::new(
            TerrainId::new(2),
            "Storm Peak",
            AttributeBonus::new(Attribute::Strength, 3),
            AttributeBonus::new(Attribute::Strength, 1),
        );

        assert_eq!(resolve_value(&card, Attribute::Strength, None, Some(&peak)), 7);
    }

    #[test]
    fn test_all_modifiers_stack() {
        let card = hero([5, 5, 5, 5, 5]);
        let helm = EquipmentCard::new(
            EquipmentId::new(1),
            "Helm",
            AttributeBonus::new(Attribute::Strength, 2),
        );
        let mountain = TerrainCard::new(
            TerrainId::new(2),
            "Mountain",
            AttributeBonus::new(Attribute::Strength, 1),
            AttributeBonus::new(Attribute::Agility, 1),
        );

        // 5 + 1 (terrain buff) + 2 (equipment) = 8
        assert_eq!(
            resolve_value(&card, Attribute::Strength, Some(&helm), Some(&mountain)),
            8
        );
    }
}
