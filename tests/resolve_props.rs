//! Property tests for the value resolver and outcome engine.

use proptest::prelude::*;

use card_duel::cards::{
    Attribute, AttributeBonus, EquipmentCard, EquipmentId, HeroCard, HeroId, TerrainCard,
    TerrainId,
};
use card_duel::core::{DuelRng, Side, SideMap};
use card_duel::resolve::{resolve_round, resolve_value};

fn attribute_strategy() -> impl Strategy<Value = Attribute> {
    prop::sample::select(Attribute::ALL.to_vec())
}

prop_compose! {
    fn hero_strategy()(values in prop::array::uniform5(0u32..=20)) -> HeroCard {
        HeroCard::new(HeroId::new(1), "Prop Hero", values)
    }
}

prop_compose! {
    fn equipment_strategy()(
        attribute in attribute_strategy(),
        amount in 1u32..=5,
    ) -> EquipmentCard {
        EquipmentCard::new(EquipmentId::new(1), "Prop Item", AttributeBonus::new(attribute, amount))
    }
}

prop_compose! {
    fn terrain_strategy()(
        buff_attr in attribute_strategy(),
        buff in 1u32..=5,
        debuff_attr in attribute_strategy(),
        debuff in 1u32..=5,
    ) -> TerrainCard {
        TerrainCard::new(
            TerrainId::new(1),
            "Prop Terrain",
            AttributeBonus::new(buff_attr, buff),
            AttributeBonus::new(debuff_attr, debuff),
        )
    }
}

proptest! {
    /// The resolver matches the arithmetic spelled out longhand, clamped
    /// at zero, for every modifier combination.
    #[test]
    fn resolved_value_matches_longhand(
        hero in hero_strategy(),
        attribute in attribute_strategy(),
        equipment in prop::option::of(equipment_strategy()),
        terrain in prop::option::of(terrain_strategy()),
    ) {
        let resolved = resolve_value(&hero, attribute, equipment.as_ref(), terrain.as_ref());

        let mut expected = i64::from(hero.attribute(attribute));
        if let Some(t) = &terrain {
            expected += i64::from(t.buff.amount_for(attribute));
            expected -= i64::from(t.debuff.amount_for(attribute));
        }
        if let Some(e) = &equipment {
            expected += i64::from(e.buff.amount_for(attribute));
        }

        prop_assert_eq!(i64::from(resolved), expected.max(0));
    }

    /// Modifiers that target other attributes never change the result.
    #[test]
    fn unrelated_modifiers_are_inert(
        hero in hero_strategy(),
        attribute in attribute_strategy(),
        equipment in equipment_strategy(),
        terrain in terrain_strategy(),
    ) {
        prop_assume!(equipment.buff.attribute != attribute);
        prop_assume!(terrain.buff.attribute != attribute);
        prop_assume!(terrain.debuff.attribute != attribute);

        let resolved = resolve_value(&hero, attribute, Some(&equipment), Some(&terrain));
        prop_assert_eq!(resolved, hero.attribute(attribute));
    }

    /// Every round reports exactly one of the three outcomes, consistent
    /// with the values and (on ties) the dice.
    #[test]
    fn round_outcome_is_consistent(
        player in 0u32..=30,
        opponent in 0u32..=30,
        seed in any::<u64>(),
    ) {
        let mut rng = DuelRng::new(seed);
        let mut values = SideMap::default();
        values[Side::Player] = player;
        values[Side::Opponent] = opponent;

        let outcome = resolve_round(values, &mut rng);

        if player > opponent {
            prop_assert_eq!(outcome.winner, Some(Side::Player));
            prop_assert!(outcome.tie_roll.is_none());
        } else if player < opponent {
            prop_assert_eq!(outcome.winner, Some(Side::Opponent));
            prop_assert!(outcome.tie_roll.is_none());
        } else {
            let dice = outcome.tie_roll.expect("tie must record dice");
            prop_assert!((1..=6).contains(&dice[Side::Player]));
            prop_assert!((1..=6).contains(&dice[Side::Opponent]));
            match dice[Side::Player].cmp(&dice[Side::Opponent]) {
                std::cmp::Ordering::Greater => prop_assert_eq!(outcome.winner, Some(Side::Player)),
                std::cmp::Ordering::Less => prop_assert_eq!(outcome.winner, Some(Side::Opponent)),
                std::cmp::Ordering::Equal => prop_assert_eq!(outcome.winner, None),
            }
        }
    }
}
