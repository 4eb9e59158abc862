//! Property tests for the ability budget and inventory bookkeeping.

use chargen_core::abilities::REQUIRED_ABILITY_TOTAL;
use chargen_core::{
    Abilities, Ability, AbilityScores, Condition, Inventory, InventoryError, Item, Stacking,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_ability() -> impl Strategy<Value = Ability> {
    prop::sample::select(Ability::all().to_vec())
}

fn arb_scores(range: std::ops::RangeInclusive<i32>) -> impl Strategy<Value = AbilityScores> {
    prop::array::uniform6(range).prop_map(|[s, l, c, a, p, i]| AbilityScores::new(s, l, c, a, p, i))
}

/// Six values in [1, 10] that sum to 35: the five bonus points are handed
/// out, then single points are shuffled between abilities.
fn arb_valid_scores() -> impl Strategy<Value = AbilityScores> {
    (
        prop::array::uniform5(arb_ability()),
        prop::collection::vec((arb_ability(), arb_ability()), 0..60),
    )
        .prop_map(|(bonus, moves)| {
            let mut scores = AbilityScores::new(5, 5, 5, 5, 5, 5);
            for ability in bonus {
                scores.set(ability, scores.get(ability) + 1);
            }
            for (from, to) in moves {
                if from != to && scores.get(from) > 1 && scores.get(to) < 10 {
                    scores.set(from, scores.get(from) - 1);
                    scores.set(to, scores.get(to) + 1);
                }
            }
            scores
        })
}

fn arb_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Sword", "Arrow", "Potion", "Rope"]).prop_map(String::from)
}

fn arb_condition() -> impl Strategy<Value = Condition> {
    prop::sample::select(vec!["New", "Worn", "Broken"]).prop_map(Condition::new)
}

// ============================================================================
// Abilities
// ============================================================================

proptest! {
    #[test]
    fn prop_valid_scores_construct_with_expected_pool(scores in arb_valid_scores()) {
        let abilities = Abilities::from_scores(&scores).expect("valid scores");
        let spent: i32 = Ability::all().iter().map(|&a| scores.get(a) - 5).sum();
        prop_assert_eq!(i32::from(abilities.points_pool()), 5 - spent);
        prop_assert_eq!(abilities.scores(), scores);
    }

    #[test]
    fn prop_wrong_total_fails(scores in arb_scores(1..=10)) {
        prop_assume!(scores.total() != REQUIRED_ABILITY_TOTAL);
        prop_assert!(Abilities::from_scores(&scores).is_err());
    }

    #[test]
    fn prop_out_of_range_fails(scores in arb_scores(-20..=30)) {
        let in_range = Ability::all().iter().all(|&a| (1..=10).contains(&scores.get(a)));
        prop_assume!(!in_range);
        prop_assert!(Abilities::from_scores(&scores).is_err());
    }

    #[test]
    fn prop_mutations_keep_invariants(
        steps in prop::collection::vec((arb_ability(), -12i32..=12, any::<bool>()), 0..40)
    ) {
        let mut abilities = Abilities::default();
        for (ability, amount, absolute) in steps {
            let before = abilities.clone();
            let result = if absolute {
                abilities.set(ability, amount)
            } else {
                abilities.adjust(ability, amount)
            };
            if result.is_err() {
                prop_assert_eq!(&abilities, &before);
            }
            prop_assert!(abilities.validate().is_ok());

            // The pool always mirrors what has been spent from the baseline.
            let spent: i32 = Ability::all().iter().map(|&a| i32::from(abilities.get(a)) - 5).sum();
            prop_assert_eq!(i32::from(abilities.points_pool()), 5 - spent);
        }
    }

    #[test]
    fn prop_increase_then_decrease_round_trips(
        ability in arb_ability(),
        delta in 1i32..=5,
    ) {
        let mut abilities = Abilities::default();
        let before = abilities.clone();
        if abilities.adjust(ability, delta).is_ok() {
            abilities.adjust(ability, -delta).expect("refund always fits");
            prop_assert_eq!(abilities, before);
        }
    }
}

// ============================================================================
// Inventory
// ============================================================================

proptest! {
    #[test]
    fn prop_same_identity_stacks(
        name in arb_name(),
        condition in arb_condition(),
        first in 1i64..1000,
        second in 1i64..1000,
    ) {
        let mut inventory = Inventory::new();
        inventory.add_item(Item::new(name.clone(), first, None, condition.clone(), "").unwrap()).unwrap();
        inventory.add_item(Item::new(name.clone(), second, None, condition, "").unwrap()).unwrap();

        prop_assert_eq!(inventory.len(), 1);
        prop_assert_eq!(inventory.items()[0].quantity(), (first + second) as u64);
    }

    #[test]
    fn prop_large_stacks_sum_exactly(
        first in 1i64..=i64::MAX,
        second in 1i64..=i64::MAX,
    ) {
        let mut inventory = Inventory::new();
        inventory.add_item(Item::new("Coin", first, None, Condition::new("New"), "").unwrap()).unwrap();
        let stacking = inventory
            .add_item(Item::new("Coin", second, None, Condition::new("New"), "").unwrap())
            .unwrap();

        let expected = first as u64 + second as u64;
        prop_assert_eq!(inventory.len(), 1);
        prop_assert_eq!(inventory.items()[0].quantity(), expected);
        let merged_as_expected = matches!(stacking, Stacking::Merged { total, .. } if total == expected);
        prop_assert!(merged_as_expected);
    }

    #[test]
    fn prop_at_most_one_entry_per_identity(
        adds in prop::collection::vec((arb_name(), arb_condition(), 1i64..50), 0..30)
    ) {
        let mut inventory = Inventory::new();
        for (name, condition, quantity) in &adds {
            inventory.add_item(Item::new(name.clone(), *quantity, None, condition.clone(), "").unwrap()).unwrap();
        }

        let items = inventory.items();
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                prop_assert!(!a.stacks_with(b));
            }
        }
        let expected: i64 = adds.iter().map(|(_, _, q)| q).sum();
        prop_assert_eq!(inventory.total_weight(), expected as u64);
    }

    #[test]
    fn prop_remove_item_is_exact(held in 1u64..100, take in 0u64..150) {
        let mut inventory = Inventory::new();
        inventory.add_item(Item::new("Arrow", held as i64, None, Condition::new("New"), "").unwrap()).unwrap();
        let before = inventory.clone();

        match inventory.remove_item("Arrow", take) {
            Ok(_) if take == held => prop_assert!(inventory.get_item("Arrow").is_none()),
            Ok(_) => prop_assert_eq!(inventory.get_item("Arrow").unwrap().quantity(), held - take),
            Err(InventoryError::InsufficientQuantity { have, need, .. }) => {
                prop_assert!(take > held);
                prop_assert_eq!((have, need), (held, take));
                prop_assert_eq!(inventory, before);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    #[test]
    fn prop_non_positive_quantity_always_fails(
        quantity in i64::MIN..=0,
        name in ".*",
        description in ".*",
        bonus in prop::option::of(arb_scores(0..=4)),
    ) {
        let result = Item::new(name, quantity, bonus, Condition::new("New"), description);
        prop_assert_eq!(result, Err(InventoryError::InvalidQuantity(quantity)));
    }
}
