//! Property tests for the insertion algorithm and accessibility changes.

use modkit::accessibility::{Accessibility, change_accessibility, of_modifiers};
use modkit::edit;
use modkit::modifiers::{ModifierKind, Modifiers};
use modkit::order::{DefaultModifierOrder, ModifierOrder};
use modkit::syntax::DeclarationRef;
use proptest::prelude::*;
use proptest::sample::subsequence;

use crate::helpers::fixtures::field_with;

/// A canonically sorted modifier list.
fn sorted_kinds() -> impl Strategy<Value = Vec<ModifierKind>> {
    subsequence(ModifierKind::ALL.to_vec(), 0..=ModifierKind::ALL.len())
}

/// Any list of modifiers, unsorted and with repeats.
fn any_kinds() -> impl Strategy<Value = Vec<ModifierKind>> {
    prop::collection::vec(prop::sample::select(ModifierKind::ALL.to_vec()), 0..12)
}

fn two_distinct_kinds() -> impl Strategy<Value = (ModifierKind, ModifierKind)> {
    (0..ModifierKind::ALL.len(), 0..ModifierKind::ALL.len())
        .prop_filter("distinct kinds", |(a, b)| a != b)
        .prop_map(|(a, b)| (ModifierKind::ALL[a], ModifierKind::ALL[b]))
}

fn compound_level() -> impl Strategy<Value = Accessibility> {
    prop_oneof![
        Just(Accessibility::ProtectedAndInternal),
        Just(Accessibility::ProtectedOrInternal),
    ]
}

proptest! {
    #[test]
    fn insertion_preserves_rank_order(
        start in sorted_kinds(),
        (a, b) in two_distinct_kinds(),
        a_first in any::<bool>(),
    ) {
        let order = DefaultModifierOrder;
        let start: Vec<_> = start.into_iter().filter(|kind| *kind != a && *kind != b).collect();
        let declaration = field_with(Modifiers::from_kinds(start));

        let (first, second) = if a_first { (a, b) } else { (b, a) };
        let edited = edit::insert(&declaration, first, &order).unwrap();
        let edited = edit::insert(&edited, second, &order).unwrap();

        let modifiers = edited.modifiers();
        let index_a = modifiers.index_of(a).unwrap();
        let index_b = modifiers.index_of(b).unwrap();
        prop_assert_eq!(order.rank(a) < order.rank(b), index_a < index_b);
        prop_assert!(modifiers.is_sorted(&order));
    }

    #[test]
    fn insert_index_is_bounded(kinds in any_kinds(), new in prop::sample::select(ModifierKind::ALL.to_vec())) {
        let modifiers = Modifiers::from_kinds(kinds);
        let index = DefaultModifierOrder.insert_index(&modifiers, new);
        prop_assert!(index <= modifiers.len());
    }

    #[test]
    fn compound_levels_are_atomic(start in sorted_kinds(), level in compound_level()) {
        let order = DefaultModifierOrder;
        let start: Vec<_> = start.into_iter().filter(|kind| !kind.is_accessibility()).collect();
        let declaration = field_with(Modifiers::from_kinds(start.clone()));

        let changed = change_accessibility(DeclarationRef::root(&declaration), level, &order).unwrap();
        let kinds = changed.modifiers().kinds();
        prop_assert_eq!(kinds.len(), start.len() + 2);
        for kind in level.modifier_kinds() {
            prop_assert!(kinds.contains(kind));
        }
        prop_assert_eq!(of_modifiers(changed.modifiers()), level);

        let removed = edit::remove_accessibility(&changed).unwrap();
        prop_assert_eq!(removed.modifiers().kinds(), start);
    }

    #[test]
    fn reorder_sorts_any_list(kinds in any_kinds()) {
        let order = DefaultModifierOrder;
        let declaration = field_with(Modifiers::from_kinds(kinds.clone()));
        let reordered = edit::reorder(&declaration, &order).unwrap();
        prop_assert!(reordered.modifiers().is_sorted(&order));
        prop_assert_eq!(reordered.modifiers().len(), kinds.len());
    }
}
