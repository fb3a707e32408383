//! Edits on a shared tree from many threads.

use modkit::accessibility::{Accessibility, change_accessibility};
use modkit::edit;
use modkit::modifiers::ModifierKind;
use modkit::order::DefaultModifierOrder;
use modkit::syntax::{Declaration, DeclarationRef};
use rayon::prelude::*;

use crate::helpers::fixtures::*;

fn wide_class() -> Declaration {
    let members = (0..64)
        .map(|i| {
            if i % 2 == 0 {
                field("static")
            } else {
                method("internal", &format!("Run{i}"))
            }
        })
        .collect();
    class("Widget", members)
}

#[test]
fn test_parallel_changes_on_shared_tree() {
    let container = wide_class();
    let parent = DeclarationRef::root(&container);

    let changed: Vec<Declaration> = container
        .members()
        .par_iter()
        .map(|member| {
            change_accessibility(parent.child(member), Accessibility::Public, &DefaultModifierOrder)
                .unwrap()
        })
        .collect();

    for (before, after) in container.members().iter().zip(&changed) {
        assert_eq!(after.modifiers().kinds()[0], ModifierKind::Public);
        assert_ne!(before, after);
    }
    // the shared input is untouched
    assert_eq!(container.members()[0].header_text(), "static int x");
    assert_eq!(container.members()[1].header_text(), "internal void Run1");
}

#[test]
fn test_parallel_edits_of_the_same_node() {
    let declaration = field("public");
    let results: Vec<Declaration> = (0..256)
        .into_par_iter()
        .map(|_| edit::insert(&declaration, ModifierKind::ReadOnly, &DefaultModifierOrder).unwrap())
        .collect();

    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(results[0].header_text(), "public readonly int x");
    assert_eq!(declaration.header_text(), "public int x");
}
