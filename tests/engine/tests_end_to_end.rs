//! Whole edits through the public entry points.

use modkit::accessibility::{Accessibility, change_accessibility, of_modifiers};
use modkit::base::Trivia;
use modkit::edit;
use modkit::modifiers::ModifierKind;
use modkit::order::{DefaultMemberOrder, DefaultModifierOrder, SortMode};
use modkit::syntax::{Declaration, DeclarationKind, DeclarationRef};
use modkit::EditError;
use rstest::rstest;

use crate::helpers::fixtures::*;

#[rstest]
#[case("public static", ModifierKind::ReadOnly, "public static readonly")]
#[case("public", ModifierKind::ReadOnly, "public readonly")]
#[case("public readonly", ModifierKind::Static, "public static readonly")]
#[case("static readonly", ModifierKind::Public, "public static readonly")]
#[case("", ModifierKind::Const, "const")]
#[case("private", ModifierKind::Protected, "private protected")]
#[case("protected", ModifierKind::Internal, "protected internal")]
#[case("public override", ModifierKind::New, "new public override")]
fn test_insert(#[case] keywords: &str, #[case] kind: ModifierKind, #[case] expected: &str) {
    let edited = edit::insert(&field(keywords), kind, &DefaultModifierOrder).unwrap();
    assert_eq!(edited.header_text(), format!("{expected} int x"));
}

#[rstest]
#[case("internal abstract", Accessibility::Public, "public abstract")]
#[case("", Accessibility::ProtectedAndInternal, "private protected")]
#[case("", Accessibility::ProtectedOrInternal, "protected internal")]
#[case("public static", Accessibility::Internal, "internal static")]
#[case("static internal", Accessibility::Public, "public static")]
#[case("protected internal static", Accessibility::Public, "public static")]
#[case("private protected", Accessibility::ProtectedOrInternal, "protected internal")]
fn test_change_accessibility(
    #[case] keywords: &str,
    #[case] level: Accessibility,
    #[case] expected: &str,
) {
    let member = method(keywords, "Run");
    let changed =
        change_accessibility(DeclarationRef::root(&member), level, &DefaultModifierOrder).unwrap();
    assert_eq!(changed.header_text(), format!("{expected} void Run"));
    assert_eq!(of_modifiers(changed.modifiers()), level);
}

#[rstest]
#[case("")]
#[case("public")]
#[case("static internal")]
#[case("protected static internal")]
#[case("private protected readonly")]
fn test_change_to_current_level_is_identity(#[case] keywords: &str) {
    let declaration = field(keywords);
    let level = of_modifiers(declaration.modifiers());
    let changed =
        change_accessibility(DeclarationRef::root(&declaration), level, &DefaultModifierOrder)
            .unwrap();
    assert_eq!(changed, declaration);
}

#[test]
fn test_in_place_change_touches_one_token() {
    let declaration = Declaration::builder(DeclarationKind::Method)
        .keywords("private static async")
        .head("Task")
        .name("Run")
        .leading_trivia(vec![
            Trivia::line_comment("// runs"),
            Trivia::end_of_line(),
            Trivia::whitespace("    "),
        ])
        .build()
        .unwrap();
    let changed = change_accessibility(
        DeclarationRef::root(&declaration),
        Accessibility::Internal,
        &DefaultModifierOrder,
    )
    .unwrap();

    assert_eq!(changed.header_text(), "// runs\n    internal static async Task Run");
    let before = declaration.modifiers().as_slice();
    let after = changed.modifiers().as_slice();
    assert_eq!(before.len(), after.len());
    assert_eq!(before[0].leading_trivia(), after[0].leading_trivia());
    assert_eq!(before[0].trailing_trivia(), after[0].trailing_trivia());
    assert_eq!(&before[1..], &after[1..]);
}

#[test]
fn test_edit_nested_member_and_rebuild_parent() {
    let container = class("Widget", vec![field("public"), method("", "Run")]);
    let parent = DeclarationRef::root(&container);
    let changed = change_accessibility(
        parent.child(&container.members()[1]),
        Accessibility::Protected,
        &DefaultModifierOrder,
    )
    .unwrap();
    let rebuilt = container.replace_member(1, changed).unwrap();

    assert_eq!(rebuilt.members()[1].header_text(), "protected void Run");
    assert!(rebuilt.members()[0].ptr_eq(&container.members()[0]));
    assert_eq!(container.members()[1].header_text(), "void Run");
}

#[test]
fn test_member_insertion_by_name() {
    let container = class(
        "Widget",
        vec![field("const"), field(""), method("", "Alpha"), method("", "Gamma")],
    );
    let order = DefaultMemberOrder::new(SortMode::ByKindThenByName);
    let edited = edit::insert_member(&container, method("public", "Beta"), &order).unwrap();
    let names: Vec<_> = edited
        .members()
        .iter()
        .filter_map(Declaration::name_text)
        .collect();
    assert_eq!(names, vec!["x", "x", "Alpha", "Beta", "Gamma"]);
    assert!(edit::is_sorted_members(edited.members(), &order));
}

#[test]
fn test_unsupported_kind_is_an_error_not_a_no_op() {
    let ns = namespace("App", vec![]);
    assert_eq!(
        edit::remove_accessibility(&ns).unwrap_err(),
        EditError::UnsupportedKind(DeclarationKind::Namespace)
    );
    assert_eq!(
        change_accessibility(DeclarationRef::root(&ns), Accessibility::Public, &DefaultModifierOrder)
            .unwrap_err(),
        EditError::UnsupportedKind(DeclarationKind::Namespace)
    );
}
