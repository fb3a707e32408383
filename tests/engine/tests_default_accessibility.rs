//! Default accessibility by declaration kind and context.

use modkit::accessibility::{
    Accessibility, default_explicit_accessibility, effective_accessibility,
    is_allowed_accessibility,
};
use modkit::syntax::{Declaration, DeclarationRef};
use rstest::rstest;

use crate::helpers::fixtures::*;

/// Default of the single member of `container`.
fn nested_default(container: &Declaration) -> Accessibility {
    let parent = DeclarationRef::root(container);
    default_explicit_accessibility(parent.child(&container.members()[0]))
}

#[rstest]
#[case::plain_field(field(""), Accessibility::Private)]
#[case::static_field(field("static readonly"), Accessibility::Private)]
#[case::instance_constructor(constructor(""), Accessibility::Private)]
#[case::static_constructor(constructor("static"), Accessibility::NotApplicable)]
#[case::method(method("", "Run"), Accessibility::Private)]
#[case::partial_method(method("partial", "Run"), Accessibility::NotApplicable)]
#[case::operator(operator(), Accessibility::Public)]
#[case::top_level_class(class("Widget", vec![]), Accessibility::Internal)]
fn test_default_at_root(#[case] declaration: Declaration, #[case] expected: Accessibility) {
    assert_eq!(
        default_explicit_accessibility(DeclarationRef::root(&declaration)),
        expected
    );
}

#[rstest]
#[case::class_in_namespace(namespace("App", vec![class("Widget", vec![])]), Accessibility::Internal)]
#[case::class_in_class(class("Outer", vec![class("Inner", vec![])]), Accessibility::Private)]
#[case::method_in_interface(interface("IRunner", vec![method("", "Run")]), Accessibility::NotApplicable)]
#[case::field_in_class(class("Outer", vec![field("")]), Accessibility::Private)]
fn test_default_nested(#[case] container: Declaration, #[case] expected: Accessibility) {
    assert_eq!(nested_default(&container), expected);
}

#[rstest]
#[case::interface_method(interface("IRunner", vec![method("", "Run")]), Accessibility::Public)]
#[case::field_in_class(class("Outer", vec![field("")]), Accessibility::Private)]
#[case::written_level(class("Outer", vec![field("protected internal")]), Accessibility::ProtectedOrInternal)]
fn test_effective_nested(#[case] container: Declaration, #[case] expected: Accessibility) {
    let parent = DeclarationRef::root(&container);
    assert_eq!(
        effective_accessibility(parent.child(&container.members()[0])),
        expected
    );
}

#[rstest]
#[case(Accessibility::Public, true)]
#[case(Accessibility::Internal, true)]
#[case(Accessibility::Protected, false)]
#[case(Accessibility::Private, false)]
#[case(Accessibility::ProtectedAndInternal, false)]
fn test_namespace_members_allow(#[case] level: Accessibility, #[case] allowed: bool) {
    let container = namespace("App", vec![class("Widget", vec![])]);
    let parent = DeclarationRef::root(&container);
    assert_eq!(
        is_allowed_accessibility(parent.child(&container.members()[0]), level, false),
        allowed
    );
}
