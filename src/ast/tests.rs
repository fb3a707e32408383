use super::*;
use crate::error::EditError;

fn build(kind: DeclarationKind, keywords: &str) -> Declaration {
    Declaration::builder(kind)
        .keywords(keywords)
        .head("int")
        .name("Item")
        .build()
        .unwrap()
}

#[test]
fn test_cast_checks_kind() {
    let field = build(DeclarationKind::Field, "public");
    assert!(FieldDeclaration::cast(field.clone()).is_some());
    assert!(MethodDeclaration::cast(field.clone()).is_none());
    assert!(AnyModifierOwner::cast(field).is_some());
}

#[test]
fn test_typed_accessors() {
    let method = MethodDeclaration::cast(build(DeclarationKind::Method, "public virtual async")).unwrap();
    assert_eq!(method.name(), Some("Item"));
    assert!(method.is_virtual());
    assert!(method.is_async());
    assert!(!method.is_static());
    assert_eq!(method.explicit_interface(), None);

    let field = FieldDeclaration::cast(build(DeclarationKind::Field, "const")).unwrap();
    assert!(field.is_const());
    assert!(!field.is_readonly());
}

#[test]
fn test_with_modifiers_keeps_wrapper_type() {
    let field = FieldDeclaration::cast(build(DeclarationKind::Field, "")).unwrap();
    let edited = field.with_modifiers(crate::modifiers::Modifiers::from_keywords("static").unwrap());
    assert!(edited.is_static());
    assert_eq!(edited.kind(), DeclarationKind::Field);
    assert!(!field.is_static());
}

#[test]
fn test_accessor_owner() {
    let getter = Declaration::builder(DeclarationKind::Accessor)
        .head("get")
        .build()
        .unwrap();
    let setter = Declaration::builder(DeclarationKind::Accessor)
        .keywords("private")
        .head("set")
        .build()
        .unwrap();
    let property = Declaration::builder(DeclarationKind::Property)
        .head("int")
        .name("Count")
        .accessor(getter)
        .accessor(setter)
        .build()
        .unwrap();

    let owner = AccessorOwner::cast(property).unwrap();
    let keywords: Vec<_> = owner
        .accessors()
        .map(|accessor| accessor.keyword().unwrap_or_default().to_string())
        .collect();
    assert_eq!(keywords, vec!["get", "set"]);
    let setter = owner.accessors().nth(1).unwrap();
    assert_eq!(setter.modifiers().len(), 1);
}

#[test]
fn test_containers() {
    let member = build(DeclarationKind::Field, "");
    let class = Declaration::builder(DeclarationKind::Class)
        .name("C")
        .member(member)
        .build()
        .unwrap();
    let container = MemberContainer::cast(class.clone()).unwrap();
    assert_eq!(container.members().len(), 1);

    let class = ClassDeclaration::cast(class).unwrap();
    assert_eq!(class.name(), Some("C"));
    assert!(!class.is_static());

    let enum_decl = Declaration::builder(DeclarationKind::Enum)
        .name("Color")
        .member(Declaration::builder(DeclarationKind::EnumMember).name("Red").build().unwrap())
        .build()
        .unwrap();
    assert!(MemberContainer::cast(enum_decl.clone()).is_none());
    let names: Vec<_> = EnumDeclaration::cast(enum_decl)
        .unwrap()
        .members()
        .map(|member| member.name().unwrap_or_default().to_string())
        .collect();
    assert_eq!(names, vec!["Red"]);
}

#[test]
fn test_try_cast_rejects_kinds_without_modifiers() {
    let namespace = Declaration::builder(DeclarationKind::Namespace)
        .name("App")
        .build()
        .unwrap();
    assert_eq!(
        AnyModifierOwner::try_cast(&namespace).unwrap_err(),
        EditError::UnsupportedKind(DeclarationKind::Namespace)
    );
    assert!(NamespaceDeclaration::cast(namespace).is_some());
}

#[test]
fn test_every_modifier_kind_has_an_owner() {
    let kinds = [
        DeclarationKind::Class,
        DeclarationKind::Struct,
        DeclarationKind::Interface,
        DeclarationKind::Enum,
        DeclarationKind::Delegate,
        DeclarationKind::Field,
        DeclarationKind::Constructor,
        DeclarationKind::Destructor,
        DeclarationKind::Method,
        DeclarationKind::Property,
        DeclarationKind::Indexer,
        DeclarationKind::Event,
        DeclarationKind::EventField,
        DeclarationKind::Operator,
        DeclarationKind::ConversionOperator,
        DeclarationKind::Accessor,
        DeclarationKind::LocalDeclaration,
        DeclarationKind::LocalFunction,
        DeclarationKind::Parameter,
        DeclarationKind::IncompleteMember,
        DeclarationKind::EnumMember,
        DeclarationKind::Namespace,
    ];
    for kind in kinds {
        assert_eq!(AnyModifierOwner::can_cast(kind), kind.has_modifiers(), "{kind}");
    }
}
