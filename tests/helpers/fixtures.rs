//! Declaration fixtures.

use modkit::modifiers::Modifiers;
use modkit::syntax::{Declaration, DeclarationKind};

/// `<keywords> int x`
pub fn field(keywords: &str) -> Declaration {
    Declaration::builder(DeclarationKind::Field)
        .keywords(keywords)
        .head("int")
        .name("x")
        .build()
        .unwrap()
}

/// A field whose modifiers are exactly `modifiers`.
pub fn field_with(modifiers: Modifiers) -> Declaration {
    Declaration::builder(DeclarationKind::Field)
        .modifiers(modifiers)
        .head("int")
        .name("x")
        .build()
        .unwrap()
}

pub fn method(keywords: &str, name: &str) -> Declaration {
    Declaration::builder(DeclarationKind::Method)
        .keywords(keywords)
        .head("void")
        .name(name)
        .build()
        .unwrap()
}

pub fn constructor(keywords: &str) -> Declaration {
    Declaration::builder(DeclarationKind::Constructor)
        .keywords(keywords)
        .name("Widget")
        .build()
        .unwrap()
}

pub fn operator() -> Declaration {
    Declaration::builder(DeclarationKind::Operator)
        .keywords("public static")
        .head("Widget operator")
        .name("+")
        .build()
        .unwrap()
}

pub fn class(name: &str, members: Vec<Declaration>) -> Declaration {
    Declaration::builder(DeclarationKind::Class)
        .name(name)
        .members(members)
        .build()
        .unwrap()
}

pub fn interface(name: &str, members: Vec<Declaration>) -> Declaration {
    Declaration::builder(DeclarationKind::Interface)
        .name(name)
        .members(members)
        .build()
        .unwrap()
}

pub fn namespace(name: &str, members: Vec<Declaration>) -> Declaration {
    Declaration::builder(DeclarationKind::Namespace)
        .name(name)
        .members(members)
        .build()
        .unwrap()
}
