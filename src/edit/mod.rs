//! Modifier and member edits.
//!
//! [`modifier_list`] holds the modifier operations, written once against the
//! [`HasModifiers`](crate::ast::HasModifiers) capability. The functions at this
//! level are the untyped entry points: they accept any [`Declaration`], fail
//! with [`EditError::UnsupportedKind`](crate::error::EditError::UnsupportedKind)
//! when it has no modifier list, and return the edited declaration.
//!
//! ```
//! use modkit::edit;
//! use modkit::modifiers::ModifierKind;
//! use modkit::order::DefaultModifierOrder;
//! use modkit::syntax::{Declaration, DeclarationKind};
//!
//! let field = Declaration::builder(DeclarationKind::Field)
//!     .keywords("public static")
//!     .head("int")
//!     .name("count")
//!     .build()
//!     .unwrap();
//! let field = edit::insert(&field, ModifierKind::ReadOnly, &DefaultModifierOrder).unwrap();
//! assert_eq!(field.header_text(), "public static readonly int count");
//! ```

mod members;
pub mod modifier_list;

pub use members::{insert_member, is_sorted_members, member_insert_index, remove_member, sort_members};

use crate::ast::{AnyModifierOwner, AstDeclaration};
use crate::error::Result;
use crate::modifiers::{ModifierKind, ModifierToken};
use crate::order::ModifierOrder;
use crate::syntax::Declaration;

/// Insert a new `kind` modifier at its canonical position.
pub fn insert(
    declaration: &Declaration,
    kind: ModifierKind,
    order: &impl ModifierOrder,
) -> Result<Declaration> {
    let node = AnyModifierOwner::try_cast(declaration)?;
    Ok(modifier_list::insert(&node, kind, order).into_declaration())
}

/// Insert `token`, keeping its trivia, at the canonical position for its kind.
pub fn insert_token(
    declaration: &Declaration,
    token: ModifierToken,
    order: &impl ModifierOrder,
) -> Result<Declaration> {
    let node = AnyModifierOwner::try_cast(declaration)?;
    Ok(modifier_list::insert_token(&node, token, order).into_declaration())
}

/// Remove the first modifier of `kind`, if any.
pub fn remove(declaration: &Declaration, kind: ModifierKind) -> Result<Declaration> {
    let node = AnyModifierOwner::try_cast(declaration)?;
    Ok(modifier_list::remove(&node, kind).into_declaration())
}

pub fn remove_at(declaration: &Declaration, index: usize) -> Result<Declaration> {
    let node = AnyModifierOwner::try_cast(declaration)?;
    Ok(modifier_list::remove_at(&node, index)?.into_declaration())
}

/// Remove the accessibility modifier(s), both tokens for a compound level.
pub fn remove_accessibility(declaration: &Declaration) -> Result<Declaration> {
    let node = AnyModifierOwner::try_cast(declaration)?;
    Ok(modifier_list::remove_accessibility(&node).into_declaration())
}

pub fn remove_all(declaration: &Declaration) -> Result<Declaration> {
    let node = AnyModifierOwner::try_cast(declaration)?;
    Ok(modifier_list::remove_all(&node).into_declaration())
}

/// Sort the modifiers into canonical order.
pub fn reorder(declaration: &Declaration, order: &impl ModifierOrder) -> Result<Declaration> {
    let node = AnyModifierOwner::try_cast(declaration)?;
    Ok(modifier_list::reorder(&node, order).into_declaration())
}
