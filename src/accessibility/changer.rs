use crate::ast::{AnyModifierOwner, AstDeclaration, HasModifiers};
use crate::edit::modifier_list;
use crate::error::Result;
use crate::order::ModifierOrder;
use crate::syntax::{Declaration, DeclarationRef};

use super::{Accessibility, default_explicit_accessibility, effective_accessibility, locate};

/// Give `node` the accessibility `level` with as small an edit as possible.
///
/// - If `node` already has `level`, it is returned as is.
/// - If a single accessibility token can be swapped for another without
///   breaking canonical order, only that keyword changes; its trivia stays.
/// - Otherwise the current accessibility tokens are removed and the tokens for
///   `level` are inserted one by one at their canonical positions.
///
/// `NotApplicable` removes any written accessibility.
pub fn change_accessibility(
    node: DeclarationRef<'_>,
    level: Accessibility,
    order: &impl ModifierOrder,
) -> Result<Declaration> {
    let owner = AnyModifierOwner::try_cast(node.declaration())?;
    if effective_accessibility(node) == level {
        tracing::trace!(%level, "accessibility unchanged");
        return Ok(owner.into_declaration());
    }

    if let Some(replaced) = replace_in_place(&owner, level, order) {
        tracing::trace!(%level, "accessibility keyword replaced in place");
        return Ok(replaced.into_declaration());
    }

    let mut edited = modifier_list::remove_accessibility(&owner);
    for kind in level.modifier_kinds() {
        edited = modifier_list::insert(&edited, *kind, order);
    }
    tracing::trace!(%level, modifiers = ?edited.modifiers().kinds(), "accessibility rewritten");
    Ok(edited.into_declaration())
}

/// Swap a single accessibility keyword when the new one would be inserted
/// right where the old one is.
fn replace_in_place(
    owner: &AnyModifierOwner,
    level: Accessibility,
    order: &impl ModifierOrder,
) -> Option<AnyModifierOwner> {
    let located = locate(owner.modifiers())?;
    if !located.level.is_single_token() || !level.is_single_token() {
        return None;
    }
    let kind = *level.modifier_kinds().first()?;
    let index = order.insert_index(owner.modifiers(), kind);
    if index != located.first && index != located.first + 1 {
        return None;
    }

    let token = owner.modifiers().get(located.first)?.clone().with_kind(kind);
    Some(owner.with_modifiers(owner.modifiers().replaced(located.first, token)))
}

/// Write out the default accessibility of `node` if it has none written.
///
/// Declarations whose default is `NotApplicable` are returned unchanged.
pub fn add_explicit_accessibility(
    node: DeclarationRef<'_>,
    order: &impl ModifierOrder,
) -> Result<Declaration> {
    let owner = AnyModifierOwner::try_cast(node.declaration())?;
    if locate(owner.modifiers()).is_some() {
        return Ok(owner.into_declaration());
    }
    let level = default_explicit_accessibility(node);
    let mut edited = owner;
    for kind in level.modifier_kinds() {
        edited = modifier_list::insert(&edited, *kind, order);
    }
    Ok(edited.into_declaration())
}
