//! Modifier edits written once against [`HasModifiers`].
//!
//! Every function returns a new node and leaves its input untouched. The
//! functions keep the formatting around the modifier list intact:
//!
//! - a modifier inserted at the front takes over the leading trivia of the
//!   token that used to start the declaration (indentation, comments)
//! - removing the first modifier hands its leading trivia to whatever token
//!   starts the declaration afterwards

use crate::accessibility;
use crate::ast::HasModifiers;
use crate::base::TriviaList;
use crate::error::{EditError, Result};
use crate::modifiers::{ModifierKind, ModifierToken, Modifiers};
use crate::order::ModifierOrder;

/// Insert a new `kind` token at its canonical position.
pub fn insert<N: HasModifiers>(node: &N, kind: ModifierKind, order: &impl ModifierOrder) -> N {
    insert_token(node, ModifierToken::new(kind), order)
}

/// Insert `token` at the canonical position for its kind.
pub fn insert_token<N: HasModifiers>(
    node: &N,
    token: ModifierToken,
    order: &impl ModifierOrder,
) -> N {
    let index = order.insert_index(node.modifiers(), token.kind());
    insert_at(node, index, token)
}

/// Insert `token` at `index`, which must be `<= len`.
pub(crate) fn insert_at<N: HasModifiers>(node: &N, index: usize, token: ModifierToken) -> N {
    let modifiers = node.modifiers();
    if index > 0 {
        return node.with_modifiers(modifiers.inserted(index, token));
    }

    if let Some(first) = modifiers.first() {
        let leading = merge_leading(first.leading_trivia(), token.leading_trivia());
        let modifiers = modifiers
            .replaced(0, first.clone().without_leading_trivia())
            .inserted(0, token.with_leading_trivia(leading));
        return node.with_modifiers(modifiers);
    }

    // empty list: the new modifier now starts the declaration
    let declaration = node.declaration();
    match declaration.first_token_after_modifiers() {
        Some(next) if !next.leading_trivia().is_empty() => {
            let leading = merge_leading(next.leading_trivia(), token.leading_trivia());
            let edited = declaration
                .with_first_token_after_modifiers(next.clone().without_leading_trivia())
                .with_modifiers(Modifiers::from(vec![token.with_leading_trivia(leading)]));
            node.with_declaration(edited)
        }
        _ => node.with_modifiers(Modifiers::from(vec![token])),
    }
}

/// Remove the first token of `kind`. Returns the node unchanged if there is none.
pub fn remove<N: HasModifiers>(node: &N, kind: ModifierKind) -> N {
    match node.modifiers().index_of(kind) {
        Some(index) => remove_at_unchecked(node, index),
        None => node.clone(),
    }
}

/// Remove the token at `index`.
pub fn remove_at<N: HasModifiers>(node: &N, index: usize) -> Result<N> {
    let len = node.modifiers().len();
    if index >= len {
        return Err(EditError::out_of_range(index, len));
    }
    Ok(remove_at_unchecked(node, index))
}

fn remove_at_unchecked<N: HasModifiers>(node: &N, index: usize) -> N {
    let modifiers = node.modifiers();
    let removed = &modifiers.as_slice()[index];
    let remaining = modifiers.removed(index);
    if index != 0 || removed.leading_trivia().is_empty() {
        return node.with_modifiers(remaining);
    }

    if let Some(next) = remaining.first() {
        let leading = prepend_leading(removed.leading_trivia(), next.leading_trivia());
        let remaining = remaining.replaced(0, next.clone().with_leading_trivia(leading));
        return node.with_modifiers(remaining);
    }

    let declaration = node.declaration();
    match declaration.first_token_after_modifiers() {
        Some(next) => {
            let leading = prepend_leading(removed.leading_trivia(), next.leading_trivia());
            let edited = declaration
                .with_first_token_after_modifiers(next.clone().with_leading_trivia(leading))
                .with_modifiers(remaining);
            node.with_declaration(edited)
        }
        None => node.with_modifiers(remaining),
    }
}

/// Remove the accessibility token, or both tokens of a compound level
/// wherever they sit in the list.
pub fn remove_accessibility<N: HasModifiers>(node: &N) -> N {
    let Some(located) = accessibility::locate(node.modifiers()) else {
        return node.clone();
    };
    match located.second {
        // remove the later token first so `first` stays valid
        Some(second) => {
            let (low, high) = if second > located.first {
                (located.first, second)
            } else {
                (second, located.first)
            };
            remove_at_unchecked(&remove_at_unchecked(node, high), low)
        }
        None => remove_at_unchecked(node, located.first),
    }
}

/// Remove every modifier. The leading trivia of the first modifier moves to
/// the token that now starts the declaration.
pub fn remove_all<N: HasModifiers>(node: &N) -> N {
    let modifiers = node.modifiers();
    let Some(first) = modifiers.first() else {
        return node.clone();
    };
    let declaration = node.declaration();
    let cleared = declaration.with_modifiers(Modifiers::new());
    let edited = match declaration.first_token_after_modifiers() {
        Some(next) if !first.leading_trivia().is_empty() => {
            let leading = prepend_leading(first.leading_trivia(), next.leading_trivia());
            cleared.with_first_token_after_modifiers(next.clone().with_leading_trivia(leading))
        }
        _ => cleared,
    };
    node.with_declaration(edited)
}

/// Sort the modifiers into canonical order, keeping tokens of equal rank in
/// their current order. The front of the list keeps its leading trivia.
pub fn reorder<N: HasModifiers>(node: &N, order: &impl ModifierOrder) -> N {
    let modifiers = node.modifiers();
    if modifiers.is_sorted(order) {
        return node.clone();
    }

    let mut tokens = modifiers.clone().into_vec();
    let front = tokens[0].leading_trivia().clone();
    tokens[0] = tokens[0].clone().without_leading_trivia();
    tokens.sort_by_key(|token| order.rank(token.kind()));
    let leading = prepend_leading(&front, tokens[0].leading_trivia());
    tokens[0] = tokens[0].clone().with_leading_trivia(leading);

    tracing::trace!(from = ?modifiers.kinds(), "reordered modifiers");
    node.with_modifiers(Modifiers::from(tokens))
}

/// Trivia for a token inserted in front of a token that carries `existing`.
fn merge_leading(existing: &TriviaList, own: &TriviaList) -> TriviaList {
    if existing.is_empty() {
        own.clone()
    } else if own.is_single_elastic_marker() {
        existing.clone()
    } else {
        existing.concat(own)
    }
}

/// Trivia for a token that becomes first after a token with `removed` went away.
fn prepend_leading(removed: &TriviaList, next: &TriviaList) -> TriviaList {
    if next.is_empty() || next.is_single_elastic_marker() {
        removed.clone()
    } else {
        removed.concat(next)
    }
}
