//! Member list edits on classes, structs, interfaces and namespaces.

use std::cmp::Ordering;

use crate::ast::{AstDeclaration, MemberContainer};
use crate::error::{EditError, Result};
use crate::order::{MemberKind, MemberOrder, SortMode};
use crate::syntax::Declaration;

/// Index at which `member` keeps `members` canonically sorted.
///
/// Uses the same closest-predecessor search as modifier insertion. Under
/// [`SortMode::ByKindThenByName`] a name-sortable member is additionally
/// placed among the members of its own kind by name.
pub fn member_insert_index(
    members: &[Declaration],
    member: &Declaration,
    order: &impl MemberOrder,
) -> Result<usize> {
    let kind = MemberKind::of(member).ok_or(EditError::UnsupportedKind(member.kind()))?;
    let kinds: Vec<_> = members.iter().map(MemberKind::of).collect();
    let index = crate::order::insert_index(&kinds, order.rank(kind), |rank| {
        order.kind_at(rank).map(Some)
    });

    let index = match member.name_text() {
        Some(name) if by_name(order, kind) => {
            name_insert_index(members, &kinds, kind, name, order).unwrap_or(index)
        }
        _ => index,
    };
    tracing::trace!(?kind, index, len = members.len(), "member insert index");
    Ok(index)
}

/// Among the members of `kind`, the position after the last one whose name
/// does not sort after `name`. `None` if there are no members of `kind`.
fn name_insert_index(
    members: &[Declaration],
    kinds: &[Option<MemberKind>],
    kind: MemberKind,
    name: &str,
    order: &impl MemberOrder,
) -> Option<usize> {
    let mut earliest = None;
    for (index, member) in members.iter().enumerate().rev() {
        if kinds[index] != Some(kind) {
            continue;
        }
        let other = member.name_text().unwrap_or_default();
        if order.compare_names(other, name) != Ordering::Greater {
            return Some(index + 1);
        }
        earliest = Some(index);
    }
    earliest
}

fn by_name(order: &impl MemberOrder, kind: MemberKind) -> bool {
    order.sort_mode() == SortMode::ByKindThenByName && kind.is_name_sortable()
}

/// Insert `member` into `container` at its canonical position.
pub fn insert_member(
    container: &Declaration,
    member: Declaration,
    order: &impl MemberOrder,
) -> Result<Declaration> {
    let node = cast_container(container)?;
    let index = member_insert_index(node.members(), &member, order)?;
    let mut members = node.members().to_vec();
    members.insert(index, member);
    container.with_members(members)
}

/// Remove the member at `index`.
pub fn remove_member(container: &Declaration, index: usize) -> Result<Declaration> {
    let node = cast_container(container)?;
    let len = node.members().len();
    if index >= len {
        return Err(EditError::out_of_range(index, len));
    }
    let mut members = node.members().to_vec();
    members.remove(index);
    container.with_members(members)
}

/// Stable-sort the members of `container` into canonical order.
pub fn sort_members(container: &Declaration, order: &impl MemberOrder) -> Result<Declaration> {
    let node = cast_container(container)?;
    if is_sorted_members(node.members(), order) {
        return Ok(container.clone());
    }
    let mut members = node.members().to_vec();
    members.sort_by(|a, b| compare_members(a, b, order));
    container.with_members(members)
}

/// True if every adjacent pair of `members` is in canonical order.
pub fn is_sorted_members(members: &[Declaration], order: &impl MemberOrder) -> bool {
    members
        .windows(2)
        .all(|pair| compare_members(&pair[0], &pair[1], order) != Ordering::Greater)
}

fn compare_members(a: &Declaration, b: &Declaration, order: &impl MemberOrder) -> Ordering {
    let rank = |member: &Declaration| MemberKind::of(member).map(|kind| order.rank(kind));
    let (Some(rank_a), Some(rank_b)) = (rank(a), rank(b)) else {
        return Ordering::Equal;
    };
    rank_a.cmp(&rank_b).then_with(|| match MemberKind::of(a) {
        Some(kind) if by_name(order, kind) => order.compare_names(
            a.name_text().unwrap_or_default(),
            b.name_text().unwrap_or_default(),
        ),
        _ => Ordering::Equal,
    })
}

fn cast_container(container: &Declaration) -> Result<MemberContainer> {
    MemberContainer::cast(container.clone()).ok_or_else(|| {
        tracing::debug!(kind = %container.kind(), "declaration has no member list");
        EditError::UnsupportedKind(container.kind())
    })
}
