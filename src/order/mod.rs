//! Canonical order tables and the insertion-index algorithm.
//!
//! Two independent tables are provided:
//! - [`ModifierOrder`] - a total order over the 17 [`ModifierKind`]s
//! - [`MemberOrder`] - a total order over the 18 [`MemberKind`]s, with an
//!   optional name tie-break
//!
//! Both tables are bijections between a category and its rank and expose the
//! two directions (`rank`, `kind_at`) the insertion algorithm needs. Hosts
//! plug in their own tables by implementing the traits.
//!
//! [`ModifierKind`]: crate::modifiers::ModifierKind

mod member_order;
mod modifier_order;

pub use member_order::{DefaultMemberOrder, MemberKind, MemberOrder, SortMode, TableMemberOrder};
pub use modifier_order::{DefaultModifierOrder, ModifierOrder, TableModifierOrder};

/// Position at which an item of rank `new_rank` is inserted into `kinds`.
///
/// Walks ranks from `new_rank` down to 0 and, for each rank, looks for the
/// last element of that category. The first hit wins and the item goes right
/// after it. With no hit at any rank the item goes first.
///
/// This is a closest-predecessor search, not a binary search: gaps in the
/// sequence are skipped, and an element of equal rank sorts before the new item.
///
/// # Panics
///
/// Panics if `kind_at` has no category for a rank in `0..=new_rank`, which
/// means the order table is not a bijection.
pub fn insert_index<K, F>(kinds: &[K], new_rank: usize, kind_at: F) -> usize
where
    K: Copy + Eq,
    F: Fn(usize) -> Option<K>,
{
    for rank in (0..=new_rank).rev() {
        let kind = kind_at(rank)
            .unwrap_or_else(|| panic!("canonical order has no category at rank {rank}"));
        if let Some(index) = kinds.iter().rposition(|k| *k == kind) {
            return index + 1;
        }
    }
    0
}
