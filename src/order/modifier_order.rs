use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

use crate::error::{EditError, Result};
use crate::modifiers::{ModifierKind, Modifiers};

/// A total order over modifier categories.
pub trait ModifierOrder {
    /// Rank of `kind`; ranks are `0..ModifierKind::ALL.len()` with no ties.
    fn rank(&self, kind: ModifierKind) -> usize;

    /// Category at `rank`, the inverse of [`rank`](Self::rank).
    fn kind_at(&self, rank: usize) -> Option<ModifierKind>;

    /// Index at which a token of `kind` keeps `modifiers` canonically sorted.
    fn insert_index(&self, modifiers: &Modifiers, kind: ModifierKind) -> usize {
        let index = super::insert_index(&modifiers.kinds(), self.rank(kind), |rank| {
            self.kind_at(rank)
        });
        tracing::trace!(%kind, index, len = modifiers.len(), "modifier insert index");
        index
    }
}

/// The built-in modifier order.
///
/// `private` ranks before `protected`, which ranks before `internal`, so the
/// compound levels come out as `private protected` and `protected internal`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultModifierOrder;

const DEFAULT_ORDER: [ModifierKind; 17] = [
    ModifierKind::New,
    ModifierKind::Public,
    ModifierKind::Private,
    ModifierKind::Protected,
    ModifierKind::Internal,
    ModifierKind::Const,
    ModifierKind::Static,
    ModifierKind::Virtual,
    ModifierKind::Sealed,
    ModifierKind::Override,
    ModifierKind::Abstract,
    ModifierKind::ReadOnly,
    ModifierKind::Extern,
    ModifierKind::Unsafe,
    ModifierKind::Volatile,
    ModifierKind::Async,
    ModifierKind::Partial,
];

impl ModifierOrder for DefaultModifierOrder {
    fn rank(&self, kind: ModifierKind) -> usize {
        match kind {
            ModifierKind::New => 0,
            ModifierKind::Public => 1,
            ModifierKind::Private => 2,
            ModifierKind::Protected => 3,
            ModifierKind::Internal => 4,
            ModifierKind::Const => 5,
            ModifierKind::Static => 6,
            ModifierKind::Virtual => 7,
            ModifierKind::Sealed => 8,
            ModifierKind::Override => 9,
            ModifierKind::Abstract => 10,
            ModifierKind::ReadOnly => 11,
            ModifierKind::Extern => 12,
            ModifierKind::Unsafe => 13,
            ModifierKind::Volatile => 14,
            ModifierKind::Async => 15,
            ModifierKind::Partial => 16,
        }
    }

    fn kind_at(&self, rank: usize) -> Option<ModifierKind> {
        DEFAULT_ORDER.get(rank).copied()
    }
}

/// A host-supplied modifier order.
#[derive(Debug, Clone)]
pub struct TableModifierOrder {
    table: IndexSet<ModifierKind, FxBuildHasher>,
}

impl TableModifierOrder {
    /// Build an order from a permutation of every [`ModifierKind`].
    pub fn new(order: impl IntoIterator<Item = ModifierKind>) -> Result<Self> {
        let mut table = IndexSet::with_hasher(FxBuildHasher);
        for kind in order {
            if !table.insert(kind) {
                return Err(EditError::invalid_argument(format!(
                    "modifier `{kind}` appears twice in the order table"
                )));
            }
        }
        if table.len() != ModifierKind::ALL.len() {
            let missing: Vec<_> = ModifierKind::ALL
                .into_iter()
                .filter(|kind| !table.contains(kind))
                .map(ModifierKind::keyword)
                .collect();
            return Err(EditError::invalid_argument(format!(
                "order table is missing modifiers: {}",
                missing.join(", ")
            )));
        }
        Ok(Self { table })
    }
}

impl ModifierOrder for TableModifierOrder {
    fn rank(&self, kind: ModifierKind) -> usize {
        // every kind is present, checked in `new`
        self.table.get_index_of(&kind).unwrap_or(self.table.len())
    }

    fn kind_at(&self, rank: usize) -> Option<ModifierKind> {
        self.table.get_index(rank).copied()
    }
}
