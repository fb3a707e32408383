use std::cmp::Ordering;

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

use crate::error::{EditError, Result};
use crate::modifiers::ModifierKind;
use crate::syntax::{Declaration, DeclarationKind};

/// Member declaration kinds in the order they appear in a type body.
///
/// Fields are split on `const` so that constants sort ahead of other fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MemberKind {
    ConstField,
    Field,
    Constructor,
    Destructor,
    Delegate,
    Event,
    EventField,
    Property,
    Indexer,
    Method,
    ConversionOperator,
    Operator,
    Enum,
    Interface,
    Struct,
    Class,
    Namespace,
    IncompleteMember,
}

impl MemberKind {
    pub const ALL: [MemberKind; 18] = [
        Self::ConstField,
        Self::Field,
        Self::Constructor,
        Self::Destructor,
        Self::Delegate,
        Self::Event,
        Self::EventField,
        Self::Property,
        Self::Indexer,
        Self::Method,
        Self::ConversionOperator,
        Self::Operator,
        Self::Enum,
        Self::Interface,
        Self::Struct,
        Self::Class,
        Self::Namespace,
        Self::IncompleteMember,
    ];

    /// The member kind of a declaration, or `None` for declarations that
    /// never appear in a member list (accessors, locals, parameters, enum members).
    pub fn of(declaration: &Declaration) -> Option<Self> {
        let kind = match declaration.kind() {
            DeclarationKind::Field if declaration.modifiers().contains(ModifierKind::Const) => {
                Self::ConstField
            }
            DeclarationKind::Field => Self::Field,
            DeclarationKind::Constructor => Self::Constructor,
            DeclarationKind::Destructor => Self::Destructor,
            DeclarationKind::Delegate => Self::Delegate,
            DeclarationKind::Event => Self::Event,
            DeclarationKind::EventField => Self::EventField,
            DeclarationKind::Property => Self::Property,
            DeclarationKind::Indexer => Self::Indexer,
            DeclarationKind::Method => Self::Method,
            DeclarationKind::ConversionOperator => Self::ConversionOperator,
            DeclarationKind::Operator => Self::Operator,
            DeclarationKind::Enum => Self::Enum,
            DeclarationKind::Interface => Self::Interface,
            DeclarationKind::Struct => Self::Struct,
            DeclarationKind::Class => Self::Class,
            DeclarationKind::Namespace => Self::Namespace,
            DeclarationKind::IncompleteMember => Self::IncompleteMember,
            DeclarationKind::Accessor
            | DeclarationKind::LocalDeclaration
            | DeclarationKind::LocalFunction
            | DeclarationKind::Parameter
            | DeclarationKind::EnumMember => return None,
        };
        Some(kind)
    }

    /// Whether members of this kind have a stable name to sort by.
    pub fn is_name_sortable(self) -> bool {
        !matches!(
            self,
            Self::Indexer
                | Self::Destructor
                | Self::Operator
                | Self::ConversionOperator
                | Self::IncompleteMember
        )
    }
}

/// How members of equal kind are ordered relative to each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortMode {
    /// Equal kinds keep their position; new members go after existing ones.
    #[default]
    ByKind,
    /// Equal, name-sortable kinds are ordered by identifier.
    ByKindThenByName,
}

/// A total order over member kinds.
pub trait MemberOrder {
    fn rank(&self, kind: MemberKind) -> usize;

    fn kind_at(&self, rank: usize) -> Option<MemberKind>;

    fn sort_mode(&self) -> SortMode {
        SortMode::ByKind
    }

    /// Identifier comparison used by [`SortMode::ByKindThenByName`].
    fn compare_names(&self, a: &str, b: &str) -> Ordering {
        compare_names(a, b)
    }
}

/// Case-insensitive comparison with an ordinal tie-break, so `apple` <
/// `Banana` < `banana`.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

/// The built-in member order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultMemberOrder {
    pub sort_mode: SortMode,
}

impl DefaultMemberOrder {
    pub fn new(sort_mode: SortMode) -> Self {
        Self { sort_mode }
    }
}

impl MemberOrder for DefaultMemberOrder {
    fn rank(&self, kind: MemberKind) -> usize {
        match kind {
            MemberKind::ConstField => 0,
            MemberKind::Field => 1,
            MemberKind::Constructor => 2,
            MemberKind::Destructor => 3,
            MemberKind::Delegate => 4,
            MemberKind::Event => 5,
            MemberKind::EventField => 6,
            MemberKind::Property => 7,
            MemberKind::Indexer => 8,
            MemberKind::Method => 9,
            MemberKind::ConversionOperator => 10,
            MemberKind::Operator => 11,
            MemberKind::Enum => 12,
            MemberKind::Interface => 13,
            MemberKind::Struct => 14,
            MemberKind::Class => 15,
            MemberKind::Namespace => 16,
            MemberKind::IncompleteMember => 17,
        }
    }

    fn kind_at(&self, rank: usize) -> Option<MemberKind> {
        MemberKind::ALL.get(rank).copied()
    }

    fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }
}

/// A host-supplied member order.
#[derive(Debug, Clone)]
pub struct TableMemberOrder {
    table: IndexSet<MemberKind, FxBuildHasher>,
    sort_mode: SortMode,
}

impl TableMemberOrder {
    /// Build an order from a permutation of every [`MemberKind`].
    pub fn new(order: impl IntoIterator<Item = MemberKind>, sort_mode: SortMode) -> Result<Self> {
        let mut table = IndexSet::with_hasher(FxBuildHasher);
        for kind in order {
            if !table.insert(kind) {
                return Err(EditError::invalid_argument(format!(
                    "member kind {kind:?} appears twice in the order table"
                )));
            }
        }
        if table.len() != MemberKind::ALL.len() {
            return Err(EditError::invalid_argument(format!(
                "order table has {} member kinds, expected {}",
                table.len(),
                MemberKind::ALL.len()
            )));
        }
        Ok(Self { table, sort_mode })
    }
}

impl MemberOrder for TableMemberOrder {
    fn rank(&self, kind: MemberKind) -> usize {
        self.table.get_index_of(&kind).unwrap_or(self.table.len())
    }

    fn kind_at(&self, rank: usize) -> Option<MemberKind> {
        self.table.get_index(rank).copied()
    }

    fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }
}
