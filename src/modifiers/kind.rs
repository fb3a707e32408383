//! Modifier categories.

use std::fmt;
use std::str::FromStr;

use crate::error::EditError;

/// The semantic category of a modifier keyword.
///
/// Declaration order matches the canonical order of
/// [`DefaultModifierOrder`](crate::order::DefaultModifierOrder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModifierKind {
    New,
    Public,
    Private,
    Protected,
    Internal,
    Const,
    Static,
    Virtual,
    Sealed,
    Override,
    Abstract,
    ReadOnly,
    Extern,
    Unsafe,
    Volatile,
    Async,
    Partial,
}

impl ModifierKind {
    /// Every category, in canonical order.
    pub const ALL: [ModifierKind; 17] = [
        Self::New,
        Self::Public,
        Self::Private,
        Self::Protected,
        Self::Internal,
        Self::Const,
        Self::Static,
        Self::Virtual,
        Self::Sealed,
        Self::Override,
        Self::Abstract,
        Self::ReadOnly,
        Self::Extern,
        Self::Unsafe,
        Self::Volatile,
        Self::Async,
        Self::Partial,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
            Self::Internal => "internal",
            Self::Const => "const",
            Self::Static => "static",
            Self::Virtual => "virtual",
            Self::Sealed => "sealed",
            Self::Override => "override",
            Self::Abstract => "abstract",
            Self::ReadOnly => "readonly",
            Self::Extern => "extern",
            Self::Unsafe => "unsafe",
            Self::Volatile => "volatile",
            Self::Async => "async",
            Self::Partial => "partial",
        }
    }

    /// Look up a category by its keyword text.
    pub fn from_keyword(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == text)
    }

    /// Visibility categories: `public`, `private`, `protected`, `internal`.
    pub fn is_accessibility(self) -> bool {
        matches!(
            self,
            Self::Public | Self::Private | Self::Protected | Self::Internal
        )
    }
}

impl FromStr for ModifierKind {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s)
            .ok_or_else(|| EditError::invalid_argument(format!("unknown modifier keyword `{s}`")))
    }
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
