use std::fmt;

use crate::modifiers::ModifierKind;

/// Accessibility of a declaration.
///
/// `ProtectedAndInternal` (`private protected`) and `ProtectedOrInternal`
/// (`protected internal`) are written with two modifier tokens; every other
/// level with one, except `NotApplicable`, which is written with none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Accessibility {
    /// The concept does not apply (destructors, static constructors, locals).
    #[default]
    NotApplicable,
    Private,
    ProtectedAndInternal,
    Protected,
    Internal,
    ProtectedOrInternal,
    Public,
}

impl Accessibility {
    /// The modifier categories that spell this level, in insertion order.
    pub fn modifier_kinds(self) -> &'static [ModifierKind] {
        match self {
            Self::NotApplicable => &[],
            Self::Private => &[ModifierKind::Private],
            Self::ProtectedAndInternal => &[ModifierKind::Private, ModifierKind::Protected],
            Self::Protected => &[ModifierKind::Protected],
            Self::Internal => &[ModifierKind::Internal],
            Self::ProtectedOrInternal => &[ModifierKind::Protected, ModifierKind::Internal],
            Self::Public => &[ModifierKind::Public],
        }
    }

    /// The single-token level spelled by `kind`.
    pub fn from_modifier(kind: ModifierKind) -> Option<Self> {
        match kind {
            ModifierKind::Public => Some(Self::Public),
            ModifierKind::Private => Some(Self::Private),
            ModifierKind::Protected => Some(Self::Protected),
            ModifierKind::Internal => Some(Self::Internal),
            _ => None,
        }
    }

    pub fn is_single_token(self) -> bool {
        self.modifier_kinds().len() == 1
    }

    pub fn is_compound(self) -> bool {
        self.modifier_kinds().len() == 2
    }

    pub fn contains_private(self) -> bool {
        self.modifier_kinds().contains(&ModifierKind::Private)
    }

    pub fn contains_protected(self) -> bool {
        self.modifier_kinds().contains(&ModifierKind::Protected)
    }

    pub fn contains_internal(self) -> bool {
        self.modifier_kinds().contains(&ModifierKind::Internal)
    }

    /// Strictly narrower visibility. `Protected` and `Internal` are not
    /// comparable, and `NotApplicable` compares with nothing.
    pub fn is_more_restrictive_than(self, other: Accessibility) -> bool {
        match (self.breadth(), other.breadth()) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        }
    }

    fn breadth(self) -> Option<u8> {
        match self {
            Self::NotApplicable => None,
            Self::Private => Some(0),
            Self::ProtectedAndInternal => Some(1),
            Self::Protected | Self::Internal => Some(2),
            Self::ProtectedOrInternal => Some(3),
            Self::Public => Some(4),
        }
    }

    /// Source spelling, e.g. `protected internal`.
    pub fn keywords(self) -> &'static str {
        match self {
            Self::NotApplicable => "",
            Self::Private => "private",
            Self::ProtectedAndInternal => "private protected",
            Self::Protected => "protected",
            Self::Internal => "internal",
            Self::ProtectedOrInternal => "protected internal",
            Self::Public => "public",
        }
    }
}

impl fmt::Display for Accessibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotApplicable => f.write_str("not applicable"),
            _ => f.write_str(self.keywords()),
        }
    }
}
