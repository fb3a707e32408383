//! Accessibility levels and the rules that govern them.
//!
//! The queries here work at three depths:
//! - [`of_modifiers`] / [`explicit_accessibility`] read what is written
//! - [`default_explicit_accessibility`] is what applies when nothing is written
//! - [`effective_accessibility`] combines both with the rules that make some
//!   declarations public no matter what is written (interface members)
//!
//! Context-dependent queries take a [`DeclarationRef`] so they can see the
//! containing declaration.

mod changer;
mod level;

pub use changer::{add_explicit_accessibility, change_accessibility};
pub use level::Accessibility;

use crate::modifiers::{ModifierKind, Modifiers};
use crate::syntax::{Declaration, DeclarationKind, DeclarationRef};

/// Where the accessibility tokens of a modifier list are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Located {
    pub(crate) level: Accessibility,
    pub(crate) first: usize,
    /// The other half of a compound level.
    pub(crate) second: Option<usize>,
}

/// Find the first accessibility token and, for `private`, `protected` and
/// `internal`, the token that pairs with it into a compound level.
pub(crate) fn locate(modifiers: &Modifiers) -> Option<Located> {
    let kinds = modifiers.kinds();
    let first = kinds.iter().position(|kind| kind.is_accessibility())?;
    let after = |wanted: ModifierKind| {
        kinds[first + 1..]
            .iter()
            .position(|kind| *kind == wanted)
            .map(|offset| first + 1 + offset)
    };

    let single = |level| Located {
        level,
        first,
        second: None,
    };
    let pair = |level, second| Located {
        level,
        first,
        second: Some(second),
    };

    let located = match kinds[first] {
        ModifierKind::Public => single(Accessibility::Public),
        ModifierKind::Private => match after(ModifierKind::Protected) {
            Some(second) => pair(Accessibility::ProtectedAndInternal, second),
            None => single(Accessibility::Private),
        },
        ModifierKind::Internal => match after(ModifierKind::Protected) {
            Some(second) => pair(Accessibility::ProtectedOrInternal, second),
            None => single(Accessibility::Internal),
        },
        ModifierKind::Protected => match (after(ModifierKind::Internal), after(ModifierKind::Private)) {
            (Some(second), _) => pair(Accessibility::ProtectedOrInternal, second),
            (None, Some(second)) => pair(Accessibility::ProtectedAndInternal, second),
            (None, None) => single(Accessibility::Protected),
        },
        _ => unreachable!("is_accessibility admits only the four visibility keywords"),
    };
    Some(located)
}

/// The level written in `modifiers`, or `NotApplicable` if none is.
pub fn of_modifiers(modifiers: &Modifiers) -> Accessibility {
    locate(modifiers).map_or(Accessibility::NotApplicable, |located| located.level)
}

/// The level written on `declaration`.
pub fn explicit_accessibility(declaration: &Declaration) -> Accessibility {
    of_modifiers(declaration.modifiers())
}

/// The level that applies to `node` when no accessibility is written.
///
/// `NotApplicable` means the declaration can never carry an explicit level in
/// its current form (static constructors, partial methods, explicit interface
/// implementations, interface members).
pub fn default_explicit_accessibility(node: DeclarationRef<'_>) -> Accessibility {
    let declaration = node.declaration();
    let modifiers = declaration.modifiers();
    let in_interface = node.parent_kind() == Some(DeclarationKind::Interface);
    let explicit_interface = declaration.explicit_interface().is_some();

    match node.kind() {
        DeclarationKind::Constructor => {
            if modifiers.contains(ModifierKind::Static) {
                Accessibility::NotApplicable
            } else {
                Accessibility::Private
            }
        }
        DeclarationKind::Destructor => Accessibility::NotApplicable,
        DeclarationKind::Method => {
            if modifiers.contains(ModifierKind::Partial) || explicit_interface || in_interface {
                Accessibility::NotApplicable
            } else {
                Accessibility::Private
            }
        }
        DeclarationKind::Property | DeclarationKind::Indexer | DeclarationKind::Event => {
            if explicit_interface || in_interface {
                Accessibility::NotApplicable
            } else {
                Accessibility::Private
            }
        }
        DeclarationKind::EventField => {
            if in_interface {
                Accessibility::NotApplicable
            } else {
                Accessibility::Private
            }
        }
        DeclarationKind::Field => Accessibility::Private,
        DeclarationKind::Operator
        | DeclarationKind::ConversionOperator
        | DeclarationKind::EnumMember
        | DeclarationKind::Namespace => Accessibility::Public,
        DeclarationKind::Class
        | DeclarationKind::Struct
        | DeclarationKind::Interface
        | DeclarationKind::Enum
        | DeclarationKind::Delegate => match node.parent_kind() {
            Some(DeclarationKind::Class | DeclarationKind::Struct) => Accessibility::Private,
            _ => Accessibility::Internal,
        },
        DeclarationKind::Accessor
        | DeclarationKind::LocalDeclaration
        | DeclarationKind::LocalFunction
        | DeclarationKind::Parameter
        | DeclarationKind::IncompleteMember => Accessibility::NotApplicable,
    }
}

/// The level `node` actually has.
pub fn effective_accessibility(node: DeclarationRef<'_>) -> Accessibility {
    let explicit = explicit_accessibility(node.declaration());
    if explicit != Accessibility::NotApplicable {
        return explicit;
    }

    if node.kind() == DeclarationKind::Accessor {
        return node
            .parent()
            .map_or(Accessibility::NotApplicable, |owner| {
                effective_accessibility(*owner)
            });
    }

    let interface_member = node.parent_kind() == Some(DeclarationKind::Interface)
        && node.declaration().explicit_interface().is_none()
        && !matches!(
            node.kind(),
            DeclarationKind::Constructor | DeclarationKind::Destructor
        );
    if interface_member {
        return Accessibility::Public;
    }

    default_explicit_accessibility(node)
}

/// Whether `level` may be written on `node`.
///
/// With `ignore_override` false, a member marked `override` only accepts the
/// level it already has, since an override cannot change accessibility.
pub fn is_allowed_accessibility(
    node: DeclarationRef<'_>,
    level: Accessibility,
    ignore_override: bool,
) -> bool {
    let declaration = node.declaration();
    if !node.kind().has_modifiers() {
        return false;
    }
    let modifiers = declaration.modifiers();
    if !ignore_override && modifiers.contains(ModifierKind::Override) {
        return level == explicit_accessibility(declaration);
    }
    if level == Accessibility::NotApplicable {
        return true;
    }

    match node.kind() {
        DeclarationKind::LocalDeclaration
        | DeclarationKind::LocalFunction
        | DeclarationKind::Parameter
        | DeclarationKind::Destructor => return false,
        DeclarationKind::Operator | DeclarationKind::ConversionOperator => {
            return level == Accessibility::Public;
        }
        DeclarationKind::Accessor => {
            return node.parent().is_some_and(|owner| {
                level.is_more_restrictive_than(effective_accessibility(*owner))
            });
        }
        DeclarationKind::Constructor
        | DeclarationKind::Method
        | DeclarationKind::Property
        | DeclarationKind::Indexer
        | DeclarationKind::Event
        | DeclarationKind::EventField
            if default_explicit_accessibility(node) == Accessibility::NotApplicable =>
        {
            return false;
        }
        _ => {}
    }

    if node.is_top_level() && !matches!(level, Accessibility::Public | Accessibility::Internal) {
        return false;
    }
    if node.parent_kind() == Some(DeclarationKind::Struct) && level.contains_protected() {
        return false;
    }
    if level.contains_private()
        && modifiers.contains_any(&[
            ModifierKind::Abstract,
            ModifierKind::Virtual,
            ModifierKind::Override,
        ])
    {
        return false;
    }
    true
}
