//! Typed declaration wrappers over the untyped [`Declaration`] node.
//!
//! Each struct wraps a `Declaration` of one kind. Wrappers for kinds that own
//! a modifier sequence implement [`HasModifiers`], the capability every
//! modifier edit is written against; [`AnyModifierOwner`] accepts any of them
//! and is how an untyped declaration enters the edit engine.

use crate::modifiers::Modifiers;
use crate::syntax::{Declaration, DeclarationKind};

/// Trait for typed wrappers around a [`Declaration`]
pub trait AstDeclaration: Sized + Clone {
    fn can_cast(kind: DeclarationKind) -> bool;
    fn cast(declaration: Declaration) -> Option<Self>;
    fn declaration(&self) -> &Declaration;
    fn into_declaration(self) -> Declaration;

    fn kind(&self) -> DeclarationKind {
        self.declaration().kind()
    }
}

/// Declarations that own an ordered modifier sequence.
pub trait HasModifiers: AstDeclaration {
    fn modifiers(&self) -> &Modifiers {
        self.declaration().modifiers()
    }

    fn with_modifiers(&self, modifiers: Modifiers) -> Self {
        self.with_declaration(self.declaration().with_modifiers(modifiers))
    }

    /// Rewrap an edited copy of this declaration; the kind must not change.
    #[doc(hidden)]
    fn with_declaration(&self, declaration: Declaration) -> Self;
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! decl_node {
    ($name:ident, [$($kind:ident),+ $(,)?]) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) Declaration);

        impl AstDeclaration for $name {
            fn can_cast(kind: DeclarationKind) -> bool {
                matches!(kind, $(DeclarationKind::$kind)|+)
            }

            fn cast(declaration: Declaration) -> Option<Self> {
                if Self::can_cast(declaration.kind()) {
                    Some(Self(declaration))
                } else {
                    None
                }
            }

            fn declaration(&self) -> &Declaration {
                &self.0
            }

            fn into_declaration(self) -> Declaration {
                self.0
            }
        }

        impl From<$name> for Declaration {
            fn from(node: $name) -> Declaration {
                node.0
            }
        }
    };
    ($name:ident, $kind:ident) => {
        decl_node!($name, [$kind]);
    };
}

/// Implements [`HasModifiers`] for wrappers whose kinds all own modifiers.
macro_rules! has_modifiers {
    ($($name:ident),+ $(,)?) => {
        $(
            impl HasModifiers for $name {
                fn with_declaration(&self, declaration: Declaration) -> Self {
                    debug_assert!(Self::can_cast(declaration.kind()));
                    Self(declaration)
                }
            }
        )+
    };
}

/// Generates `name()` for named declarations.
macro_rules! name_method {
    () => {
        /// The declared name, if any.
        pub fn name(&self) -> Option<&str> {
            self.0.name_text()
        }
    };
}

/// Generates `is_<modifier>` checks.
macro_rules! has_modifier_method {
    ($name:ident, $kind:ident) => {
        #[doc = concat!("Check if this declaration has the `", stringify!($kind), "` modifier.")]
        pub fn $name(&self) -> bool {
            self.0
                .modifiers()
                .contains(crate::modifiers::ModifierKind::$kind)
        }
    };
}

// Submodules — declared after macros so macro_rules! are in scope
mod members;
mod types;

pub use self::members::*;
pub use self::types::*;

// ============================================================================
// Any modifier owner
// ============================================================================

decl_node!(
    AnyModifierOwner,
    [
        Class,
        Struct,
        Interface,
        Enum,
        Delegate,
        Field,
        Constructor,
        Destructor,
        Method,
        Property,
        Indexer,
        Event,
        EventField,
        Operator,
        ConversionOperator,
        Accessor,
        LocalDeclaration,
        LocalFunction,
        Parameter,
        IncompleteMember,
    ]
);

has_modifiers!(AnyModifierOwner);

impl AnyModifierOwner {
    /// Cast, or fail with [`EditError::UnsupportedKind`](crate::error::EditError::UnsupportedKind).
    pub fn try_cast(declaration: &Declaration) -> crate::error::Result<Self> {
        Self::cast(declaration.clone()).ok_or_else(|| {
            tracing::debug!(kind = %declaration.kind(), "declaration has no modifier list");
            crate::error::EditError::UnsupportedKind(declaration.kind())
        })
    }
}

#[cfg(test)]
mod tests;
