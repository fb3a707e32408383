//! Syntax kinds for the Rowan-based declaration header CST.

use crate::modifiers::ModifierKind;

/// All syntax kinds (tokens and nodes) of a lowered declaration header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,
    END_OF_LINE,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // MODIFIER KEYWORDS
    // =========================================================================
    NEW_KW,
    PUBLIC_KW,
    PRIVATE_KW,
    PROTECTED_KW,
    INTERNAL_KW,
    CONST_KW,
    STATIC_KW,
    VIRTUAL_KW,
    SEALED_KW,
    OVERRIDE_KW,
    ABSTRACT_KW,
    READONLY_KW,
    EXTERN_KW,
    UNSAFE_KW,
    VOLATILE_KW,
    ASYNC_KW,
    PARTIAL_KW,

    // =========================================================================
    // OTHER TOKENS
    // =========================================================================
    HEAD,  // keyword or type after the modifiers
    IDENT,
    DOT,

    // =========================================================================
    // NODES
    // =========================================================================
    DECLARATION,
    MODIFIER_LIST,
    EXPLICIT_INTERFACE,
    NAME,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace, newline or comment)
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE | Self::END_OF_LINE | Self::LINE_COMMENT | Self::BLOCK_COMMENT
        )
    }

    /// Check if this is a modifier keyword
    pub fn is_modifier(self) -> bool {
        (self as u16) >= (Self::NEW_KW as u16) && (self as u16) <= (Self::PARTIAL_KW as u16)
    }

    pub fn from_modifier(kind: ModifierKind) -> Self {
        match kind {
            ModifierKind::New => Self::NEW_KW,
            ModifierKind::Public => Self::PUBLIC_KW,
            ModifierKind::Private => Self::PRIVATE_KW,
            ModifierKind::Protected => Self::PROTECTED_KW,
            ModifierKind::Internal => Self::INTERNAL_KW,
            ModifierKind::Const => Self::CONST_KW,
            ModifierKind::Static => Self::STATIC_KW,
            ModifierKind::Virtual => Self::VIRTUAL_KW,
            ModifierKind::Sealed => Self::SEALED_KW,
            ModifierKind::Override => Self::OVERRIDE_KW,
            ModifierKind::Abstract => Self::ABSTRACT_KW,
            ModifierKind::ReadOnly => Self::READONLY_KW,
            ModifierKind::Extern => Self::EXTERN_KW,
            ModifierKind::Unsafe => Self::UNSAFE_KW,
            ModifierKind::Volatile => Self::VOLATILE_KW,
            ModifierKind::Async => Self::ASYNC_KW,
            ModifierKind::Partial => Self::PARTIAL_KW,
        }
    }

    pub fn to_modifier(self) -> Option<ModifierKind> {
        if !self.is_modifier() {
            return None;
        }
        ModifierKind::ALL
            .get((self as u16 - Self::NEW_KW as u16) as usize)
            .copied()
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeclarationLanguage {}

impl rowan::Language for DeclarationLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<DeclarationLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<DeclarationLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<DeclarationLanguage>;
