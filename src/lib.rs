//! # modkit
//!
//! Canonical modifier ordering and accessibility editing for C#-style
//! declarations.
//!
//! Declarations come in from the host's own parser as immutable values and
//! every operation returns a new, structurally shared declaration.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! accessibility → Levels, defaults, allowed levels, ChangeAccessibility
//!   ↓
//! edit          → Modifier insert/remove, member lists
//!   ↓
//! order         → Canonical order tables, insertion index
//!   ↓
//! ast           → Typed declaration wrappers, HasModifiers
//!   ↓
//! syntax        → Declaration tree, parent cursor, rowan CST lowering
//!   ↓
//! modifiers     → ModifierKind, ModifierToken, Modifiers
//!   ↓
//! base          → Trivia and tokens
//! ```
//!
//! ## Example
//!
//! ```
//! use modkit::accessibility::{change_accessibility, Accessibility};
//! use modkit::order::DefaultModifierOrder;
//! use modkit::syntax::{Declaration, DeclarationKind, DeclarationRef};
//!
//! let method = Declaration::builder(DeclarationKind::Method)
//!     .keywords("internal abstract")
//!     .head("void")
//!     .name("Run")
//!     .build()
//!     .unwrap();
//! let changed = change_accessibility(
//!     DeclarationRef::root(&method),
//!     Accessibility::Public,
//!     &DefaultModifierOrder,
//! )
//! .unwrap();
//! assert_eq!(changed.header_text(), "public abstract void Run");
//! ```

// ============================================================================
// MODULES (dependency order: base → modifiers → syntax → ast → order → edit → accessibility)
// ============================================================================

/// Foundation types: Trivia, TriviaList, Token
pub mod base;

/// Modifier categories, tokens and sequences
pub mod modifiers;

/// Declarations, the parent-aware cursor and the lossless CST
pub mod syntax;

/// Typed declaration wrappers and the HasModifiers capability
pub mod ast;

/// Canonical order tables for modifiers and members
pub mod order;

/// Modifier and member list edits
pub mod edit;

/// Accessibility levels and ChangeAccessibility
pub mod accessibility;

/// Error type shared by all edits
pub mod error;

// Re-export commonly needed items
pub use accessibility::Accessibility;
pub use error::{EditError, Result};
pub use modifiers::{ModifierKind, ModifierToken, Modifiers};
pub use order::{DefaultMemberOrder, DefaultModifierOrder, MemberOrder, ModifierOrder};
pub use syntax::{Declaration, DeclarationKind, DeclarationRef};
