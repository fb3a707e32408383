//! Declaration syntax model.
//!
//! ```text
//! Host parser
//!     ↓
//! Declaration (immutable, Arc-shared, cheap to clone)
//!     ↓
//! DeclarationRef → declaration plus its containing declarations
//!     ↓
//! Declaration::syntax() → lossless Rowan CST of the header, for rendering
//! ```
//!
//! Declarations are values: edits return new declarations and never touch the
//! input. Children that an edit does not touch are shared between the old and
//! the new tree.

mod cursor;
mod declaration;
mod kind;
mod lower;
mod syntax_kind;

pub use cursor::DeclarationRef;
pub use declaration::{Declaration, DeclarationBuilder};
pub use kind::DeclarationKind;
pub use syntax_kind::{DeclarationLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
