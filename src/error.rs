//! Error types for declaration edits.

use thiserror::Error;

use crate::syntax::DeclarationKind;

/// Errors that can occur while querying or editing a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// A malformed argument (unknown keyword, invalid identifier, bad order table).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The declaration kind has no modifier sequence or cannot hold members.
    #[error("Unsupported declaration kind: {0}")]
    UnsupportedKind(DeclarationKind),

    /// An index past the end of a modifier or member list.
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl EditError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an out-of-range error.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}

/// Result alias for declaration edits.
pub type Result<T> = std::result::Result<T, EditError>;
