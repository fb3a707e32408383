//! Foundation types shared by the syntax model and the edit engine.
//!
//! This module provides:
//! - [`Trivia`], [`TriviaList`] - Formatting metadata attached to tokens
//! - [`Token`] - A plain token (keyword, type or identifier) with its trivia
//!
//! This module has NO dependencies on other modkit modules.

mod token;
mod trivia;

pub use token::Token;
pub use trivia::{Trivia, TriviaList};

pub use smol_str::SmolStr;
