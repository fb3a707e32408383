//! Modifier tokens and modifier sequences.
//!
//! A declaration owns an ordered [`Modifiers`] sequence of [`ModifierToken`]s.
//! The sequence is a value: every edit produces a new sequence and the
//! original is left untouched.

mod kind;
mod token;

pub use kind::ModifierKind;
pub use token::ModifierToken;

use crate::base::TriviaList;
use crate::error::Result;
use crate::order::ModifierOrder;

/// An ordered sequence of modifier tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(Vec<ModifierToken>);

impl Modifiers {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a sequence from whitespace-separated keywords, e.g. `"public static"`.
    ///
    /// Each token gets a single trailing space, as a parser would produce for
    /// a declaration written on one line.
    pub fn from_keywords(text: &str) -> Result<Self> {
        text.split_whitespace()
            .map(|word| {
                let kind = word.parse::<ModifierKind>()?;
                Ok(ModifierToken::with_trivia(
                    kind,
                    TriviaList::new(),
                    TriviaList::space(),
                ))
            })
            .collect()
    }

    /// Build a sequence of synthesized tokens for the given kinds.
    pub fn from_kinds(kinds: impl IntoIterator<Item = ModifierKind>) -> Self {
        kinds.into_iter().map(ModifierToken::new).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ModifierToken> {
        self.0.get(index)
    }

    pub fn first(&self) -> Option<&ModifierToken> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModifierToken> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ModifierToken] {
        &self.0
    }

    /// The categories of the tokens, in sequence order.
    pub fn kinds(&self) -> Vec<ModifierKind> {
        self.0.iter().map(ModifierToken::kind).collect()
    }

    pub fn contains(&self, kind: ModifierKind) -> bool {
        self.0.iter().any(|token| token.kind() == kind)
    }

    pub fn contains_any(&self, kinds: &[ModifierKind]) -> bool {
        self.0.iter().any(|token| kinds.contains(&token.kind()))
    }

    /// Index of the first token of the given category.
    pub fn index_of(&self, kind: ModifierKind) -> Option<usize> {
        self.0.iter().position(|token| token.kind() == kind)
    }

    /// True if the tokens appear in non-decreasing rank order.
    pub fn is_sorted(&self, order: &impl ModifierOrder) -> bool {
        self.0
            .windows(2)
            .all(|pair| order.rank(pair[0].kind()) <= order.rank(pair[1].kind()))
    }

    pub(crate) fn inserted(&self, index: usize, token: ModifierToken) -> Self {
        let mut tokens = self.0.clone();
        tokens.insert(index, token);
        Self(tokens)
    }

    pub(crate) fn removed(&self, index: usize) -> Self {
        let mut tokens = self.0.clone();
        tokens.remove(index);
        Self(tokens)
    }

    pub(crate) fn replaced(&self, index: usize, token: ModifierToken) -> Self {
        let mut tokens = self.0.clone();
        tokens[index] = token;
        Self(tokens)
    }

    pub(crate) fn into_vec(self) -> Vec<ModifierToken> {
        self.0
    }
}

impl From<Vec<ModifierToken>> for Modifiers {
    fn from(tokens: Vec<ModifierToken>) -> Self {
        Self(tokens)
    }
}

impl FromIterator<ModifierToken> for Modifiers {
    fn from_iter<I: IntoIterator<Item = ModifierToken>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Modifiers {
    type Item = &'a ModifierToken;
    type IntoIter = std::slice::Iter<'a, ModifierToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
