//! Trivia: whitespace, newlines and comments attached to tokens.

use std::fmt;

use smol_str::SmolStr;

/// A single piece of trivia.
///
/// Elastic trivia marks formatting that was synthesized by an edit rather than
/// read from source. An elastic marker renders as nothing, an elastic space as
/// a single space.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Trivia {
    Whitespace(SmolStr),
    EndOfLine(SmolStr),
    LineComment(SmolStr),
    BlockComment(SmolStr),
    ElasticMarker,
    ElasticSpace,
}

impl Trivia {
    pub fn whitespace(text: impl Into<SmolStr>) -> Self {
        Self::Whitespace(text.into())
    }

    pub fn end_of_line() -> Self {
        Self::EndOfLine(SmolStr::new_static("\n"))
    }

    pub fn line_comment(text: impl Into<SmolStr>) -> Self {
        Self::LineComment(text.into())
    }

    pub fn block_comment(text: impl Into<SmolStr>) -> Self {
        Self::BlockComment(text.into())
    }

    /// Rendered source text of this trivia.
    pub fn text(&self) -> &str {
        match self {
            Self::Whitespace(text)
            | Self::EndOfLine(text)
            | Self::LineComment(text)
            | Self::BlockComment(text) => text,
            Self::ElasticMarker => "",
            Self::ElasticSpace => " ",
        }
    }

    pub fn is_elastic(&self) -> bool {
        matches!(self, Self::ElasticMarker | Self::ElasticSpace)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Self::LineComment(_) | Self::BlockComment(_))
    }
}

/// An ordered list of trivia attached to one side of a token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TriviaList(Vec<Trivia>);

impl TriviaList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The leading trivia of a freshly synthesized token.
    pub fn elastic_marker() -> Self {
        Self(vec![Trivia::ElasticMarker])
    }

    /// The trailing trivia of a freshly synthesized token.
    pub fn elastic_space() -> Self {
        Self(vec![Trivia::ElasticSpace])
    }

    pub fn space() -> Self {
        Self(vec![Trivia::whitespace(" ")])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trivia> {
        self.0.iter()
    }

    /// True when the list is exactly one elastic marker, i.e. carries no
    /// formatting of its own.
    pub fn is_single_elastic_marker(&self) -> bool {
        matches!(self.0.as_slice(), [Trivia::ElasticMarker])
    }

    /// Concatenate `other` after this list.
    pub fn concat(&self, other: &TriviaList) -> TriviaList {
        let mut trivia = self.0.clone();
        trivia.extend(other.0.iter().cloned());
        TriviaList(trivia)
    }
}

impl From<Vec<Trivia>> for TriviaList {
    fn from(trivia: Vec<Trivia>) -> Self {
        Self(trivia)
    }
}

impl FromIterator<Trivia> for TriviaList {
    fn from_iter<I: IntoIterator<Item = Trivia>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TriviaList {
    type Item = &'a Trivia;
    type IntoIter = std::slice::Iter<'a, Trivia>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TriviaList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for trivia in &self.0 {
            f.write_str(trivia.text())?;
        }
        Ok(())
    }
}
