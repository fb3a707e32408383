use crate::base::TriviaList;

use super::ModifierKind;

/// One modifier keyword together with the trivia around it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModifierToken {
    kind: ModifierKind,
    leading: TriviaList,
    trailing: TriviaList,
}

impl ModifierToken {
    /// A synthesized token: elastic marker before, elastic space after.
    pub fn new(kind: ModifierKind) -> Self {
        Self {
            kind,
            leading: TriviaList::elastic_marker(),
            trailing: TriviaList::elastic_space(),
        }
    }

    /// A token as read from source, with explicit trivia.
    pub fn with_trivia(kind: ModifierKind, leading: TriviaList, trailing: TriviaList) -> Self {
        Self {
            kind,
            leading,
            trailing,
        }
    }

    pub fn kind(&self) -> ModifierKind {
        self.kind
    }

    pub fn text(&self) -> &'static str {
        self.kind.keyword()
    }

    pub fn leading_trivia(&self) -> &TriviaList {
        &self.leading
    }

    pub fn trailing_trivia(&self) -> &TriviaList {
        &self.trailing
    }

    pub fn with_leading_trivia(mut self, trivia: impl Into<TriviaList>) -> Self {
        self.leading = trivia.into();
        self
    }

    pub fn with_trailing_trivia(mut self, trivia: impl Into<TriviaList>) -> Self {
        self.trailing = trivia.into();
        self
    }

    pub fn without_leading_trivia(self) -> Self {
        self.with_leading_trivia(TriviaList::new())
    }

    /// Same trivia, different keyword.
    pub fn with_kind(mut self, kind: ModifierKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn to_full_string(&self) -> String {
        format!("{}{}{}", self.leading, self.text(), self.trailing)
    }
}

impl From<ModifierKind> for ModifierToken {
    fn from(kind: ModifierKind) -> Self {
        Self::new(kind)
    }
}
