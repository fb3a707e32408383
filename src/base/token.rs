use smol_str::SmolStr;

use super::TriviaList;

/// A non-modifier token of a declaration header: the keyword or type that
/// follows the modifiers (`class`, `void`, `get`, `~`) or the declared name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    text: SmolStr,
    leading: TriviaList,
    trailing: TriviaList,
}

impl Token {
    /// A token with no trivia on either side.
    pub fn new(text: impl Into<SmolStr>) -> Self {
        Self {
            text: text.into(),
            leading: TriviaList::new(),
            trailing: TriviaList::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
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

    /// Full source text including trivia.
    pub fn to_full_string(&self) -> String {
        format!("{}{}{}", self.leading, self.text, self.trailing)
    }
}
