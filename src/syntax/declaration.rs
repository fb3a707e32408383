//! The immutable declaration node.

use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::{Token, TriviaList};
use crate::error::{EditError, Result};
use crate::modifiers::Modifiers;

use super::DeclarationKind;

/// A declaration: a kind, its modifier tokens and the tokens that follow.
///
/// Declarations are immutable and cheap to clone. Every `with_*` method
/// returns a new node that shares all untouched children with the original,
/// so an edit reallocates only the edited node and the ancestors the host
/// rebuilds on top of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration(Arc<DeclarationData>);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct DeclarationData {
    kind: DeclarationKind,
    modifiers: Modifiers,
    /// Keyword or type following the modifiers (`class`, `void`, `get`).
    head: Option<Token>,
    explicit_interface: Option<SmolStr>,
    name: Option<Token>,
    members: Vec<Declaration>,
    accessors: Vec<Declaration>,
}

impl Declaration {
    pub fn builder(kind: DeclarationKind) -> DeclarationBuilder {
        DeclarationBuilder::new(kind)
    }

    pub fn kind(&self) -> DeclarationKind {
        self.0.kind
    }

    pub fn modifiers(&self) -> &Modifiers {
        &self.0.modifiers
    }

    pub fn head(&self) -> Option<&Token> {
        self.0.head.as_ref()
    }

    pub fn name(&self) -> Option<&Token> {
        self.0.name.as_ref()
    }

    pub fn name_text(&self) -> Option<&str> {
        self.0.name.as_ref().map(Token::text)
    }

    /// Interface qualifier of an explicit implementation, e.g. `IDisposable`
    /// in `void IDisposable.Dispose()`.
    pub fn explicit_interface(&self) -> Option<&str> {
        self.0.explicit_interface.as_deref()
    }

    pub fn members(&self) -> &[Declaration] {
        &self.0.members
    }

    pub fn accessors(&self) -> &[Declaration] {
        &self.0.accessors
    }

    /// True if both handles point at the same node.
    pub fn ptr_eq(&self, other: &Declaration) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// The first non-modifier token: the head, or the name if there is no head.
    pub fn first_token_after_modifiers(&self) -> Option<&Token> {
        self.head().or_else(|| self.name())
    }

    pub fn with_modifiers(&self, modifiers: Modifiers) -> Declaration {
        self.edit(|data| data.modifiers = modifiers)
    }

    pub fn with_head(&self, head: Option<Token>) -> Declaration {
        self.edit(|data| data.head = head)
    }

    pub fn with_name(&self, name: Option<Token>) -> Declaration {
        self.edit(|data| data.name = name)
    }

    /// Replace the first non-modifier token, see
    /// [`first_token_after_modifiers`](Self::first_token_after_modifiers).
    pub(crate) fn with_first_token_after_modifiers(&self, token: Token) -> Declaration {
        self.edit(|data| {
            if data.head.is_some() {
                data.head = Some(token);
            } else if data.name.is_some() {
                data.name = Some(token);
            }
        })
    }

    pub fn with_members(&self, members: Vec<Declaration>) -> Result<Declaration> {
        for member in &members {
            check_member(self.kind(), member)?;
        }
        Ok(self.edit(|data| data.members = members))
    }

    /// Replace one member; the other members are shared, not copied.
    pub fn replace_member(&self, index: usize, member: Declaration) -> Result<Declaration> {
        let len = self.members().len();
        if index >= len {
            return Err(EditError::out_of_range(index, len));
        }
        check_member(self.kind(), &member)?;
        Ok(self.edit(|data| data.members[index] = member))
    }

    pub fn with_accessors(&self, accessors: Vec<Declaration>) -> Result<Declaration> {
        for accessor in &accessors {
            check_accessor(self.kind(), accessor)?;
        }
        Ok(self.edit(|data| data.accessors = accessors))
    }

    /// Replace one accessor; the other accessors are shared, not copied.
    pub fn replace_accessor(&self, index: usize, accessor: Declaration) -> Result<Declaration> {
        let len = self.accessors().len();
        if index >= len {
            return Err(EditError::out_of_range(index, len));
        }
        check_accessor(self.kind(), &accessor)?;
        Ok(self.edit(|data| data.accessors[index] = accessor))
    }

    fn edit(&self, f: impl FnOnce(&mut DeclarationData)) -> Declaration {
        let mut data = DeclarationData::clone(&self.0);
        f(&mut data);
        Declaration(Arc::new(data))
    }
}

fn check_member(container: DeclarationKind, member: &Declaration) -> Result<()> {
    if !container.has_members() {
        return Err(EditError::UnsupportedKind(container));
    }
    let allowed = match container {
        DeclarationKind::Enum => member.kind() == DeclarationKind::EnumMember,
        DeclarationKind::Namespace => {
            member.kind().is_type() || member.kind() == DeclarationKind::Namespace
        }
        _ => crate::order::MemberKind::of(member).is_some_and(|kind| {
            kind != crate::order::MemberKind::Namespace
        }),
    };
    if allowed {
        Ok(())
    } else {
        Err(EditError::invalid_argument(format!(
            "a {} cannot be a member of a {}",
            member.kind(),
            container
        )))
    }
}

fn check_accessor(owner: DeclarationKind, accessor: &Declaration) -> Result<()> {
    if !owner.has_accessors() {
        return Err(EditError::UnsupportedKind(owner));
    }
    if accessor.kind() != DeclarationKind::Accessor {
        return Err(EditError::invalid_argument(format!(
            "a {} cannot be an accessor",
            accessor.kind()
        )));
    }
    Ok(())
}

/// Builder for [`Declaration`] values.
///
/// Hosts normally produce declarations from their own parser; the builder is
/// the way to do that without one.
#[derive(Debug, Clone)]
pub struct DeclarationBuilder {
    kind: DeclarationKind,
    modifiers: Modifiers,
    keywords: Option<String>,
    head: Option<Token>,
    explicit_interface: Option<SmolStr>,
    name: Option<Token>,
    leading_trivia: Option<TriviaList>,
    members: Vec<Declaration>,
    accessors: Vec<Declaration>,
}

impl DeclarationBuilder {
    pub fn new(kind: DeclarationKind) -> Self {
        Self {
            kind,
            modifiers: Modifiers::new(),
            keywords: None,
            head: kind.keyword().map(Token::new),
            explicit_interface: None,
            name: None,
            leading_trivia: None,
            members: Vec::new(),
            accessors: Vec::new(),
        }
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self.keywords = None;
        self
    }

    /// Modifiers as whitespace-separated keywords, parsed by [`build`](Self::build).
    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// The keyword or type following the modifiers.
    pub fn head(mut self, text: impl Into<SmolStr>) -> Self {
        self.head = Some(Token::new(text));
        self
    }

    pub fn head_token(mut self, token: Token) -> Self {
        self.head = Some(token);
        self
    }

    pub fn no_head(mut self) -> Self {
        self.head = None;
        self
    }

    pub fn name(mut self, text: impl Into<SmolStr>) -> Self {
        self.name = Some(Token::new(text));
        self
    }

    pub fn explicit_interface(mut self, text: impl Into<SmolStr>) -> Self {
        self.explicit_interface = Some(text.into());
        self
    }

    /// Leading trivia of the declaration's first token (indentation, comments).
    pub fn leading_trivia(mut self, trivia: impl Into<TriviaList>) -> Self {
        self.leading_trivia = Some(trivia.into());
        self
    }

    pub fn member(mut self, member: Declaration) -> Self {
        self.members.push(member);
        self
    }

    pub fn members(mut self, members: impl IntoIterator<Item = Declaration>) -> Self {
        self.members.extend(members);
        self
    }

    pub fn accessor(mut self, accessor: Declaration) -> Self {
        self.accessors.push(accessor);
        self
    }

    pub fn build(self) -> Result<Declaration> {
        let mut modifiers = match &self.keywords {
            Some(keywords) => Modifiers::from_keywords(keywords)?,
            None => self.modifiers,
        };
        if !self.kind.has_modifiers() && !modifiers.is_empty() {
            return Err(EditError::UnsupportedKind(self.kind));
        }

        if let Some(name) = &self.name {
            if !matches!(
                self.kind,
                DeclarationKind::Operator | DeclarationKind::ConversionOperator
            ) && !is_identifier(name.text())
            {
                return Err(EditError::invalid_argument(format!(
                    "`{}` is not a valid identifier",
                    name.text()
                )));
            }
        }
        if let Some(qualifier) = &self.explicit_interface {
            if !qualifier.split('.').all(is_identifier) {
                return Err(EditError::invalid_argument(format!(
                    "`{qualifier}` is not a valid interface name"
                )));
            }
        }

        // separate the head from a following name
        let mut head = self.head;
        let mut name = self.name;
        if let (Some(token), Some(_)) = (&head, &name) {
            if token.trailing_trivia().is_empty() && token.text() != "~" {
                head = Some(token.clone().with_trailing_trivia(TriviaList::space()));
            }
        }

        if let Some(trivia) = self.leading_trivia {
            if let Some(first) = modifiers.first() {
                let first = first.clone().with_leading_trivia(trivia);
                modifiers = modifiers.replaced(0, first);
            } else if let Some(token) = head.take() {
                head = Some(token.with_leading_trivia(trivia));
            } else if let Some(token) = name.take() {
                name = Some(token.with_leading_trivia(trivia));
            }
        }

        let declaration = Declaration(Arc::new(DeclarationData {
            kind: self.kind,
            modifiers,
            head,
            explicit_interface: self.explicit_interface,
            name,
            members: Vec::new(),
            accessors: Vec::new(),
        }));
        let declaration = if self.members.is_empty() {
            declaration
        } else {
            declaration.with_members(self.members)?
        };
        if self.accessors.is_empty() {
            Ok(declaration)
        } else {
            declaration.with_accessors(self.accessors)
        }
    }
}

/// Identifier check, allowing the `@` verbatim prefix.
fn is_identifier(text: &str) -> bool {
    let text = text.strip_prefix('@').unwrap_or(text);
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first == '_' || unicode_ident::is_xid_start(first) => {
            chars.all(unicode_ident::is_xid_continue)
        }
        _ => false,
    }
}
