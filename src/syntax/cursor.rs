use super::{Declaration, DeclarationKind};

/// A declaration together with the chain of declarations that contain it.
///
/// Declarations themselves do not know their parent; accessibility rules do
/// depend on it (a class nested in a class defaults to `private`, a top-level
/// class to `internal`). The cursor carries that context. A root cursor sits
/// directly in the compilation unit.
///
/// ```
/// use modkit::syntax::{Declaration, DeclarationKind, DeclarationRef};
///
/// let field = Declaration::builder(DeclarationKind::Field).head("int").name("x").build().unwrap();
/// let class = Declaration::builder(DeclarationKind::Class).name("C").member(field).build().unwrap();
///
/// let class_ref = DeclarationRef::root(&class);
/// let field_ref = class_ref.child(&class.members()[0]);
/// assert_eq!(field_ref.parent_kind(), Some(DeclarationKind::Class));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DeclarationRef<'a> {
    declaration: &'a Declaration,
    parent: Option<&'a DeclarationRef<'a>>,
}

impl<'a> DeclarationRef<'a> {
    /// A declaration at compilation-unit level.
    pub fn root(declaration: &'a Declaration) -> Self {
        Self {
            declaration,
            parent: None,
        }
    }

    /// A cursor for `declaration` as a child of this one.
    pub fn child(&'a self, declaration: &'a Declaration) -> DeclarationRef<'a> {
        DeclarationRef {
            declaration,
            parent: Some(self),
        }
    }

    pub fn declaration(&self) -> &'a Declaration {
        self.declaration
    }

    pub fn kind(&self) -> DeclarationKind {
        self.declaration.kind()
    }

    pub fn parent(&self) -> Option<&'a DeclarationRef<'a>> {
        self.parent
    }

    pub fn parent_kind(&self) -> Option<DeclarationKind> {
        self.parent.map(DeclarationRef::kind)
    }

    /// True when the declaration sits directly in a namespace or the
    /// compilation unit.
    pub fn is_top_level(&self) -> bool {
        matches!(self.parent_kind(), None | Some(DeclarationKind::Namespace))
    }

    /// Enclosing declarations, innermost first.
    pub fn ancestors(self) -> impl Iterator<Item = &'a DeclarationRef<'a>> + 'a {
        std::iter::successors(self.parent, |node| node.parent)
    }
}

impl<'a> From<&'a Declaration> for DeclarationRef<'a> {
    fn from(declaration: &'a Declaration) -> Self {
        Self::root(declaration)
    }
}
