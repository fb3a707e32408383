//! Lowering of a declaration header into a lossless Rowan CST.
//!
//! ```text
//! DECLARATION
//!   MODIFIER_LIST
//!     WHITESPACE "    "   (leading trivia of the first modifier)
//!     PUBLIC_KW "public"
//!     WHITESPACE " "
//!   HEAD "int"
//!   WHITESPACE " "
//!   NAME
//!     IDENT "count"
//! ```
//!
//! Elastic markers are dropped and elastic spaces become a single space, so
//! the CST text is exactly what an edit would write back to the source.

use rowan::{GreenNode, GreenNodeBuilder};

use crate::base::{Token, Trivia, TriviaList};

use super::{Declaration, SyntaxKind, SyntaxNode};

impl Declaration {
    /// The header (modifiers, head, explicit interface, name) as a green tree.
    pub fn green(&self) -> GreenNode {
        let mut builder = GreenNodeBuilder::new();
        builder.start_node(SyntaxKind::DECLARATION.into());

        builder.start_node(SyntaxKind::MODIFIER_LIST.into());
        for modifier in self.modifiers() {
            push_trivia(&mut builder, modifier.leading_trivia());
            builder.token(
                SyntaxKind::from_modifier(modifier.kind()).into(),
                modifier.text(),
            );
            push_trivia(&mut builder, modifier.trailing_trivia());
        }
        builder.finish_node();

        if let Some(head) = self.head() {
            push_token(&mut builder, SyntaxKind::HEAD, head);
        }

        if let Some(qualifier) = self.explicit_interface() {
            builder.start_node(SyntaxKind::EXPLICIT_INTERFACE.into());
            for segment in qualifier.split('.') {
                builder.token(SyntaxKind::IDENT.into(), segment);
                builder.token(SyntaxKind::DOT.into(), ".");
            }
            builder.finish_node();
        }

        if let Some(name) = self.name() {
            builder.start_node(SyntaxKind::NAME.into());
            push_token(&mut builder, SyntaxKind::IDENT, name);
            builder.finish_node();
        }

        builder.finish_node();
        builder.finish()
    }

    /// The header as a Rowan syntax tree.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green())
    }

    /// Source text of the header, trivia included.
    pub fn header_text(&self) -> String {
        self.syntax().text().to_string()
    }
}

fn push_token(builder: &mut GreenNodeBuilder, kind: SyntaxKind, token: &Token) {
    push_trivia(builder, token.leading_trivia());
    builder.token(kind.into(), token.text());
    push_trivia(builder, token.trailing_trivia());
}

fn push_trivia(builder: &mut GreenNodeBuilder, trivia: &TriviaList) {
    for piece in trivia {
        let kind = match piece {
            Trivia::Whitespace(_) | Trivia::ElasticSpace => SyntaxKind::WHITESPACE,
            Trivia::EndOfLine(_) => SyntaxKind::END_OF_LINE,
            Trivia::LineComment(_) => SyntaxKind::LINE_COMMENT,
            Trivia::BlockComment(_) => SyntaxKind::BLOCK_COMMENT,
            Trivia::ElasticMarker => continue,
        };
        builder.token(kind.into(), piece.text());
    }
}
