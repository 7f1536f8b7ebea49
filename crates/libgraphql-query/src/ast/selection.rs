use crate::ast::Arguments;
use crate::ast::AstNode;
use crate::ast::DirectiveTarget;
use crate::ast::Directives;
use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::SelectionContainer;
use crate::ast::SelectionId;
use crate::ast::SelectionSet;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A single selection within a selection set.
///
/// See
/// [Selection Sets](https://spec.graphql.org/September2025/#sec-Selection-Sets)
/// in the GraphQL language reference.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

impl Selection {
    /// The selection whose set this one was appended into.
    pub fn parent(&self) -> Option<SelectionId> {
        match self {
            Selection::Field(s) => s.parent,
            Selection::FragmentSpread(s) => s.parent,
            Selection::InlineFragment(s) => s.parent,
        }
    }

    pub fn directives(&self) -> &Directives {
        match self {
            Selection::Field(s) => &s.directives,
            Selection::FragmentSpread(s) => &s.directives,
            Selection::InlineFragment(s) => &s.directives,
        }
    }

    /// This selection's children, or `None` for a fragment spread.
    pub fn selection_set(&self) -> Option<&SelectionSet> {
        self.as_container().map(|c| c.selection_set())
    }

    pub fn as_field(&self) -> Option<&Field> {
        match self {
            Selection::Field(field) => Some(field),
            _ => None,
        }
    }

    /// Borrows this selection as a [`SelectionContainer`], or `None` for a
    /// fragment spread.
    pub fn as_container(&self) -> Option<&dyn SelectionContainer> {
        match self {
            Selection::Field(s) => Some(s),
            Selection::FragmentSpread(_) => None,
            Selection::InlineFragment(s) => Some(s),
        }
    }

    /// Mutable counterpart of [`as_container()`](Self::as_container).
    pub fn as_container_mut(&mut self) -> Option<&mut dyn SelectionContainer> {
        match self {
            Selection::Field(s) => Some(s),
            Selection::FragmentSpread(_) => None,
            Selection::InlineFragment(s) => Some(s),
        }
    }
}

#[inherent]
impl AstNode for Selection {
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            Selection::Field(s) => &s.span,
            Selection::FragmentSpread(s) => &s.span,
            Selection::InlineFragment(s) => &s.span,
        }
    }
}

#[inherent]
impl DirectiveTarget for Selection {
    pub fn add_directive(&mut self, name: String, arguments: Arguments) {
        match self {
            Selection::Field(s) => s.add_directive(name, arguments),
            Selection::FragmentSpread(s) => s.add_directive(name, arguments),
            Selection::InlineFragment(s) => s.add_directive(name, arguments),
        }
    }
}
