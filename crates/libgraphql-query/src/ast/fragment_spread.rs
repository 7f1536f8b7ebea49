use crate::ast::Arguments;
use crate::ast::AstNode;
use crate::ast::DirectiveTarget;
use crate::ast::Directives;
use crate::ast::SelectionId;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A named fragment spread (`...FragmentName`).
///
/// A spread has no selection set of its own, so it does not implement
/// [`SelectionContainer`](crate::ast::SelectionContainer).
///
/// See
/// [Fragment Spreads](https://spec.graphql.org/September2025/#FragmentSpread)
/// in the GraphQL language reference.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FragmentSpread {
    pub directives: Directives,
    pub name: String,
    #[serde(skip)]
    pub parent: Option<SelectionId>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for FragmentSpread {
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}

#[inherent]
impl DirectiveTarget for FragmentSpread {
    pub fn add_directive(&mut self, name: String, arguments: Arguments) {
        self.directives.insert(name, arguments);
    }
}
