use crate::ast::Arguments;
use crate::ast::AstNode;
use crate::ast::DirectiveTarget;
use crate::ast::Directives;
use crate::ast::SelectionContainer;
use crate::ast::SelectionId;
use crate::ast::SelectionSet;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// An inline fragment (`... on Type { ... }` or `... { ... }`).
///
/// See
/// [Inline Fragments](https://spec.graphql.org/September2025/#InlineFragment)
/// in the GraphQL language reference.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InlineFragment {
    pub directives: Directives,
    #[serde(skip)]
    pub parent: Option<SelectionId>,
    pub selection_set: SelectionSet,
    pub span: GraphQLSourceSpan,
    pub type_condition: Option<String>,
}

#[inherent]
impl AstNode for InlineFragment {
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}

#[inherent]
impl DirectiveTarget for InlineFragment {
    pub fn add_directive(&mut self, name: String, arguments: Arguments) {
        self.directives.insert(name, arguments);
    }
}

#[inherent]
impl SelectionContainer for InlineFragment {
    pub fn add_selection(&mut self, id: SelectionId) {
        self.selection_set.push(id);
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }
}
