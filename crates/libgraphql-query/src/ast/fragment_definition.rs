use crate::ast::Arguments;
use crate::ast::AstNode;
use crate::ast::DirectiveTarget;
use crate::ast::Directives;
use crate::ast::SelectionContainer;
use crate::ast::SelectionId;
use crate::ast::SelectionSet;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A named fragment definition
/// (`fragment Name on Type @dir { ... }`).
///
/// See
/// [Fragments](https://spec.graphql.org/September2025/#sec-Language.Fragments)
/// in the GraphQL language reference.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FragmentDefinition {
    pub directives: Directives,
    pub name: String,
    pub selection_set: SelectionSet,
    pub span: GraphQLSourceSpan,
    pub type_condition: String,
}

#[inherent]
impl AstNode for FragmentDefinition {
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}

#[inherent]
impl DirectiveTarget for FragmentDefinition {
    pub fn add_directive(&mut self, name: String, arguments: Arguments) {
        self.directives.insert(name, arguments);
    }
}

#[inherent]
impl SelectionContainer for FragmentDefinition {
    pub fn add_selection(&mut self, id: SelectionId) {
        self.selection_set.push(id);
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }
}
