use crate::ast::Arguments;
use crate::ast::AstNode;
use crate::ast::DirectiveTarget;
use crate::ast::Directives;
use crate::ast::OperationKind;
use crate::ast::SelectionContainer;
use crate::ast::SelectionId;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinitions;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// An operation definition (query or mutation). The `{ ... }` shorthand is
/// an anonymous query.
///
/// See
/// [Operations](https://spec.graphql.org/September2025/#sec-Language.Operations)
/// in the GraphQL language reference.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OperationDefinition {
    pub directives: Directives,
    pub name: Option<String>,
    pub operation_kind: OperationKind,
    pub selection_set: SelectionSet,
    pub span: GraphQLSourceSpan,
    pub variable_definitions: VariableDefinitions,
}

#[inherent]
impl AstNode for OperationDefinition {
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}

#[inherent]
impl DirectiveTarget for OperationDefinition {
    pub fn add_directive(&mut self, name: String, arguments: Arguments) {
        self.directives.insert(name, arguments);
    }
}

#[inherent]
impl SelectionContainer for OperationDefinition {
    pub fn add_selection(&mut self, id: SelectionId) {
        self.selection_set.push(id);
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }
}
