use crate::ast::Arguments;
use crate::ast::AstNode;
use crate::ast::DirectiveTarget;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::SelectionContainer;
use crate::ast::SelectionId;
use crate::ast::SelectionSet;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A top-level definition in a query document.
///
/// See
/// [Executable Definitions](https://spec.graphql.org/September2025/#ExecutableDefinition)
/// in the GraphQL language reference.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Definition {
    Fragment(FragmentDefinition),
    Operation(OperationDefinition),
}

impl Definition {
    pub fn as_operation(&self) -> Option<&OperationDefinition> {
        match self {
            Definition::Operation(op) => Some(op),
            Definition::Fragment(_) => None,
        }
    }

    pub fn as_fragment(&self) -> Option<&FragmentDefinition> {
        match self {
            Definition::Fragment(frag) => Some(frag),
            Definition::Operation(_) => None,
        }
    }
}

#[inherent]
impl AstNode for Definition {
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            Definition::Fragment(d) => &d.span,
            Definition::Operation(d) => &d.span,
        }
    }
}

#[inherent]
impl DirectiveTarget for Definition {
    pub fn add_directive(&mut self, name: String, arguments: Arguments) {
        match self {
            Definition::Fragment(d) => d.add_directive(name, arguments),
            Definition::Operation(d) => d.add_directive(name, arguments),
        }
    }
}

#[inherent]
impl SelectionContainer for Definition {
    pub fn add_selection(&mut self, id: SelectionId) {
        match self {
            Definition::Fragment(d) => d.add_selection(id),
            Definition::Operation(d) => d.add_selection(id),
        }
    }

    pub fn selection_set(&self) -> &SelectionSet {
        match self {
            Definition::Fragment(d) => &d.selection_set,
            Definition::Operation(d) => &d.selection_set,
        }
    }
}
