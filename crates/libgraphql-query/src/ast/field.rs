use crate::ast::Arguments;
use crate::ast::AstNode;
use crate::ast::DirectiveTarget;
use crate::ast::Directives;
use crate::ast::SelectionContainer;
use crate::ast::SelectionId;
use crate::ast::SelectionSet;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A field selection within a selection set, optionally aliased, with
/// arguments, directives, and a nested selection set.
///
/// See
/// [Fields](https://spec.graphql.org/September2025/#sec-Language.Fields)
/// in the GraphQL language reference.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Field {
    pub alias: Option<String>,
    pub arguments: Arguments,
    pub directives: Directives,
    pub name: String,
    /// The selection whose set this field was appended into, or `None` when
    /// it sits directly in a definition's selection set.
    #[serde(skip)]
    pub parent: Option<SelectionId>,
    pub selection_set: SelectionSet,
    pub span: GraphQLSourceSpan,
}

impl Field {
    /// The key this field's result is reported under: the alias if one was
    /// given, otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

#[inherent]
impl AstNode for Field {
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}

#[inherent]
impl DirectiveTarget for Field {
    pub fn add_directive(&mut self, name: String, arguments: Arguments) {
        self.directives.insert(name, arguments);
    }
}

#[inherent]
impl SelectionContainer for Field {
    pub fn add_selection(&mut self, id: SelectionId) {
        self.selection_set.push(id);
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }
}
