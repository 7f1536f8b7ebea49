use crate::ast::AstNode;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A variable definition in an operation's variable list
/// (`$name: Type = default`).
///
/// See
/// [Variables](https://spec.graphql.org/September2025/#sec-Language.Variables)
/// in the GraphQL language reference.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VariableDefinition {
    pub default_value: Option<Value>,
    /// The variable name, without the `$`.
    pub name: String,
    pub span: GraphQLSourceSpan,
    pub var_type: TypeAnnotation,
}

#[inherent]
impl AstNode for VariableDefinition {
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
