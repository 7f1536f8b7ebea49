use crate::GraphQLSourceSpan;

/// Trait implemented by all AST node types.
///
/// Node types implement this trait via `#[inherent] impl AstNode`, giving
/// each node both an inherent `span()` (no trait import needed) and a trait
/// bound for generic utilities.
pub trait AstNode {
    /// The source span this node was parsed from.
    fn span(&self) -> &GraphQLSourceSpan;
}
