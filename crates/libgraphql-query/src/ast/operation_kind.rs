use std::fmt;

/// The kind of a GraphQL operation.
///
/// See
/// [Operations](https://spec.graphql.org/September2025/#sec-Language.Operations)
/// in the GraphQL language reference. Subscriptions are not supported.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum OperationKind {
    Mutation,
    Query,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Mutation => write!(f, "mutation"),
            OperationKind::Query => write!(f, "query"),
        }
    }
}
