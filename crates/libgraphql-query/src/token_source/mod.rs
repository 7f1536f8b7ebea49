//! Token source trait and the line-buffered lexer.

mod buf_read_graphql_token_source;
mod graphql_token_source;

pub use buf_read_graphql_token_source::BufReadGraphQLTokenSource;
pub use graphql_token_source::GraphQLTokenSource;

#[cfg(test)]
mod tests;
