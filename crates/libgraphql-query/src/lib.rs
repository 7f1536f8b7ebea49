//! A GraphQL query-language front end: a line-buffered lexer and a
//! non-recursive, state-machine parser that turn operation and fragment
//! source text into an [`ast::Document`].
//!
//! Parsing stops at the first fault. The caller receives either a complete
//! [`ast::Document`] or exactly one [`GraphQLParseError`].
//!
//! ```rust
//! use libgraphql_query::GraphQLParser;
//!
//! let doc = GraphQLParser::new("{ user(id: 4) { name } }")
//!     .parse_document()
//!     .unwrap();
//! assert_eq!(doc.definitions.len(), 1);
//! ```

pub mod ast;
mod graphql_error_note;
mod graphql_error_note_kind;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_parser_options;
mod graphql_source_span;
mod graphql_token_stream;
mod parse_many;
mod source_position;
pub mod token;
pub mod token_source;
mod value_parsing_error;

pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_error_note_kind::GraphQLErrorNoteKind;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::GraphQLParser;
pub use graphql_parser_options::GraphQLParserOptions;
pub use graphql_parser_options::MalformedNumberPolicy;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_token_stream::GraphQLTokenStream;
pub use parse_many::parse_many;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;
pub use value_parsing_error::ValueParsingError;

#[cfg(test)]
mod tests;
