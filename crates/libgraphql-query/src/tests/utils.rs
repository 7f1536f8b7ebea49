//! Various test utils.

use crate::ast::Document;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::GraphQLParseError;
use crate::GraphQLParser;
use crate::GraphQLParserOptions;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;

/// Creates a mock token with the given kind and a zero-width span at the
/// start of input.
pub fn mock_token(kind: GraphQLTokenKind) -> GraphQLToken {
    let pos = SourcePosition::new(0, 0, Some(0), 0);
    GraphQLToken::new(kind, "", GraphQLSourceSpan::new(pos.clone(), pos))
}

/// Creates a mock Name token with the given name.
pub fn mock_name_token(name: &str) -> GraphQLToken {
    let mut token = mock_token(GraphQLTokenKind::Name(name.to_string()));
    token.text = name.to_string();
    token
}

/// Creates a mock Eof token.
pub fn mock_eof_token() -> GraphQLToken {
    mock_token(GraphQLTokenKind::Eof)
}

/// A mock token source that produces tokens from a Vec.
pub struct MockTokenSource {
    tokens: std::vec::IntoIter<GraphQLToken>,
}

impl MockTokenSource {
    pub fn new(tokens: Vec<GraphQLToken>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = GraphQLToken;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

impl GraphQLTokenSource for MockTokenSource {}

/// Helper to parse a document with default options.
pub(super) fn parse(source: &str) -> Result<Document, GraphQLParseError> {
    GraphQLParser::new(source).parse_document()
}

/// Helper to parse a document with the given options.
pub(super) fn parse_with(
    source: &str,
    options: GraphQLParserOptions,
) -> Result<Document, GraphQLParseError> {
    GraphQLParser::new(source).with_options(options).parse_document()
}

/// Parses `source` and returns the document.
///
/// # Panics
/// Panics (printing the rendered diagnostic) if parsing fails.
pub(super) fn parse_ok(source: &str) -> Document {
    match parse(source) {
        Ok(doc) => doc,
        Err(err) => panic!("expected `{source}` to parse, got:\n{err}"),
    }
}

/// Parses `source` and returns the error.
///
/// # Panics
/// Panics if parsing succeeds.
pub(super) fn parse_err(source: &str) -> GraphQLParseError {
    match parse(source) {
        Ok(doc) => panic!("expected `{source}` to fail, got: {doc:?}"),
        Err(err) => err,
    }
}
