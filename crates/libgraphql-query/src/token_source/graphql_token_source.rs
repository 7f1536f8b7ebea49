use crate::token::GraphQLToken;

/// A lexer: an iterator that produces [`GraphQLToken`]s one at a time, on
/// demand.
///
/// Consumption is pull-based. A token is only materialized when the consumer
/// asks for the next one, so a token source never runs more than one token
/// ahead of the parser.
///
/// Lexers are responsible for:
/// - Skipping whitespace and line terminators
/// - Accumulating trivia (comments, commas) and attaching to the next token
/// - Emitting [`GraphQLTokenKind::Error`](crate::token::GraphQLTokenKind::Error)
///   for lexical faults, then continuing to scan
/// - Emitting a final [`GraphQLTokenKind::Eof`](crate::token::GraphQLTokenKind::Eof)
///   token, after which the iterator is exhausted
///
/// All lookahead is handled by
/// [`GraphQLTokenStream`](crate::GraphQLTokenStream).
pub trait GraphQLTokenSource: Iterator<Item = GraphQLToken> {
    /// Returns the text of the given 0-based source line if this source
    /// still has it buffered. Used to render diagnostic excerpts.
    fn source_line(&self, _line: usize) -> Option<String> {
        None
    }
}
