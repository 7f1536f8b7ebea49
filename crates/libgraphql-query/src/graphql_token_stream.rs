use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use std::path::PathBuf;

/// A one-token lookahead buffer over a [`GraphQLTokenSource`].
///
/// The parser sees exactly two tokens at any moment: the one it just
/// consumed and the one returned by [`peek()`](Self::peek). Tokens are pulled
/// from the source only when the slot is empty, so the source never runs
/// more than one token ahead of the parser.
pub struct GraphQLTokenStream<TTokenSource: GraphQLTokenSource> {
    token_source: TTokenSource,
    lookahead: Option<GraphQLToken>,

    /// Stamped onto the span of every token whose source did not set one.
    file_path: Option<PathBuf>,
}

impl<TTokenSource: GraphQLTokenSource> GraphQLTokenStream<TTokenSource> {
    /// Creates a new token stream from a token source.
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            lookahead: None,
            file_path: None,
        }
    }

    /// Sets the file path reported in the spans of tokens pulled from here
    /// on (unless the token source already provided one).
    pub fn set_file_path(&mut self, file_path: Option<PathBuf>) {
        self.file_path = file_path;
    }

    fn fill(&mut self) {
        if self.lookahead.is_some() {
            return;
        }
        let mut token = self.token_source.next();
        if let (Some(token), Some(path)) = (token.as_mut(), &self.file_path)
            && token.span.file_path.is_none()
        {
            token.span.file_path = Some(path.clone());
        }
        self.lookahead = token;
    }

    /// Peek at the next token without consuming it.
    ///
    /// Returns `None` only if the source is exhausted (after `Eof` has been
    /// consumed).
    pub fn peek(&mut self) -> Option<&GraphQLToken> {
        self.fill();
        self.lookahead.as_ref()
    }

    /// Advance to the next token and return it as an owned value.
    ///
    /// Returns `None` if the stream is exhausted.
    pub fn consume(&mut self) -> Option<GraphQLToken> {
        self.fill();
        self.lookahead.take()
    }

    /// Check if we've reached the end of the stream.
    ///
    /// Returns `true` if there are no more tokens or the next token is `Eof`.
    pub fn is_at_end(&mut self) -> bool {
        match self.peek() {
            None => true,
            Some(token) => matches!(token.kind, GraphQLTokenKind::Eof),
        }
    }

    /// Returns the text of a 0-based source line if the underlying token
    /// source still has it buffered.
    pub fn source_line(&self, line: usize) -> Option<String> {
        self.token_source.source_line(line)
    }
}
