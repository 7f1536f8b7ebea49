use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTriviaToken;
use crate::GraphQLSourceSpan;
use smallvec::SmallVec;

/// Type alias for trivia storage. Uses SmallVec to avoid heap allocation
/// for the common case of 0-2 trivia items per token.
pub type GraphQLTriviaTokenVec = SmallVec<[GraphQLTriviaToken; 2]>;

/// A classified lexeme with its raw text, location (span) information, and
/// an ordered list of any preceding trivia (comments, commas).
///
/// Tokens are produced once by the lexer and never mutated afterwards.
///
/// Trivia is attached to the *following* token, so the parser can simply
/// call `peek()` and `consume()` without worrying about skipping trivia.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken {
    /// The kind of token (including Error for lexer errors).
    pub kind: GraphQLTokenKind,

    /// The raw source text of the token, exactly as written (including
    /// sigils and quotes). Empty for `Eof`.
    pub text: String,

    /// Trivia (comments, commas) that precede this token.
    pub preceding_trivia: GraphQLTriviaTokenVec,

    /// The source location span of this token.
    pub span: GraphQLSourceSpan,
}

impl GraphQLToken {
    /// Convenience constructor for a token with no preceding trivia.
    pub fn new(
        kind: GraphQLTokenKind,
        text: impl Into<String>,
        span: GraphQLSourceSpan,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            preceding_trivia: SmallVec::new(),
            span,
        }
    }

    /// The 1-based line this token starts on.
    pub fn line(&self) -> usize {
        self.span.display_line()
    }

    /// The raw lexeme.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of the first byte of this token in the whole input.
    pub fn start(&self) -> usize {
        self.span.start_byte()
    }

    /// Byte offset one past the last byte of this token in the whole input.
    pub fn end(&self) -> usize {
        self.span.end_byte()
    }
}
