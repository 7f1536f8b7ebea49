use crate::ValueParsingError;

/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// Human-readable context (suggestions, explanations) belongs in the
/// `notes` field of `GraphQLParseError`.
///
/// The `#[error(...)]` messages are concise/programmatic. Full human-readable
/// messages are in `GraphQLParseError.message`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// # Example
    /// ```text
    /// query Q($id Int) { a }
    ///             ^^^ expected `:`, found `Int`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        /// What tokens were expected (e.g., `["`:`"]`).
        expected: Vec<String>,
        /// Description of what was found (e.g., `"name `Int`"`).
        found: String,
    },

    /// The document ended before a complete construct was parsed.
    ///
    /// # Example
    /// ```text
    /// query Q($id: Int
    ///                 ^ expected `)`, found end of input
    /// ```
    #[error("unexpected end of input")]
    UnexpectedEof {
        /// What was expected when EOF was encountered.
        expected: Vec<String>,
    },

    /// The parser read a `GraphQLTokenKind::Error` token from the lexer.
    ///
    /// The lexer's message and notes are preserved in the parent
    /// `GraphQLParseError`'s `message` and `notes` fields.
    ///
    /// # Example
    /// ```text
    /// { a @foo!bar }
    ///         ^ unexpected character `!` after directive name
    /// ```
    #[error("lexer error")]
    LexerError,

    /// A `{` (or `[` / `(`) was opened but the input ended before the
    /// matching close. The opening location is included in the error's
    /// `notes`.
    #[error("unclosed delimiter: `{delimiter}`")]
    UnclosedDelimiter {
        /// The unclosed delimiter (e.g., `"{"`).
        delimiter: String,
    },

    /// A closing delimiter appeared with nothing open to close.
    ///
    /// # Example
    /// ```text
    /// { a } }
    ///       ^ no selection set is open
    /// ```
    #[error("unbalanced delimiter: `{delimiter}`")]
    UnbalancedDelimiter {
        /// The stray closing delimiter (e.g., `"}"`).
        delimiter: String,
    },

    /// A numeric literal could not be coerced, and the parser was configured
    /// with [`MalformedNumberPolicy::Reject`](crate::MalformedNumberPolicy::Reject).
    #[error("invalid value")]
    InvalidValue(ValueParsingError),

    /// Reserved name used in a context where it's not allowed.
    ///
    /// # Example
    /// ```text
    /// fragment on on User { name }
    ///          ^^ fragment name cannot be `on`
    /// ```
    #[error("reserved name: `{name}`")]
    ReservedName {
        /// The reserved name that was used (e.g., `"on"`).
        name: String,
    },

    /// Selection sets or value literals nested deeper than
    /// [`GraphQLParserOptions::max_selection_depth`](crate::GraphQLParserOptions::max_selection_depth).
    #[error("maximum nesting depth of {limit} exceeded")]
    MaxDepthExceeded {
        /// The configured limit.
        limit: usize,
    },

    /// Invalid syntax that doesn't fit other categories.
    ///
    /// The specific error is described in `GraphQLParseError.message`.
    #[error("invalid syntax")]
    InvalidSyntax,
}
