use crate::GraphQLSourceSpan;

/// Source text the lexer skips over but keeps, attached to the next
/// [`GraphQLToken`](crate::token::GraphQLToken) as `preceding_trivia`.
///
/// The parser never looks at trivia; it exists so formatters and other
/// tooling can recover comments.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTriviaToken {
    /// `# ...` up to (not including) the end of the line. `value` excludes
    /// the `#`.
    Comment {
        value: String,
        span: GraphQLSourceSpan,
    },

    /// An insignificant `,`.
    Comma { span: GraphQLSourceSpan },
}
