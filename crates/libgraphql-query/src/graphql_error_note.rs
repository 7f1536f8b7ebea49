use crate::GraphQLErrorNoteKind;
use crate::GraphQLSourceSpan;
use crate::SmallVec;

/// A secondary line attached to a [`GraphQLParseError`](crate::GraphQLParseError).
///
/// The lexer uses notes to point back at where an unterminated string
/// began and to suggest fixes for malformed `...`; the parser uses them to
/// point at the `{` that was never closed.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLErrorNote {
    pub kind: GraphQLErrorNoteKind,
    pub message: String,

    /// A related location, rendered as `(line L, column C)` after the
    /// message.
    pub span: Option<GraphQLSourceSpan>,
}

impl GraphQLErrorNote {
    fn new(kind: GraphQLErrorNoteKind, message: String, span: Option<GraphQLSourceSpan>) -> Self {
        Self { kind, message, span }
    }

    pub fn general(message: impl Into<String>) -> Self {
        Self::new(GraphQLErrorNoteKind::General, message.into(), None)
    }

    pub fn general_with_span(message: impl Into<String>, span: GraphQLSourceSpan) -> Self {
        Self::new(GraphQLErrorNoteKind::General, message.into(), Some(span))
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self::new(GraphQLErrorNoteKind::Help, message.into(), None)
    }

    /// A link into the GraphQL language reference.
    pub fn spec(url: impl Into<String>) -> Self {
        Self::new(GraphQLErrorNoteKind::Spec, url.into(), None)
    }

    /// Renders the note as one diagnostic line (without the trailing
    /// newline), e.g. `   = note: string started here (line 1, column 9)`.
    pub fn render(&self) -> String {
        let mut line = format!("   = {}: {}", self.kind.prefix(), self.message);
        if let Some(span) = &self.span {
            line.push_str(&format!(
                " (line {}, column {})",
                span.display_line(),
                span.start_inclusive.col_utf8() + 1,
            ));
        }
        line
    }
}

/// Most errors carry at most two notes.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
