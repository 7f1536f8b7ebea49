use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;

/// A parse error with location information and contextual notes.
///
/// A parse produces at most one of these: the first lexical fault, syntax
/// error, depth violation, or rejected numeric literal aborts the whole
/// parse.
///
/// `Display` renders the full diagnostic (see
/// [`format_detailed()`](Self::format_detailed)), including the 1-based line
/// number and a caret marker under the offending span.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", self.format_detailed())]
pub struct GraphQLParseError {
    /// Human-readable primary error message.
    ///
    /// Examples: "expected `:` after variable name, found `Int`",
    /// "unterminated string"
    message: String,

    /// The primary span where the error was detected.
    ///
    /// - For "unexpected token" errors: the unexpected token's span
    /// - For "unclosed delimiter" errors: the end of input
    span: GraphQLSourceSpan,

    /// Categorized error kind for programmatic handling.
    kind: GraphQLParseErrorKind,

    /// Additional notes providing context, suggestions, and related
    /// locations.
    notes: GraphQLErrorNotes,

    /// The text of the line `span` starts on, if the token source still had
    /// it buffered when the error was raised.
    source_line: Option<String>,
}

impl GraphQLParseError {
    /// Creates a new parse error with no notes.
    pub fn new(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: GraphQLErrorNotes::new(),
            source_line: None,
        }
    }

    /// Creates a new parse error with notes.
    pub fn with_notes(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
        notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes,
            source_line: None,
        }
    }

    /// Creates a parse error from a lexer error token.
    ///
    /// When the parser encounters a `GraphQLTokenKind::Error` token, this
    /// method converts it to a `GraphQLParseError`, preserving the lexer's
    /// message and notes.
    pub fn from_lexer_error(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        lexer_notes: GraphQLErrorNotes,
    ) -> Self {
        Self::with_notes(message, span, GraphQLParseErrorKind::LexerError, lexer_notes)
    }

    /// Attaches the text of the offending source line, used to render the
    /// excerpt in [`format_detailed()`](Self::format_detailed).
    pub fn with_source_line(mut self, line: Option<String>) -> Self {
        self.source_line = line;
        self
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the primary span where the error was detected.
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }

    /// Returns the additional notes for this error.
    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    /// Returns the source line excerpt, if one was captured.
    pub fn source_line(&self) -> Option<&str> {
        self.source_line.as_deref()
    }

    /// Returns the 1-based line the error was detected on.
    pub fn line(&self) -> usize {
        self.span.display_line()
    }

    /// Returns the byte offsets `(start, end)` of the offending token.
    pub fn byte_range(&self) -> (usize, usize) {
        (self.span.start_byte(), self.span.end_byte())
    }

    /// Adds a general note without a span.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::general(message));
    }

    /// Adds a general note with a span (pointing to a related location).
    pub fn add_note_with_span(&mut self, message: impl Into<String>, span: GraphQLSourceSpan) {
        self.notes
            .push(GraphQLErrorNote::general_with_span(message, span));
    }

    /// Adds a help note without a span.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::help(message));
    }

    /// Adds a spec reference note.
    pub fn add_spec(&mut self, url: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::spec(url));
    }

    /// Formats this error as a multi-line diagnostic.
    ///
    /// Produces output like:
    /// ```text
    /// error: unexpected character `!` after directive name `foo`
    ///   --> <input>:1:9
    ///    |
    ///  1 | { a @foo!bar }
    ///    |         ^
    ///    = help: a directive name must be followed by `(`, whitespace, or the end of the line
    /// ```
    ///
    /// The excerpt is omitted when no source line was captured, but the
    /// line and column are always shown.
    pub fn format_detailed(&self) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');
        output.push_str(&format!("  --> {}\n", self.location()));

        if let Some(snippet) = self.format_source_snippet() {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            output.push_str(&note.render());
            output.push('\n');
        }

        output
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// query.graphql:5:12: error: expected `:` after variable name, found `Int`
    /// ```
    pub fn format_oneline(&self) -> String {
        format!("{}: error: {}", self.location(), self.message)
    }

    fn location(&self) -> String {
        let file_name = self
            .span
            .file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string());
        let line = self.span.display_line();
        let column = self.span.start_inclusive.col_utf8() + 1;
        format!("{file_name}:{line}:{column}")
    }

    fn format_source_snippet(&self) -> Option<String> {
        let line_content = self.source_line.as_deref()?;
        let display_line_num = self.span.display_line();
        let line_num_width = display_line_num.to_string().len().max(2);

        let mut output = String::new();
        output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
        output.push_str(&format!(
            "{display_line_num:>line_num_width$} | {line_content}\n"
        ));

        // Spans that run past the end of the excerpt line (multi-line
        // strings) are underlined to the end of that line.
        let col_start = self.span.start_inclusive.col_utf8();
        let line_len = line_content.chars().count();
        let col_end = if self.span.end_exclusive.line() == self.span.start_inclusive.line() {
            self.span.end_exclusive.col_utf8()
        } else {
            line_len
        };
        let underline_len = col_end.saturating_sub(col_start).max(1);

        output.push_str(&format!(
            "{:>width$} | {:>padding$}{}\n",
            "",
            "",
            "^".repeat(underline_len),
            width = line_num_width,
            padding = col_start
        ));

        Some(output)
    }
}
