//! Tests for `GraphQLParseError` construction and formatting.

use crate::GraphQLErrorNote;
use crate::GraphQLErrorNoteKind;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;

/// Helper to create a single-line test span.
fn span_at(line: usize, col: usize, len: usize) -> GraphQLSourceSpan {
    GraphQLSourceSpan::new(
        SourcePosition::new(line, col, Some(col), col),
        SourcePosition::new(line, col + len, Some(col + len), col + len),
    )
}

fn unexpected_token_kind() -> GraphQLParseErrorKind {
    GraphQLParseErrorKind::UnexpectedToken {
        expected: vec!["`:`".to_string()],
        found: "name `Int`".to_string(),
    }
}

// =============================================================================
// Construction
// =============================================================================

/// Verifies that `new()` creates an error with no notes and no excerpt.
#[test]
fn new_creates_empty_notes() {
    let error = GraphQLParseError::new(
        "expected `:`",
        span_at(/* line = */ 0, /* col = */ 0, /* len = */ 1),
        unexpected_token_kind(),
    );

    assert_eq!(error.message(), "expected `:`");
    assert!(error.notes().is_empty());
    assert_eq!(error.source_line(), None);
}

/// Verifies that `from_lexer_error()` keeps the lexer's notes and uses the
/// `LexerError` kind.
#[test]
fn from_lexer_error_keeps_notes() {
    let mut notes = GraphQLErrorNotes::new();
    notes.push(GraphQLErrorNote::help("Add closing `\"`"));
    let error = GraphQLParseError::from_lexer_error("unterminated string", span_at(2, 4, 3), notes);

    assert_eq!(error.kind(), &GraphQLParseErrorKind::LexerError);
    assert_eq!(error.notes().len(), 1);
    assert_eq!(error.notes()[0].kind, GraphQLErrorNoteKind::Help);
    assert_eq!(error.line(), 3);
    assert_eq!(error.byte_range(), (4, 7));
}

/// Verifies that the note helpers add notes of the right kinds, in order.
#[test]
fn note_helpers() {
    let mut error = GraphQLParseError::new("msg", span_at(0, 0, 1), GraphQLParseErrorKind::InvalidSyntax);
    error.add_note("context");
    error.add_note_with_span("opened here", span_at(1, 2, 1));
    error.add_help("try this");
    error.add_spec("https://spec.graphql.org/September2025/");

    let kinds: Vec<GraphQLErrorNoteKind> = error.notes().iter().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![
            GraphQLErrorNoteKind::General,
            GraphQLErrorNoteKind::General,
            GraphQLErrorNoteKind::Help,
            GraphQLErrorNoteKind::Spec,
        ],
    );
    assert!(error.notes()[1].span.is_some());
}

// =============================================================================
// Formatting
// =============================================================================

/// Verifies the full detailed rendering with an excerpt and notes.
#[test]
fn format_detailed_with_excerpt() {
    let mut error = GraphQLParseError::new(
        "expected `:` after variable name, found name `Int`",
        span_at(0, 12, 3),
        unexpected_token_kind(),
    )
    .with_source_line(Some("query Q($id Int) { a }".to_string()));
    error.add_note_with_span("variable started here", span_at(0, 8, 3));
    error.add_help("add `:` between the variable and its type");

    assert_eq!(
        error.format_detailed(),
        "error: expected `:` after variable name, found name `Int`\n\
         \x20 --> <input>:1:13\n\
         \x20  |\n\
         \x201 | query Q($id Int) { a }\n\
         \x20  |             ^^^\n\
         \x20  = note: variable started here (line 1, column 9)\n\
         \x20  = help: add `:` between the variable and its type\n",
    );
    assert_eq!(error.to_string(), error.format_detailed());
}

/// Verifies that the excerpt is omitted when no source line was captured.
#[test]
fn format_detailed_without_excerpt() {
    let error = GraphQLParseError::new("oops", span_at(4, 0, 1), GraphQLParseErrorKind::InvalidSyntax);

    assert_eq!(error.format_detailed(), "error: oops\n  --> <input>:5:1\n");
}

/// Verifies that a zero-width span still gets a single caret.
#[test]
fn zero_width_span_gets_one_caret() {
    let error = GraphQLParseError::new("eof", span_at(0, 3, 0), GraphQLParseErrorKind::InvalidSyntax)
        .with_source_line(Some("{ a".to_string()));

    assert!(error.format_detailed().contains("   |    ^\n"));
}

/// Verifies the gutter widens for multi-digit line numbers.
#[test]
fn wide_line_numbers() {
    let error = GraphQLParseError::new("bad", span_at(122, 0, 1), GraphQLParseErrorKind::InvalidSyntax)
        .with_source_line(Some("x".to_string()));

    let rendered = error.format_detailed();
    assert!(rendered.contains("\n123 | x\n"), "{rendered}");
    assert!(rendered.contains("\n    | ^\n"), "{rendered}");
}

/// Verifies the one-line rendering, with and without a file path.
#[test]
fn format_oneline() {
    let error = GraphQLParseError::new("bad", span_at(1, 4, 1), GraphQLParseErrorKind::InvalidSyntax);
    assert_eq!(error.format_oneline(), "<input>:2:5: error: bad");

    let mut span = span_at(1, 4, 1);
    span.file_path = Some("q.graphql".into());
    let error = GraphQLParseError::new("bad", span, GraphQLParseErrorKind::InvalidSyntax);
    assert_eq!(error.format_oneline(), "q.graphql:2:5: error: bad");
}
