//! Tests for syntax and lexical errors surfaced by the parser.

use crate::tests::utils::parse;
use crate::tests::utils::parse_err;
use crate::GraphQLErrorNoteKind;
use crate::GraphQLParseErrorKind;

// =============================================================================
// Lexer errors
// =============================================================================

/// Verifies that an illegal character after a directive name aborts the
/// parse, and that the rendered error shows the 1-based line and a caret.
#[test]
fn directive_followed_by_bang() {
    let err = parse_err("{ a @foo!bar }");

    assert!(matches!(err.kind(), GraphQLParseErrorKind::LexerError));
    assert_eq!(
        err.message(),
        "unexpected character `!` after directive name `foo`",
    );
    assert_eq!(err.line(), 1);

    let rendered = err.to_string();
    assert!(rendered.contains("<input>:1:9"), "{rendered}");
    assert!(rendered.contains(" 1 | { a @foo!bar }"), "{rendered}");
    assert!(rendered.contains("   |         ^\n"), "{rendered}");
    assert!(rendered.contains("= help: a directive name must be followed by"));
}

/// Verifies that the reported line is the line the fault is on.
#[test]
fn directive_error_on_later_line() {
    let err = parse_err("{\n  a\n  b @foo!bar\n}");

    assert_eq!(err.line(), 3);
    assert_eq!(err.source_line(), Some("  b @foo!bar"));
    assert!(err.to_string().contains("<input>:3:9"));
}

/// Verifies that an unterminated string is reported with its notes.
#[test]
fn unterminated_string() {
    let err = parse_err("{ a(s: \"abc) }");

    assert!(matches!(err.kind(), GraphQLParseErrorKind::LexerError));
    assert_eq!(err.message(), "unterminated string");
    assert_eq!(err.notes().len(), 2);
    assert_eq!(err.notes()[1].kind, GraphQLErrorNoteKind::Help);
}

/// Verifies that a long unterminated string still renders the line it
/// started on, with the caret under the opening quote.
#[test]
fn unterminated_string_spanning_many_lines() {
    let source = format!("{{ a(s: \"start\n{}", "filler\n".repeat(20));
    let err = parse_err(&source);

    assert_eq!(err.line(), 1);
    assert_eq!(err.source_line(), Some("{ a(s: \"start"));
    let rendered = err.format_detailed();
    assert!(rendered.contains(" 1 | { a(s: \"start\n"), "{rendered}");
    assert!(rendered.contains("   |        ^^^^^^\n"), "{rendered}");
}

/// Verifies that `..` is reported with a hint to add a dot.
#[test]
fn two_dots_in_selection_set() {
    let err = parse_err("{ ..F }");

    assert!(matches!(err.kind(), GraphQLParseErrorKind::LexerError));
    assert!(err.message().contains("`..`"));
    assert!(err.notes()[0].message.contains("Add one more `.`"));
}

/// Verifies that a character outside the lexical surface aborts the parse.
#[test]
fn invalid_character() {
    let err = parse_err("{ a ? }");

    assert_eq!(err.message(), "unexpected character `?`");
    assert_eq!(err.byte_range(), (4, 5));
}

// =============================================================================
// Syntax errors
// =============================================================================

/// Verifies that a missing `}` at end of input is an unclosed delimiter
/// error pointing back at the opening `{`.
#[test]
fn unclosed_selection_set() {
    let err = parse_err("{ a {\n b }");

    assert!(matches!(
        err.kind(),
        GraphQLParseErrorKind::UnclosedDelimiter { delimiter } if delimiter == "{"
    ));
    let note_span = err.notes()[0].span.as_ref().unwrap();
    assert_eq!(note_span.start_byte(), 0);
}

/// Verifies that a stray `}` after a complete definition is rejected.
#[test]
fn extra_closing_brace() {
    let err = parse_err("{ a } }");

    assert!(matches!(
        err.kind(),
        GraphQLParseErrorKind::UnbalancedDelimiter { delimiter } if delimiter == "}"
    ));
    assert_eq!(err.byte_range(), (6, 7));
}

/// Verifies that a definition without a selection set is rejected.
#[test]
fn operation_without_selection_set() {
    let err = parse_err("query Q");

    assert!(matches!(err.kind(), GraphQLParseErrorKind::UnexpectedEof { .. }));
    assert_eq!(err.message(), "expected `{` to open a selection set, found end of input");
}

/// Verifies that an inline fragment must have a selection set.
#[test]
fn inline_fragment_without_selection_set() {
    let err = parse_err("{ ... on T b }");
    assert!(err.message().starts_with("expected `{`"));
}

/// Verifies that a fragment spread cannot have a selection set.
#[test]
fn fragment_spread_with_selection_set() {
    let err = parse_err("{ ...F { a } }");

    assert!(matches!(err.kind(), GraphQLParseErrorKind::InvalidSyntax));
    assert!(err.message().contains("`...F`"));
}

/// Verifies that subscriptions are rejected with an explanatory note.
#[test]
fn subscription_not_supported() {
    let err = parse_err("subscription S { a }");

    assert!(matches!(err.kind(), GraphQLParseErrorKind::UnexpectedToken { .. }));
    assert!(err.notes().iter().any(|n| n.message.contains("subscription")));
}

/// Verifies that a definition cannot start with an arbitrary name.
#[test]
fn unknown_definition_keyword() {
    let err = parse_err("type Query { a }");
    assert_eq!(
        err.message(),
        "expected `{`, `query`, `mutation`, or `fragment` at the start of a definition, found name `type`",
    );
}

/// Verifies that `on` is rejected as a fragment name.
#[test]
fn fragment_named_on() {
    let err = parse_err("fragment on on User { a }");

    assert!(matches!(
        err.kind(),
        GraphQLParseErrorKind::ReservedName { name } if name == "on"
    ));
}

/// Verifies that a fragment definition requires `on`.
#[test]
fn fragment_definition_missing_on() {
    let err = parse_err("fragment F User { a }");
    assert_eq!(err.message(), "expected `on` after fragment name, found name `User`");
}

/// Verifies that a variable definition requires a `:`.
#[test]
fn variable_missing_colon() {
    let err = parse_err("query Q($id Int) { a }");

    assert!(matches!(
        err.kind(),
        GraphQLParseErrorKind::UnexpectedToken { expected, found }
            if expected == &vec!["`:`".to_string()] && found == "name `Int`"
    ));
}

/// Verifies that a list type must be closed.
#[test]
fn unclosed_list_type() {
    let err = parse_err("query Q($ids: [ID!) { a }");
    assert!(err.message().starts_with("expected `]` to close list type"));
}

/// Verifies that an argument list must be closed before the selection set
/// ends.
#[test]
fn unclosed_argument_list() {
    let err = parse_err("{ a(x: 1 }");
    assert_eq!(err.message(), "expected argument name in argument list, found `}`");
}

/// Verifies that a document that ends inside an argument list, with no
/// selection set open on the stack, still reports the open `{`.
#[test]
fn eof_inside_arguments() {
    let err = parse_err("{ a(x: 1");
    assert!(matches!(err.kind(), GraphQLParseErrorKind::UnclosedDelimiter { .. }));
}

/// Verifies that the parser stops at the first fault: a later fault in the
/// same document is never reported.
#[test]
fn first_fault_wins() {
    let err = parse_err("{ a ? }\n{ b @x!y }");
    assert_eq!(err.line(), 1);
}

/// Verifies that empty and comment-only documents parse to no definitions.
#[test]
fn empty_documents() {
    assert!(parse("").unwrap().definitions.is_empty());
    assert!(parse("  \n\t\n").unwrap().definitions.is_empty());
    assert!(parse("# just a comment\n, ,").unwrap().definitions.is_empty());
}
