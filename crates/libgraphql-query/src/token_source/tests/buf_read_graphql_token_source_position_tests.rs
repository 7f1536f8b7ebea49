//! Tests for the positions, spans and retained lines reported by
//! `BufReadGraphQLTokenSource`.

use crate::token::GraphQLToken;
use crate::token_source::BufReadGraphQLTokenSource;
use crate::token_source::GraphQLTokenSource;
use std::path::PathBuf;

fn tokens(source: &str) -> Vec<GraphQLToken> {
    BufReadGraphQLTokenSource::new(source.as_bytes()).collect()
}

/// Verifies 0-based line, column and byte offsets across lines.
#[test]
fn positions_across_lines() {
    let toks = tokens("query {\n  a\n}");

    let a = &toks[2];
    assert_eq!(a.text, "a");
    assert_eq!(a.span.start_inclusive.line(), 1);
    assert_eq!(a.span.start_inclusive.col_utf8(), 2);
    assert_eq!(a.span.start_inclusive.byte_offset(), 10);
    assert_eq!(a.line(), 2);

    let close = &toks[3];
    assert_eq!(close.span.start_inclusive.line(), 2);
    assert_eq!(close.start(), 12);
    assert_eq!(close.end(), 13);
}

/// Verifies that `\r\n` line endings are counted in byte offsets but not in
/// columns.
#[test]
fn crlf_line_endings() {
    let toks = tokens("a\r\nb");

    let b = &toks[1];
    assert_eq!(b.span.start_inclusive.line(), 1);
    assert_eq!(b.span.start_inclusive.col_utf8(), 0);
    assert_eq!(b.start(), 3);
}

/// Verifies that UTF-8 columns count characters and UTF-16 columns count
/// code units.
#[test]
fn utf16_columns() {
    let toks = tokens("\"😀\" a");

    assert_eq!(toks[0].end(), 6);
    let a = &toks[1];
    assert_eq!(a.span.start_inclusive.col_utf8(), 4);
    assert_eq!(a.span.start_inclusive.col_utf16(), Some(5));
    assert_eq!(a.start(), 7);
}

/// Verifies that the `Eof` token sits at the end of the last line.
#[test]
fn eof_position() {
    let toks = tokens("a\nbc");
    let eof = toks.last().unwrap();

    assert_eq!(eof.span.start_inclusive.line(), 1);
    assert_eq!(eof.span.start_inclusive.col_utf8(), 2);
    assert_eq!(eof.start(), 4);
}

/// Verifies that tokens carry the configured file path.
#[test]
fn file_path_in_spans() {
    let toks: Vec<GraphQLToken> =
        BufReadGraphQLTokenSource::with_file_path("{ a }".as_bytes(), "q.graphql").collect();

    for token in &toks {
        assert_eq!(token.span.file_path, Some(PathBuf::from("q.graphql")));
    }
}

/// Verifies that recently read lines can be fetched for diagnostics, and
/// that only a bounded window of them is kept.
#[test]
fn retained_source_lines() {
    let source: String = (0..20).map(|i| format!("x{i}\n")).collect();
    let mut lexer = BufReadGraphQLTokenSource::new(source.as_bytes());

    assert_eq!(lexer.source_line(0), None);
    lexer.next();
    assert_eq!(lexer.source_line(0).as_deref(), Some("x0"));

    for _ in lexer.by_ref() {}
    assert_eq!(lexer.source_line(19).as_deref(), Some("x19"));
    assert_eq!(lexer.source_line(4).as_deref(), Some("x4"));
    assert_eq!(lexer.source_line(0), None);
    assert_eq!(lexer.source_line(20), None);
}

/// Verifies that the line an unterminated string starts on stays available
/// even after the string has run past the retained-line window.
#[test]
fn unterminated_string_keeps_its_start_line() {
    let source = format!("{{ a(s: \"start\n{}", "filler\n".repeat(20));
    let mut lexer = BufReadGraphQLTokenSource::new(source.as_bytes());

    let error = lexer
        .by_ref()
        .find(|token| token.kind.is_error())
        .unwrap();
    assert_eq!(error.span.start_inclusive.line(), 0);
    assert_eq!(lexer.source_line(0).as_deref(), Some("{ a(s: \"start"));
    assert_eq!(lexer.source_line(1), None);
}
