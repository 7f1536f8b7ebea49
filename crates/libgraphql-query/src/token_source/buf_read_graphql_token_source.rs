//! A [`GraphQLTokenSource`] that lexes from any [`BufRead`] input, one line
//! at a time.
//!
//! # Features
//!
//! - **Incremental input**: only the current line (plus a small window of
//!   recently read lines, kept for diagnostic excerpts) is held in memory
//! - **Dual column tracking**: Reports both UTF-8 character positions (for
//!   display) and UTF-16 code unit positions (for LSP compatibility)
//! - **Comment preservation**: GraphQL `#` comments are captured as trivia
//! - **Error recovery**: lexical faults emit `Error` tokens and scanning
//!   continues after them
//!
//! # Usage
//!
//! ```rust
//! use libgraphql_query::token_source::BufReadGraphQLTokenSource;
//!
//! let lexer = BufReadGraphQLTokenSource::new("{ name }".as_bytes());
//! for token in lexer {
//!     println!("{:?}", token.kind);
//! }
//! // Output:
//! // CurlyBraceOpen
//! // Name("name")
//! // CurlyBraceClose
//! // Eof
//! ```

use crate::smallvec;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTriviaToken;
use crate::token::GraphQLTriviaTokenVec;
use crate::token_source::GraphQLTokenSource;
use crate::GraphQLErrorNote;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use std::collections::VecDeque;
use std::io::BufRead;
use std::path::PathBuf;

/// How many of the most recently read lines are kept for
/// [`GraphQLTokenSource::source_line`].
const RETAINED_LINES: usize = 16;

/// A [`GraphQLTokenSource`] over a [`BufRead`].
///
/// Line terminators (`\n`, `\r\n`) are stripped as each line is read; token
/// spans still carry byte offsets into the whole input.
///
/// See module documentation for details.
pub struct BufReadGraphQLTokenSource<R: BufRead> {
    reader: R,

    /// Text of the current line, without its terminator.
    curr_line_text: String,

    /// Byte index into `curr_line_text` of the next unscanned character.
    curr_line_cursor: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current UTF-8 character column (0-based).
    curr_col_utf8: usize,

    /// Current UTF-16 code unit column (0-based).
    curr_col_utf16: usize,

    /// Byte offset (from the start of input) of the first byte of the
    /// current line.
    curr_line_start_byte: usize,

    /// Byte offset (from the start of input) of the line after the current
    /// one, i.e. just past the current line's terminator.
    next_line_start_byte: usize,

    /// Whether any line has been read yet.
    has_line: bool,

    /// A fault found while reading input (invalid UTF-8, I/O failure) that
    /// must be reported before scanning continues.
    pending_error: Option<String>,

    /// The most recently read lines, keyed by their 0-based line number.
    recent_lines: VecDeque<(usize, String)>,

    /// The line the most recent quoted string started on. Kept apart from
    /// `recent_lines` since a string can outlast that window.
    quote_start_line: Option<(usize, String)>,

    /// Trivia (comments, commas) accumulated before the next token.
    pending_trivia: GraphQLTriviaTokenVec,

    /// Whether the reader has returned end of input.
    reader_exhausted: bool,

    /// Whether the EOF token has been emitted.
    finished: bool,

    /// Optional file path, included in every `GraphQLSourceSpan`.
    file_path: Option<PathBuf>,
}

impl<R: BufRead> BufReadGraphQLTokenSource<R> {
    /// Creates a new token source over `reader`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use libgraphql_query::token_source::BufReadGraphQLTokenSource;
    /// let lexer = BufReadGraphQLTokenSource::new("{ name }".as_bytes());
    /// ```
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            curr_line_text: String::new(),
            curr_line_cursor: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            curr_line_start_byte: 0,
            next_line_start_byte: 0,
            has_line: false,
            pending_error: None,
            recent_lines: VecDeque::with_capacity(RETAINED_LINES),
            quote_start_line: None,
            pending_trivia: smallvec![],
            reader_exhausted: false,
            finished: false,
            file_path: None,
        }
    }

    /// Creates a new token source with an associated file path.
    ///
    /// The file path is included in token spans for error reporting.
    pub fn with_file_path(reader: R, path: impl Into<PathBuf>) -> Self {
        let mut source = Self::new(reader);
        source.file_path = Some(path.into());
        source
    }

    // =========================================================================
    // Line buffering
    // =========================================================================

    /// Reads the next line into `curr_line_text`.
    ///
    /// Returns `false` once the reader is exhausted (or failed), in which
    /// case the current line is left in place so end-of-input positions
    /// stay on the last line.
    fn load_next_line(&mut self) -> bool {
        if self.reader_exhausted {
            return false;
        }

        let mut raw = Vec::new();
        let bytes_read = match self.reader.read_until(b'\n', &mut raw) {
            Ok(0) => {
                self.reader_exhausted = true;
                return false;
            }
            Ok(bytes_read) => bytes_read,
            Err(err) => {
                self.reader_exhausted = true;
                self.pending_error = Some(format!("failed to read input: {err}"));
                return false;
            }
        };

        if self.has_line {
            self.curr_line += 1;
        }
        self.has_line = true;
        self.curr_line_start_byte = self.next_line_start_byte;
        self.next_line_start_byte += bytes_read;
        self.curr_line_cursor = 0;
        self.curr_col_utf8 = 0;
        self.curr_col_utf16 = 0;

        if raw.last() == Some(&b'\n') {
            raw.pop();
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
        }

        self.curr_line_text = match String::from_utf8(raw) {
            Ok(text) => text,
            Err(err) => {
                self.pending_error = Some(format!(
                    "invalid UTF-8 on line {}",
                    self.curr_line + 1,
                ));
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };

        if self.recent_lines.len() == RETAINED_LINES {
            self.recent_lines.pop_front();
        }
        self.recent_lines
            .push_back((self.curr_line, self.curr_line_text.clone()));

        log::trace!(
            "read line {} ({} bytes)",
            self.curr_line + 1,
            bytes_read,
        );
        true
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    /// Returns the unscanned remainder of the current line.
    fn remaining(&self) -> &str {
        &self.curr_line_text[self.curr_line_cursor..]
    }

    /// Returns the current source position.
    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            Some(self.curr_col_utf16),
            self.curr_line_start_byte + self.curr_line_cursor,
        )
    }

    /// Peeks at the next character on the current line without consuming it.
    ///
    /// Returns `None` at end of line.
    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Peeks at the nth character ahead on the current line.
    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character on the current line and updates column
    /// tracking.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.curr_line_cursor += ch.len_utf8();
        self.curr_col_utf8 += 1;
        self.curr_col_utf16 += ch.len_utf16();
        Some(ch)
    }

    /// Consumes `byte_len` bytes of the current line. `byte_len` must land
    /// on a character boundary.
    fn consume_bytes(&mut self, byte_len: usize) {
        let (chars, utf16_units) = self.remaining()[..byte_len]
            .chars()
            .fold((0, 0), |(chars, units), ch| (chars + 1, units + ch.len_utf16()));
        self.curr_line_cursor += byte_len;
        self.curr_col_utf8 += chars;
        self.curr_col_utf16 += utf16_units;
    }

    /// Creates a `GraphQLSourceSpan` from a start position to the current
    /// position.
    fn make_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        let end = self.curr_position();
        match &self.file_path {
            Some(path) => GraphQLSourceSpan::with_file(start, end, path.clone()),
            None => GraphQLSourceSpan::new(start, end),
        }
    }

    /// Creates a span covering the single ASCII character at `start`.
    fn ascii_char_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        let end = SourcePosition::new(
            start.line(),
            start.col_utf8() + 1,
            start.col_utf16().map(|col| col + 1),
            start.byte_offset() + 1,
        );
        match &self.file_path {
            Some(path) => GraphQLSourceSpan::with_file(start, end, path.clone()),
            None => GraphQLSourceSpan::new(start, end),
        }
    }

    /// Returns the text of the current line from `start_cursor` up to the
    /// current position.
    fn text_since(&self, start_cursor: usize) -> String {
        self.curr_line_text[start_cursor..self.curr_line_cursor].to_string()
    }

    // =========================================================================
    // Token creation helpers
    // =========================================================================

    /// Creates a token with the accumulated trivia.
    fn make_token(
        &mut self,
        kind: GraphQLTokenKind,
        text: String,
        span: GraphQLSourceSpan,
    ) -> GraphQLToken {
        GraphQLToken {
            kind,
            text,
            preceding_trivia: std::mem::take(&mut self.pending_trivia),
            span,
        }
    }

    /// Consumes one character and emits it as a single-character token.
    fn lex_punctuator(
        &mut self,
        start: SourcePosition,
        kind: GraphQLTokenKind,
    ) -> GraphQLToken {
        let start_cursor = self.curr_line_cursor;
        self.consume();
        let span = self.make_span(start);
        let text = self.text_since(start_cursor);
        self.make_token(kind, text, span)
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    /// Advances to the next token, skipping whitespace and line ends and
    /// collecting trivia.
    fn next_token(&mut self) -> GraphQLToken {
        loop {
            let start = self.curr_position();

            if let Some(message) = self.pending_error.take() {
                let span = self.make_span(start);
                return self.make_token(
                    GraphQLTokenKind::error(message, smallvec![]),
                    String::new(),
                    span,
                );
            }

            self.skip_whitespace();
            let start = self.curr_position();

            let Some(ch) = self.peek_char() else {
                if self.load_next_line() || self.pending_error.is_some() {
                    continue;
                }
                let span = self.make_span(start);
                return self.make_token(GraphQLTokenKind::Eof, String::new(), span);
            };

            match ch {
                '#' => {
                    self.lex_comment(start);
                    continue;
                }
                ',' => {
                    self.consume();
                    let span = self.make_span(start);
                    self.pending_trivia.push(GraphQLTriviaToken::Comma { span });
                    continue;
                }

                '!' => return self.lex_punctuator(start, GraphQLTokenKind::Bang),
                '(' => return self.lex_punctuator(start, GraphQLTokenKind::ParenOpen),
                ')' => return self.lex_punctuator(start, GraphQLTokenKind::ParenClose),
                ':' => return self.lex_punctuator(start, GraphQLTokenKind::Colon),
                '=' => return self.lex_punctuator(start, GraphQLTokenKind::Equals),
                '[' => return self.lex_punctuator(start, GraphQLTokenKind::SquareBracketOpen),
                ']' => return self.lex_punctuator(start, GraphQLTokenKind::SquareBracketClose),
                '{' => return self.lex_punctuator(start, GraphQLTokenKind::CurlyBraceOpen),
                '}' => return self.lex_punctuator(start, GraphQLTokenKind::CurlyBraceClose),
                '|' => return self.lex_punctuator(start, GraphQLTokenKind::Pipe),

                '.' => return self.lex_period_or_ellipsis(start),
                '"' => return self.lex_quote(start),
                '$' => return self.lex_variable(start),
                '@' => return self.lex_directive(start),

                c if is_name_start(c) => return self.lex_name(start),
                c if c.is_ascii_digit() => return self.lex_number(start),
                '-' if self.peek_char_nth(1).is_some_and(|c| c.is_ascii_digit()) => {
                    return self.lex_number(start);
                }

                _ => return self.lex_invalid_character(start),
            }
        }
    }

    // =========================================================================
    // Whitespace and comments
    // =========================================================================

    /// Skips insignificant whitespace on the current line.
    ///
    /// A stray `\r` (not part of a `\r\n` terminator) is treated as
    /// whitespace, as is the Unicode BOM.
    fn skip_whitespace(&mut self) {
        let skipped = self
            .remaining()
            .bytes()
            .take_while(|b| matches!(b, b' ' | b'\t' | b'\r'))
            .count();
        if skipped > 0 {
            self.consume_bytes(skipped);
        }
        if self.peek_char() == Some('\u{FEFF}') {
            self.consume();
            self.skip_whitespace();
        }
    }

    /// Lexes a comment and adds it to pending trivia.
    ///
    /// A comment starts with `#` and extends to the end of the line.
    fn lex_comment(&mut self, start: SourcePosition) {
        self.consume();
        let value = self.remaining().to_string();
        self.consume_bytes(value.len());
        let span = self.make_span(start);
        self.pending_trivia
            .push(GraphQLTriviaToken::Comment { value, span });
    }

    // =========================================================================
    // Period / Ellipsis lexing
    // =========================================================================

    /// Lexes dots on the current line:
    /// - `...` (adjacent) → `Ellipsis`
    /// - `.` alone → `Period`
    /// - `..` (adjacent) → Error with help to add third dot
    /// - `. .`, `.. .`, `. ..`, `. . .` (spaced) → Error with help about
    ///   spacing
    fn lex_period_or_ellipsis(&mut self, start: SourcePosition) -> GraphQLToken {
        let start_cursor = self.curr_line_cursor;
        self.consume();
        let after_first = self.curr_line_cursor;
        self.skip_whitespace();

        if self.peek_char() != Some('.') {
            let span = self.ascii_char_span(start);
            let text = self.curr_line_text[start_cursor..after_first].to_string();
            return self.make_token(GraphQLTokenKind::Period, text, span);
        }

        let second_at = self.curr_line_cursor;
        let first_two_adjacent = second_at == after_first;
        self.consume();
        let after_second = self.curr_line_cursor;
        self.skip_whitespace();

        let spacing_help = || {
            GraphQLErrorNote::help(
                "These dots may have been intended to form a `...` spread \
                 operator. Try removing the extra spacing between the dots.",
            )
        };

        if self.peek_char() != Some('.') {
            let span = self.make_span(start);
            let text = self.curr_line_text[start_cursor..after_second].to_string();
            let kind = if first_two_adjacent {
                GraphQLTokenKind::error(
                    "unexpected `..` (use `...` for spread operator)",
                    smallvec![GraphQLErrorNote::help(
                        "Add one more `.` to form the spread operator `...`"
                    )],
                )
            } else {
                GraphQLTokenKind::error(
                    "unexpected `. .` (use `...` for spread operator)",
                    smallvec![spacing_help()],
                )
            };
            return self.make_token(kind, text, span);
        }

        let second_third_adjacent = self.curr_line_cursor == after_second;
        self.consume();
        let span = self.make_span(start);
        let text = self.text_since(start_cursor);

        let kind = match (first_two_adjacent, second_third_adjacent) {
            (true, true) => GraphQLTokenKind::Ellipsis,
            (true, false) => GraphQLTokenKind::error("unexpected `.. .`", smallvec![spacing_help()]),
            (false, true) => GraphQLTokenKind::error("unexpected `. ..`", smallvec![spacing_help()]),
            (false, false) => {
                GraphQLTokenKind::error("unexpected `. . .`", smallvec![spacing_help()])
            }
        };
        self.make_token(kind, text, span)
    }

    // =========================================================================
    // Names, variables and directives
    // =========================================================================

    /// Consumes a name starting at the cursor and returns it. The caller
    /// must have checked that the next character is a name start.
    fn scan_name(&mut self) -> String {
        let len = self
            .remaining()
            .bytes()
            .take_while(|b| is_name_continue(*b as char))
            .count();
        let name = self.remaining()[..len].to_string();
        self.consume_bytes(len);
        name
    }

    /// Lexes a name, reclassifying exact keyword matches.
    ///
    /// Names match the pattern: `/[_A-Za-z][_0-9A-Za-z]*/`
    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken {
        let name = self.scan_name();
        let span = self.make_span(start);
        let kind = GraphQLTokenKind::from_identifier(&name);
        self.make_token(kind, name, span)
    }

    /// Lexes `$name`. The `Variable` kind carries the name without its sigil.
    fn lex_variable(&mut self, start: SourcePosition) -> GraphQLToken {
        self.consume();
        if !self.peek_char().is_some_and(is_name_start) {
            let span = self.make_span(start);
            let kind = GraphQLTokenKind::error(
                "expected a variable name after `$`",
                smallvec![],
            );
            return self.make_token(kind, "$".to_string(), span);
        }
        let name = self.scan_name();
        let span = self.make_span(start);
        let text = format!("${name}");
        self.make_token(GraphQLTokenKind::Variable(name), text, span)
    }

    /// Lexes `@name`. The `Directive` kind carries the name without its
    /// sigil.
    ///
    /// A directive name must be followed by `(`, whitespace, the end of the
    /// line, or one of `, { } ) @ #`.
    fn lex_directive(&mut self, start: SourcePosition) -> GraphQLToken {
        self.consume();
        if !self.peek_char().is_some_and(is_name_start) {
            let span = self.make_span(start);
            let kind = GraphQLTokenKind::error(
                "expected a directive name after `@`",
                smallvec![],
            );
            return self.make_token(kind, "@".to_string(), span);
        }
        let name = self.scan_name();

        match self.peek_char() {
            None
            | Some(' ' | '\t' | '\r' | '(' | ',' | '{' | '}' | ')' | '@' | '#') => {
                let span = self.make_span(start);
                let text = format!("@{name}");
                self.make_token(GraphQLTokenKind::Directive(name), text, span)
            }
            Some(ch) => {
                let bad_start = self.curr_position();
                let bad_cursor = self.curr_line_cursor;
                self.consume();
                let span = self.make_span(bad_start);
                let text = self.text_since(bad_cursor);
                let kind = GraphQLTokenKind::error(
                    format!(
                        "unexpected character {} after directive name `{name}`",
                        describe_char(ch),
                    ),
                    smallvec![GraphQLErrorNote::help(
                        "a directive name must be followed by `(`, whitespace, or the end of the line"
                    )],
                );
                self.make_token(kind, text, span)
            }
        }
    }

    // =========================================================================
    // Number lexing
    // =========================================================================

    /// Lexes a numeric literal.
    ///
    /// The scan consumes an optional leading `-`, then digits and single
    /// `.`s (never `..`), and an `e`/`E` exponent when one follows. A `.` or
    /// exponent makes the token a `Float`. An `x`/`X` switches to the hex
    /// sub-scan. The scan itself never fails; malformed numerals are caught
    /// when the token is coerced to a value.
    fn lex_number(&mut self, start: SourcePosition) -> GraphQLToken {
        let start_cursor = self.curr_line_cursor;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        loop {
            match self.peek_char() {
                Some(ch) if ch.is_ascii_digit() => {
                    self.consume();
                }
                Some('.') if self.peek_char_nth(1) != Some('.') => {
                    is_float = true;
                    self.consume();
                }
                Some('e' | 'E') if self.exponent_follows() => {
                    is_float = true;
                    self.consume();
                    if matches!(self.peek_char(), Some('+' | '-')) {
                        self.consume();
                    }
                }
                Some('x' | 'X') => return self.lex_hex(start, start_cursor),
                _ => break,
            }
        }

        let span = self.make_span(start);
        let text = self.text_since(start_cursor);
        let kind = if is_float {
            GraphQLTokenKind::Float(text.clone())
        } else {
            GraphQLTokenKind::Number(text.clone())
        };
        self.make_token(kind, text, span)
    }

    /// Whether the `e`/`E` at the cursor starts an exponent (is followed by a
    /// digit, optionally after a sign).
    fn exponent_follows(&self) -> bool {
        match self.peek_char_nth(1) {
            Some(ch) if ch.is_ascii_digit() => true,
            Some('+' | '-') => self.peek_char_nth(2).is_some_and(|ch| ch.is_ascii_digit()),
            _ => false,
        }
    }

    /// Continues a number scan as hexadecimal: consumes `[0-9a-fA-FxX]*`.
    fn lex_hex(&mut self, start: SourcePosition, start_cursor: usize) -> GraphQLToken {
        let len = self
            .remaining()
            .bytes()
            .take_while(|b| b.is_ascii_hexdigit() || matches!(b, b'x' | b'X'))
            .count();
        self.consume_bytes(len);
        let span = self.make_span(start);
        let text = self.text_since(start_cursor);
        self.make_token(GraphQLTokenKind::Hex(text.clone()), text, span)
    }

    // =========================================================================
    // Quoted string lexing
    // =========================================================================

    /// Lexes a quoted string. The content is taken verbatim (no escape
    /// sequences) and may continue across lines; line breaks inside it are
    /// kept as `\n`.
    fn lex_quote(&mut self, start: SourcePosition) -> GraphQLToken {
        self.quote_start_line = Some((start.line(), self.curr_line_text.clone()));
        self.consume();
        let mut content = String::new();

        loop {
            if let Some(idx) = memchr::memchr(b'"', self.remaining().as_bytes()) {
                content.push_str(&self.remaining()[..idx]);
                self.consume_bytes(idx);
                self.consume();
                let span = self.make_span(start);
                let text = format!("\"{content}\"");
                return self.make_token(GraphQLTokenKind::Quote(content), text, span);
            }

            let rest_len = self.remaining().len();
            content.push_str(self.remaining());
            self.consume_bytes(rest_len);

            if !self.load_next_line() {
                let opening = self.ascii_char_span(start.clone());
                let span = self.make_span(start);
                let text = format!("\"{content}");
                let kind = GraphQLTokenKind::error(
                    "unterminated string",
                    smallvec![
                        GraphQLErrorNote::general_with_span("string started here", opening),
                        GraphQLErrorNote::help("Add closing `\"`"),
                    ],
                );
                return self.make_token(kind, text, span);
            }
            content.push('\n');
        }
    }

    // =========================================================================
    // Invalid character handling
    // =========================================================================

    /// Lexes a character outside the lexical surface, producing an error
    /// token.
    fn lex_invalid_character(&mut self, start: SourcePosition) -> GraphQLToken {
        let start_cursor = self.curr_line_cursor;
        let Some(ch) = self.consume() else {
            let span = self.make_span(start);
            return self.make_token(GraphQLTokenKind::Eof, String::new(), span);
        };
        let span = self.make_span(start);
        let text = self.text_since(start_cursor);
        let kind = GraphQLTokenKind::error(
            format!("unexpected character {}", describe_char(ch)),
            smallvec![],
        );
        self.make_token(kind, text, span)
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

impl<R: BufRead> Iterator for BufReadGraphQLTokenSource<R> {
    type Item = GraphQLToken;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        log::trace!(
            "token {:?} `{}` at {}:{}",
            token.kind,
            token.text,
            token.line(),
            token.span.start_inclusive.col_utf8() + 1,
        );

        if matches!(token.kind, GraphQLTokenKind::Eof) {
            self.finished = true;
        }

        Some(token)
    }
}

impl<R: BufRead> GraphQLTokenSource for BufReadGraphQLTokenSource<R> {
    fn source_line(&self, line: usize) -> Option<String> {
        self.recent_lines
            .iter()
            .chain(self.quote_start_line.iter())
            .find(|(line_num, _)| *line_num == line)
            .map(|(_, text)| text.clone())
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Returns `true` if `ch` can start a GraphQL name.
///
/// <https://spec.graphql.org/September2025/#NameStart>
fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Returns `true` if `ch` can continue a GraphQL name.
///
/// <https://spec.graphql.org/September2025/#NameContinue>
fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Returns a human-readable description of a character for error messages.
///
/// For printable characters, returns the character in backticks.
/// For invisible/control characters, includes the Unicode code point.
fn describe_char(ch: char) -> String {
    match unicode_char_name(ch) {
        Some(name) => format!("`{}` (U+{:04X}: {})", ch.escape_default(), ch as u32, name),
        None if ch.is_control() || ch.is_whitespace() => {
            format!("`{}` (U+{:04X})", ch.escape_default(), ch as u32)
        }
        None => format!("`{ch}`"),
    }
}

/// Names for the invisible characters most often pasted into queries by
/// accident.
fn unicode_char_name(ch: char) -> Option<&'static str> {
    match ch {
        '\u{0000}' => Some("NULL"),
        '\u{000B}' => Some("VERTICAL TAB"),
        '\u{000C}' => Some("FORM FEED"),
        '\u{007F}' => Some("DELETE"),
        '\u{0085}' => Some("NEXT LINE"),
        '\u{00A0}' => Some("NO-BREAK SPACE"),
        '\u{200B}' => Some("ZERO WIDTH SPACE"),
        '\u{200C}' => Some("ZERO WIDTH NON-JOINER"),
        '\u{200D}' => Some("ZERO WIDTH JOINER"),
        '\u{2028}' => Some("LINE SEPARATOR"),
        '\u{2029}' => Some("PARAGRAPH SEPARATOR"),
        '\u{3000}' => Some("IDEOGRAPHIC SPACE"),
        '\u{FFFD}' => Some("REPLACEMENT CHARACTER"),
        _ => None,
    }
}
