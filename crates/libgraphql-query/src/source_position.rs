/// A position in GraphQL source text.
///
/// This is a pure data struct; the lexer computes every value as it scans
/// and hands a finished position out with each token.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `col_utf8`: UTF-8 character count within the current line
/// - `col_utf16`: Optional UTF-16 code unit offset within the current line
/// - `byte_offset`: byte offset within the whole document
///
/// Human-facing renderings (diagnostics, [`GraphQLToken::line()`]) add 1 to
/// the line and column.
///
/// [`GraphQLToken::line()`]: crate::token::GraphQLToken::line
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    col_utf16: Option<usize>,
    byte_offset: usize,
}

impl SourcePosition {
    /// `col_utf16` is `None` when the token source cannot compute it.
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: Option<usize>,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// The position of the first byte of a document.
    pub fn start_of_input() -> Self {
        Self::new(0, 0, Some(0), 0)
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based (UTF-8) character count within the current line.
    ///
    /// Both 'a' (1 byte) and '🎉' (4 bytes) add 1 to this count.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit offset within the current line,
    /// if available.
    ///
    /// 'a' adds 1 to this count, while '🎉' (a surrogate pair) adds 2. Prefer
    /// this for LSP-style consumers.
    pub fn col_utf16(&self) -> Option<usize> {
        self.col_utf16
    }

    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
