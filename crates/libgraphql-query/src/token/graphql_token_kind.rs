use crate::GraphQLErrorNotes;
use crate::ValueParsingError;

/// The kind of a GraphQL token.
///
/// Literal kinds (`Number`, `Float`, `Hex`) store only the raw source text;
/// coercion to a numeric value happens later (see
/// [`parse_int_value()`](Self::parse_int_value) and friends) so that a
/// malformed numeral never fails tokenization.
///
/// Keyword recognition is exact-match and case-sensitive. Any other
/// identifier is a generic `Name`; deciding its grammatical role is the
/// parser's job.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// A lone `.`
    Period,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Sigiled names (sigil stripped)
    // =========================================================================
    /// `$name`
    Variable(String),
    /// `@name`
    Directive(String),

    // =========================================================================
    // Literals (raw source text only)
    // =========================================================================
    /// A GraphQL name/identifier that is not a keyword.
    Name(String),

    /// Raw source text of a decimal integer literal, including optional
    /// negative sign (e.g. `"-123"`, `"0"`).
    Number(String),

    /// Raw source text of a float literal, i.e. a number scan that saw a
    /// `.` or an exponent (e.g. `"1.5"`, `"-2e3"`, `"1.2.3"`).
    Float(String),

    /// Raw source text of a number scan that switched to hexadecimal on an
    /// `x` (e.g. `"0x1F"`, `"0x1x2"`).
    Hex(String),

    /// The content of a quoted string, quotes stripped. No escape sequences
    /// are processed.
    Quote(String),

    // =========================================================================
    // Keywords (distinct from Name for type safety)
    // =========================================================================
    /// `fragment`
    Fragment,
    /// `mutation`
    Mutation,
    /// `on`
    On,
    /// `query`
    Query,
    /// The `true` literal.
    True,
    /// The `false` literal.
    False,
    /// The `null` literal.
    Null,

    // =========================================================================
    // End of input
    // =========================================================================
    /// End of input. The associated `GraphQLToken` may carry trailing trivia.
    Eof,

    // =========================================================================
    // Lexer error
    // =========================================================================
    /// A lexer error. The lexer keeps scanning after emitting one, but the
    /// parser treats the first error token it reads as fatal.
    Error {
        /// A human-readable error message.
        message: String,
        /// Optional notes providing additional context or suggestions.
        error_notes: GraphQLErrorNotes,
    },
}

impl GraphQLTokenKind {
    /// Create an `Error` token kind.
    #[inline]
    pub fn error(message: impl Into<String>, error_notes: GraphQLErrorNotes) -> Self {
        GraphQLTokenKind::Error {
            message: message.into(),
            error_notes,
        }
    }

    /// Maps an identifier to its keyword kind, or a generic `Name`.
    pub fn from_identifier(ident: &str) -> Self {
        match ident {
            "fragment" => GraphQLTokenKind::Fragment,
            "mutation" => GraphQLTokenKind::Mutation,
            "on" => GraphQLTokenKind::On,
            "query" => GraphQLTokenKind::Query,
            "true" => GraphQLTokenKind::True,
            "false" => GraphQLTokenKind::False,
            "null" => GraphQLTokenKind::Null,
            _ => GraphQLTokenKind::Name(ident.to_string()),
        }
    }

    // =========================================================================
    // Query methods
    // =========================================================================

    /// Returns the string representation of this token if it is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            GraphQLTokenKind::Bang => Some("!"),
            GraphQLTokenKind::Colon => Some(":"),
            GraphQLTokenKind::CurlyBraceClose => Some("}"),
            GraphQLTokenKind::CurlyBraceOpen => Some("{"),
            GraphQLTokenKind::Ellipsis => Some("..."),
            GraphQLTokenKind::Equals => Some("="),
            GraphQLTokenKind::ParenClose => Some(")"),
            GraphQLTokenKind::ParenOpen => Some("("),
            GraphQLTokenKind::Period => Some("."),
            GraphQLTokenKind::Pipe => Some("|"),
            GraphQLTokenKind::SquareBracketClose => Some("]"),
            GraphQLTokenKind::SquareBracketOpen => Some("["),

            GraphQLTokenKind::Variable(_)
            | GraphQLTokenKind::Directive(_)
            | GraphQLTokenKind::Name(_)
            | GraphQLTokenKind::Number(_)
            | GraphQLTokenKind::Float(_)
            | GraphQLTokenKind::Hex(_)
            | GraphQLTokenKind::Quote(_)
            | GraphQLTokenKind::Fragment
            | GraphQLTokenKind::Mutation
            | GraphQLTokenKind::On
            | GraphQLTokenKind::Query
            | GraphQLTokenKind::True
            | GraphQLTokenKind::False
            | GraphQLTokenKind::Null
            | GraphQLTokenKind::Eof
            | GraphQLTokenKind::Error { .. } => None,
        }
    }

    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns the keyword text if this token is a keyword.
    pub fn as_keyword_str(&self) -> Option<&'static str> {
        match self {
            GraphQLTokenKind::Fragment => Some("fragment"),
            GraphQLTokenKind::Mutation => Some("mutation"),
            GraphQLTokenKind::On => Some("on"),
            GraphQLTokenKind::Query => Some("query"),
            GraphQLTokenKind::True => Some("true"),
            GraphQLTokenKind::False => Some("false"),
            GraphQLTokenKind::Null => Some("null"),
            _ => None,
        }
    }

    /// Returns the name text if this token can stand in a name position:
    /// a generic `Name` or any keyword.
    pub fn as_name_str(&self) -> Option<&str> {
        match self {
            GraphQLTokenKind::Name(name) => Some(name),
            _ => self.as_keyword_str(),
        }
    }

    /// Returns `true` if this token represents a lexer error.
    pub fn is_error(&self) -> bool {
        matches!(self, GraphQLTokenKind::Error { .. })
    }

    /// Coerce a `Number`'s raw text to a 32-bit signed integer.
    ///
    /// Returns `None` if this is not a `Number`.
    pub fn parse_int_value(&self) -> Option<Result<i32, ValueParsingError>> {
        match self {
            GraphQLTokenKind::Number(raw) => Some(raw.parse::<i32>().map_err(|source| {
                ValueParsingError::Int {
                    text: raw.clone(),
                    source,
                }
            })),
            _ => None,
        }
    }

    /// Coerce a `Hex`'s raw text to a 32-bit signed integer.
    ///
    /// The text must be an optional `-` followed by a `0x`/`0X` prefix and at
    /// least one hexadecimal digit.
    ///
    /// Returns `None` if this is not a `Hex`.
    pub fn parse_hex_value(&self) -> Option<Result<i32, ValueParsingError>> {
        match self {
            GraphQLTokenKind::Hex(raw) => Some(parse_hex(raw)),
            _ => None,
        }
    }

    /// Coerce a `Float`'s raw text to an `f32`. Literals that overflow to
    /// infinity are errors.
    ///
    /// Returns `None` if this is not a `Float`.
    pub fn parse_float_value(&self) -> Option<Result<f32, ValueParsingError>> {
        match self {
            GraphQLTokenKind::Float(raw) => Some(parse_float(raw)),
            _ => None,
        }
    }
}

fn parse_float(raw: &str) -> Result<f32, ValueParsingError> {
    let value = raw.parse::<f32>().map_err(|source| ValueParsingError::Float {
        text: raw.to_string(),
        source,
    })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValueParsingError::FloatOutOfRange(raw.to_string()))
    }
}

fn parse_hex(raw: &str) -> Result<i32, ValueParsingError> {
    let invalid = || ValueParsingError::Hex(raw.to_string());
    let (negative, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    let digits = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .ok_or_else(invalid)?;
    if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let signed = if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    };
    i32::from_str_radix(&signed, 16).map_err(|_| invalid())
}
