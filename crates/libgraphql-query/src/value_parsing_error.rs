use std::num::ParseFloatError;
use std::num::ParseIntError;

/// Errors that occur when coercing a numeric literal token to a value.
///
/// These never abort tokenization. Depending on
/// [`MalformedNumberPolicy`](crate::MalformedNumberPolicy) they are either
/// embedded in the tree as [`Value::Error`](crate::ast::Value::Error) (using
/// this error's `Display` text) or reported as
/// [`GraphQLParseErrorKind::InvalidValue`](crate::GraphQLParseErrorKind::InvalidValue).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueParsingError {
    /// Invalid decimal integer literal (overflow, trailing garbage).
    ///
    /// Integers must fit in a signed 32-bit integer (i32).
    #[error("invalid integer literal `{text}`: {source}")]
    Int {
        text: String,
        source: ParseIntError,
    },

    /// Invalid hexadecimal literal (missing `0x` prefix, bad digits,
    /// overflow).
    #[error("invalid hexadecimal literal `{0}`")]
    Hex(String),

    /// Invalid float literal (e.g. `1.2.3`).
    #[error("invalid float literal `{text}`: {source}")]
    Float {
        text: String,
        source: ParseFloatError,
    },

    /// A well-formed float literal whose magnitude does not fit in an
    /// `f32` (e.g. `1e99`).
    #[error("float literal `{0}` is out of range")]
    FloatOutOfRange(String),
}
