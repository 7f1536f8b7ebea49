use indexmap::IndexMap;

/// A value literal in argument, directive-argument, or variable-default
/// position.
///
/// See
/// [Input Values](https://spec.graphql.org/September2025/#sec-Input-Values)
/// in the GraphQL language reference.
///
/// Numeric literals that fail to coerce are kept in the tree as
/// [`Value::Error`] (unless the parser is configured to reject them), as is
/// any token that cannot start a value.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Value {
    Boolean(bool),
    /// A placeholder carrying a description of why the literal could not be
    /// turned into a value.
    Error(String),
    Float(f32),
    /// An ID-typed string. The parser never produces this variant (it has no
    /// schema to tell an ID from a string); it exists for consumers that
    /// build or rewrite trees.
    Id(String),
    Int(i32),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
    /// A `$name` reference (name stored without the `$`).
    Variable(String),
}

impl Value {
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The text of a `String` or `Id` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Id(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns `true` if this value, or any value nested inside it, is a
    /// [`Value::Error`].
    pub fn contains_error(&self) -> bool {
        let mut pending = vec![self];
        while let Some(value) = pending.pop() {
            match value {
                Value::Error(_) => return true,
                Value::List(items) => pending.extend(items),
                Value::Object(fields) => pending.extend(fields.values()),
                _ => {}
            }
        }
        false
    }
}
