use std::path::PathBuf;

/// What to do with a numeric literal (`Number`, `Hex`, or `Float` token)
/// whose text cannot be coerced to a value, e.g. `99999999999` or `1.2.3`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MalformedNumberPolicy {
    /// Keep parsing and store a
    /// [`Value::Error`](crate::ast::Value::Error) in the tree in place of the
    /// literal.
    #[default]
    EmbedErrorValue,

    /// Abort the parse with
    /// [`GraphQLParseErrorKind::InvalidValue`](crate::GraphQLParseErrorKind::InvalidValue),
    /// like any other syntax error.
    Reject,
}

/// Configuration for [`GraphQLParser`](crate::GraphQLParser).
///
/// ```rust
/// use libgraphql_query::GraphQLParser;
/// use libgraphql_query::GraphQLParserOptions;
/// use libgraphql_query::MalformedNumberPolicy;
///
/// let options = GraphQLParserOptions::default()
///     .with_file_path("query.graphql")
///     .with_malformed_number_policy(MalformedNumberPolicy::Reject);
/// let result = GraphQLParser::new("{ a(n: 1.2.3) }")
///     .with_options(options)
///     .parse_document();
/// assert!(result.is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLParserOptions {
    /// Included in every span and in rendered diagnostics.
    pub file_path: Option<PathBuf>,

    /// Whether an uncoercible numeric literal is embedded as an error value
    /// or aborts the parse. Defaults to embedding.
    pub malformed_number_policy: MalformedNumberPolicy,

    /// How deeply selection sets (and, separately, list/object literals)
    /// may nest before the parse fails with
    /// [`GraphQLParseErrorKind::MaxDepthExceeded`](crate::GraphQLParseErrorKind::MaxDepthExceeded).
    pub max_selection_depth: usize,
}

impl GraphQLParserOptions {
    /// The nesting limit used by [`Default`].
    pub const DEFAULT_MAX_SELECTION_DEPTH: usize = 64;

    /// Sets the path reported in spans and diagnostics.
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Sets how uncoercible numeric literals are handled.
    pub fn with_malformed_number_policy(mut self, policy: MalformedNumberPolicy) -> Self {
        self.malformed_number_policy = policy;
        self
    }

    /// Sets the nesting limit for selection sets, values and list types.
    pub fn with_max_selection_depth(mut self, depth: usize) -> Self {
        self.max_selection_depth = depth;
        self
    }
}

impl Default for GraphQLParserOptions {
    fn default() -> Self {
        Self {
            file_path: None,
            malformed_number_policy: MalformedNumberPolicy::default(),
            max_selection_depth: Self::DEFAULT_MAX_SELECTION_DEPTH,
        }
    }
}
