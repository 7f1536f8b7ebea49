use crate::ast::Arguments;
use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::Nullability;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::Selection;
use crate::ast::SelectionId;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use crate::ast::VariableDefinitions;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::BufReadGraphQLTokenSource;
use crate::token_source::GraphQLTokenSource;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLParserOptions;
use crate::GraphQLSourceSpan;
use crate::GraphQLTokenStream;
use crate::MalformedNumberPolicy;
use crate::SmallVec;
use crate::ValueParsingError;
use indexmap::IndexMap;
use std::io::BufRead;
use std::mem::discriminant;

/// The grammar positions the parser moves between. Each state handler
/// consumes what it needs and names the state to run next.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ParserState {
    /// Between definitions. Accepts at end of input.
    Document,
    /// Dispatch on the token that starts a definition.
    Definition,
    /// `{` shorthand, or `query`/`mutation` plus an optional name.
    Operation,
    /// An optional `( $name: Type = default ... )` list.
    Variables,
    /// Zero or more `@name(args)`, then dispatch on what follows.
    Directives,
    /// A `{` opening the selection set of the open node.
    SelectionSet,
    /// Dispatch inside a selection set.
    Selection,
    /// `alias: name` or `name`.
    Field,
    /// An optional `( name: value ... )` list on the open field.
    Arguments,
    /// `...` starting a spread or an inline fragment.
    Fragment,
    /// A `}` closing the innermost selection set.
    CloseSelectionSet,
    /// `fragment Name on Type`.
    FragmentDefinition,
    /// End of input reached with nothing left open.
    Accept,
}

/// The node whose selection set a frame belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum SelectionSetOwner {
    /// Index into `Document::definitions`.
    Definition(usize),
    Selection(SelectionId),
}

/// A selection set that has been opened with `{` and not yet closed.
#[derive(Clone, Debug)]
struct OpenSelectionSet {
    owner: SelectionSetOwner,
    /// Span of the opening `{`.
    opened_at: GraphQLSourceSpan,
}

/// A list or object literal being filled in by [`GraphQLParser::parse_value`].
enum OpenValue {
    List(Vec<Value>),
    Object {
        fields: IndexMap<String, Value>,
        /// The key whose value is being parsed.
        pending_key: Option<String>,
    },
}

/// A GraphQL query-document parser.
///
/// The parser is a finite-state machine over a [`GraphQLTokenStream`] with
/// one token of lookahead. It never recurses: nested selection sets are
/// tracked on an explicit stack of open frames, and nested list/object
/// literals on a second explicit stack.
///
/// # Usage
///
/// ```rust
/// use libgraphql_query::GraphQLParser;
///
/// let source = "query Viewer($id: ID!) { user(id: $id) { name } }";
/// let doc = GraphQLParser::new(source).parse_document().unwrap();
/// let op = doc.operations().next().unwrap();
/// assert_eq!(op.name.as_deref(), Some("Viewer"));
/// ```
///
/// The first lexical or syntax fault aborts the parse. The caller gets
/// either a complete [`Document`] or exactly one [`GraphQLParseError`].
pub struct GraphQLParser<TTokenSource: GraphQLTokenSource> {
    token_stream: GraphQLTokenStream<TTokenSource>,
    options: GraphQLParserOptions,
    document: Document,

    /// The selection most recently created, which receives directives and
    /// becomes the owner of a following `{`. `None` means the current
    /// (last) definition plays that role.
    open: Option<SelectionId>,

    /// Selection sets opened and not yet closed, innermost last. The top
    /// frame's owner is the node new selections are appended into.
    selection_set_stack: SmallVec<[OpenSelectionSet; 8]>,

    /// Span of the most recently consumed token.
    last_span: Option<GraphQLSourceSpan>,
}

impl<'src> GraphQLParser<BufReadGraphQLTokenSource<&'src [u8]>> {
    /// Creates a parser over an in-memory source string.
    pub fn new(source: &'src str) -> Self {
        Self::from_token_source(BufReadGraphQLTokenSource::new(source.as_bytes()))
    }
}

impl<R: BufRead> GraphQLParser<BufReadGraphQLTokenSource<R>> {
    /// Creates a parser that reads its source from `reader`, one line at a
    /// time.
    pub fn from_reader(reader: R) -> Self {
        Self::from_token_source(BufReadGraphQLTokenSource::new(reader))
    }
}

impl<TTokenSource: GraphQLTokenSource> GraphQLParser<TTokenSource> {
    /// Creates a parser over any token source.
    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            token_stream: GraphQLTokenStream::new(token_source),
            options: GraphQLParserOptions::default(),
            document: Document::new(),
            open: None,
            selection_set_stack: SmallVec::new(),
            last_span: None,
        }
    }

    /// Replaces the parser's options.
    pub fn with_options(mut self, options: GraphQLParserOptions) -> Self {
        self.token_stream.set_file_path(options.file_path.clone());
        self.options = options;
        self
    }

    /// Parses the whole input into a [`Document`].
    pub fn parse_document(mut self) -> Result<Document, GraphQLParseError> {
        let mut state = ParserState::Document;
        while state != ParserState::Accept {
            log::trace!("parser state: {state:?}");
            let next = match state {
                ParserState::Document => self.parse_document_state(),
                ParserState::Definition => self.parse_definition(),
                ParserState::Operation => self.parse_operation(),
                ParserState::Variables => self.parse_variables(),
                ParserState::Directives => self.parse_directives(),
                ParserState::SelectionSet => self.parse_selection_set(),
                ParserState::Selection => self.parse_selection(),
                ParserState::Field => self.parse_field(),
                ParserState::Arguments => self.parse_field_arguments(),
                ParserState::Fragment => self.parse_fragment(),
                ParserState::CloseSelectionSet => self.parse_close_selection_set(),
                ParserState::FragmentDefinition => self.parse_fragment_definition(),
                ParserState::Accept => Ok(ParserState::Accept),
            };
            state = match next {
                Ok(next) => next,
                Err(err) => {
                    let line = err.span().start_inclusive.line();
                    let err = err.with_source_line(self.token_stream.source_line(line));
                    log::debug!("parse failed: {}", err.format_oneline());
                    return Err(err);
                }
            };
        }

        log::debug!(
            "parsed document with {} definition(s)",
            self.document.definitions.len(),
        );
        Ok(self.document)
    }

    // =========================================================================
    // States
    // =========================================================================

    fn parse_document_state(&mut self) -> Result<ParserState, GraphQLParseError> {
        if self.token_stream.is_at_end() {
            return Ok(ParserState::Accept);
        }
        if self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
            let token = self.consume_token()?;
            let mut error = GraphQLParseError::new(
                "unexpected `}`: no selection set is open",
                token.span,
                GraphQLParseErrorKind::UnbalancedDelimiter {
                    delimiter: "}".to_string(),
                },
            );
            error.add_help("remove the extra `}`");
            return Err(error);
        }
        Ok(ParserState::Definition)
    }

    fn parse_definition(&mut self) -> Result<ParserState, GraphQLParseError> {
        match self.peek_kind() {
            Some(
                GraphQLTokenKind::CurlyBraceOpen
                | GraphQLTokenKind::Query
                | GraphQLTokenKind::Mutation,
            ) => Ok(ParserState::Operation),
            Some(GraphQLTokenKind::Fragment) => Ok(ParserState::FragmentDefinition),
            Some(GraphQLTokenKind::Name(name)) if name == "subscription" => {
                let mut error = self.unexpected(
                    &["`{`", "`query`", "`mutation`", "`fragment`"],
                    "at the start of a definition",
                );
                error.add_note("subscription operations are not supported");
                Err(error)
            }
            _ => Err(self.unexpected(
                &["`{`", "`query`", "`mutation`", "`fragment`"],
                "at the start of a definition",
            )),
        }
    }

    fn parse_operation(&mut self) -> Result<ParserState, GraphQLParseError> {
        let (operation_kind, span, name) = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            (OperationKind::Query, self.peek_span(), None)
        } else {
            let keyword = self.consume_token()?;
            let operation_kind = match keyword.kind {
                GraphQLTokenKind::Mutation => OperationKind::Mutation,
                _ => OperationKind::Query,
            };
            let name = if self.peek_name().is_some() {
                Some(self.expect_name("operation name", "")?.0)
            } else {
                None
            };
            (operation_kind, self.span_from(&keyword.span), name)
        };

        self.document
            .definitions
            .push(Definition::Operation(OperationDefinition {
                directives: IndexMap::new(),
                name,
                operation_kind,
                selection_set: Vec::new(),
                span,
                variable_definitions: IndexMap::new(),
            }));
        self.open = None;
        Ok(ParserState::Variables)
    }

    fn parse_variables(&mut self) -> Result<ParserState, GraphQLParseError> {
        if !self.peek_is(&GraphQLTokenKind::ParenOpen) {
            return Ok(ParserState::Directives);
        }
        self.consume_token()?;

        let mut variables = VariableDefinitions::new();
        while !self.peek_is(&GraphQLTokenKind::ParenClose) {
            let var_token = match self.peek_kind() {
                Some(GraphQLTokenKind::Variable(_)) => self.consume_token()?,
                _ => {
                    return Err(self.unexpected(&["variable", "`)`"], "in variable definitions"));
                }
            };
            let GraphQLTokenKind::Variable(name) = &var_token.kind else {
                return Err(self.unexpected(&["variable"], "in variable definitions"));
            };
            let name = name.clone();

            self.expect(&GraphQLTokenKind::Colon, "`:`", "after variable name")?;
            let var_type = self.parse_type_annotation()?;
            let default_value = if self.peek_is(&GraphQLTokenKind::Equals) {
                self.consume_token()?;
                Some(self.parse_value()?)
            } else {
                None
            };

            let span = self.span_from(&var_token.span);
            variables.insert(
                name.clone(),
                VariableDefinition {
                    default_value,
                    name,
                    span,
                    var_type,
                },
            );
        }
        self.consume_token()?;

        if let Some(Definition::Operation(op)) = self.document.definitions.last_mut() {
            op.variable_definitions = variables;
        }
        Ok(ParserState::Directives)
    }

    fn parse_directives(&mut self) -> Result<ParserState, GraphQLParseError> {
        while let Some(GraphQLTokenKind::Directive(_)) = self.peek_kind() {
            let token = self.consume_token()?;
            let GraphQLTokenKind::Directive(name) = token.kind else {
                continue;
            };
            let arguments = if self.peek_is(&GraphQLTokenKind::ParenOpen) {
                self.parse_arguments()?
            } else {
                Arguments::new()
            };
            log::trace!("directive @{name} with {} argument(s)", arguments.len());
            match self.open {
                Some(id) => {
                    if let Some(selection) = self.document.selection_mut(id) {
                        selection.add_directive(name, arguments);
                    }
                }
                None => {
                    if let Some(definition) = self.document.definitions.last_mut() {
                        definition.add_directive(name, arguments);
                    }
                }
            }
        }
        self.extend_open_span();

        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            return Ok(ParserState::SelectionSet);
        }
        if self.open_requires_selection_set() {
            return Err(self.unexpected(&["`{`"], "to open a selection set"));
        }
        if self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
            return Ok(ParserState::CloseSelectionSet);
        }
        Ok(ParserState::Selection)
    }

    fn parse_selection_set(&mut self) -> Result<ParserState, GraphQLParseError> {
        let owner = match self.open {
            Some(id) => {
                if let Some(Selection::FragmentSpread(spread)) = self.document.selection(id) {
                    let mut error = GraphQLParseError::new(
                        format!("fragment spread `...{}` cannot have a selection set", spread.name),
                        self.peek_span(),
                        GraphQLParseErrorKind::InvalidSyntax,
                    );
                    error.add_help("use an inline fragment (`... on Type { ... }`) instead");
                    return Err(error);
                }
                SelectionSetOwner::Selection(id)
            }
            None => SelectionSetOwner::Definition(self.document.definitions.len().saturating_sub(1)),
        };

        if self.selection_set_stack.len() >= self.options.max_selection_depth {
            return Err(self.max_depth_exceeded());
        }

        let open_brace = self.expect(
            &GraphQLTokenKind::CurlyBraceOpen,
            "`{`",
            "to open a selection set",
        )?;
        self.selection_set_stack.push(OpenSelectionSet {
            owner,
            opened_at: open_brace.span,
        });
        Ok(ParserState::Selection)
    }

    fn parse_selection(&mut self) -> Result<ParserState, GraphQLParseError> {
        match self.peek_kind() {
            Some(GraphQLTokenKind::Ellipsis) => Ok(ParserState::Fragment),
            Some(GraphQLTokenKind::CurlyBraceClose) => Ok(ParserState::CloseSelectionSet),
            Some(kind) if kind.as_name_str().is_some() => Ok(ParserState::Field),
            _ => Err(self.unexpected(
                &["field", "`...`", "`}`"],
                "in selection set",
            )),
        }
    }

    fn parse_field(&mut self) -> Result<ParserState, GraphQLParseError> {
        let (first, first_token) = self.expect_name("field name", "")?;
        let (alias, name) = if self.peek_is(&GraphQLTokenKind::Colon) {
            self.consume_token()?;
            let (name, _) = self.expect_name("field name", "after alias")?;
            (Some(first), name)
        } else {
            (None, first)
        };

        let span = self.span_from(&first_token.span);
        let field = Field {
            alias,
            arguments: Arguments::new(),
            directives: IndexMap::new(),
            name,
            parent: self.enclosing_selection(),
            selection_set: Vec::new(),
            span,
        };
        let id = self.append_selection(Selection::Field(field));
        self.open = Some(id);
        Ok(ParserState::Arguments)
    }

    fn parse_field_arguments(&mut self) -> Result<ParserState, GraphQLParseError> {
        if !self.peek_is(&GraphQLTokenKind::ParenOpen) {
            return Ok(ParserState::Directives);
        }
        let arguments = self.parse_arguments()?;
        if let Some(id) = self.open
            && let Some(Selection::Field(field)) = self.document.selection_mut(id)
        {
            field.arguments = arguments;
        }
        Ok(ParserState::Directives)
    }

    fn parse_fragment(&mut self) -> Result<ParserState, GraphQLParseError> {
        let ellipsis = self.expect(&GraphQLTokenKind::Ellipsis, "`...`", "")?;
        let parent = self.enclosing_selection();

        let selection = match self.peek_kind() {
            Some(GraphQLTokenKind::On) => {
                self.consume_token()?;
                let (type_condition, _) = self.expect_name("type condition", "after `on`")?;
                Selection::InlineFragment(InlineFragment {
                    directives: IndexMap::new(),
                    parent,
                    selection_set: Vec::new(),
                    span: self.span_from(&ellipsis.span),
                    type_condition: Some(type_condition),
                })
            }
            Some(GraphQLTokenKind::CurlyBraceOpen | GraphQLTokenKind::Directive(_)) => {
                Selection::InlineFragment(InlineFragment {
                    directives: IndexMap::new(),
                    parent,
                    selection_set: Vec::new(),
                    span: ellipsis.span.clone(),
                    type_condition: None,
                })
            }
            Some(kind) if kind.as_name_str().is_some() => {
                let (name, _) = self.expect_name("fragment name", "after `...`")?;
                Selection::FragmentSpread(FragmentSpread {
                    directives: IndexMap::new(),
                    name,
                    parent,
                    span: self.span_from(&ellipsis.span),
                })
            }
            _ => {
                return Err(self.unexpected(
                    &["fragment name", "`on`", "`{`", "directive"],
                    "after `...`",
                ));
            }
        };

        let id = self.append_selection(selection);
        self.open = Some(id);
        Ok(ParserState::Directives)
    }

    fn parse_close_selection_set(&mut self) -> Result<ParserState, GraphQLParseError> {
        let close_brace = self.expect(&GraphQLTokenKind::CurlyBraceClose, "`}`", "")?;
        let Some(frame) = self.selection_set_stack.pop() else {
            let mut error = GraphQLParseError::new(
                "unexpected `}`: no selection set is open",
                close_brace.span,
                GraphQLParseErrorKind::UnbalancedDelimiter {
                    delimiter: "}".to_string(),
                },
            );
            error.add_help("remove the extra `}`");
            return Err(error);
        };

        self.open = match frame.owner {
            SelectionSetOwner::Definition(index) => {
                if let Some(definition) = self.document.definitions.get_mut(index) {
                    extend_to(definition_span_mut(definition), &close_brace.span);
                }
                None
            }
            SelectionSetOwner::Selection(id) => match self.document.selection_mut(id) {
                Some(selection) => {
                    extend_to(selection_span_mut(selection), &close_brace.span);
                    selection.parent()
                }
                None => None,
            },
        };

        if self.selection_set_stack.is_empty() {
            Ok(ParserState::Document)
        } else {
            Ok(ParserState::Selection)
        }
    }

    fn parse_fragment_definition(&mut self) -> Result<ParserState, GraphQLParseError> {
        let keyword = self.expect(&GraphQLTokenKind::Fragment, "`fragment`", "")?;

        if self.peek_is(&GraphQLTokenKind::On) {
            let token = self.consume_token()?;
            let mut error = GraphQLParseError::new(
                "fragment name cannot be `on`",
                token.span,
                GraphQLParseErrorKind::ReservedName {
                    name: "on".to_string(),
                },
            );
            error.add_spec("https://spec.graphql.org/September2025/#FragmentName");
            return Err(error);
        }
        let (name, _) = self.expect_name("fragment name", "after `fragment`")?;
        self.expect(&GraphQLTokenKind::On, "`on`", "after fragment name")?;
        let (type_condition, _) = self.expect_name("type condition", "after `on`")?;

        let span = self.span_from(&keyword.span);
        self.document
            .definitions
            .push(Definition::Fragment(FragmentDefinition {
                directives: IndexMap::new(),
                name,
                selection_set: Vec::new(),
                span,
                type_condition,
            }));
        self.open = None;
        Ok(ParserState::Directives)
    }

    // =========================================================================
    // Arguments, values and types
    // =========================================================================

    /// Parses `( name: value ... )`. A repeated name keeps its first
    /// position and takes the last value.
    fn parse_arguments(&mut self) -> Result<Arguments, GraphQLParseError> {
        self.expect(&GraphQLTokenKind::ParenOpen, "`(`", "")?;
        let mut arguments = Arguments::new();
        while !self.peek_is(&GraphQLTokenKind::ParenClose) {
            let (name, _) = self.expect_name("argument name", "in argument list")?;
            self.expect(&GraphQLTokenKind::Colon, "`:`", "after argument name")?;
            let value = self.parse_value()?;
            arguments.insert(name, value);
        }
        self.consume_token()?;
        Ok(arguments)
    }

    /// Parses one value, including nested list and object literals, without
    /// recursing.
    fn parse_value(&mut self) -> Result<Value, GraphQLParseError> {
        let mut stack: Vec<OpenValue> = Vec::new();

        loop {
            // Close or continue the innermost open literal.
            let mut completed = match stack.last_mut() {
                Some(OpenValue::List(_)) if self.peek_is(&GraphQLTokenKind::SquareBracketClose) => {
                    self.consume_token()?;
                    match stack.pop() {
                        Some(OpenValue::List(items)) => Some(Value::List(items)),
                        _ => None,
                    }
                }
                Some(OpenValue::Object { pending_key, .. }) if pending_key.is_none() => {
                    if self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
                        self.consume_token()?;
                        match stack.pop() {
                            Some(OpenValue::Object { fields, .. }) => Some(Value::Object(fields)),
                            _ => None,
                        }
                    } else {
                        let (key, _) = self.expect_name("object field name", "in object value")?;
                        self.expect(&GraphQLTokenKind::Colon, "`:`", "after object field name")?;
                        *pending_key = Some(key);
                        None
                    }
                }
                _ => None,
            };

            if completed.is_none() {
                match self.peek_kind() {
                    Some(GraphQLTokenKind::SquareBracketOpen) => {
                        if stack.len() >= self.options.max_selection_depth {
                            return Err(self.max_depth_exceeded());
                        }
                        self.consume_token()?;
                        stack.push(OpenValue::List(Vec::new()));
                        continue;
                    }
                    Some(GraphQLTokenKind::CurlyBraceOpen) => {
                        if stack.len() >= self.options.max_selection_depth {
                            return Err(self.max_depth_exceeded());
                        }
                        self.consume_token()?;
                        stack.push(OpenValue::Object {
                            fields: IndexMap::new(),
                            pending_key: None,
                        });
                        continue;
                    }
                    Some(
                        GraphQLTokenKind::ParenClose
                        | GraphQLTokenKind::CurlyBraceClose
                        | GraphQLTokenKind::SquareBracketClose
                        | GraphQLTokenKind::Eof
                        | GraphQLTokenKind::Error { .. },
                    )
                    | None => {
                        return Err(self.unexpected(&["value"], ""));
                    }
                    Some(_) => {
                        let token = self.consume_token()?;
                        completed = Some(self.coerce_scalar(token)?);
                    }
                }
            }

            // Hand the finished value to the enclosing literal, or return it.
            if let Some(value) = completed {
                match stack.last_mut() {
                    None => return Ok(value),
                    Some(OpenValue::List(items)) => items.push(value),
                    Some(OpenValue::Object {
                        fields,
                        pending_key,
                    }) => {
                        if let Some(key) = pending_key.take() {
                            fields.insert(key, value);
                        }
                    }
                }
            }
        }
    }

    /// Turns a single value token into a [`Value`].
    fn coerce_scalar(&self, token: GraphQLToken) -> Result<Value, GraphQLParseError> {
        let coerced: Result<Value, ValueParsingError> = match &token.kind {
            GraphQLTokenKind::True => Ok(Value::Boolean(true)),
            GraphQLTokenKind::False => Ok(Value::Boolean(false)),
            GraphQLTokenKind::Null => Ok(Value::Null),
            GraphQLTokenKind::Number(_) => token.kind.parse_int_value().map_or_else(
                || Ok(Value::Error(format!("{} is not a number", token.text))),
                |result| result.map(Value::Int),
            ),
            GraphQLTokenKind::Hex(_) => token.kind.parse_hex_value().map_or_else(
                || Ok(Value::Error(format!("{} is not a number", token.text))),
                |result| result.map(Value::Int),
            ),
            GraphQLTokenKind::Float(_) => token.kind.parse_float_value().map_or_else(
                || Ok(Value::Error(format!("{} is not a number", token.text))),
                |result| result.map(Value::Float),
            ),
            GraphQLTokenKind::Name(name) | GraphQLTokenKind::Quote(name) => {
                Ok(Value::String(name.clone()))
            }
            GraphQLTokenKind::Variable(name) => Ok(Value::Variable(name.clone())),
            other => Ok(Value::Error(format!(
                "{} is not a GraphQL value",
                token_kind_display(other),
            ))),
        };

        match coerced {
            Ok(value) => Ok(value),
            Err(err) => match self.options.malformed_number_policy {
                MalformedNumberPolicy::EmbedErrorValue => {
                    log::trace!("embedding error value for `{}`: {err}", token.text);
                    Ok(Value::Error(err.to_string()))
                }
                MalformedNumberPolicy::Reject => Err(GraphQLParseError::new(
                    err.to_string(),
                    token.span,
                    GraphQLParseErrorKind::InvalidValue(err),
                )),
            },
        }
    }

    /// Parses a type reference (`Name`, `Name!`, `[Type]`, `[Type!]!`, ...)
    /// by counting the opening brackets, reading the named type, then
    /// closing the brackets innermost first.
    fn parse_type_annotation(&mut self) -> Result<TypeAnnotation, GraphQLParseError> {
        let mut list_depth = 0usize;
        while self.peek_is(&GraphQLTokenKind::SquareBracketOpen) {
            if list_depth >= self.options.max_selection_depth {
                return Err(self.max_depth_exceeded());
            }
            self.consume_token()?;
            list_depth += 1;
        }

        let (name, _) = self.expect_name("type name", "in variable type")?;
        let mut annotation = TypeAnnotation::named(name, self.parse_nullability()?);
        for _ in 0..list_depth {
            self.expect(&GraphQLTokenKind::SquareBracketClose, "`]`", "to close list type")?;
            annotation = TypeAnnotation::list(annotation, self.parse_nullability()?);
        }
        Ok(annotation)
    }

    fn parse_nullability(&mut self) -> Result<Nullability, GraphQLParseError> {
        if self.peek_is(&GraphQLTokenKind::Bang) {
            self.consume_token()?;
            Ok(Nullability::NonNull)
        } else {
            Ok(Nullability::Nullable)
        }
    }

    // =========================================================================
    // Tree-building helpers
    // =========================================================================

    /// The selection that owns the innermost open selection set, or `None`
    /// when that set belongs to a definition.
    fn enclosing_selection(&self) -> Option<SelectionId> {
        match self.selection_set_stack.last() {
            Some(OpenSelectionSet {
                owner: SelectionSetOwner::Selection(id),
                ..
            }) => Some(*id),
            _ => None,
        }
    }

    /// Moves `selection` into the document and appends it to the innermost
    /// open selection set.
    fn append_selection(&mut self, selection: Selection) -> SelectionId {
        let owner = self.selection_set_stack.last().map(|frame| frame.owner);
        let id = self.document.alloc_selection(selection);
        match owner {
            Some(SelectionSetOwner::Definition(index)) => {
                if let Some(definition) = self.document.definitions.get_mut(index) {
                    definition.add_selection(id);
                }
            }
            Some(SelectionSetOwner::Selection(owner_id)) => {
                if let Some(container) = self
                    .document
                    .selection_mut(owner_id)
                    .and_then(Selection::as_container_mut)
                {
                    container.add_selection(id);
                }
            }
            None => {}
        }
        log::trace!("appended selection {id} to {owner:?}");
        id
    }

    /// Whether the node that just finished its header must be followed by
    /// `{`: definitions and inline fragments must, fields and spreads need
    /// not.
    fn open_requires_selection_set(&self) -> bool {
        match self.open {
            None => true,
            Some(id) => matches!(self.document.selection(id), Some(Selection::InlineFragment(_))),
        }
    }

    /// Stretches the open node's span over everything consumed so far.
    fn extend_open_span(&mut self) {
        let Some(last) = self.last_span.clone() else {
            return;
        };
        match self.open {
            Some(id) => {
                if let Some(selection) = self.document.selection_mut(id) {
                    extend_to(selection_span_mut(selection), &last);
                }
            }
            None => {
                if self.selection_set_stack.is_empty()
                    && let Some(definition) = self.document.definitions.last_mut()
                {
                    extend_to(definition_span_mut(definition), &last);
                }
            }
        }
    }

    /// A span from `start` to the end of the last consumed token.
    fn span_from(&self, start: &GraphQLSourceSpan) -> GraphQLSourceSpan {
        match &self.last_span {
            Some(last) => start.extended_to(last),
            None => start.clone(),
        }
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn peek_kind(&mut self) -> Option<&GraphQLTokenKind> {
        self.token_stream.peek().map(|token| &token.kind)
    }

    fn peek_is(&mut self, kind: &GraphQLTokenKind) -> bool {
        self.peek_kind()
            .is_some_and(|peeked| discriminant(peeked) == discriminant(kind))
    }

    /// The name text of the next token if it can stand in a name position.
    fn peek_name(&mut self) -> Option<&str> {
        self.peek_kind().and_then(GraphQLTokenKind::as_name_str)
    }

    fn peek_span(&mut self) -> GraphQLSourceSpan {
        match self.token_stream.peek() {
            Some(token) => token.span.clone(),
            None => self.eof_span(),
        }
    }

    fn eof_span(&self) -> GraphQLSourceSpan {
        match &self.last_span {
            Some(last) => GraphQLSourceSpan {
                start_inclusive: last.end_exclusive.clone(),
                end_exclusive: last.end_exclusive.clone(),
                file_path: last.file_path.clone(),
            },
            None => GraphQLSourceSpan::new(
                crate::SourcePosition::start_of_input(),
                crate::SourcePosition::start_of_input(),
            ),
        }
    }

    fn consume_token(&mut self) -> Result<GraphQLToken, GraphQLParseError> {
        match self.token_stream.consume() {
            Some(token) => {
                self.last_span = Some(token.span.clone());
                Ok(token)
            }
            None => Err(self.unexpected(&[], "")),
        }
    }

    /// Consumes the next token if its kind matches `kind` (ignoring
    /// payload); otherwise returns an "expected ..." error.
    fn expect(
        &mut self,
        kind: &GraphQLTokenKind,
        description: &str,
        context: &str,
    ) -> Result<GraphQLToken, GraphQLParseError> {
        if self.peek_is(kind) {
            self.consume_token()
        } else {
            Err(self.unexpected(&[description], context))
        }
    }

    /// Consumes a name (a generic name or any keyword) and returns its text.
    fn expect_name(
        &mut self,
        description: &str,
        context: &str,
    ) -> Result<(String, GraphQLToken), GraphQLParseError> {
        match self.peek_name().map(str::to_string) {
            Some(name) => Ok((name, self.consume_token()?)),
            None => Err(self.unexpected(&[description], context)),
        }
    }

    /// Builds the error for a next token that does not fit the current
    /// grammar position.
    ///
    /// - A lexer `Error` token becomes a `LexerError` carrying the lexer's
    ///   message and notes.
    /// - End of input with a selection set still open becomes an
    ///   `UnclosedDelimiter` pointing at the opening `{`.
    /// - Anything else is `UnexpectedEof` or `UnexpectedToken`.
    fn unexpected(&mut self, expected: &[&str], context: &str) -> GraphQLParseError {
        let expected_list = format_expected(expected);
        let context = if context.is_empty() {
            String::new()
        } else {
            format!(" {context}")
        };
        let expected_owned: Vec<String> = expected.iter().map(|s| s.to_string()).collect();

        let Some(token) = self.token_stream.peek() else {
            return GraphQLParseError::new(
                format!("expected {expected_list}{context}, found end of input"),
                self.eof_span(),
                GraphQLParseErrorKind::UnexpectedEof {
                    expected: expected_owned,
                },
            );
        };

        match &token.kind {
            GraphQLTokenKind::Error {
                message,
                error_notes,
            } => GraphQLParseError::from_lexer_error(
                message.clone(),
                token.span.clone(),
                error_notes.clone(),
            ),
            GraphQLTokenKind::Eof => {
                let span = token.span.clone();
                let message = format!("expected {expected_list}{context}, found end of input");
                match self.selection_set_stack.last() {
                    Some(frame) => {
                        let mut error = GraphQLParseError::new(
                            message,
                            span,
                            GraphQLParseErrorKind::UnclosedDelimiter {
                                delimiter: "{".to_string(),
                            },
                        );
                        error.add_note_with_span(
                            "unclosed `{` of this selection set",
                            frame.opened_at.clone(),
                        );
                        error
                    }
                    None => GraphQLParseError::new(
                        message,
                        span,
                        GraphQLParseErrorKind::UnexpectedEof {
                            expected: expected_owned,
                        },
                    ),
                }
            }
            other => {
                let found = token_kind_display(other);
                GraphQLParseError::new(
                    format!("expected {expected_list}{context}, found {found}"),
                    token.span.clone(),
                    GraphQLParseErrorKind::UnexpectedToken {
                        expected: expected_owned,
                        found,
                    },
                )
            }
        }
    }

    fn max_depth_exceeded(&mut self) -> GraphQLParseError {
        let limit = self.options.max_selection_depth;
        let mut error = GraphQLParseError::new(
            format!("nesting is deeper than the maximum of {limit} levels"),
            self.peek_span(),
            GraphQLParseErrorKind::MaxDepthExceeded { limit },
        );
        error.add_help("raise `max_selection_depth` in `GraphQLParserOptions` to allow deeper nesting");
        error
    }
}

// =============================================================================
// Helper functions
// =============================================================================

fn definition_span_mut(definition: &mut Definition) -> &mut GraphQLSourceSpan {
    match definition {
        Definition::Fragment(d) => &mut d.span,
        Definition::Operation(d) => &mut d.span,
    }
}

fn selection_span_mut(selection: &mut Selection) -> &mut GraphQLSourceSpan {
    match selection {
        Selection::Field(s) => &mut s.span,
        Selection::FragmentSpread(s) => &mut s.span,
        Selection::InlineFragment(s) => &mut s.span,
    }
}

fn extend_to(span: &mut GraphQLSourceSpan, end: &GraphQLSourceSpan) {
    if end.end_exclusive.byte_offset() > span.end_exclusive.byte_offset() {
        span.end_exclusive = end.end_exclusive.clone();
    }
}

/// Joins expected-token descriptions: "a", "a or b", "a, b, or c".
fn format_expected(expected: &[&str]) -> String {
    match expected {
        [] => "more input".to_string(),
        [only] => only.to_string(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}

/// Describes a token kind for error messages.
pub(crate) fn token_kind_display(kind: &GraphQLTokenKind) -> String {
    if let Some(punctuator) = kind.as_punctuator_str() {
        return format!("`{punctuator}`");
    }
    if let Some(keyword) = kind.as_keyword_str() {
        return format!("`{keyword}`");
    }
    match kind {
        GraphQLTokenKind::Name(name) => format!("name `{name}`"),
        GraphQLTokenKind::Number(raw) => format!("number `{raw}`"),
        GraphQLTokenKind::Float(raw) => format!("float `{raw}`"),
        GraphQLTokenKind::Hex(raw) => format!("hex number `{raw}`"),
        GraphQLTokenKind::Quote(text) => format!("string \"{text}\""),
        GraphQLTokenKind::Variable(name) => format!("variable `${name}`"),
        GraphQLTokenKind::Directive(name) => format!("directive `@{name}`"),
        GraphQLTokenKind::Eof => "end of input".to_string(),
        GraphQLTokenKind::Error { message, .. } => format!("tokenization error: {message}"),
        _ => format!("{kind:?}"),
    }
}
