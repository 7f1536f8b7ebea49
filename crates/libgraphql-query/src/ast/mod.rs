//! The syntax tree produced by [`GraphQLParser`](crate::GraphQLParser).
//!
//! A [`Document`] owns its [`Definition`]s and an arena of every
//! [`Selection`] in the document. Selection sets are ordered lists of
//! [`SelectionId`]s into that arena, and each selection records the id of
//! the selection whose set it was appended into (`None` when it sits
//! directly in a definition's selection set). Parents are plain indices, so
//! the tree never holds a reference cycle.
//!
//! # Example
//!
//! ```rust
//! use libgraphql_query::ast::Selection;
//! use libgraphql_query::GraphQLParser;
//!
//! let doc = GraphQLParser::new("{ a { b } }").parse_document().unwrap();
//! let op = doc.operations().next().unwrap();
//! let a = op.selection_set[0];
//! let Some(Selection::Field(field)) = doc.selection(a) else { panic!() };
//! assert_eq!(field.name, "a");
//! assert_eq!(doc.parent_of(field.selection_set[0]), Some(a));
//! ```

mod ast_node;
mod definition;
mod directive_target;
mod document;
mod field;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod operation_definition;
mod operation_kind;
mod selection;
mod selection_container;
mod selection_id;
mod type_annotation;
mod value;
mod variable_definition;

pub use ast_node::AstNode;
pub use definition::Definition;
pub use directive_target::DirectiveTarget;
pub use document::Document;
pub use field::Field;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use operation_definition::OperationDefinition;
pub use operation_kind::OperationKind;
pub use selection::Selection;
pub use selection_container::SelectionContainer;
pub use selection_id::SelectionId;
pub use type_annotation::ListTypeAnnotation;
pub use type_annotation::NamedTypeAnnotation;
pub use type_annotation::Nullability;
pub use type_annotation::TypeAnnotation;
pub use value::Value;
pub use variable_definition::VariableDefinition;

use indexmap::IndexMap;

/// Argument name → value. Keys are unique: a repeated argument name keeps
/// its first position and its last value.
pub type Arguments = IndexMap<String, Value>;

/// Directive name → arguments, with the same last-write-wins rule as
/// [`Arguments`].
pub type Directives = IndexMap<String, Arguments>;

/// Variable name (without `$`) → definition, with the same last-write-wins
/// rule as [`Arguments`].
pub type VariableDefinitions = IndexMap<String, VariableDefinition>;

/// The ordered children of a selection set. Order is significant: it
/// defines response field order.
pub type SelectionSet = Vec<SelectionId>;
