//! Tests for fragment definitions, fragment spreads, and inline fragments.

use crate::ast::Selection;
use crate::tests::ast_utils::field_keys;
use crate::tests::ast_utils::first_fragment;
use crate::tests::ast_utils::first_operation;
use crate::tests::ast_utils::inline_fragment_at;
use crate::tests::ast_utils::selection_at;
use crate::tests::ast_utils::spread_at;
use crate::tests::utils::parse_ok;

// =============================================================================
// Fragment definition tests
// =============================================================================

/// Verifies that a fragment definition records its name, type condition
/// and selections.
///
/// See:
/// <https://spec.graphql.org/September2025/#sec-Language.Fragments>
#[test]
fn fragment_definition() {
    let doc = parse_ok("fragment friendFields on User { id name }");
    let frag = first_fragment(&doc);

    assert_eq!(frag.name, "friendFields");
    assert_eq!(frag.type_condition, "User");
    assert_eq!(field_keys(&doc, &frag.selection_set), vec!["id", "name"]);
    for id in &frag.selection_set {
        assert_eq!(doc.parent_of(*id), None);
    }
}

/// Verifies that fragments can be looked up by name, and that the first
/// definition wins when a name repeats.
#[test]
fn fragment_lookup_by_name() {
    let doc = parse_ok(
        "fragment A on T { x }
         fragment B on U { y }
         fragment A on V { z }",
    );

    assert_eq!(doc.fragments().count(), 3);
    assert_eq!(doc.fragment("B").map(|f| f.type_condition.as_str()), Some("U"));
    assert_eq!(doc.fragment("A").map(|f| f.type_condition.as_str()), Some("T"));
    assert!(doc.fragment("C").is_none());
}

/// Verifies that operations and fragments may be freely interleaved.
#[test]
fn operations_and_fragments_mixed() {
    let doc = parse_ok(
        "query Q { ...F }
         fragment F on T { a }
         mutation M { b }",
    );

    assert_eq!(doc.definitions.len(), 3);
    assert!(doc.definitions[0].as_operation().is_some());
    assert!(doc.definitions[1].as_fragment().is_some());
    assert!(doc.definitions[2].as_operation().is_some());
}

// =============================================================================
// Fragment spread tests
// =============================================================================

/// Verifies that `...Name` produces a fragment spread.
#[test]
fn fragment_spread() {
    let doc = parse_ok("{ user { ...friendFields } }");
    let op = first_operation(&doc);
    let user_id = op.selection_set[0];
    let Some(Selection::Field(user)) = doc.selection(user_id) else {
        panic!("expected field");
    };

    let spread = spread_at(&doc, &user.selection_set, 0);
    assert_eq!(spread.name, "friendFields");
    assert_eq!(spread.parent, Some(user_id));
    assert!(spread.directives.is_empty());
}

/// Verifies that a spread has no selection set of its own.
#[test]
fn fragment_spread_has_no_selection_set() {
    let doc = parse_ok("{ ...F a }");
    let op = first_operation(&doc);

    let spread = selection_at(&doc, &op.selection_set, 0);
    assert!(spread.selection_set().is_none());
    assert!(spread.as_container().is_none());
    assert_eq!(field_keys(&doc, &op.selection_set), vec!["a"]);
}

// =============================================================================
// Inline fragment tests
// =============================================================================

/// Verifies that `... on Type { ... }` produces an inline fragment with a
/// type condition, and that its children point back at it.
///
/// See:
/// <https://spec.graphql.org/September2025/#sec-Inline-Fragments>
#[test]
fn inline_fragment_with_type_condition() {
    let doc = parse_ok("{ ... on User { friends { count } } }");
    let op = first_operation(&doc);

    let inline_id = op.selection_set[0];
    let inline = inline_fragment_at(&doc, &op.selection_set, 0);
    assert_eq!(inline.type_condition.as_deref(), Some("User"));
    assert_eq!(inline.parent, None);
    assert_eq!(field_keys(&doc, &inline.selection_set), vec!["friends"]);
    assert_eq!(doc.parent_of(inline.selection_set[0]), Some(inline_id));
}

/// Verifies that `... { ... }` produces an inline fragment without a type
/// condition.
#[test]
fn inline_fragment_without_type_condition() {
    let doc = parse_ok("{ ... { a } }");
    let op = first_operation(&doc);

    let inline = inline_fragment_at(&doc, &op.selection_set, 0);
    assert_eq!(inline.type_condition, None);
    assert_eq!(field_keys(&doc, &inline.selection_set), vec!["a"]);
}

/// Verifies that fields after an inline fragment go back to the enclosing
/// selection set.
#[test]
fn field_after_inline_fragment() {
    let doc = parse_ok("{ outer { ... on T { inner } after } }");
    let op = first_operation(&doc);
    let outer_id = op.selection_set[0];
    let Some(Selection::Field(outer)) = doc.selection(outer_id) else {
        panic!("expected field");
    };

    assert_eq!(outer.selection_set.len(), 2);
    assert!(matches!(
        selection_at(&doc, &outer.selection_set, 0),
        Selection::InlineFragment(_),
    ));
    assert_eq!(field_keys(&doc, &outer.selection_set), vec!["after"]);
    assert_eq!(doc.parent_of(outer.selection_set[1]), Some(outer_id));
}
