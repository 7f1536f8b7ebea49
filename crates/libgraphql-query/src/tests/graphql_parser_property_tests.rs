//! Property tests over generated documents and arbitrary input.

use crate::ast::Value;
use crate::tests::ast_utils::field_keys;
use crate::tests::ast_utils::first_field_of;
use crate::tests::ast_utils::first_operation;
use crate::tests::utils::parse;
use proptest::prelude::*;

/// Names that lex as a plain `Name` (never a keyword).
fn field_name() -> impl Strategy<Value = String> {
    "[a-z_][A-Za-z0-9_]{0,8}".prop_filter("keyword", |name| {
        !matches!(
            name.as_str(),
            "query" | "mutation" | "fragment" | "on" | "true" | "false" | "null"
        )
    })
}

proptest! {
    /// Verifies that arbitrary input never panics the lexer or parser: it
    /// either parses or reports exactly one error.
    #[test]
    fn arbitrary_input_never_panics(source in any::<String>()) {
        let _ = parse(&source);
    }

    /// Verifies that arbitrary input built from GraphQL punctuation and
    /// names never panics, and that every error has a 1-based line.
    #[test]
    fn punctuation_soup_never_panics(source in "[{}()\\[\\]:!=@$.,#\" a-z0-9\n-]{0,64}") {
        if let Err(err) = parse(&source) {
            prop_assert!(err.line() >= 1);
        }
    }

    /// Verifies that a flat selection set preserves field order.
    #[test]
    fn field_order_preserved(names in prop::collection::vec(field_name(), 1..16)) {
        let source = format!("{{ {} }}", names.join(" "));
        let doc = parse(&source).unwrap();

        prop_assert_eq!(field_keys(&doc, &first_operation(&doc).selection_set), names);
    }

    /// Verifies that a comment after any field changes nothing but spans.
    #[test]
    fn comments_are_invisible(
        names in prop::collection::vec(field_name(), 1..12),
        comment in "[ -~]{0,20}",
    ) {
        let plain = parse(&format!("{{ {} }}", names.join(" "))).unwrap();
        let separator = format!(" #{comment}\n ");
        let commented = parse(&format!("{{ {} }}", names.join(&separator))).unwrap();

        prop_assert_eq!(
            field_keys(&commented, &first_operation(&commented).selection_set),
            field_keys(&plain, &first_operation(&plain).selection_set),
        );
        prop_assert_eq!(commented.all_selections().count(), plain.all_selections().count());
    }

    /// Verifies that parsing the same generated document twice yields equal
    /// trees.
    #[test]
    fn parsing_is_idempotent(
        names in prop::collection::vec(field_name(), 1..8),
        n in any::<i32>(),
    ) {
        let source = format!("query {{ {}(x: {n}) {{ {} }} }}", names[0], names.join(" "));
        prop_assert_eq!(parse(&source).unwrap(), parse(&source).unwrap());
    }

    /// Verifies that every `i32` round-trips through an argument literal.
    #[test]
    fn int_arguments_coerce(n in any::<i32>()) {
        let doc = parse(&format!("{{ f(v: {n}) }}")).unwrap();
        prop_assert_eq!(&first_field_of(&doc).arguments["v"], &Value::Int(n));
    }

    /// Verifies that nesting depth is reflected in the parent chain.
    #[test]
    fn nesting_depth_matches_ancestors(depth in 1usize..40) {
        let source = format!("{}leaf{}", "{ n ".repeat(depth), " }".repeat(depth));
        let doc = parse(&source).unwrap();

        let (leaf, _) = doc
            .all_selections()
            .find(|(_, sel)| sel.as_field().is_some_and(|f| f.name == "leaf"))
            .unwrap();
        prop_assert_eq!(doc.ancestors(leaf).count(), depth - 1);
    }
}
