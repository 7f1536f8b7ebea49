use std::fmt::Write;

pub const SIMPLE_QUERY: &str = include_str!("simple_query.graphql");
pub const COMPLEX_QUERY: &str = include_str!("complex_query.graphql");

/// Generates a query with deeply nested selection sets.
///
/// Each level selects an `id` field and a `child` field holding the next
/// level. The innermost level selects `name`.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 30);
    out.push_str("query DeeplyNested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        let field = if level == 0 { "root" } else { "child" };
        let _ = writeln!(out, "{indent}{field} {{");
        let _ = writeln!(out, "{indent}  id");
    }
    let _ = writeln!(out, "{}name", "  ".repeat(depth + 1));
    for level in (0..depth).rev() {
        let _ = writeln!(out, "{}}}", "  ".repeat(level + 1));
    }
    out.push_str("}\n");
    out
}

/// Generates a document containing `count` named query operations, each
/// with a variable, arguments and an aliased field.
pub fn many_operations(count: usize) -> String {
    let mut out = String::with_capacity(count * 80);
    for i in 0..count {
        let _ = writeln!(out, "query Operation{i}($id: ID!) {{");
        let _ = writeln!(out, "  node(id: $id) {{");
        let _ = writeln!(out, "    id");
        let _ = writeln!(out, "    name");
        let _ = writeln!(out, "    field{i}: description(limit: {i})");
        let _ = writeln!(out, "  }}");
        let _ = writeln!(out, "}}\n");
    }
    out
}
