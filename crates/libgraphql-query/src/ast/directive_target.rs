use crate::ast::Arguments;

/// A node that can carry directives: every definition and every selection.
pub trait DirectiveTarget {
    /// Attaches directive `name` with its arguments. Re-attaching a name
    /// replaces its arguments but keeps its original position.
    fn add_directive(&mut self, name: String, arguments: Arguments);
}
