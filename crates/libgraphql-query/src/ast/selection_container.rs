use crate::ast::SelectionId;
use crate::ast::SelectionSet;

/// A node that owns a selection set: operations, fragment definitions,
/// fields and inline fragments.
///
/// Fragment spreads deliberately do not implement this.
pub trait SelectionContainer {
    /// Appends a child to the end of this node's selection set.
    fn add_selection(&mut self, id: SelectionId);

    /// The ids of this node's children, in source order.
    fn selection_set(&self) -> &SelectionSet;
}
