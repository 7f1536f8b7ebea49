use std::fmt;

/// Index of a [`Selection`](crate::ast::Selection) in its
/// [`Document`](crate::ast::Document)'s selection arena.
///
/// Ids are only meaningful for the document that produced them.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Serialize)]
pub struct SelectionId(pub(crate) usize);

impl SelectionId {
    /// The raw arena index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for SelectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
