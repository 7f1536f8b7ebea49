/// Selects the `= <prefix>:` a [`GraphQLErrorNote`](crate::GraphQLErrorNote)
/// is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphQLErrorNoteKind {
    /// `= note:`, e.g. "unclosed `{` of this selection set".
    General,

    /// `= help:`, e.g. "remove the extra `}`".
    Help,

    /// `= spec:`, followed by a URL into the GraphQL language reference.
    Spec,
}

impl GraphQLErrorNoteKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::General => "note",
            Self::Help => "help",
            Self::Spec => "spec",
        }
    }
}
