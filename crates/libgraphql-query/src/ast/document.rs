use crate::ast::Definition;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::Selection;
use crate::ast::SelectionId;

/// The root of a parsed query document.
///
/// A `Document` owns its definitions (in source order) and an arena holding
/// every selection in the document. Selection sets refer into the arena by
/// [`SelectionId`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Document {
    pub definitions: Vec<Definition>,
    selections: Vec<Selection>,
}

impl Document {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Moves `selection` into the arena and returns its id.
    pub(crate) fn alloc_selection(&mut self, selection: Selection) -> SelectionId {
        let id = SelectionId(self.selections.len());
        self.selections.push(selection);
        id
    }

    pub(crate) fn selection_mut(&mut self, id: SelectionId) -> Option<&mut Selection> {
        self.selections.get_mut(id.0)
    }

    /// Looks up a selection by id.
    pub fn selection(&self, id: SelectionId) -> Option<&Selection> {
        self.selections.get(id.0)
    }

    /// All selections in the document, in the order they were parsed.
    pub fn all_selections(&self) -> impl Iterator<Item = (SelectionId, &Selection)> {
        self.selections
            .iter()
            .enumerate()
            .map(|(idx, selection)| (SelectionId(idx), selection))
    }

    /// The selection whose set `id` was appended into, or `None` when `id`
    /// sits directly in a definition's selection set (or is unknown).
    pub fn parent_of(&self, id: SelectionId) -> Option<SelectionId> {
        self.selection(id).and_then(Selection::parent)
    }

    /// Walks from `id`'s parent up to the outermost enclosing selection.
    pub fn ancestors(&self, id: SelectionId) -> impl Iterator<Item = SelectionId> + '_ {
        std::iter::successors(self.parent_of(id), |ancestor| self.parent_of(*ancestor))
    }

    /// Resolves a selection set to its selections, in order.
    pub fn selections_in<'a>(
        &'a self,
        set: &'a [SelectionId],
    ) -> impl Iterator<Item = &'a Selection> + 'a {
        set.iter().filter_map(|id| self.selection(*id))
    }

    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(Definition::as_operation)
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(Definition::as_fragment)
    }

    /// Finds a fragment definition by name. If the document defines the name
    /// more than once, the first definition is returned.
    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragments().find(|frag| frag.name == name)
    }
}
