//! Arena storage for the fragment tree.

use super::query::FragmentRef;

/// Index of a fragment inside its `FragmentTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FragmentId(usize);

impl FragmentId {
    /// Position of the fragment in creation order (the root is 0).
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One structural unit of a parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    identifier: Option<String>,
    content: String,
    parent: Option<FragmentId>,
    children: Vec<FragmentId>,
    separator_before: Option<char>,
    separator_after: Option<char>,
}

impl Fragment {
    fn new(identifier: Option<String>, content: String, parent: Option<FragmentId>) -> Self {
        Self {
            identifier,
            content,
            parent,
            children: Vec::new(),
            separator_before: None,
            separator_after: None,
        }
    }

    /// Header text that opened this fragment; `None` only for the root.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Residual text: what is left once the children were carved out.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn parent(&self) -> Option<FragmentId> {
        self.parent
    }

    /// Children in document order.
    #[must_use]
    pub fn children(&self) -> &[FragmentId] {
        &self.children
    }

    /// Character dropped from the parent's content right before this
    /// fragment's header.
    #[must_use]
    pub fn separator_before(&self) -> Option<char> {
        self.separator_before
    }

    /// Character skipped between this fragment's header and its content.
    #[must_use]
    pub fn separator_after(&self) -> Option<char> {
        self.separator_after
    }
}

/// Separators consumed around a header during extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Separators {
    pub before: Option<char>,
    pub after: Option<char>,
}

/// Owner of all fragments of one document.
///
/// Fragments refer to their parent and children by `FragmentId`, so the
/// back-references never form ownership cycles. The tree only grows while
/// the engine segments it and is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentTree {
    nodes: Vec<Fragment>,
}

impl FragmentTree {
    /// Create a tree holding only a root fragment with the whole text.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            nodes: vec![Fragment::new(None, content.into(), None)],
        }
    }

    #[must_use]
    pub fn root_id(&self) -> FragmentId {
        FragmentId(0)
    }

    /// Query view of the root fragment.
    #[must_use]
    pub fn root(&self) -> FragmentRef<'_> {
        FragmentRef::new(self, self.root_id())
    }

    /// Query view of a fragment, if the id belongs to this tree.
    #[must_use]
    pub fn fragment(&self, id: FragmentId) -> Option<FragmentRef<'_>> {
        self.contains(id).then(|| FragmentRef::new(self, id))
    }

    /// Raw node data, if the id belongs to this tree.
    #[must_use]
    pub fn get(&self, id: FragmentId) -> Option<&Fragment> {
        self.nodes.get(id.0)
    }

    #[must_use]
    pub fn contains(&self, id: FragmentId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Number of fragments, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node lookup for ids handed out by this tree.
    pub(crate) fn node(&self, id: FragmentId) -> &Fragment {
        &self.nodes[id.0]
    }

    /// Append a new child at the end of `parent`'s children.
    pub(crate) fn add_child(
        &mut self,
        parent: FragmentId,
        identifier: String,
        content: String,
        separators: Separators,
    ) -> FragmentId {
        let id = FragmentId(self.nodes.len());
        let mut fragment = Fragment::new(Some(identifier), content, Some(parent));
        fragment.separator_before = separators.before;
        fragment.separator_after = separators.after;
        self.nodes.push(fragment);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Replace a fragment's content with its residual part.
    pub(crate) fn set_content(&mut self, id: FragmentId, content: String) {
        self.nodes[id.0].content = content;
    }
}
