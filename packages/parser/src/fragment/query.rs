//! Read-only queries over a parsed fragment tree.

use std::fmt;
use std::iter::FusedIterator;

use super::outline::FragmentOutline;
use super::toc::{TableOfContents, TocEntry};
use super::tree::{Fragment, FragmentId, FragmentTree};
use crate::config::TITLE_MAX_CHARS;
use crate::error::{ParserError, Result};

/// Borrowed view of one fragment together with its tree.
#[derive(Clone, Copy)]
pub struct FragmentRef<'a> {
    tree: &'a FragmentTree,
    id: FragmentId,
}

impl<'a> FragmentRef<'a> {
    pub(crate) fn new(tree: &'a FragmentTree, id: FragmentId) -> Self {
        Self { tree, id }
    }

    fn node(&self) -> &'a Fragment {
        self.tree.node(self.id)
    }

    fn at(&self, id: FragmentId) -> Self {
        Self::new(self.tree, id)
    }

    #[must_use]
    pub fn id(&self) -> FragmentId {
        self.id
    }

    #[must_use]
    pub fn tree(&self) -> &'a FragmentTree {
        self.tree
    }

    #[must_use]
    pub fn identifier(&self) -> Option<&'a str> {
        self.node().identifier()
    }

    /// Residual content of this fragment (children excluded).
    #[must_use]
    pub fn content(&self) -> &'a str {
        self.node().content()
    }

    #[must_use]
    pub fn parent(&self) -> Option<FragmentRef<'a>> {
        self.node().parent().map(|id| self.at(id))
    }

    /// Children in document order.
    pub fn children(
        &self,
    ) -> impl DoubleEndedIterator<Item = FragmentRef<'a>> + ExactSizeIterator + 'a {
        let tree = self.tree;
        self.node()
            .children()
            .iter()
            .map(move |&id| FragmentRef::new(tree, id))
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.node().children().is_empty()
    }

    /// Distance from the root (the root has depth 0).
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.node().parent();
        while let Some(id) = current {
            depth += 1;
            current = self.tree.node(id).parent();
        }
        depth
    }

    /// This fragment and everything below it, depth-first pre-order.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'a> {
        Descendants { stack: vec![*self] }
    }

    /// First fragment in pre-order (this one included) whose identifier is
    /// exactly `identifier`.
    #[must_use]
    pub fn find_first_descendant_with_identifier(
        &self,
        identifier: &str,
    ) -> Option<FragmentRef<'a>> {
        self.descendants()
            .find(|fragment| fragment.identifier() == Some(identifier))
    }

    /// Like [`Self::find_first_descendant_with_identifier`], failing with
    /// `NotFound` when absent.
    pub fn require_descendant(&self, identifier: &str) -> Result<FragmentRef<'a>> {
        self.find_first_descendant_with_identifier(identifier)
            .ok_or_else(|| ParserError::NotFound(identifier.to_string()))
    }

    /// Direct child with the given identifier.
    #[must_use]
    pub fn find_child_with_identifier(&self, identifier: &str) -> Option<FragmentRef<'a>> {
        self.children()
            .find(|child| child.identifier() == Some(identifier))
    }

    /// Residual content followed by each child's identifier and its own
    /// `content_with_descendants`, recursively.
    ///
    /// The single separator character consumed at each boundary is not
    /// reproduced; see [`Self::reconstructed_text`] for the exact text.
    #[must_use]
    pub fn content_with_descendants(&self) -> String {
        let mut out = String::new();
        self.write_content(&mut out, false);
        out
    }

    /// Text of this subtree exactly as it was before segmentation
    /// (excluding this fragment's own header).
    #[must_use]
    pub fn reconstructed_text(&self) -> String {
        let mut out = String::new();
        self.write_content(&mut out, true);
        out
    }

    /// Header, the separator after it and the subtree's original text.
    #[must_use]
    pub fn full_text(&self) -> String {
        let mut out = String::from(self.identifier().unwrap_or_default());
        out.extend(self.node().separator_after());
        self.write_content(&mut out, true);
        out
    }

    fn write_content(&self, out: &mut String, with_separators: bool) {
        out.push_str(self.content());
        for child in self.children() {
            let node = child.node();
            if with_separators {
                out.extend(node.separator_before());
            }
            out.push_str(child.identifier().unwrap_or_default());
            if with_separators {
                out.extend(node.separator_after());
            }
            child.write_content(out, with_separators);
        }
    }

    /// First non-empty line of the residual content, shortened for display.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        let line = self.content().lines().map(str::trim).find(|l| !l.is_empty())?;
        if line.chars().count() <= TITLE_MAX_CHARS {
            return Some(line.to_string());
        }
        let mut short: String = line.chars().take(TITLE_MAX_CHARS).collect();
        short.push('…');
        Some(short)
    }

    /// Lazy, depth-first table of contents rooted at this fragment.
    ///
    /// Descent stops below a fragment for which `stop` holds or which sits at
    /// `max_depth`. Only entries accepted by `include` are yielded; the root
    /// of the document never yields an entry.
    pub fn table_of_contents<S, I>(
        &self,
        max_depth: usize,
        stop: S,
        include: I,
    ) -> TableOfContents<'a, S, I>
    where
        S: FnMut(FragmentRef<'a>) -> bool,
        I: FnMut(&TocEntry) -> bool,
    {
        TableOfContents::new(*self, max_depth, stop, include)
    }

    /// Fragments of one kind (selected by `predicate`) from `start` to `end`
    /// inclusive, in document order.
    ///
    /// # Errors
    /// `NotFound` if either identifier is not among the selected fragments,
    /// `InvalidRange` if `end` precedes `start`.
    pub fn parts_in_range<P>(
        &self,
        predicate: P,
        start: &str,
        end: &str,
    ) -> Result<Vec<FragmentRef<'a>>>
    where
        P: FnMut(&FragmentRef<'a>) -> bool,
    {
        let parts: Vec<FragmentRef<'a>> = self.descendants().filter(predicate).collect();

        let position = |identifier: &str| {
            parts
                .iter()
                .position(|part| part.identifier() == Some(identifier))
                .ok_or_else(|| ParserError::NotFound(identifier.to_string()))
        };
        let first = position(start)?;
        let last = position(end)?;

        if last < first {
            return Err(ParserError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        Ok(parts[first..=last].to_vec())
    }

    /// Serializable copy of this subtree.
    #[must_use]
    pub fn outline(&self) -> FragmentOutline {
        FragmentOutline {
            identifier: self.identifier().map(String::from),
            content: self.content().to_string(),
            children: self.children().map(|child| child.outline()).collect(),
        }
    }
}

impl PartialEq for FragmentRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for FragmentRef<'_> {}

impl fmt::Debug for FragmentRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FragmentRef")
            .field("id", &self.id.index())
            .field("identifier", &self.identifier())
            .field("children", &self.node().children().len())
            .finish()
    }
}

/// Pre-order iterator over a subtree.
pub struct Descendants<'a> {
    stack: Vec<FragmentRef<'a>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = FragmentRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let fragment = self.stack.pop()?;
        self.stack.extend(fragment.children().rev());
        Some(fragment)
    }
}

impl FusedIterator for Descendants<'_> {}
