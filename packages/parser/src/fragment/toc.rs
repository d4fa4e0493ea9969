//! Table-of-contents traversal.

use std::fmt;
use std::iter::FusedIterator;

use super::query::FragmentRef;

/// One line of a table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Depth relative to the fragment the table was requested for.
    pub depth: usize,

    /// Fragment identifier (e.g. "Rozdział 2").
    pub identifier: String,

    /// First line of the fragment's residual content, if any.
    pub title: Option<String>,
}

impl fmt::Display for TocEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 1..self.depth {
            f.write_str("  ")?;
        }
        f.write_str(&self.identifier)?;
        if let Some(title) = &self.title {
            write!(f, " {title}")?;
        }
        Ok(())
    }
}

/// Lazy depth-first walk producing [`TocEntry`] lines.
///
/// Consumed once; build a new one to walk again.
pub struct TableOfContents<'a, S, I> {
    stack: Vec<(FragmentRef<'a>, usize)>,
    max_depth: usize,
    stop: S,
    include: I,
}

impl<'a, S, I> TableOfContents<'a, S, I>
where
    S: FnMut(FragmentRef<'a>) -> bool,
    I: FnMut(&TocEntry) -> bool,
{
    pub(crate) fn new(start: FragmentRef<'a>, max_depth: usize, stop: S, include: I) -> Self {
        Self {
            stack: vec![(start, 0)],
            max_depth,
            stop,
            include,
        }
    }
}

impl<'a, S, I> Iterator for TableOfContents<'a, S, I>
where
    S: FnMut(FragmentRef<'a>) -> bool,
    I: FnMut(&TocEntry) -> bool,
{
    type Item = TocEntry;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((fragment, depth)) = self.stack.pop() {
            if depth < self.max_depth && !(self.stop)(fragment) {
                self.stack
                    .extend(fragment.children().rev().map(|child| (child, depth + 1)));
            }

            let Some(identifier) = fragment.identifier() else {
                continue;
            };
            let entry = TocEntry {
                depth,
                identifier: identifier.to_string(),
                title: fragment.title(),
            };
            if (self.include)(&entry) {
                return Some(entry);
            }
        }
        None
    }
}

impl<'a, S, I> FusedIterator for TableOfContents<'a, S, I>
where
    S: FnMut(FragmentRef<'a>) -> bool,
    I: FnMut(&TocEntry) -> bool,
{
}
