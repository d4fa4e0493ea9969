//! Fragment tree built by the segmentation engine.
//!
//! The tree is an arena ([`FragmentTree`]) of [`Fragment`] nodes addressed by
//! [`FragmentId`]. Read-only queries go through the borrowed
//! [`FragmentRef`] view: identifier lookup, content reassembly, tables of
//! contents and range extraction.

mod outline;
mod query;
mod toc;
mod tree;

pub use outline::FragmentOutline;
pub use query::{Descendants, FragmentRef};
pub use toc::{TableOfContents, TocEntry};
pub use tree::{Fragment, FragmentId, FragmentTree};

pub(crate) use tree::Separators;
