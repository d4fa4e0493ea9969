//! Ustawa parser - Segment Polish legal texts into a queryable structural tree.
//!
//! The parser cleans the text of a statute, splits it recursively into
//! divisions, chapters, articles, paragraphs, points and letters, and answers
//! structural queries against the resulting tree.
//!
//! # Example
//!
//! ```
//! use ustawa_parser::{Constitution, Locator, Statute};
//!
//! let constitution = Constitution::from_text(
//!     "Rozdział I\nRZECZPOSPOLITA\nArt. 1.\nRzeczpospolita Polska jest dobrem wspólnym.\n",
//! )
//! .unwrap();
//!
//! let article = constitution.resolve(&Locator::new().chapter("1").article("1")).unwrap();
//! assert_eq!(article.content(), "Rzeczpospolita Polska jest dobrem wspólnym.\n");
//! ```
//!
//! # Architecture
//!
//! - [`segmentation`]: Rules, match trackers and the recursive segmentation engine
//! - [`fragment`]: Fragment tree storage and read-only queries
//! - [`cleaning`]: Line cleaning and hyphenation repair before segmentation
//! - [`document`]: Document profiles and statute façades
//! - [`numerals`]: Roman numeral conversion
//! - [`config`]: Configuration constants and validation
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod cleaning;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod fragment;
pub mod numerals;
pub mod segmentation;

// Re-export commonly used items
pub use document::{
    Constitution, ConsumerRightsAct, DocumentProfile, GenericDocument, LegalDocument, Level,
    Locator, Statute,
};
pub use error::{ParserError, Result};
pub use fragment::{FragmentId, FragmentRef, FragmentTree, TocEntry};
pub use segmentation::{MatchPolicy, Rule, RuleForest, SegmentEngine};
