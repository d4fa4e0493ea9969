//! Rule-driven segmentation of legal texts.
//!
//! A [`RuleForest`] describes the structural markers of one document type.
//! The [`SegmentEngine`] walks a text top-down: every match of an active rule
//! opens a child fragment, and the child's text is segmented again with that
//! rule's sub-rules.

mod config;
mod definition;
mod engine;
mod forest;
mod tracker;
mod types;

pub use config::{create_constitution_forest, create_consumer_rights_forest};
pub use definition::{PolicyKind, RuleDefinition};
pub use engine::{segment_fragment, SegmentEngine};
pub use forest::RuleForest;
pub use tracker::MatchTracker;
pub use types::{active_rules, MatchPolicy, Rule};
