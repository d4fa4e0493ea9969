//! Text cleaning applied before segmentation.

mod cleaner;
mod rules;

pub use cleaner::Cleaner;
pub use rules::{CleanRule, CleanRuleKind};
