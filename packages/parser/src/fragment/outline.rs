//! Serializable view of a fragment subtree.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Owned, nested copy of a fragment and its descendants.
///
/// Used for YAML export and for comparing parse results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentOutline {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FragmentOutline>,
}

impl FragmentOutline {
    /// Number of fragments in this outline, itself included.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(FragmentOutline::count).sum::<usize>()
    }

    /// Serialize to a YAML document.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}
