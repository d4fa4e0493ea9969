//! Serializable rule definitions for user-supplied document profiles.

use serde::{Deserialize, Serialize};

use super::types::{MatchPolicy, Rule};
use crate::error::{ParserError, Result};

/// Policy name as written in a profile file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    #[default]
    Unlimited,
    Limited,
    NoMatch,
    Fallback,
}

/// One rule of a profile file, with its nested sub-rules.
///
/// ```yaml
/// pattern: '(?m)^Art\. \d+\.'
/// label: article
/// sub_rules:
///   - pattern: '(?m)^\d+\.'
///     policy: limited
///     limit: 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDefinition {
    pub pattern: String,

    #[serde(default)]
    pub policy: PolicyKind,

    /// Boundary cap, required by (and only valid with) `limited`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_rules: Vec<RuleDefinition>,
}

impl RuleDefinition {
    /// Resolve the policy name and its limit.
    ///
    /// # Errors
    /// `InvalidArgument` when `limited` lacks a limit or another policy has one.
    pub fn policy(&self) -> Result<MatchPolicy> {
        match (self.policy, self.limit) {
            (PolicyKind::Limited, Some(limit)) => Ok(MatchPolicy::Limited(limit)),
            (PolicyKind::Limited, None) => Err(ParserError::InvalidArgument(format!(
                "rule '{}' is limited but has no limit",
                self.pattern
            ))),
            (_, Some(_)) => Err(ParserError::InvalidArgument(format!(
                "rule '{}' has a limit but its policy is not limited",
                self.pattern
            ))),
            (PolicyKind::Unlimited, None) => Ok(MatchPolicy::Unlimited),
            (PolicyKind::NoMatch, None) => Ok(MatchPolicy::NoMatch),
            (PolicyKind::Fallback, None) => Ok(MatchPolicy::Fallback),
        }
    }

    /// Compile this definition and its sub-rules.
    pub fn to_rule(&self) -> Result<Rule> {
        let mut rule = Rule::new(&self.pattern, self.policy()?)?;
        if let Some(label) = &self.label {
            rule = rule.with_label(label.clone());
        }
        for sub_rule in &self.sub_rules {
            rule = rule.with_sub_rule(sub_rule.to_rule()?);
        }
        Ok(rule)
    }
}
