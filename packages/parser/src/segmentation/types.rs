//! Types for the segmentation system.

use std::fmt;

use regex::Regex;

use crate::error::{ParserError, Result};

/// How many structural boundaries a rule may produce within one fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// One boundary per pattern match.
    Unlimited,

    /// At most `n` boundaries; later matches are ignored at this level.
    Limited(usize),

    /// Never produces a boundary itself; its sub-rules take its place in the
    /// active rule set of the level it is declared on.
    NoMatch,

    /// Takes part only when none of the other rules of the level matched.
    Fallback,
}

impl MatchPolicy {
    /// Whether a rule with this policy may still produce a boundary after
    /// `consumed` boundaries.
    #[must_use]
    pub fn allows(&self, consumed: usize) -> bool {
        match self {
            Self::Unlimited | Self::Fallback => true,
            Self::Limited(limit) => consumed < *limit,
            Self::NoMatch => false,
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => f.write_str("unlimited"),
            Self::Limited(limit) => write!(f, "limited({limit})"),
            Self::NoMatch => f.write_str("no_match"),
            Self::Fallback => f.write_str("fallback"),
        }
    }
}

/// A structural marker pattern with its match policy and the rules that
/// apply to the text found under it.
///
/// Rules are assembled bottom-up with the `with_*` builders and are not
/// modified afterwards. Cloning is cheap enough to share a sub-rule between
/// several parents (the compiled regex is reference counted).
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    policy: MatchPolicy,
    sub_rules: Vec<Rule>,
    label: Option<String>,
}

impl Rule {
    /// Compile a rule from a regular expression.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if the expression does not compile.
    pub fn new(pattern: &str, policy: MatchPolicy) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| ParserError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self::from_regex(pattern, policy))
    }

    /// Build a rule from an already compiled regex.
    #[must_use]
    pub fn from_regex(pattern: Regex, policy: MatchPolicy) -> Self {
        Self {
            pattern,
            policy,
            sub_rules: Vec::new(),
            label: None,
        }
    }

    /// Append a sub-rule.
    #[must_use]
    pub fn with_sub_rule(mut self, rule: Rule) -> Self {
        self.sub_rules.push(rule);
        self
    }

    /// Append several sub-rules, keeping their order.
    #[must_use]
    pub fn with_sub_rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.sub_rules.extend(rules);
        self
    }

    /// Name the rule for diagnostics.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    #[must_use]
    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    #[must_use]
    pub fn sub_rules(&self) -> &[Rule] {
        &self.sub_rules
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Label if set, otherwise the pattern source.
    #[must_use]
    pub fn name(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.pattern.as_str())
    }

    /// Nesting depth of this rule and its sub-rules (a rule without
    /// sub-rules has depth 1).
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.sub_rules.iter().map(Rule::depth).max().unwrap_or(0)
    }
}

/// Expand a rule list into the rules that actually search the text.
///
/// `NoMatch` rules are replaced in place by their own (expanded) sub-rules.
#[must_use]
pub fn active_rules(rules: &[Rule]) -> Vec<&Rule> {
    let mut active = Vec::with_capacity(rules.len());
    for rule in rules {
        if rule.policy == MatchPolicy::NoMatch {
            active.extend(active_rules(&rule.sub_rules));
        } else {
            active.push(rule);
        }
    }
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_builder() {
        let letter = Rule::new(r"(?m)^[a-z]{1,3}\)", MatchPolicy::Unlimited)
            .unwrap()
            .with_label("litera");
        let point = Rule::new(r"(?m)^\d{1,3}\)", MatchPolicy::Limited(2))
            .unwrap()
            .with_sub_rule(letter);

        assert_eq!(point.policy(), MatchPolicy::Limited(2));
        assert_eq!(point.sub_rules().len(), 1);
        assert_eq!(point.sub_rules()[0].label(), Some("litera"));
        assert_eq!(point.name(), r"(?m)^\d{1,3}\)");
        assert_eq!(point.depth(), 2);
    }

    #[test]
    fn test_rule_invalid_pattern() {
        let err = Rule::new("Art(", MatchPolicy::Unlimited).unwrap_err();
        assert!(matches!(err, ParserError::InvalidPattern { ref pattern, .. } if pattern == "Art("));
    }

    #[test]
    fn test_policy_allows() {
        assert!(MatchPolicy::Unlimited.allows(1000));
        assert!(MatchPolicy::Limited(2).allows(1));
        assert!(!MatchPolicy::Limited(2).allows(2));
        assert!(!MatchPolicy::Limited(0).allows(0));
        assert!(!MatchPolicy::NoMatch.allows(0));
        assert!(MatchPolicy::Fallback.allows(5));
    }

    #[test]
    fn test_active_rules_grafts_no_match_sub_rules() {
        let a = Rule::new("a", MatchPolicy::Unlimited).unwrap().with_label("a");
        let c = Rule::new("c", MatchPolicy::Unlimited).unwrap().with_label("c");
        let d = Rule::new("d", MatchPolicy::Unlimited).unwrap().with_label("d");
        let nested = Rule::new("n", MatchPolicy::NoMatch).unwrap().with_sub_rule(d);
        let b = Rule::new("b", MatchPolicy::NoMatch)
            .unwrap()
            .with_sub_rules([c, nested]);
        let e = Rule::new("e", MatchPolicy::Unlimited).unwrap().with_label("e");

        let rules = vec![a, b, e];
        let names: Vec<&str> = active_rules(&rules).iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["a", "c", "d", "e"]);
    }
}
