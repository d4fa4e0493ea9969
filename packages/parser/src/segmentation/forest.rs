//! Ordered collection of top-level rules.

use super::definition::RuleDefinition;
use super::types::Rule;
use crate::error::Result;

/// Top-level rules of a document type, in priority order.
#[derive(Debug, Clone)]
pub struct RuleForest {
    rules: Vec<Rule>,
}

impl RuleForest {
    /// Create a new empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Build a forest from deserialized definitions.
    ///
    /// # Errors
    /// Fails on the first definition whose pattern or policy is invalid.
    pub fn from_definitions(definitions: &[RuleDefinition]) -> Result<Self> {
        let mut forest = Self::new();
        for definition in definitions {
            forest.register(definition.to_rule()?);
        }
        Ok(forest)
    }

    /// Register a top-level rule after the ones already present.
    pub fn register(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Deepest rule nesting in the forest (0 when empty).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.rules.iter().map(Rule::depth).max().unwrap_or(0)
    }
}

impl Default for RuleForest {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmentation::types::MatchPolicy;

    #[test]
    fn test_forest_register_keeps_order() {
        let mut forest = RuleForest::new();
        assert!(forest.is_empty());
        assert_eq!(forest.depth(), 0);

        forest.register(Rule::new("a", MatchPolicy::Unlimited).unwrap());
        forest.register(
            Rule::new("b", MatchPolicy::Unlimited)
                .unwrap()
                .with_sub_rule(Rule::new("c", MatchPolicy::Limited(1)).unwrap()),
        );

        let names: Vec<&str> = forest.rules().iter().map(Rule::name).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(forest.depth(), 2);
    }

    #[test]
    fn test_forest_from_definitions() {
        let yaml = r"
- pattern: 'Rozdział \d+'
  label: chapter
  sub_rules:
    - pattern: 'Art\. \d+\.'
      policy: limited
      limit: 3
";
        let definitions: Vec<RuleDefinition> = serde_yaml_ng::from_str(yaml).unwrap();
        let forest = RuleForest::from_definitions(&definitions).unwrap();

        assert_eq!(forest.rules().len(), 1);
        assert_eq!(forest.rules()[0].label(), Some("chapter"));
        assert_eq!(
            forest.rules()[0].sub_rules()[0].policy(),
            MatchPolicy::Limited(3)
        );
    }
}
