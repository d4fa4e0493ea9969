//! Document profiles: how a document type is cleaned and segmented.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cleaning::{CleanRule, Cleaner};
use crate::error::{ParserError, Result};
use crate::segmentation::{
    create_constitution_forest, create_consumer_rights_forest, RuleDefinition, RuleForest,
};

/// A document type known to the parser.
pub trait DocumentProfile {
    /// Short name used in logs and messages.
    fn name(&self) -> &str;

    /// Cleaner applied to the raw lines before segmentation.
    fn cleaner(&self) -> Result<Cleaner>;

    /// Rules describing the document's structure.
    fn rule_forest(&self) -> Result<RuleForest>;
}

/// Constitution of the Republic of Poland (Sejm publication).
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstitutionProfile;

impl DocumentProfile for ConstitutionProfile {
    fn name(&self) -> &str {
        "constitution"
    }

    fn cleaner(&self) -> Result<Cleaner> {
        Cleaner::sejm()
    }

    fn rule_forest(&self) -> Result<RuleForest> {
        create_constitution_forest()
    }
}

/// Consumer Rights Act (Sejm publication).
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsumerRightsProfile;

impl DocumentProfile for ConsumerRightsProfile {
    fn name(&self) -> &str {
        "consumer-rights"
    }

    fn cleaner(&self) -> Result<Cleaner> {
        Cleaner::sejm()
    }

    fn rule_forest(&self) -> Result<RuleForest> {
        create_consumer_rights_forest()
    }
}

/// On-disk form of a user-defined profile.
///
/// ```yaml
/// name: regulamin
/// delete_lines: ['^Strona \d+$']
/// delete_phrases: ['\(uchylony\)']
/// rules:
///   - pattern: '(?m)^§ \d+\.'
///     sub_rules:
///       - pattern: '(?m)^\d+\.'
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileDefinition {
    pub name: String,

    /// Patterns of lines to drop.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub delete_lines: Vec<String>,

    /// Patterns of text to remove from lines.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub delete_phrases: Vec<String>,

    pub rules: Vec<RuleDefinition>,
}

/// Profile compiled from a [`ProfileDefinition`].
#[derive(Debug, Clone)]
pub struct CustomProfile {
    name: String,
    cleaner: Cleaner,
    forest: RuleForest,
}

impl CustomProfile {
    /// Compile a definition, failing on the first invalid pattern or policy.
    pub fn from_definition(definition: &ProfileDefinition) -> Result<Self> {
        let mut cleaner = Cleaner::new();
        for pattern in &definition.delete_lines {
            cleaner.add_rule(CleanRule::delete_line(pattern)?);
        }
        for pattern in &definition.delete_phrases {
            cleaner.add_rule(CleanRule::delete_phrase(pattern)?);
        }

        let forest = RuleForest::from_definitions(&definition.rules)?;
        if forest.is_empty() {
            return Err(ParserError::InvalidArgument(format!(
                "profile '{}' defines no rules",
                definition.name
            )));
        }

        Ok(Self {
            name: definition.name.clone(),
            cleaner,
            forest,
        })
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let definition: ProfileDefinition = serde_yaml_ng::from_str(yaml)?;
        Self::from_definition(&definition)
    }

    /// Read and compile a profile file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|e| {
            ParserError::from(e).context(format!("Couldn't read profile {}.", path.display()))
        })?;
        Self::from_yaml(&yaml)
            .map_err(|e| e.context(format!("Invalid profile {}.", path.display())))
    }
}

impl DocumentProfile for CustomProfile {
    fn name(&self) -> &str {
        &self.name
    }

    fn cleaner(&self) -> Result<Cleaner> {
        Ok(self.cleaner.clone())
    }

    fn rule_forest(&self) -> Result<RuleForest> {
        Ok(self.forest.clone())
    }
}
