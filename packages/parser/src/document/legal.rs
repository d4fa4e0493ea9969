//! A cleaned and segmented legal document.

use std::fs;
use std::path::Path;

use super::profile::DocumentProfile;
use crate::error::{ParserError, Result};
use crate::fragment::{FragmentRef, FragmentTree};
use crate::segmentation::SegmentEngine;

/// Parsed document: the fragment tree plus the name of the profile that
/// produced it. Immutable once built.
#[derive(Debug, Clone)]
pub struct LegalDocument {
    profile: String,
    tree: FragmentTree,
}

impl LegalDocument {
    /// Clean and segment raw lines with `profile`.
    pub fn from_lines<S: AsRef<str>>(lines: &[S], profile: &dyn DocumentProfile) -> Result<Self> {
        let cleaned = profile.cleaner()?.normalize(lines);
        let engine = SegmentEngine::new(profile.rule_forest()?);
        let tree = engine.parse_document(&cleaned)?;

        tracing::debug!(
            profile = profile.name(),
            lines = lines.len(),
            kept = cleaned.len(),
            fragments = tree.len(),
            "Document parsed"
        );

        Ok(Self {
            profile: profile.name().to_string(),
            tree,
        })
    }

    pub fn from_text(text: &str, profile: &dyn DocumentProfile) -> Result<Self> {
        let lines: Vec<&str> = text.lines().collect();
        Self::from_lines(&lines, profile)
    }

    /// Read a UTF-8 text file and parse it.
    pub fn open(path: impl AsRef<Path>, profile: &dyn DocumentProfile) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            ParserError::from(e).context(format!("Couldn't read {}.", path.display()))
        })?;
        Self::from_text(&text, profile)
    }

    #[must_use]
    pub fn profile_name(&self) -> &str {
        &self.profile
    }

    #[must_use]
    pub fn tree(&self) -> &FragmentTree {
        &self.tree
    }

    #[must_use]
    pub fn root(&self) -> FragmentRef<'_> {
        self.tree.root()
    }

    /// First fragment in document order carrying exactly `identifier`.
    pub fn find(&self, identifier: &str) -> Result<FragmentRef<'_>> {
        self.root().require_descendant(identifier)
    }

    /// The whole tree as YAML.
    pub fn outline_yaml(&self) -> Result<String> {
        self.root().outline().to_yaml()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ConstitutionProfile;

    const TEXT: &str = "©Kancelaria Sejmu s. 1/1\n\
        Rozdział I\n\
        RZECZPOSPOLITA\n\
        Art. 1.\n\
        Rzeczpospolita Polska jest dobrem wspól-\n\
        nym wszystkich obywateli.\n\
        2009-04-21\n";

    #[test]
    fn test_from_text_cleans_and_segments() {
        let document = LegalDocument::from_text(TEXT, &ConstitutionProfile).unwrap();
        assert_eq!(document.profile_name(), "constitution");

        let article = document.find("Art. 1.").unwrap();
        assert_eq!(
            article.content(),
            "Rzeczpospolita Polska jest dobrem wspólnym\nwszystkich obywateli.\n"
        );
        assert_eq!(article.parent().unwrap().identifier(), Some("Rozdział I"));
        assert!(document.find("Art. 2.").unwrap_err().is_not_found());
    }

    #[test]
    fn test_outline_yaml() {
        let document = LegalDocument::from_text(TEXT, &ConstitutionProfile).unwrap();
        let yaml = document.outline_yaml().unwrap();
        assert!(yaml.contains("Rozdział I"));
        assert!(yaml.contains("Art. 1."));
    }

    #[test]
    fn test_open_missing_file() {
        let err = LegalDocument::open("/nonexistent/konstytucja.txt", &ConstitutionProfile)
            .unwrap_err();
        assert!(matches!(err, ParserError::Context { .. }));
    }
}
