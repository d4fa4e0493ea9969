//! Cleaning rules.

use regex::Regex;

use crate::error::{ParserError, Result};

/// What a [`CleanRule`] does with the text its pattern matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanRuleKind {
    /// Drop every line the pattern matches.
    DeleteLineWithPhrase,

    /// Remove the matched text, keep the rest of the line.
    DeletePhrase,
}

/// A pattern applied line by line before segmentation.
#[derive(Debug, Clone)]
pub struct CleanRule {
    pattern: Regex,
    kind: CleanRuleKind,
}

impl CleanRule {
    /// Compile a cleaning rule.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if the expression does not compile.
    pub fn new(pattern: &str, kind: CleanRuleKind) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| ParserError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { pattern, kind })
    }

    pub fn delete_line(pattern: &str) -> Result<Self> {
        Self::new(pattern, CleanRuleKind::DeleteLineWithPhrase)
    }

    pub fn delete_phrase(pattern: &str) -> Result<Self> {
        Self::new(pattern, CleanRuleKind::DeletePhrase)
    }

    #[must_use]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    #[must_use]
    pub fn kind(&self) -> CleanRuleKind {
        self.kind
    }

    /// Apply the rule to one line; `None` means the line is dropped.
    #[must_use]
    pub fn apply(&self, line: String) -> Option<String> {
        match self.kind {
            CleanRuleKind::DeleteLineWithPhrase => (!self.pattern.is_match(&line)).then_some(line),
            CleanRuleKind::DeletePhrase => Some(self.pattern.replace_all(&line, "").into_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_line_rule() {
        let rule = CleanRule::delete_line(r"^©Kancelaria Sejmu").unwrap();
        assert_eq!(rule.kind(), CleanRuleKind::DeleteLineWithPhrase);
        assert_eq!(rule.apply("©Kancelaria Sejmu s. 1/52".into()), None);
        assert_eq!(rule.apply("Art. 1.".into()), Some("Art. 1.".into()));
    }

    #[test]
    fn test_delete_phrase_rule() {
        let rule = CleanRule::delete_phrase(r"\(uchylony\)\s*").unwrap();
        assert_eq!(
            rule.apply("Art. 3. (uchylony) tekst".into()),
            Some("Art. 3. tekst".into())
        );
        assert_eq!(rule.apply("(uchylony)".into()), Some(String::new()));
    }

    #[test]
    fn test_invalid_clean_pattern() {
        let err = CleanRule::delete_phrase("[").unwrap_err();
        assert!(matches!(err, ParserError::InvalidPattern { .. }));
    }
}
