//! Constitution of the Republic of Poland.

use std::path::Path;

use super::legal::LegalDocument;
use super::locator::{Level, Locator};
use super::profile::ConstitutionProfile;
use super::statute::Statute;
use crate::config::{validate_article_number, validate_unit_number, DEFAULT_TOC_DEPTH};
use crate::error::{ParserError, Result};
use crate::fragment::TocEntry;
use crate::numerals::section_numeral;

/// The constitution: chapters (`Rozdział I`), articles and paragraphs.
#[derive(Debug, Clone)]
pub struct Constitution {
    document: LegalDocument,
}

impl Constitution {
    #[must_use]
    pub fn new(document: LegalDocument) -> Self {
        Self { document }
    }

    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        LegalDocument::from_lines(lines, &ConstitutionProfile).map(Self::new)
    }

    pub fn from_text(text: &str) -> Result<Self> {
        LegalDocument::from_text(text, &ConstitutionProfile).map(Self::new)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        LegalDocument::open(path, &ConstitutionProfile).map(Self::new)
    }
}

impl Statute for Constitution {
    fn document(&self) -> &LegalDocument {
        &self.document
    }

    fn identifier(&self, level: Level, number: &str) -> Result<String> {
        match level {
            Level::Chapter => Ok(format!("Rozdział {}", section_numeral(number)?)),
            Level::Article => {
                validate_article_number(number)?;
                Ok(format!("Art. {number}."))
            }
            Level::Paragraph => {
                validate_unit_number(number)?;
                Ok(format!("{number}."))
            }
            Level::Section | Level::Point | Level::Letter => Err(ParserError::InvalidArgument(
                format!("the constitution is not divided into {level}s"),
            )),
        }
    }

    /// Chapters with their titles.
    fn table_of_contents(&self) -> Vec<TocEntry> {
        self.document
            .root()
            .table_of_contents(1, |_| false, |_| true)
            .collect()
    }

    fn table_of_contents_for(&self, locator: &Locator) -> Result<Vec<TocEntry>> {
        let fragment = self
            .resolve(locator)
            .map_err(|e| e.context("Couldn't get table of contents."))?;
        Ok(fragment
            .table_of_contents(DEFAULT_TOC_DEPTH, |_| false, |_| true)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "Rozdział I\n\
        RZECZPOSPOLITA\n\
        Art. 1.\n\
        Rzeczpospolita Polska jest dobrem wspólnym wszystkich obywateli.\n\
        Art. 2.\n\
        1. Pierwszy ustęp.\n\
        2. Drugi ustęp.\n\
        Rozdział II\n\
        WOLNOŚCI\n\
        Art. 30.\n\
        Godność człowieka.\n";

    fn constitution() -> Constitution {
        Constitution::from_text(TEXT).unwrap()
    }

    #[test]
    fn test_identifiers() {
        let constitution = constitution();
        assert_eq!(constitution.identifier(Level::Chapter, "2").unwrap(), "Rozdział II");
        assert_eq!(constitution.identifier(Level::Chapter, "iv").unwrap(), "Rozdział IV");
        assert_eq!(constitution.identifier(Level::Article, "30").unwrap(), "Art. 30.");
        assert_eq!(constitution.identifier(Level::Paragraph, "1").unwrap(), "1.");

        let err = constitution.identifier(Level::Section, "1").unwrap_err();
        assert!(matches!(err, ParserError::InvalidArgument(_)));
        let err = constitution.identifier(Level::Article, "x").unwrap_err();
        assert!(matches!(err, ParserError::InvalidNumber(_)));
    }

    #[test]
    fn test_resolve_paragraph_within_article() {
        let constitution = constitution();
        let paragraph = constitution
            .resolve(&Locator::new().article("2").paragraph("2"))
            .unwrap();
        assert_eq!(paragraph.content(), "Drugi ustęp.\n");

        let err = constitution
            .resolve(&Locator::new().chapter("2").article("1"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_content_prepends_identifier() {
        let constitution = constitution();
        let content = constitution.content(&Locator::new().chapter("II")).unwrap();
        assert_eq!(content, "Rozdział II\nWOLNOŚCI\nArt. 30.\nGodność człowieka.\n");

        let err = constitution.content(&Locator::new().chapter("5")).unwrap_err();
        assert_eq!(err.to_string(), "Couldn't get content. Couldn't find: Rozdział V");
    }

    #[test]
    fn test_tables_of_contents() {
        let constitution = constitution();
        let lines: Vec<String> = constitution
            .table_of_contents()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(lines, vec!["Rozdział I RZECZPOSPOLITA", "Rozdział II WOLNOŚCI"]);

        let chapter: Vec<String> = constitution
            .table_of_contents_for(&Locator::new().chapter("1"))
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            chapter,
            vec![
                "Rozdział I RZECZPOSPOLITA",
                "Art. 1. Rzeczpospolita Polska jest dobrem wspólnym wszystkich obywateli.",
                "Art. 2.",
                "  1. Pierwszy ustęp.",
                "  2. Drugi ustęp.",
            ]
        );
    }
}
