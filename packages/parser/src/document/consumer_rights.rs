//! Consumer Rights Act (ustawa o prawach konsumenta).

use std::path::Path;

use super::legal::LegalDocument;
use super::locator::{Level, Locator};
use super::profile::ConsumerRightsProfile;
use super::statute::Statute;
use crate::config::{
    validate_article_number, validate_letter, validate_unit_number, DEFAULT_TOC_DEPTH,
};
use crate::error::Result;
use crate::fragment::{FragmentRef, TocEntry};
use crate::numerals::section_numeral;

/// The act: divisions (`DZIAŁ II`), chapters (`Rozdział 3`), articles,
/// paragraphs, points and letters.
#[derive(Debug, Clone)]
pub struct ConsumerRightsAct {
    document: LegalDocument,
}

impl ConsumerRightsAct {
    #[must_use]
    pub fn new(document: LegalDocument) -> Self {
        Self { document }
    }

    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        LegalDocument::from_lines(lines, &ConsumerRightsProfile).map(Self::new)
    }

    pub fn from_text(text: &str) -> Result<Self> {
        LegalDocument::from_text(text, &ConsumerRightsProfile).map(Self::new)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        LegalDocument::open(path, &ConsumerRightsProfile).map(Self::new)
    }
}

/// Root, divisions and chapters: the levels the overview descends through.
fn is_container(fragment: &FragmentRef<'_>) -> bool {
    fragment.identifier().is_none()
        || Level::Section.matches(fragment)
        || Level::Chapter.matches(fragment)
}

impl Statute for ConsumerRightsAct {
    fn document(&self) -> &LegalDocument {
        &self.document
    }

    fn identifier(&self, level: Level, number: &str) -> Result<String> {
        match level {
            Level::Section => Ok(format!("DZIAŁ {}", section_numeral(number)?)),
            Level::Chapter => {
                validate_unit_number(number)?;
                Ok(format!("Rozdział {number}"))
            }
            Level::Article => {
                validate_article_number(number)?;
                Ok(format!("Art. {number}."))
            }
            Level::Paragraph => {
                validate_unit_number(number)?;
                Ok(format!("{number}."))
            }
            Level::Point => {
                validate_unit_number(number)?;
                Ok(format!("{number})"))
            }
            Level::Letter => {
                validate_letter(number)?;
                Ok(format!("{number})"))
            }
        }
    }

    /// Divisions and chapters, plus articles placed directly in a division.
    /// Entries without a title are left out.
    fn table_of_contents(&self) -> Vec<TocEntry> {
        self.document
            .root()
            .table_of_contents(
                DEFAULT_TOC_DEPTH,
                |fragment| !is_container(&fragment),
                |entry| entry.title.is_some(),
            )
            .collect()
    }

    /// Descends only through the requested fragment, divisions and chapters,
    /// so a section lists its chapters and articles but not their points.
    fn table_of_contents_for(&self, locator: &Locator) -> Result<Vec<TocEntry>> {
        let fragment = self
            .resolve(locator)
            .map_err(|e| e.context("Couldn't get table of contents."))?;
        let start = fragment.id();
        Ok(fragment
            .table_of_contents(
                DEFAULT_TOC_DEPTH,
                |part| part.id() != start && !is_container(&part),
                |_| true,
            )
            .collect())
    }
}
