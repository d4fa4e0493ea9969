//! Documents parsed with a user-defined profile.

use super::legal::LegalDocument;
use super::locator::{Level, Locator};
use super::statute::Statute;
use crate::config::DEFAULT_TOC_DEPTH;
use crate::error::{ParserError, Result};
use crate::fragment::TocEntry;

/// A document whose numbering scheme is unknown.
///
/// Fragments are found by their exact identifier through
/// [`LegalDocument::find`]; locators only address the whole document.
#[derive(Debug, Clone)]
pub struct GenericDocument {
    document: LegalDocument,
}

impl GenericDocument {
    #[must_use]
    pub fn new(document: LegalDocument) -> Self {
        Self { document }
    }
}

impl Statute for GenericDocument {
    fn document(&self) -> &LegalDocument {
        &self.document
    }

    fn identifier(&self, level: Level, _number: &str) -> Result<String> {
        Err(ParserError::InvalidArgument(format!(
            "profile '{}' has no {level} numbering; look fragments up by identifier",
            self.document.profile_name()
        )))
    }

    fn table_of_contents(&self) -> Vec<TocEntry> {
        self.document
            .root()
            .table_of_contents(DEFAULT_TOC_DEPTH, |_| false, |_| true)
            .collect()
    }

    fn table_of_contents_for(&self, locator: &Locator) -> Result<Vec<TocEntry>> {
        let fragment = self.resolve(locator)?;
        Ok(fragment
            .table_of_contents(DEFAULT_TOC_DEPTH, |_| false, |_| true)
            .collect())
    }
}
