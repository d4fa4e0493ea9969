//! Structural queries shared by the document façades.

use super::legal::LegalDocument;
use super::locator::{Level, Locator};
use crate::error::Result;
use crate::fragment::{FragmentRef, TocEntry};

/// A parsed document addressed by structural numbers.
///
/// Implementors decide how a level number is spelled in the text and what
/// the tables of contents look like; lookups are shared.
pub trait Statute {
    fn document(&self) -> &LegalDocument;

    /// Identifier of the `level` unit numbered `number`, as printed in the
    /// document (e.g. chapter `2` of the constitution is `Rozdział II`).
    ///
    /// # Errors
    /// `InvalidArgument` for a level the document does not have,
    /// `InvalidNumber` for a malformed number.
    fn identifier(&self, level: Level, number: &str) -> Result<String>;

    /// Table of contents of the whole document.
    fn table_of_contents(&self) -> Vec<TocEntry>;

    /// Table of contents of the fragment addressed by `locator`.
    fn table_of_contents_for(&self, locator: &Locator) -> Result<Vec<TocEntry>>;

    /// Fragment addressed by `locator`; an empty locator is the root.
    ///
    /// Each given level is searched inside the fragment found for the
    /// previous one.
    fn resolve(&self, locator: &Locator) -> Result<FragmentRef<'_>> {
        locator.validate()?;
        let mut scope = self.document().root();
        for (level, number) in locator.components() {
            let identifier = self.identifier(level, number)?;
            scope = scope.require_descendant(&identifier)?;
        }
        Ok(scope)
    }

    /// `level` units from `start` to `end` inclusive, searched inside the
    /// fragment addressed by `scope`.
    fn resolve_range(
        &self,
        scope: &Locator,
        level: Level,
        start: &str,
        end: &str,
    ) -> Result<Vec<FragmentRef<'_>>> {
        let start = self.identifier(level, start)?;
        let end = self.identifier(level, end)?;
        let scope = self.resolve(scope)?;
        scope.parts_in_range(|fragment| level.matches(fragment), &start, &end)
    }

    /// Text of the addressed fragment, header included.
    fn content(&self, locator: &Locator) -> Result<String> {
        let fragment = self
            .resolve(locator)
            .map_err(|e| e.context("Couldn't get content."))?;
        Ok(fragment.full_text())
    }
}
