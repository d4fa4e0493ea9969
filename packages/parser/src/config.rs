//! Configuration constants and validation functions for the parser.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ParserError, Result};

/// Default depth for tables of contents.
///
/// Two levels show a division with its chapters, or a chapter with its
/// articles, without flooding the output with paragraphs.
pub const DEFAULT_TOC_DEPTH: usize = 2;

/// Maximum number of characters of a fragment title shown in a table of contents.
pub const TITLE_MAX_CHARS: usize = 80;

/// Text wrap width for console output.
pub const TEXT_WRAP_WIDTH: usize = 100;

/// Line patterns that Sejm (Kancelaria Sejmu) PDF exports stamp on every page.
///
/// - the publisher stamp line
/// - the consolidation date line (e.g. `2019-01-08`)
/// - stray single-letter and single-digit lines left by page numbering
pub const SEJM_DELETE_LINE_PATTERNS: [&str; 4] = [
    r"^©Kancelaria Sejmu",
    r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$",
    r"^[a-zA-Z]$",
    r"^[0-9]$",
];

/// Article number: up to three digits, an optional letter suffix, optionally
/// a range (`5–7`, `12a–12c`).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{1,3}[a-z]{0,3}(–\d{1,3}[a-z]{0,3})?$").expect("valid regex")
});

/// Paragraph or point number: up to three digits and an optional letter.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static UNIT_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}[a-z]?$").expect("valid regex"));

/// Letter: one to three lower-case letters (`a`, `zc`).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LETTER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{1,3}$").expect("valid regex"));

/// Validate an article number.
///
/// # Examples
/// ```
/// use ustawa_parser::config::validate_article_number;
///
/// assert!(validate_article_number("12").is_ok());
/// assert!(validate_article_number("7a").is_ok());
/// assert!(validate_article_number("Art. 7").is_err());
/// ```
pub fn validate_article_number(number: &str) -> Result<()> {
    if ARTICLE_NUMBER_PATTERN.is_match(number) {
        Ok(())
    } else {
        Err(ParserError::InvalidNumber(number.to_string()))
    }
}

/// Validate a paragraph (ustęp) or point (punkt) number.
pub fn validate_unit_number(number: &str) -> Result<()> {
    if UNIT_NUMBER_PATTERN.is_match(number) {
        Ok(())
    } else {
        Err(ParserError::InvalidNumber(number.to_string()))
    }
}

/// Validate a letter (litera) marker.
pub fn validate_letter(letter: &str) -> Result<()> {
    if LETTER_PATTERN.is_match(letter) {
        Ok(())
    } else {
        Err(ParserError::InvalidNumber(letter.to_string()))
    }
}
