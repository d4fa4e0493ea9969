//! Structural addresses inside a statute.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParserError, Result};
use crate::fragment::FragmentRef;

/// Structural level of a Polish legal text, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    /// Dział
    Section,
    /// Rozdział
    Chapter,
    /// Artykuł
    Article,
    /// Ustęp
    Paragraph,
    /// Punkt
    Point,
    /// Litera
    Letter,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Section,
        Level::Chapter,
        Level::Article,
        Level::Paragraph,
        Level::Point,
        Level::Letter,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Section => "section",
            Level::Chapter => "chapter",
            Level::Article => "article",
            Level::Paragraph => "paragraph",
            Level::Point => "point",
            Level::Letter => "letter",
        }
    }

    /// Whether `fragment`'s identifier has the shape of this level's headers.
    #[must_use]
    pub fn matches(self, fragment: &FragmentRef<'_>) -> bool {
        let Some(identifier) = fragment.identifier() else {
            return false;
        };
        let starts_with_digit = identifier.starts_with(|c: char| c.is_ascii_digit());
        match self {
            Level::Section => identifier.starts_with("DZIAŁ "),
            Level::Chapter => identifier.starts_with("Rozdział "),
            Level::Article => identifier.starts_with("Art. "),
            Level::Paragraph => starts_with_digit && identifier.ends_with('.'),
            Level::Point => starts_with_digit && identifier.ends_with(')'),
            Level::Letter => {
                identifier.starts_with(|c: char| c.is_ascii_lowercase()) && identifier.ends_with(')')
            }
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == wanted)
            .ok_or_else(|| ParserError::InvalidArgument(format!("unknown level '{s}'")))
    }
}

/// Numbers of the units enclosing a fragment, as a reader would cite them.
///
/// Every field is optional; the most specific one given is the fragment
/// addressed, the others narrow the search. Numbers are written the way
/// they appear in the text (`7a`, `2`, `b`), sections also as arabic digits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locator {
    pub section: Option<String>,
    pub chapter: Option<String>,
    pub article: Option<String>,
    pub paragraph: Option<String>,
    pub point: Option<String>,
    pub letter: Option<String>,
}

impl Locator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn section(mut self, number: impl Into<String>) -> Self {
        self.section = Some(number.into());
        self
    }

    #[must_use]
    pub fn chapter(mut self, number: impl Into<String>) -> Self {
        self.chapter = Some(number.into());
        self
    }

    #[must_use]
    pub fn article(mut self, number: impl Into<String>) -> Self {
        self.article = Some(number.into());
        self
    }

    #[must_use]
    pub fn paragraph(mut self, number: impl Into<String>) -> Self {
        self.paragraph = Some(number.into());
        self
    }

    #[must_use]
    pub fn point(mut self, number: impl Into<String>) -> Self {
        self.point = Some(number.into());
        self
    }

    #[must_use]
    pub fn letter(mut self, letter: impl Into<String>) -> Self {
        self.letter = Some(letter.into());
        self
    }

    /// Whether no level is given, i.e. the locator addresses the whole document.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components().is_empty()
    }

    /// Given levels with their numbers, outermost first.
    #[must_use]
    pub fn components(&self) -> Vec<(Level, &str)> {
        let fields = [
            (Level::Section, &self.section),
            (Level::Chapter, &self.chapter),
            (Level::Article, &self.article),
            (Level::Paragraph, &self.paragraph),
            (Level::Point, &self.point),
            (Level::Letter, &self.letter),
        ];
        fields
            .into_iter()
            .filter_map(|(level, number)| number.as_deref().map(|n| (level, n)))
            .collect()
    }

    /// Check that units numbered only within their parent come with it.
    ///
    /// Paragraph and point numbers restart in every article, letters in
    /// every point.
    pub fn validate(&self) -> Result<()> {
        let missing = |what: &str, needs: &str| {
            Err(ParserError::InvalidArgument(format!("a {what} needs an {needs}")))
        };
        if self.paragraph.is_some() && self.article.is_none() {
            return missing("paragraph", "article");
        }
        if self.point.is_some() && self.article.is_none() {
            return missing("point", "article");
        }
        if self.letter.is_some() && self.point.is_none() {
            return Err(ParserError::InvalidArgument(
                "a letter needs a point".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components = self.components();
        if components.is_empty() {
            return f.write_str("whole document");
        }
        for (index, (level, number)) in components.into_iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{level} {number}")?;
        }
        Ok(())
    }
}
