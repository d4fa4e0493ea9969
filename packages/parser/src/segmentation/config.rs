//! Rule forests for the built-in Polish document types.

use super::forest::RuleForest;
use super::types::{MatchPolicy, Rule};
use crate::error::Result;

const CONSTITUTION_CHAPTER: &str = r"(?m)^Rozdział [IVXLCDM]+\b";
const CONSUMER_DIVISION: &str = r"(?m)^DZIAŁ [IVXLCDM]+\b";
const CONSUMER_CHAPTER: &str = r"(?m)^Rozdział \d{1,3}[a-z]?\b";
const ARTICLE: &str = r"(?m)^Art\. \d{1,3}[a-z]{0,3}(?:–\d{1,3}[a-z]{0,3})?\.";
const CONSTITUTION_PARAGRAPH: &str = r"(?m)^\d{1,3}\.";
const PARAGRAPH: &str = r"(?m)^\d{1,3}[a-z]?\.";
const POINT: &str = r"(?m)^\d{1,3}[a-z]?\)";
const LETTER: &str = r"(?m)^[a-z]{1,3}\)";

fn unlimited(pattern: &str, label: &str) -> Result<Rule> {
    Ok(Rule::new(pattern, MatchPolicy::Unlimited)?.with_label(label))
}

fn fallback(pattern: &str, label: &str) -> Result<Rule> {
    Ok(Rule::new(pattern, MatchPolicy::Fallback)?.with_label(label))
}

/// Create the rule forest for the Constitution of the Republic of Poland.
///
/// ```text
/// Rozdział I
/// └── Art. 1.
///     └── 1. (ustęp)
/// ```
pub fn create_constitution_forest() -> Result<RuleForest> {
    let paragraph = unlimited(CONSTITUTION_PARAGRAPH, "ustęp")?;
    let article = unlimited(ARTICLE, "artykuł")?.with_sub_rule(paragraph);
    let chapter = unlimited(CONSTITUTION_CHAPTER, "rozdział")?.with_sub_rule(article);

    let mut forest = RuleForest::new();
    forest.register(chapter);
    Ok(forest)
}

/// Create the rule forest for the Consumer Rights Act.
///
/// Divisions hold either chapters or, when a division has no chapters,
/// articles directly. Articles hold paragraphs or, without paragraphs,
/// points directly.
///
/// ```text
/// DZIAŁ I
/// ├── Rozdział 1
/// │   └── Art. 1.
/// │       ├── 1. (ustęp)
/// │       │   └── 1) (punkt)
/// │       │       └── a) (litera)
/// │       └── 1) (punkt, fallback)
/// │           └── a)
/// └── Art. 2. (fallback)
/// ```
pub fn create_consumer_rights_forest() -> Result<RuleForest> {
    let letter = unlimited(LETTER, "litera")?;
    let point = unlimited(POINT, "punkt")?.with_sub_rule(letter.clone());
    let direct_point = fallback(POINT, "punkt")?.with_sub_rule(letter);
    let paragraph = unlimited(PARAGRAPH, "ustęp")?.with_sub_rule(point);

    let article_parts = [paragraph, direct_point];
    let article = unlimited(ARTICLE, "artykuł")?.with_sub_rules(article_parts.clone());
    let direct_article = fallback(ARTICLE, "artykuł")?.with_sub_rules(article_parts);

    let chapter = unlimited(CONSUMER_CHAPTER, "rozdział")?.with_sub_rule(article);
    let division = unlimited(CONSUMER_DIVISION, "dział")?.with_sub_rules([chapter, direct_article]);

    let mut forest = RuleForest::new();
    forest.register(division);
    Ok(forest)
}
