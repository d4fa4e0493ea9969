//! Line-level normalization of raw statute text.

use std::collections::VecDeque;

use unicode_normalization::UnicodeNormalization;

use super::rules::CleanRule;
use crate::config::SEJM_DELETE_LINE_PATTERNS;
use crate::error::Result;

/// Applies cleaning rules and joins words hyphenated across lines.
#[derive(Debug, Clone, Default)]
pub struct Cleaner {
    rules: Vec<CleanRule>,
}

impl Cleaner {
    /// Create a cleaner without rules.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Cleaner that strips the page furniture of Sejm PDF exports.
    pub fn sejm() -> Result<Self> {
        let mut cleaner = Self::new();
        for pattern in SEJM_DELETE_LINE_PATTERNS {
            cleaner.add_rule(CleanRule::delete_line(pattern)?);
        }
        Ok(cleaner)
    }

    /// Add a rule; rules run in the order they were added.
    pub fn add_rule(&mut self, rule: CleanRule) {
        self.rules.push(rule);
    }

    #[must_use]
    pub fn rules(&self) -> &[CleanRule] {
        &self.rules
    }

    /// NFC-normalize each line, strip a trailing carriage return and apply
    /// the rules.
    pub fn clean<I, S>(&self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cleaned = Vec::new();
        'lines: for (number, line) in lines.into_iter().enumerate() {
            let raw = line.as_ref();
            let mut line: String = raw.strip_suffix('\r').unwrap_or(raw).nfc().collect();
            for rule in &self.rules {
                match rule.apply(line) {
                    Some(kept) => line = kept,
                    None => {
                        tracing::trace!(line = number + 1, rule = rule.pattern().as_str(), "Dropped line");
                        continue 'lines;
                    }
                }
            }
            cleaned.push(line);
        }
        cleaned
    }

    /// Join words split with a hyphen at the end of a line.
    ///
    /// The first word of the following line is moved up; what remains of
    /// that line stays on its own line, or disappears if nothing is left.
    #[must_use]
    pub fn connect_broken_words(&self, lines: Vec<String>) -> Vec<String> {
        let mut pending: VecDeque<String> = lines.into();
        let mut connected = Vec::with_capacity(pending.len());

        while let Some(mut line) = pending.pop_front() {
            while ends_with_broken_word(&line) {
                let Some(following) = pending.pop_front() else {
                    break;
                };
                line.pop();

                let following = following.trim_start();
                let (word, rest) = following
                    .split_once(char::is_whitespace)
                    .unwrap_or((following, ""));
                line.push_str(word);

                let rest = rest.trim_start();
                if !rest.is_empty() {
                    pending.push_front(rest.to_string());
                    break;
                }
            }
            connected.push(line);
        }
        connected
    }

    /// `clean` followed by `connect_broken_words`.
    pub fn normalize<I, S>(&self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cleaned = self.clean(lines);
        self.connect_broken_words(cleaned)
    }
}

fn ends_with_broken_word(line: &str) -> bool {
    let mut tail = line.chars().rev();
    tail.next() == Some('-') && tail.next().is_some_and(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| (*l).to_string()).collect()
    }

    #[test]
    fn test_sejm_cleaner_drops_page_furniture() {
        let cleaner = Cleaner::sejm().unwrap();
        let cleaned = cleaner.clean([
            "©Kancelaria Sejmu s. 1/52",
            "2009-04-21",
            "Art. 1.",
            "a",
            "7",
            "Rzeczpospolita Polska",
        ]);
        assert_eq!(cleaned, strings(&["Art. 1.", "Rzeczpospolita Polska"]));
    }

    #[test]
    fn test_clean_strips_carriage_return_and_normalizes() {
        let cleaner = Cleaner::new();
        // "z" followed by a combining dot above composes to "ż"
        let cleaned = cleaner.clean(["Art. 1.\r", "z\u{307}ółw"]);
        assert_eq!(cleaned, strings(&["Art. 1.", "żółw"]));
    }

    #[test]
    fn test_phrase_removal_keeps_empty_line() {
        let mut cleaner = Cleaner::new();
        cleaner.add_rule(CleanRule::delete_phrase(r"\(uchylony\)").unwrap());
        let cleaned = cleaner.clean(["(uchylony)", "tekst"]);
        assert_eq!(cleaned, strings(&["", "tekst"]));
    }

    #[test]
    fn test_connect_broken_words() {
        let cleaner = Cleaner::new();
        let lines = strings(&["Rzeczpospo-", "lita Polska jest", "dobrem wspól-", "nym"]);
        assert_eq!(
            cleaner.connect_broken_words(lines),
            strings(&["Rzeczpospolita", "Polska jest", "dobrem wspólnym"])
        );
    }

    #[test]
    fn test_connect_broken_words_chain() {
        let cleaner = Cleaner::new();
        let lines = strings(&["kon-", "stytu-", "cyjny organ"]);
        assert_eq!(
            cleaner.connect_broken_words(lines),
            strings(&["konstytucyjny", "organ"])
        );
    }

    #[test]
    fn test_connect_ignores_dashes_and_last_line() {
        let cleaner = Cleaner::new();
        let lines = strings(&["1) -", "2009 -", "ostatni-"]);
        assert_eq!(cleaner.connect_broken_words(lines.clone()), lines);
    }

    #[test]
    fn test_normalize_cleans_then_connects() {
        let cleaner = Cleaner::sejm().unwrap();
        let normalized = cleaner.normalize(["obywa-", "©Kancelaria Sejmu s. 2/52", "tele"]);
        assert_eq!(normalized, strings(&["obywatele"]));
    }
}
