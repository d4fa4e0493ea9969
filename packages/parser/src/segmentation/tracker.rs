//! Per-rule search state over one fragment's content.

use std::ops::Range;

use regex::{Match, Matches};

use super::types::Rule;

/// Cursor over the matches of one rule in one fragment's content.
///
/// Lives for a single segmentation step: created when a fragment's content
/// is scanned and dropped once its boundaries are known.
pub struct MatchTracker<'r, 'h> {
    rule: &'r Rule,
    matches: Matches<'r, 'h>,
    current: Option<Match<'h>>,
    match_count: usize,
}

impl<'r, 'h> MatchTracker<'r, 'h> {
    /// Start searching `content` and advance to the first match.
    #[must_use]
    pub fn new(rule: &'r Rule, content: &'h str) -> Self {
        let mut matches = rule.pattern().find_iter(content);
        let current = if rule.policy().allows(0) {
            matches.next()
        } else {
            None
        };
        Self {
            rule,
            matches,
            current,
            match_count: 0,
        }
    }

    #[must_use]
    pub fn rule(&self) -> &'r Rule {
        self.rule
    }

    /// Whether a further match may still become a boundary.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.current.is_some()
    }

    /// Start offset of the pending match.
    #[must_use]
    pub fn start(&self) -> Option<usize> {
        self.current.map(|m| m.start())
    }

    /// Number of matches consumed as boundaries so far.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.match_count
    }

    /// Skip pending matches that start before `position`.
    ///
    /// Returns how many were skipped. Skipped matches do not count against
    /// the rule's policy.
    pub fn discard_before(&mut self, position: usize) -> usize {
        let mut discarded = 0;
        while self.current.is_some_and(|m| m.start() < position) {
            self.current = self.matches.next();
            discarded += 1;
        }
        discarded
    }

    /// Take the pending match as a boundary and move to the next one,
    /// re-applying the policy cap.
    pub fn consume(&mut self) -> Option<Range<usize>> {
        let taken = self.current.take()?;
        self.match_count += 1;
        if self.rule.policy().allows(self.match_count) {
            self.current = self.matches.next();
        }
        Some(taken.range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmentation::types::MatchPolicy;

    #[test]
    fn test_tracker_walks_matches() {
        let rule = Rule::new(r"\d\.", MatchPolicy::Unlimited).unwrap();
        let mut tracker = MatchTracker::new(&rule, "1. a 2. b");

        assert!(tracker.is_available());
        assert_eq!(tracker.start(), Some(0));
        assert_eq!(tracker.consume(), Some(0..2));
        assert_eq!(tracker.start(), Some(5));
        assert_eq!(tracker.consume(), Some(5..7));
        assert!(!tracker.is_available());
        assert_eq!(tracker.consume(), None);
        assert_eq!(tracker.match_count(), 2);
    }

    #[test]
    fn test_tracker_limited_cap() {
        let rule = Rule::new(r"x", MatchPolicy::Limited(1)).unwrap();
        let mut tracker = MatchTracker::new(&rule, "x x x");

        assert_eq!(tracker.consume(), Some(0..1));
        assert!(!tracker.is_available());
    }

    #[test]
    fn test_tracker_limited_zero_never_available() {
        let rule = Rule::new(r"x", MatchPolicy::Limited(0)).unwrap();
        let tracker = MatchTracker::new(&rule, "x");
        assert!(!tracker.is_available());
    }

    #[test]
    fn test_tracker_discard_before() {
        let rule = Rule::new(r"x", MatchPolicy::Limited(2)).unwrap();
        let mut tracker = MatchTracker::new(&rule, "x x x x");

        assert_eq!(tracker.discard_before(3), 2);
        assert_eq!(tracker.start(), Some(4));
        assert_eq!(tracker.match_count(), 0);
        assert_eq!(tracker.discard_before(4), 0);
    }
}
