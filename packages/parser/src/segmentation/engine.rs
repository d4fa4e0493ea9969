//! Segmentation engine that carves a text into a fragment tree using a rule forest.

use std::ops::Range;

use super::forest::RuleForest;
use super::tracker::MatchTracker;
use super::types::{active_rules, MatchPolicy, Rule};
use crate::error::{ParserError, Result};
use crate::fragment::{FragmentId, FragmentTree, Separators};

/// Engine for segmenting documents with a rule forest.
///
/// Each fragment is scanned with one [`MatchTracker`] per active rule; the
/// earliest match (earlier-declared rule on ties) becomes the next child
/// boundary, and every child is segmented again with its rule's sub-rules.
pub struct SegmentEngine {
    forest: RuleForest,
}

impl SegmentEngine {
    /// Create a new engine for the given forest.
    #[must_use]
    pub fn new(forest: RuleForest) -> Self {
        Self { forest }
    }

    #[must_use]
    pub fn forest(&self) -> &RuleForest {
        &self.forest
    }

    /// Segment a document given as lines.
    ///
    /// Every line is followed by a newline character in the root content.
    pub fn parse_document<S: AsRef<str>>(&self, lines: &[S]) -> Result<FragmentTree> {
        let mut content = String::new();
        for line in lines {
            content.push_str(line.as_ref());
            content.push('\n');
        }
        self.parse_text(content)
    }

    /// Segment a document given as one string.
    pub fn parse_text(&self, text: impl Into<String>) -> Result<FragmentTree> {
        let mut tree = FragmentTree::new(text);
        let root = tree.root_id();
        segment_fragment(&mut tree, root, self.forest.rules())?;

        tracing::debug!(
            fragments = tree.len(),
            forest_depth = self.forest.depth(),
            "Document segmented"
        );
        Ok(tree)
    }
}

/// Segment one fragment of `tree` (and, recursively, its new children).
///
/// # Errors
/// Returns `InvalidArgument` if `id` does not belong to `tree` or the
/// fragment already has children.
pub fn segment_fragment(tree: &mut FragmentTree, id: FragmentId, rules: &[Rule]) -> Result<()> {
    let Some(fragment) = tree.get(id) else {
        return Err(ParserError::InvalidArgument(format!(
            "fragment #{} does not belong to this tree",
            id.index()
        )));
    };
    if !fragment.children().is_empty() {
        return Err(ParserError::InvalidArgument(format!(
            "fragment #{} has already been segmented",
            id.index()
        )));
    }

    segment(tree, id, rules);
    Ok(())
}

/// A child carved out of a fragment's content.
#[derive(Debug)]
struct Boundary<'r> {
    /// Span of the identifier (the matched header).
    header: Range<usize>,
    /// Span of the child's content.
    body: Range<usize>,
    /// Character skipped between header and body.
    separator: Option<char>,
    rule: &'r Rule,
}

fn segment(tree: &mut FragmentTree, id: FragmentId, rules: &[Rule]) {
    let content = tree.node(id).content().to_string();
    let boundaries = find_boundaries(&content, rules);
    let Some(first) = boundaries.first() else {
        return;
    };

    tracing::debug!(
        fragment = tree.node(id).identifier().unwrap_or("<root>"),
        children = boundaries.len(),
        "Segmenting fragment"
    );

    let (residual, separator_before) = residual_content(&content, first.header.start);
    tree.set_content(id, residual);

    for (index, boundary) in boundaries.iter().enumerate() {
        let separators = Separators {
            before: if index == 0 { separator_before } else { None },
            after: boundary.separator,
        };
        let child = tree.add_child(
            id,
            content[boundary.header.clone()].to_string(),
            content[boundary.body.clone()].to_string(),
            separators,
        );
        segment(tree, child, boundary.rule.sub_rules());
    }
}

/// Content left to the parent: everything before the first header, minus
/// the one separator character right in front of it.
fn residual_content(content: &str, first_header: usize) -> (String, Option<char>) {
    let separator = content[..first_header].chars().next_back();
    let cut = first_header - separator.map_or(0, char::len_utf8);
    (content[..cut].to_string(), separator)
}

fn find_boundaries<'r>(content: &str, rules: &'r [Rule]) -> Vec<Boundary<'r>> {
    let (primary, fallback): (Vec<&Rule>, Vec<&Rule>) = active_rules(rules)
        .into_iter()
        .partition(|rule| rule.policy() != MatchPolicy::Fallback);

    let mut headers = scan_headers(content, &primary);
    if headers.is_empty() && !fallback.is_empty() {
        tracing::trace!(rules = fallback.len(), "No primary match, trying fallback rules");
        headers = scan_headers(content, &fallback);
    }

    let mut boundaries = Vec::with_capacity(headers.len());
    for (index, (header, rule)) in headers.iter().enumerate() {
        let end = headers
            .get(index + 1)
            .map_or(content.len(), |(next, _)| next.start);
        let separator = content[header.end..end].chars().next();
        let body_start = header.end + separator.map_or(0, char::len_utf8);

        boundaries.push(Boundary {
            header: header.clone(),
            body: body_start..end,
            separator,
            rule: *rule,
        });
    }
    boundaries
}

/// Run the trackers over `content` and collect headers in document order.
fn scan_headers<'r>(content: &str, rules: &[&'r Rule]) -> Vec<(Range<usize>, &'r Rule)> {
    let mut trackers: Vec<MatchTracker<'r, '_>> = rules
        .iter()
        .map(|&rule| MatchTracker::new(rule, content))
        .collect();

    let mut headers = Vec::new();
    let mut cursor = 0;
    while let Some(index) = select_earliest(&mut trackers, cursor) {
        let tracker = &mut trackers[index];
        let Some(header) = tracker.consume() else {
            break;
        };

        tracing::trace!(
            rule = tracker.rule().name(),
            start = header.start,
            end = header.end,
            matched = tracker.match_count(),
            "Boundary found"
        );
        cursor = header.end;
        headers.push((header, tracker.rule()));
    }
    headers
}

/// Index of the tracker whose pending match starts first.
///
/// Matches starting before `cursor` overlap the previous header and are
/// dropped. Ties go to the earlier tracker, i.e. the earlier-declared rule.
fn select_earliest(trackers: &mut [MatchTracker<'_, '_>], cursor: usize) -> Option<usize> {
    let mut chosen: Option<(usize, usize)> = None;
    for (index, tracker) in trackers.iter_mut().enumerate() {
        let discarded = tracker.discard_before(cursor);
        if discarded > 0 {
            tracing::debug!(
                rule = tracker.rule().name(),
                discarded,
                "Dropped matches overlapping the previous boundary"
            );
        }

        let Some(start) = tracker.start() else {
            continue;
        };
        let earlier = match chosen {
            Some((_, best)) => start < best,
            None => true,
        };
        if earlier {
            chosen = Some((index, start));
        }
    }
    chosen.map(|(index, _)| index)
}
