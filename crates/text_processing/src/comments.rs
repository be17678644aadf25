//! Standard comments
//!
//! Locates every place a configured standard comment applies: each
//! case-insensitive occurrence of its trigger text that is not already
//! covered by a comment.

use edittools_config::StandardComment;
use edittools_core::TextRange;
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::{Result, TextProcessingError};

/// A span that already carries a comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentedSpan {
    pub range_index: usize,
    pub span: Range<usize>,
}

/// Where a standard comment should be attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentSite {
    pub range_index: usize,
    /// Byte span of the trigger occurrence within the range text
    pub span: Range<usize>,
    /// Text as it appears in the document
    pub matched: String,
    pub trigger: String,
    pub comment: String,
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

/// Find comment sites for all comments, or only the one with `only_trigger`
///
/// Comments are applied in order; once a span receives a comment, later
/// comments overlapping it are skipped, as are spans listed in `existing`.
/// Sites are returned in document order.
pub fn find_comment_sites(
    ranges: &[TextRange],
    comments: &[StandardComment],
    only_trigger: Option<&str>,
    existing: &[CommentedSpan],
) -> Result<Vec<CommentSite>> {
    let mut taken: Vec<CommentedSpan> = existing.to_vec();
    let mut sites = Vec::new();

    let selected = comments
        .iter()
        .filter(|c| !c.trigger.is_empty())
        .filter(|c| only_trigger.map_or(true, |t| c.trigger == t));

    for comment in selected {
        let pattern = RegexBuilder::new(&regex::escape(&comment.trigger))
            .case_insensitive(true)
            .build()
            .map_err(|e| TextProcessingError::InvalidPattern {
                pattern: comment.trigger.clone(),
                message: e.to_string(),
            })?;

        for (range_index, range) in ranges.iter().enumerate() {
            for found in pattern.find_iter(range.text()) {
                let span = found.range();
                let covered = taken
                    .iter()
                    .any(|t| t.range_index == range_index && overlaps(&t.span, &span));
                if covered {
                    continue;
                }

                taken.push(CommentedSpan {
                    range_index,
                    span: span.clone(),
                });
                sites.push(CommentSite {
                    range_index,
                    span,
                    matched: found.as_str().to_string(),
                    trigger: comment.trigger.clone(),
                    comment: comment.text.clone(),
                });
            }
        }
    }

    sites.sort_by_key(|s| (s.range_index, s.span.start));
    Ok(sites)
}
