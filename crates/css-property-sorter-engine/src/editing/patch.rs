use std::ops::Range;

use crate::parsing::LineRange;

/// Above this many edits, feedback collapses into one bounding selection.
pub const MAX_SELECTIONS: usize = 200;

/// A sorted span mapped onto a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEdit {
    /// Document lines the edit replaces.
    pub lines: LineRange,
    /// Byte range from the start of the first line to the content end of
    /// the last line (terminator excluded).
    pub range: Range<usize>,
    pub text: String,
}

/// Byte ranges to highlight after sorting: one per edit, or a single range
/// spanning all of them when there are more than [`MAX_SELECTIONS`].
///
/// Only affects selection feedback, never which edits are applied.
pub fn feedback_selections(edits: &[PlannedEdit]) -> Vec<Range<usize>> {
    match (edits.first(), edits.last()) {
        (Some(first), Some(last)) if edits.len() > MAX_SELECTIONS => {
            vec![first.range.start..last.range.end]
        }
        _ => edits.iter().map(|e| e.range.clone()).collect(),
    }
}
