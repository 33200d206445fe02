/*!
 * # Editing
 *
 * The host side of the engine: a document buffer, selections over it, and
 * the atomic application of sorted spans.
 *
 * ## Flow
 *
 * 1. **Selections** (`selection`): each selection is expanded to whole lines
 * 2. **Planning** (`plan`): the selected text goes through `scan_and_sort`
 *    and the resulting spans are shifted into document lines and byte ranges
 * 3. **Application** (`document`): all planned edits are compared against
 *    the buffer, unchanged ones are skipped, and the rest are applied as a
 *    single xi-rope delta
 *
 * The engine stays pure; deciding that a span is a no-op happens here.
 *
 * ```rust
 * use css_property_sorter_engine::{OrderingPolicy, editing::*};
 *
 * let mut doc = Document::from_text("color: red;\nwidth: 10px;\n");
 * let policy = OrderingPolicy::custom(["width", "color"]);
 *
 * let outcome = sort_file(&mut doc, &policy).unwrap();
 * assert_eq!(outcome, SortOutcome::Sorted { changed: 1 });
 * assert_eq!(doc.text(), "width: 10px;\ncolor: red;\n");
 * ```
 */

pub mod document;
pub mod patch;
pub mod plan;
pub mod selection;

pub use document::{ApplyReport, Document};
pub use patch::{MAX_SELECTIONS, PlannedEdit, feedback_selections};
pub use plan::{plan_file_edits, plan_selection_edits};
pub use selection::{Position, Selection, SelectionParseError};

use crate::ordering::OrderingPolicy;

#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("Document is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("Selection starts at line {line} but the document has {line_count} lines")]
    SelectionOutOfBounds { line: usize, line_count: usize },
    #[error("Failed to replace content: {reason}")]
    ReplaceFailed { reason: String },
}

/// What a sort command did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOutcome {
    /// At least one run was reordered.
    Sorted { changed: usize },
    /// Runs were found but already in order.
    NoChanges,
    /// Nothing sortable in the selections.
    NoSortableContent,
}

/// Sorts properties inside each selection and applies the result.
pub fn sort_selections(
    doc: &mut Document,
    selections: &[Selection],
    policy: &OrderingPolicy,
) -> Result<SortOutcome, EditError> {
    let edits = plan_selection_edits(doc, selections, policy);
    apply_planned(doc, &edits)
}

/// Sorts properties across the whole document and applies the result.
pub fn sort_file(doc: &mut Document, policy: &OrderingPolicy) -> Result<SortOutcome, EditError> {
    let edits = plan_file_edits(doc, policy);
    apply_planned(doc, &edits)
}

/// Applies planned edits and classifies the outcome.
pub fn apply_planned(doc: &mut Document, edits: &[PlannedEdit]) -> Result<SortOutcome, EditError> {
    if edits.is_empty() {
        return Ok(SortOutcome::NoSortableContent);
    }
    let report = doc.apply(edits)?;
    Ok(if report.changed > 0 {
        SortOutcome::Sorted {
            changed: report.changed,
        }
    } else {
        SortOutcome::NoChanges
    })
}
