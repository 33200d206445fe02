use crate::editing::{Document, EditError, PlannedEdit, Selection};
use crate::ordering::OrderingPolicy;
use crate::sorting::scan_and_sort;

/// Plans edits for every non-empty selection.
///
/// Each selection is expanded to full lines and sorted on its own. A
/// selection that cannot be processed is logged and skipped without
/// affecting the others. The result is ordered by offset; an edit that
/// overlaps an earlier one (from overlapping selections) is dropped.
pub fn plan_selection_edits(
    doc: &Document,
    selections: &[Selection],
    policy: &OrderingPolicy,
) -> Vec<PlannedEdit> {
    let mut edits = Vec::new();
    for selection in selections.iter().filter(|s| !s.is_empty()) {
        match plan_selection(doc, selection, policy) {
            Ok(planned) => edits.extend(planned),
            Err(e) => log::warn!("skipping selection {selection}: {e}"),
        }
    }

    edits.sort_by_key(|e| e.range.start);
    let mut kept: Vec<PlannedEdit> = Vec::with_capacity(edits.len());
    for edit in edits {
        if let Some(prev) = kept.last()
            && edit.range.start < prev.range.end
        {
            log::warn!(
                "dropping edit for lines {:?}: overlaps lines {:?}",
                edit.lines,
                prev.lines
            );
            continue;
        }
        kept.push(edit);
    }
    kept
}

/// Plans edits for the whole document.
pub fn plan_file_edits(doc: &Document, policy: &OrderingPolicy) -> Vec<PlannedEdit> {
    plan_selection_edits(doc, &[Selection::whole(doc)], policy)
}

fn plan_selection(
    doc: &Document,
    selection: &Selection,
    policy: &OrderingPolicy,
) -> Result<Vec<PlannedEdit>, EditError> {
    let lines = selection.expand_to_full_lines(doc)?;
    let text = doc.lines_text(lines);
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let edits = scan_and_sort(&text, policy)
        .into_iter()
        .map(|span| {
            let span_lines = span.lines().shift(lines.start);
            PlannedEdit {
                lines: span_lines,
                range: doc.line_range_offsets(span_lines),
                text: span.sorted_text,
            }
        })
        .collect();
    Ok(edits)
}
