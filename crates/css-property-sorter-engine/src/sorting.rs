//! Run grouping, stable sorting and reassembly.

use crate::ordering::{BlockComparator, OrderingPolicy};
use crate::parsing::{Block, LineEnding, LineRange, PropertyBlock, segment, split_lines};

/// Replacement text for the lines one run of declarations occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedSpan {
    /// First line of the run, inclusive, 0-based.
    pub start: usize,
    /// Last line of the run, inclusive, 0-based.
    pub end: usize,
    /// The run's blocks in sorted order, joined with the input's terminator.
    pub sorted_text: String,
}

impl SortedSpan {
    #[must_use]
    pub fn lines(&self) -> LineRange {
        LineRange::new(self.start, self.end)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("run at lines {range:?} rendered {rendered} lines, expected {expected}")]
    LineCountMismatch {
        range: LineRange,
        expected: usize,
        rendered: usize,
    },
    #[error("run has no blocks")]
    Empty,
}

/// Scans `text` and returns one sorted span per run of declarations.
///
/// Spans come back in ascending, non-overlapping line order and cover exactly
/// the lines each run occupied. Spans whose text did not change are still
/// returned; skipping them is up to whoever applies the edits.
pub fn scan_and_sort(text: &str, policy: &OrderingPolicy) -> Vec<SortedSpan> {
    let eol = LineEnding::detect(text);
    let lines = split_lines(text);
    let blocks = segment(&lines, policy.unterminated);
    let runs = group_runs(&blocks);
    log::debug!(
        "segmented {} lines into {} blocks, {} runs",
        lines.len(),
        blocks.len(),
        runs.len()
    );

    let comparator = policy.comparator();
    runs.iter()
        .filter_map(|run| match sort_run(run, &comparator, eol) {
            Ok(span) => Some(span),
            Err(e) => {
                log::warn!("leaving run unsorted: {e}");
                None
            }
        })
        .collect()
}

/// Sorts every run in `text` and returns the whole resulting text.
pub fn sort_text(text: &str, policy: &OrderingPolicy) -> String {
    let eol = LineEnding::detect(text);
    let lines = split_lines(text);
    let spans = scan_and_sort(text, policy);

    let mut out: Vec<&str> = Vec::with_capacity(lines.len());
    let mut next = 0;
    for span in &spans {
        out.extend(lines.get(next..span.start).unwrap_or_default());
        out.push(&span.sorted_text);
        next = span.end + 1;
    }
    out.extend(lines.get(next..).unwrap_or_default());
    out.join(eol.as_str())
}

/// Splits blocks into maximal runs of adjacent property blocks.
///
/// A pass-through block or a gap in line coverage ends the current run.
fn group_runs(blocks: &[Block]) -> Vec<Vec<&PropertyBlock>> {
    let mut runs = Vec::new();
    let mut current: Vec<&PropertyBlock> = Vec::new();

    for block in blocks {
        match block {
            Block::Property(p) => {
                if let Some(prev) = current.last()
                    && !p.range.follows(prev.range)
                {
                    runs.push(std::mem::take(&mut current));
                }
                current.push(p);
            }
            Block::PassThrough(_) => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn sort_run(
    run: &[&PropertyBlock],
    comparator: &BlockComparator<'_>,
    eol: LineEnding,
) -> Result<SortedSpan, RunError> {
    let (Some(first), Some(last)) = (run.first(), run.last()) else {
        return Err(RunError::Empty);
    };
    let range = LineRange::new(first.range.start, last.range.end);

    let mut sorted = run.to_vec();
    sorted.sort_by(|a, b| comparator.compare(a, b));

    let rendered: Vec<&str> = sorted.iter().flat_map(|b| b.lines()).collect();
    if rendered.len() != range.line_count() {
        return Err(RunError::LineCountMismatch {
            range,
            expected: range.line_count(),
            rendered: rendered.len(),
        });
    }

    Ok(SortedSpan {
        start: range.start,
        end: range.end,
        sorted_text: rendered.join(eol.as_str()),
    })
}
