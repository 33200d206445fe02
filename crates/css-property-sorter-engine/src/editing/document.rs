use std::borrow::Cow;
use std::ops::Range;

use xi_rope::{Rope, delta::Builder};

use crate::editing::{EditError, PlannedEdit};
use crate::parsing::LineRange;

/// Result of applying a batch of planned edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyReport {
    /// Edits whose replacement differed from the current text.
    pub changed: usize,
    /// Edits skipped because the text was already sorted.
    pub unchanged: usize,
    /// Document version after the apply.
    pub version: u64,
}

/// A text document held in an xi-rope buffer.
///
/// Stands in for the host editor's document: it answers line/offset
/// questions for planning and applies a batch of edits as one delta, so a
/// rejected batch leaves the buffer untouched.
#[derive(Debug, Clone)]
pub struct Document {
    buffer: Rope,
    /// Incremented on each apply that changed the buffer.
    version: u64,
}

impl Document {
    /// Create a document from raw bytes, which must be valid UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EditError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::from_text(text))
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            version: 0,
        }
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.text().into_bytes()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of lines; a trailing newline starts one more (empty) line.
    pub fn line_count(&self) -> usize {
        self.buffer.line_of_offset(self.buffer.len()) + 1
    }

    /// Byte offset where `line` starts. Lines past the end map to the end.
    pub fn line_start(&self, line: usize) -> usize {
        self.buffer.offset_of_line(line)
    }

    /// Byte offset of the end of `line`'s content, before its terminator.
    pub fn line_content_end(&self, line: usize) -> usize {
        let start = self.line_start(line);
        let next = self.line_start(line + 1);
        let raw = self.buffer.slice_to_cow(start..next);
        let content = match raw.strip_suffix('\n') {
            Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
            None => raw.as_ref(),
        };
        start + content.len()
    }

    /// Byte range from the start of `lines.start` to the content end of `lines.end`.
    pub fn line_range_offsets(&self, lines: LineRange) -> Range<usize> {
        self.line_start(lines.start)..self.line_content_end(lines.end)
    }

    /// Slice the buffer, clamping the range to document bounds.
    pub fn slice(&self, range: Range<usize>) -> Cow<'_, str> {
        let len = self.buffer.len();
        let start = range.start.min(len);
        let end = range.end.min(len).max(start);
        self.buffer.slice_to_cow(start..end)
    }

    /// Text of `lines`, without the final line's terminator.
    pub fn lines_text(&self, lines: LineRange) -> Cow<'_, str> {
        self.slice(self.line_range_offsets(lines))
    }

    /// Apply all edits atomically.
    ///
    /// Edits must be sorted by start offset, non-overlapping and within the
    /// document; otherwise nothing is applied. Edits whose replacement equals
    /// the current text are skipped, and the version only moves when at
    /// least one edit changed the buffer.
    pub fn apply(&mut self, edits: &[PlannedEdit]) -> Result<ApplyReport, EditError> {
        let len = self.buffer.len();
        let mut prev_end = 0;
        let mut changed = Vec::new();

        for edit in edits {
            let range = &edit.range;
            if range.start > range.end || range.end > len {
                return Err(EditError::ReplaceFailed {
                    reason: format!("range {range:?} outside document of {len} bytes"),
                });
            }
            if range.start < prev_end {
                return Err(EditError::ReplaceFailed {
                    reason: format!("range {range:?} overlaps or precedes offset {prev_end}"),
                });
            }
            prev_end = range.end;

            let current = self.buffer.slice_to_cow(range.clone());
            if current.as_ref() != edit.text.as_str() {
                changed.push(edit);
            }
        }

        let report = |version| ApplyReport {
            changed: changed.len(),
            unchanged: edits.len() - changed.len(),
            version,
        };
        if changed.is_empty() {
            return Ok(report(self.version));
        }

        let mut builder = Builder::new(len);
        for edit in &changed {
            builder.replace(edit.range.clone(), Rope::from(edit.text.as_str()));
        }
        self.buffer = builder.build().apply(&self.buffer);
        self.version += 1;

        Ok(report(self.version))
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.buffer.to_string() == other.buffer.to_string() && self.version == other.version
    }
}
