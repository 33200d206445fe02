/// An inclusive `[start, end]` range of 0-based line indices.
///
/// Every block records the physical lines it was captured from, so the
/// ranges of a segmented buffer tile it exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineRange {
    /// First line, inclusive.
    pub start: usize,
    /// Last line, inclusive.
    pub end: usize,
}

impl LineRange {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn single(line: usize) -> Self {
        Self::new(line, line)
    }

    /// Number of lines covered. Uses saturating arithmetic for safety.
    #[must_use]
    pub fn line_count(self) -> usize {
        self.end.saturating_sub(self.start) + 1
    }

    /// True if this range starts on the line right after `prev` ends.
    #[must_use]
    pub fn follows(self, prev: LineRange) -> bool {
        self.start == prev.end + 1
    }

    /// Moves the range down by `offset` lines.
    #[must_use]
    pub fn shift(self, offset: usize) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }
}
