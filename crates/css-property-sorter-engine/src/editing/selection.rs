use std::fmt;
use std::str::FromStr;

use crate::editing::{Document, EditError};
use crate::parsing::LineRange;

/// A 0-based line/column position in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A selected region, always stored with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: Position,
    pub end: Position,
}

impl Selection {
    /// Selection between two positions in either order.
    #[must_use]
    pub fn new(anchor: Position, active: Position) -> Self {
        Self {
            start: anchor.min(active),
            end: anchor.max(active),
        }
    }

    /// Selection from the start of `start_line` to the end of `end_line`.
    #[must_use]
    pub fn lines(start_line: usize, end_line: usize) -> Self {
        Self::new(
            Position::new(start_line, 0),
            Position::new(end_line, usize::MAX),
        )
    }

    /// The whole document.
    #[must_use]
    pub fn whole(doc: &Document) -> Self {
        Self::lines(0, doc.line_count() - 1)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Expands the selection to full lines.
    ///
    /// A selection ending at column 0 of a later line does not include that
    /// line. The end line is clamped to the document; a start past the last
    /// line is an error.
    pub fn expand_to_full_lines(&self, doc: &Document) -> Result<LineRange, EditError> {
        let line_count = doc.line_count();
        if self.start.line >= line_count {
            return Err(EditError::SelectionOutOfBounds {
                line: self.start.line,
                line_count,
            });
        }

        let mut end_line = self.end.line.min(line_count - 1);
        if self.end.column == 0 && self.end.line > self.start.line && end_line == self.end.line {
            end_line -= 1;
        }
        Ok(LineRange::new(self.start.line, end_line))
    }
}

/// Renders as `START-END` with 1-based lines, the same shape `FromStr` accepts.
impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-", self.start.line + 1, self.start.column)?;
        if self.end.column == usize::MAX {
            write!(f, "{}", self.end.line + 1)
        } else {
            write!(f, "{}:{}", self.end.line + 1, self.end.column)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionParseError {
    #[error("expected START-END, got `{0}`")]
    MissingSeparator(String),
    #[error("invalid position `{0}`: expected LINE or LINE:COLUMN")]
    InvalidPosition(String),
    #[error("line numbers start at 1")]
    ZeroLine,
}

/// Parses `LINE[:COLUMN]-LINE[:COLUMN]`, lines 1-based, columns 0-based.
///
/// An end without a column selects through the end of that line.
impl FromStr for Selection {
    type Err = SelectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| SelectionParseError::MissingSeparator(s.to_string()))?;
        let start = parse_position(start, 0)?;
        let end = parse_position(end, usize::MAX)?;
        Ok(Selection::new(start, end))
    }
}

fn parse_position(s: &str, default_column: usize) -> Result<Position, SelectionParseError> {
    let invalid = || SelectionParseError::InvalidPosition(s.to_string());
    let (line, column) = match s.trim().split_once(':') {
        Some((line, column)) => (line, Some(column)),
        None => (s.trim(), None),
    };

    let line: usize = line.parse().map_err(|_| invalid())?;
    if line == 0 {
        return Err(SelectionParseError::ZeroLine);
    }
    let column = match column {
        Some(c) => c.parse().map_err(|_| invalid())?,
        None => default_column,
    };
    Ok(Position::new(line - 1, column))
}
