use super::{comments::strip_comments, lines::LineEnding, range::LineRange};

/// Why a pass-through block was left out of sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassThroughKind {
    /// A whitespace-only line.
    Blank,
    /// Comments not attached to any declaration.
    Comment,
    /// Selectors, at-rules, braces and anything else that is not a declaration.
    Content,
    /// A declaration that hit a brace before its `;`, or never closed.
    Malformed,
}

/// A declaration together with the comments that travel with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyBlock {
    /// Property name, the trimmed text before the first `:`.
    pub name: String,
    /// Comment lines directly above the declaration.
    pub leading_comments: Vec<String>,
    /// Raw declaration lines, including any inline comment on the last one.
    pub body: Vec<String>,
    /// Continuation of a block comment opened on the last body line.
    pub trailing_comments: Vec<String>,
    /// Physical lines covered by comments and body.
    pub range: LineRange,
}

impl PropertyBlock {
    /// Line of the first physical line of the block; the sort tiebreaker.
    #[must_use]
    pub fn original_index(&self) -> usize {
        self.range.start
    }

    /// All raw lines in render order.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.leading_comments
            .iter()
            .chain(&self.body)
            .chain(&self.trailing_comments)
            .map(String::as_str)
    }

    /// The declaration with comments removed and whitespace collapsed.
    ///
    /// Two blocks with the same declaration compare equal here even if their
    /// comments differ.
    #[must_use]
    pub fn declaration(&self) -> String {
        self.body
            .iter()
            .map(|line| strip_comments(line))
            .collect::<Vec<_>>()
            .join(" ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Lines that are rendered verbatim and never reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassThroughBlock {
    pub kind: PassThroughKind,
    pub lines: Vec<String>,
    pub range: LineRange,
}

/// One segment of the input: either a sortable declaration or untouched text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Property(PropertyBlock),
    PassThrough(PassThroughBlock),
}

impl Block {
    #[must_use]
    pub fn range(&self) -> LineRange {
        match self {
            Block::Property(p) => p.range,
            Block::PassThrough(p) => p.range,
        }
    }

    #[must_use]
    pub fn property_name(&self) -> Option<&str> {
        match self {
            Block::Property(p) => Some(&p.name),
            Block::PassThrough(_) => None,
        }
    }

    #[must_use]
    pub fn as_property(&self) -> Option<&PropertyBlock> {
        match self {
            Block::Property(p) => Some(p),
            Block::PassThrough(_) => None,
        }
    }

    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Block::Property(p) => p.lines().collect(),
            Block::PassThrough(p) => p.lines.iter().map(String::as_str).collect(),
        }
    }

    /// Raw text of the block, lines joined with `eol`.
    #[must_use]
    pub fn render(&self, eol: LineEnding) -> String {
        self.lines().join(eol.as_str())
    }
}
