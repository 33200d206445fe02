use serde::{Deserialize, Serialize};

use super::{
    blocks::{Block, PassThroughBlock, PassThroughKind, PropertyBlock},
    comments,
    property::extract_property_name,
    range::LineRange,
};

/// What to do with a declaration that is still open when the input ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnterminatedPolicy {
    /// Render it verbatim in place, never sort it.
    #[default]
    PassThrough,
    /// Sort it like a closed declaration.
    Include,
}

#[derive(Debug)]
enum ScanState {
    /// Collecting comment lines that may lead a declaration.
    ScanningComments,
    /// Accumulating the lines of the declaration starting at `decl_start`.
    ScanningDeclaration { name: String, decl_start: usize },
    /// The declaration at `decl_start` hit a brace before its `;`.
    Recovering { decl_start: usize },
}

/// Single forward pass over the input lines, emitting [`Block`]s.
///
/// The only backwards move is out of `Recovering`, which resumes exactly one
/// line after the abandoned declaration's first line, so every pass through
/// the state machine makes progress.
pub struct Segmenter<'a, S> {
    lines: &'a [S],
    cursor: usize,
    /// First line of the block being built (its first leading comment).
    block_start: usize,
    comments: Vec<String>,
    unterminated: UnterminatedPolicy,
    out: Vec<Block>,
}

impl<'a, S: AsRef<str>> Segmenter<'a, S> {
    pub fn new(lines: &'a [S], unterminated: UnterminatedPolicy) -> Self {
        Self {
            lines,
            cursor: 0,
            block_start: 0,
            comments: Vec::new(),
            unterminated,
            out: Vec::new(),
        }
    }

    pub fn run(mut self) -> Vec<Block> {
        let mut state = ScanState::ScanningComments;
        loop {
            state = match state {
                ScanState::ScanningComments => match self.scan_comments() {
                    Some(next) => next,
                    None => break,
                },
                ScanState::ScanningDeclaration { name, decl_start } => {
                    self.scan_declaration(name, decl_start)
                }
                ScanState::Recovering { decl_start } => self.recover(decl_start),
            };
        }
        self.out
    }

    fn line(&self, index: usize) -> Option<&'a str> {
        let lines: &'a [S] = self.lines;
        lines.get(index).map(AsRef::as_ref)
    }

    /// Returns `None` once the input is exhausted.
    fn scan_comments(&mut self) -> Option<ScanState> {
        self.block_start = self.cursor;

        while let Some(line) = self.line(self.cursor) {
            if comments::is_full_line_comment(line) {
                self.comments.push(line.to_string());
                self.cursor += 1;
            } else if comments::opens_multiline_comment(line) {
                self.comments.push(line.to_string());
                self.cursor += 1;
                let rest = self.take_comment_tail();
                self.comments.extend(rest);
            } else {
                break;
            }
        }

        let Some(line) = self.line(self.cursor) else {
            self.flush_orphaned_comments();
            return None;
        };

        if let Some(name) = extract_property_name(line) {
            return Some(ScanState::ScanningDeclaration {
                name,
                decl_start: self.cursor,
            });
        }

        self.flush_orphaned_comments();
        let kind = if line.trim().is_empty() {
            PassThroughKind::Blank
        } else {
            PassThroughKind::Content
        };
        self.push_pass_through(kind, vec![line.to_string()], LineRange::single(self.cursor));
        self.cursor += 1;
        Some(ScanState::ScanningComments)
    }

    fn scan_declaration(&mut self, name: String, decl_start: usize) -> ScanState {
        let mut body = Vec::new();
        let mut in_comment = false;

        while let Some(line) = self.line(self.cursor) {
            body.push(line.to_string());
            self.cursor += 1;

            let code = if in_comment {
                match comments::after_comment_close(line) {
                    Some(rest) => rest,
                    None => continue,
                }
            } else {
                line
            };

            let clean = comments::strip_comments(code);
            let clean = clean.trim();
            let left_open = comments::opens_block_comment(code);

            if clean.ends_with(';') {
                let trailing = if left_open {
                    self.take_comment_tail()
                } else {
                    Vec::new()
                };
                self.push_property(name, body, trailing);
                return ScanState::ScanningComments;
            }
            if clean.ends_with('{') || clean.ends_with('}') {
                return ScanState::Recovering { decl_start };
            }
            in_comment = left_open;
        }

        // Blank lines at EOF stay outside the declaration; scan_comments
        // emits them as Blank blocks.
        let trailing_blank = body
            .iter()
            .skip(1)
            .rev()
            .take_while(|line| line.trim().is_empty())
            .count();
        body.truncate(body.len() - trailing_blank);
        self.cursor -= trailing_blank;

        match self.unterminated {
            UnterminatedPolicy::Include => self.push_property(name, body, Vec::new()),
            UnterminatedPolicy::PassThrough => {
                self.flush_orphaned_comments();
                let range = LineRange::new(decl_start, self.cursor - 1);
                self.push_pass_through(PassThroughKind::Malformed, body, range);
            }
        }
        ScanState::ScanningComments
    }

    fn recover(&mut self, decl_start: usize) -> ScanState {
        self.flush_orphaned_comments();
        let line = self.line(decl_start).unwrap_or_default();
        self.push_pass_through(
            PassThroughKind::Malformed,
            vec![line.to_string()],
            LineRange::single(decl_start),
        );
        self.cursor = decl_start + 1;
        ScanState::ScanningComments
    }

    /// Consumes lines up to and including the one containing `*/`, or to EOF.
    fn take_comment_tail(&mut self) -> Vec<String> {
        let mut taken = Vec::new();
        while let Some(line) = self.line(self.cursor) {
            taken.push(line.to_string());
            self.cursor += 1;
            if comments::closes_block_comment(line) {
                break;
            }
        }
        taken
    }

    /// Emits pending comments that ended up attached to nothing.
    fn flush_orphaned_comments(&mut self) {
        if self.comments.is_empty() {
            return;
        }
        let lines = std::mem::take(&mut self.comments);
        let range = LineRange::new(self.block_start, self.block_start + lines.len() - 1);
        self.push_pass_through(PassThroughKind::Comment, lines, range);
    }

    fn push_property(&mut self, name: String, body: Vec<String>, trailing_comments: Vec<String>) {
        self.out.push(Block::Property(PropertyBlock {
            name,
            leading_comments: std::mem::take(&mut self.comments),
            body,
            trailing_comments,
            range: LineRange::new(self.block_start, self.cursor - 1),
        }));
    }

    fn push_pass_through(&mut self, kind: PassThroughKind, lines: Vec<String>, range: LineRange) {
        self.out
            .push(Block::PassThrough(PassThroughBlock { kind, lines, range }));
    }
}
