/// The line terminator of a text buffer.
///
/// Detected once per input and applied uniformly to everything rendered
/// back out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// `CrLf` if the text contains `\r\n` anywhere, `Lf` otherwise.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Splits text on `\n`, dropping a `\r` directly before each split point.
///
/// A trailing terminator produces a final empty line, so joining the result
/// with the detected [`LineEnding`] reproduces a uniformly terminated input.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
