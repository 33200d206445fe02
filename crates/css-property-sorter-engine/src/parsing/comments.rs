//! Line-level comment recognition for CSS `/* */` and SCSS `//` comments.
//!
//! Everything here looks at one line at a time. Multi-line comment state is
//! tracked by the segmenter, which asks these helpers whether a line opens
//! or closes a block comment.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

fn closed_block_comment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/\*.*?\*/").expect("Invalid block comment regex"))
}

/// `//` starts a comment anywhere except directly after `:` or `(`, so
/// `url(http://x)` and `url(//cdn/x)` keep their values. The character
/// before `//` is captured and put back.
fn line_comment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(^|[^:(])//.*$").expect("Invalid line comment regex"))
}

fn strip_line_comment(text: &str) -> Cow<'_, str> {
    line_comment().replace(text, "${1}")
}

fn unterminated_block_comment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/\*.*$").expect("Invalid open comment regex"))
}

/// A line that is nothing but a comment: `// ...` or a one-line `/* ... */`.
pub fn is_full_line_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("//")
        || (trimmed.len() >= 4 && trimmed.starts_with("/*") && trimmed.ends_with("*/"))
}

/// A line that starts a block comment which is still open at its end and
/// carries no other content.
pub fn opens_multiline_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("/*")
        && !is_full_line_comment(trimmed)
        && opens_block_comment(trimmed)
        && strip_comments(trimmed).trim().is_empty()
}

/// Whether a block comment opened on this line is still open at its end.
pub fn opens_block_comment(line: &str) -> bool {
    let without_closed = closed_block_comment().replace_all(line, "");
    strip_line_comment(&without_closed).contains("/*")
}

pub fn closes_block_comment(line: &str) -> bool {
    line.contains("*/")
}

/// The text after the first `*/`, for a line that continues a block comment.
pub fn after_comment_close(line: &str) -> Option<&str> {
    line.find("*/").map(|idx| &line[idx + 2..])
}

/// Removes every comment span from a single line.
///
/// Closed `/* ... */` spans go first, then `//` line comments, then an
/// unterminated `/* ...` tail.
pub fn strip_comments(line: &str) -> String {
    let without_closed = closed_block_comment().replace_all(line, "");
    let without_line = strip_line_comment(&without_closed);
    unterminated_block_comment()
        .replace(&without_line, "")
        .into_owned()
}
