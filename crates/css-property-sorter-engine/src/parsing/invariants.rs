use super::blocks::Block;

/// Validates segmenter output invariants.
///
/// Asserts that:
/// - Block ranges start at line 0, are contiguous and cover every line once
/// - Each block holds exactly as many lines as its range spans
/// - Each block's lines are the input lines at those positions, verbatim
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check<S: AsRef<str>>(lines: &[S], blocks: &[Block]) {
    let mut next = 0;
    for b in blocks {
        let range = b.range();
        assert_eq!(
            range.start, next,
            "block range not contiguous: {range:?} (expected start {next})"
        );
        assert!(
            range.start <= range.end && range.end < lines.len(),
            "block range out of bounds: {range:?} (line count: {})",
            lines.len()
        );

        let block_lines = b.lines();
        assert_eq!(
            block_lines.len(),
            range.line_count(),
            "block line count does not match range {range:?}"
        );
        for (offset, text) in block_lines.iter().enumerate() {
            assert_eq!(
                *text,
                lines[range.start + offset].as_ref(),
                "block text differs from input at line {}",
                range.start + offset
            );
        }
        next = range.end + 1;
    }
    assert_eq!(
        next,
        lines.len(),
        "blocks cover {next} lines but input has {}",
        lines.len()
    );
}
