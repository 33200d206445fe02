//! Coverage tests for the segmenter.
//!
//! Every input here, however broken, must segment into blocks that tile the
//! input and render back to it byte-for-byte.

use rstest::rstest;

use crate::parsing::{
    LineEnding, PassThroughKind, UnterminatedPolicy, invariants, segment, split_lines,
};

const NESTED_SCSS: &str = r#".card {
  // layout
  display: flex;
  padding: 4px;

  &:hover {
    color: red;
    background: url(http://example.com/x.png);
  }

  @media (max-width: 10px) {
    display: none;
  }
}
"#;

const BROKEN: &str = "a:hover,\nb {\n  color red\n  width: 10px\n}\n/* open\n";

#[rstest]
#[case::simple("color: red;\nwidth: 10px;\n")]
#[case::nested_scss(NESTED_SCSS)]
#[case::broken(BROKEN)]
#[case::crlf("a {\r\n  /* c */\r\n  z-index: 1;\r\n  color: red;\r\n}\r\n")]
#[case::only_comments("// a\n/* b\n c */\n")]
#[case::empty("")]
#[case::no_trailing_newline("color: red;")]
#[case::unclosed_value("width: 10px;\ncolor:\n  red")]
#[case::comment_tail_to_eof("color: red; /* tail\nnever closed")]
fn segments_tile_and_round_trip(
    #[case] text: &str,
    #[values(UnterminatedPolicy::PassThrough, UnterminatedPolicy::Include)]
    unterminated: UnterminatedPolicy,
) {
    let eol = LineEnding::detect(text);
    let lines = split_lines(text);
    let blocks = segment(&lines, unterminated);

    invariants::check(&lines, &blocks);

    let rendered = blocks
        .iter()
        .map(|b| b.render(eol))
        .collect::<Vec<_>>()
        .join(eol.as_str());
    assert_eq!(rendered, text);
}

#[test]
fn nested_rules_are_not_properties() {
    let lines = split_lines(NESTED_SCSS);
    let blocks = segment(&lines, UnterminatedPolicy::default());

    let names: Vec<_> = blocks.iter().filter_map(|b| b.property_name()).collect();
    assert_eq!(
        names,
        vec!["display", "padding", "color", "background", "display"]
    );
}

#[test]
fn blank_lines_are_single_line_pass_through() {
    let lines = split_lines("a: 1;\n\n\nb: 2;");
    let blocks = segment(&lines, UnterminatedPolicy::default());
    let blanks = blocks
        .iter()
        .filter(|b| {
            matches!(
                b,
                crate::parsing::Block::PassThrough(p) if p.kind == PassThroughKind::Blank
            )
        })
        .count();
    assert_eq!(blanks, 2);
}
