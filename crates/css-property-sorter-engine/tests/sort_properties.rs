//! Properties that must hold for any input and any policy.

use css_property_sorter_engine::{
    Block, OrderingPolicy, UnknownPlacement, UnterminatedPolicy, parsing::invariants, segment,
    sort_text,
};
use css_property_sorter_engine::parsing::{LineEnding, split_lines};
use pretty_assertions::assert_eq;
use rstest::rstest;

const STYLESHEET: &str = r#"/* Buttons */
.btn {
  // layout
  display: inline-flex;
  padding: 4px 8px;
  color: #333; /* text */
  background: url(http://example.com/a.png) no-repeat;
  font-family:
    Helvetica,
    sans-serif;
  color: #444;
  z-index: 2;

  &:hover {
    color: red;
    border: 1px solid /* accent
      colour */ red;
    appearance: none;
  }

  @media (max-width: 10px) {
    display: none;
    padding: 0;
  }
}
"#;

const MESSY: &str = "a:hover,\nb {\n  width: 1px\n  color: red;\n}\n/* orphan */\n\nmargin: 0;\nmargin: 1px; /* open\n still\n*/\npadding: 0\n";

const CRLF: &str = "a {\r\n  z-index: 1;\r\n  /* why */\r\n  color: red;\r\n}\r\n";

fn policies() -> Vec<OrderingPolicy> {
    vec![
        OrderingPolicy::default(),
        OrderingPolicy::alphabetical(),
        OrderingPolicy::custom(["display", "color", "padding", "z-index"]),
        OrderingPolicy::custom(["color", "display"]).with_unknown_placement(UnknownPlacement::Top),
        OrderingPolicy::alphabetical().with_unterminated(UnterminatedPolicy::Include),
    ]
}

fn declarations(text: &str, policy: &OrderingPolicy) -> Vec<String> {
    let lines = split_lines(text);
    let mut decls: Vec<String> = segment(&lines, policy.unterminated)
        .iter()
        .filter_map(Block::as_property)
        .map(|p| p.declaration())
        .collect();
    decls.sort();
    decls
}

#[rstest]
fn sorting_is_idempotent(#[values(STYLESHEET, MESSY, CRLF, "")] text: &str) {
    for policy in policies() {
        let once = sort_text(text, &policy);
        let twice = sort_text(&once, &policy);
        assert_eq!(twice, once, "policy {policy:?}");
    }
}

#[rstest]
fn declarations_are_only_reordered(#[values(STYLESHEET, MESSY, CRLF)] text: &str) {
    for policy in policies() {
        let sorted = sort_text(text, &policy);
        assert_eq!(
            declarations(&sorted, &policy),
            declarations(text, &policy),
            "policy {policy:?}"
        );
    }
}

#[rstest]
fn output_keeps_line_count_and_terminator(#[values(STYLESHEET, MESSY, CRLF)] text: &str) {
    for policy in policies() {
        let sorted = sort_text(text, &policy);
        assert_eq!(split_lines(&sorted).len(), split_lines(text).len());
        assert_eq!(LineEnding::detect(&sorted), LineEnding::detect(text));

        let lines = split_lines(&sorted);
        invariants::check(&lines, &segment(&lines, policy.unterminated));
    }
}

#[test]
fn duplicate_properties_never_swap() {
    let out = sort_text(STYLESHEET, &OrderingPolicy::alphabetical());
    let first = out.find("color: #333;").unwrap();
    let second = out.find("color: #444;").unwrap();
    assert!(first < second);
}

#[test]
fn unlisted_properties_keep_relative_order() {
    let out = sort_text(
        "top: 0;\nleft: 0;\ncolor: red;\nright: 0;\n",
        &OrderingPolicy::custom(["color"]),
    );
    assert_eq!(out, "color: red;\ntop: 0;\nleft: 0;\nright: 0;\n");
}

#[test]
fn stylesheet_custom_order() {
    let out = sort_text(
        STYLESHEET,
        &OrderingPolicy::custom(["display", "color", "padding", "z-index"]),
    );
    let expected = r#"/* Buttons */
.btn {
  // layout
  display: inline-flex;
  color: #333; /* text */
  color: #444;
  padding: 4px 8px;
  z-index: 2;
  background: url(http://example.com/a.png) no-repeat;
  font-family:
    Helvetica,
    sans-serif;

  &:hover {
    color: red;
    border: 1px solid /* accent
      colour */ red;
    appearance: none;
  }

  @media (max-width: 10px) {
    display: none;
    padding: 0;
  }
}
"#;
    assert_eq!(out, expected);
}
