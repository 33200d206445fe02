use css_property_sorter_engine::{
    OrderingPolicy, SortMode, UnterminatedPolicy, scan_and_sort, segment, sort_text,
};
use pretty_assertions::assert_eq;

#[test]
fn scenario_a_custom_order() {
    let out = sort_text(
        "color: red;\nwidth: 10px;\n",
        &OrderingPolicy::custom(["width", "color"]),
    );
    assert_eq!(out, "width: 10px;\ncolor: red;\n");
}

#[test]
fn scenario_b_leading_comment_moves_with_declaration() {
    let out = sort_text(
        "/* note */\nwidth: 10px;\ncolor: red;\n",
        &OrderingPolicy::custom(["color", "width"]),
    );
    assert_eq!(out, "color: red;\n/* note */\nwidth: 10px;\n");
}

#[test]
fn scenario_c_multiline_comment_tail_stays_attached() {
    let input = "width: 10px; /* keeps the\n   layout stable */\ncolor: red;";
    let out = sort_text(input, &OrderingPolicy::custom(["color", "width"]));
    insta::assert_snapshot!(out, @r"
    color: red;
    width: 10px; /* keeps the
       layout stable */
    ");
}

#[test]
fn scenario_d_selector_splits_runs() {
    let input = "\
.a {
  z-index: 1;
  color: red;
}
div {
  width: 1px;
  appearance: none;
}";
    let policy = OrderingPolicy::alphabetical();

    let spans = scan_and_sort(input, &policy);
    assert_eq!(spans.len(), 2);
    assert_eq!((spans[0].start, spans[0].end), (1, 2));
    assert_eq!((spans[1].start, spans[1].end), (5, 6));

    insta::assert_snapshot!(sort_text(input, &policy), @r"
    .a {
      color: red;
      z-index: 1;
    }
    div {
      appearance: none;
      width: 1px;
    }
    ");
}

#[test]
fn scenario_e_alphabetical_ignores_custom_order() {
    let policy = OrderingPolicy {
        custom_order: vec!["z-index".into(), "Color".into(), "align".into()],
        sort_mode: SortMode::Alphabetical,
        ..OrderingPolicy::default()
    };
    let out = sort_text("z-index: 1;\nalign: left;\nColor: red;\n", &policy);
    assert_eq!(out, "align: left;\nColor: red;\nz-index: 1;\n");
}

#[test]
fn scenario_f_colon_inside_value() {
    let lines = ["background: url(http://x);", "a:hover {"];
    let blocks = segment(&lines, UnterminatedPolicy::default());
    assert_eq!(blocks[0].property_name(), Some("background"));
    assert_eq!(blocks[1].property_name(), None);

    let out = sort_text(
        "background: url(http://x);\nborder: 0;\n",
        &OrderingPolicy::custom(["border", "background"]),
    );
    assert_eq!(out, "border: 0;\nbackground: url(http://x);\n");
}

#[test]
fn single_property_run_is_unaffected_by_mode() {
    for policy in [
        OrderingPolicy::alphabetical(),
        OrderingPolicy::custom(["color"]),
        OrderingPolicy::default(),
    ] {
        let spans = scan_and_sort("a {\n  width: 1px;\n}\n", &policy);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].sorted_text, "  width: 1px;");
    }
}

#[test]
fn empty_input_yields_no_spans() {
    assert!(scan_and_sort("", &OrderingPolicy::default()).is_empty());
    assert!(scan_and_sort("   \n\t\n", &OrderingPolicy::default()).is_empty());
}

#[test]
fn ambiguous_block_is_left_in_place() {
    let input = "b: 1;\na: 1;\nfoo: bar\n.x {\nd: 1;\nc: 1;";
    let out = sort_text(input, &OrderingPolicy::alphabetical());
    assert_eq!(out, "a: 1;\nb: 1;\nfoo: bar\n.x {\nc: 1;\nd: 1;");
}

#[test]
fn unterminated_last_declaration_policy() {
    let input = "width: 1px;\ncolor: red";

    let kept = sort_text(input, &OrderingPolicy::alphabetical());
    assert_eq!(kept, input);

    let included = sort_text(
        input,
        &OrderingPolicy::alphabetical().with_unterminated(UnterminatedPolicy::Include),
    );
    assert_eq!(included, "color: red\nwidth: 1px;");
}

#[test]
fn unterminated_last_declaration_keeps_final_newline() {
    let policy = OrderingPolicy::alphabetical().with_unterminated(UnterminatedPolicy::Include);
    let out = sort_text("padding: 0;\nmargin: 0\n", &policy);
    assert_eq!(out, "margin: 0\npadding: 0;\n");

    let spans = scan_and_sort("padding: 0;\nmargin: 0\n", &policy);
    assert_eq!(spans.len(), 1);
    assert_eq!((spans[0].start, spans[0].end), (0, 1));
}

#[test]
fn scss_line_comments_travel_too() {
    let input = "  // spacing\n  margin: 0;\n  // colours\n  color: red;";
    let out = sort_text(input, &OrderingPolicy::custom(["color", "margin"]));
    assert_eq!(out, "  // colours\n  color: red;\n  // spacing\n  margin: 0;");
}

#[test]
fn compact_scss_line_comment_still_closes_declaration() {
    let out = sort_text(
        "width: 1px;//w\ncolor: red;\n",
        &OrderingPolicy::custom(["color", "width"]),
    );
    assert_eq!(out, "color: red;\nwidth: 1px;//w\n");
}
