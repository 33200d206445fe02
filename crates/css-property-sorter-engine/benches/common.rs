// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_stylesheet(rules: usize) -> String {
    let mut css = String::new();
    for rule in 0..rules {
        css.push_str(&format!(".rule-{rule} {{\n"));
        css.push_str("  /* spacing */\n");
        css.push_str("  padding: 4px 8px;\n");
        css.push_str("  z-index: 3;\n");
        css.push_str("  color: #333; /* text\n     colour */\n");
        css.push_str("  display: flex;\n");
        css.push_str("  font-family:\n    Helvetica,\n    sans-serif;\n");
        css.push_str("  // scss note\n");
        css.push_str("  margin: 0 auto;\n");
        css.push_str("  background: url(http://example.com/bg.png);\n");
        css.push_str("\n  &:hover {\n    opacity: 0.5;\n    color: red;\n  }\n");
        css.push_str("}\n\n");
    }
    css
}

#[allow(dead_code)]
pub fn custom_order() -> Vec<&'static str> {
    vec![
        "display", "margin", "padding", "font-family", "color", "background", "opacity",
    ]
}
