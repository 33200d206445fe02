use super::comments::strip_comments;

/// Returns the property name if `line` starts a declaration.
///
/// Comments are stripped first. Lines that are empty, have no `:`, are
/// at-rules, open a nested block, or whose name part contains `{`, `}`, `@`
/// or starts with `&` are rejected. The name is everything before the
/// *first* `:`, so values containing colons (URLs, pseudo selectors) are
/// left alone.
pub fn extract_property_name(line: &str) -> Option<String> {
    let stripped = strip_comments(line);
    let text = stripped.trim();
    if text.is_empty() || text.starts_with('@') || text.ends_with('{') {
        return None;
    }

    let (name, _value) = text.split_once(':')?;
    if name.contains(['{', '}', '@']) {
        return None;
    }

    let name = name.trim();
    if name.is_empty() || name.starts_with('&') {
        return None;
    }
    Some(name.to_string())
}
