//! Small helpers for emitting TypeScript tokens.

use dashgen_core::is_js_identifier;

/// A double-quoted string literal with `\` and `"` escaped.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// An object key: bare when it is an identifier, quoted otherwise.
pub fn property_key(name: &str) -> String {
    if is_js_identifier(name) {
        name.to_string()
    } else {
        string_literal(name)
    }
}

/// Property access on `base`: `base.name` or `base["name"]`.
pub fn member(base: &str, name: &str) -> String {
    if is_js_identifier(name) {
        format!("{}.{}", base, name)
    } else {
        format!("{}[{}]", base, string_literal(name))
    }
}

/// Optional-chained property access: `base?.name` or `base?.["name"]`.
pub fn optional_member(base: &str, name: &str) -> String {
    if is_js_identifier(name) {
        format!("{}?.{}", base, name)
    } else {
        format!("{}?.[{}]", base, string_literal(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal("a\"b\\c"), r#""a\"b\\c""#);
    }

    #[test]
    fn test_property_key() {
        assert_eq!(property_key("title"), "title");
        assert_eq!(property_key("first-name"), "\"first-name\"");
    }

    #[test]
    fn test_member_access() {
        assert_eq!(member("draft", "title"), "draft.title");
        assert_eq!(member("draft", "first name"), "draft[\"first name\"]");
        assert_eq!(optional_member("body.data", "books"), "body.data?.books");
        assert_eq!(
            optional_member("body.data", "blog-posts"),
            "body.data?.[\"blog-posts\"]"
        );
    }
}
