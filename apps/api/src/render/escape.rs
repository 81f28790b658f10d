use std::borrow::Cow;
use std::fmt;

/// Escapes a value for HTML text and quoted attribute contexts.
///
/// Covers `&`, `<`, `>`, `"` and `'`. Borrows when nothing needs escaping.
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 16);
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// `Display` adaptor so user values can go straight into `format!`.
#[derive(Debug, Clone, Copy)]
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&escape_html(self.0))
    }
}

/// Shorthand used throughout the theme modules.
pub fn e(value: &str) -> Escaped<'_> {
    Escaped(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_all_significant_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(escape_html("Jane Doe"), Cow::Borrowed("Jane Doe")));
        assert!(matches!(escape_html(""), Cow::Borrowed("")));
    }

    #[test]
    fn test_ampersand_is_escaped_once() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(escape_html("Zoë — 東京 <3"), "Zoë — 東京 &lt;3");
    }

    #[test]
    fn test_display_adaptor_matches_function() {
        let raw = "<script>alert('x')</script>";
        assert_eq!(format!("{}", e(raw)), escape_html(raw));
    }
}
