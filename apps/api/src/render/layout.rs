//! Fragments shared by the theme renderers: base stylesheet, document shell,
//! date ranges, URL display text and the accent palette cycle.

use super::escape::e;

/// Reset applied ahead of every theme stylesheet.
pub const BASE_RESET: &str = r#"
    *,
    *::before,
    *::after {
      box-sizing: border-box;
      margin: 0;
      padding: 0;
    }

    html {
      -webkit-text-size-adjust: 100%;
      text-size-adjust: 100%;
      scroll-behavior: smooth;
    }

    body {
      min-height: 100vh;
      text-rendering: optimizeLegibility;
      -webkit-font-smoothing: antialiased;
      -moz-osx-font-smoothing: grayscale;
    }

    img,
    picture,
    svg {
      display: block;
      max-width: 100%;
    }

    a {
      color: inherit;
      text-decoration: none;
    }

    ul,
    ol {
      list-style: none;
    }

    h1, h2, h3, h4, h5, h6, p, li, blockquote {
      overflow-wrap: break-word;
    }
"#;

/// Head and body parts of a complete document.
pub struct Page<'a> {
    /// Already escaped.
    pub title: &'a str,
    /// Extra head markup: web font `<link>`s or a `<noscript>` fallback.
    /// Pages must stay legible without them.
    pub head_links: &'a str,
    pub styles: &'a str,
    pub body: &'a str,
}

impl Page<'_> {
    pub fn into_html(self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{title}</title>
{links}  <style>{reset}{styles}  </style>
</head>
<body>
{body}
</body>
</html>"#,
            title = self.title,
            links = self.head_links,
            reset = BASE_RESET,
            styles = self.styles,
            body = self.body,
        )
    }
}

/// `Name – Title` style document title, escaped.
pub fn title_with_subtitle(name: &str, title: &str, separator: &str) -> String {
    if title.is_empty() {
        e(name).to_string()
    } else {
        format!("{}{separator}{}", e(name), e(title))
    }
}

/// Escaped `start – end`; the separator only appears when both ends exist.
pub fn date_range(start: &str, end: &str, separator: &str) -> String {
    match (start.is_empty(), end.is_empty()) {
        (false, false) => format!("{}{separator}{}", e(start), e(end)),
        (false, true) => e(start).to_string(),
        (true, false) => e(end).to_string(),
        (true, true) => String::new(),
    }
}

/// Drops a leading `http://` or `https://`. Not escaped.
pub fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// Link text for a profile URL: no scheme, no leading `www.`. Not escaped.
pub fn display_url(url: &str) -> &str {
    let rest = strip_scheme(url);
    if rest.len() < url.len() {
        rest.strip_prefix("www.").unwrap_or(rest)
    } else {
        rest
    }
}

/// Three accent colours cycled by position, starting at `offset`.
pub fn palette(names: [&'static str; 3], index: usize, offset: usize) -> &'static str {
    names[(index + offset) % names.len()]
}

/// Renders the fragment only when `present`, otherwise nothing.
pub fn when(present: bool, render: impl FnOnce() -> String) -> String {
    if present {
        render()
    } else {
        String::new()
    }
}

/// Renders and concatenates one fragment per item.
pub fn each<T>(items: &[T], render: impl FnMut((usize, &T)) -> String) -> String {
    items.iter().enumerate().map(render).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_separator_only_between_both_ends() {
        assert_eq!(date_range("2020", "2022", " &ndash; "), "2020 &ndash; 2022");
        assert_eq!(date_range("2020", "", " &ndash; "), "2020");
        assert_eq!(date_range("", "Present", " &ndash; "), "Present");
        assert_eq!(date_range("", "", " &ndash; "), "");
    }

    #[test]
    fn test_date_range_escapes_values() {
        assert_eq!(date_range("<2020>", "", " - "), "&lt;2020&gt;");
    }

    #[test]
    fn test_display_url_trims_scheme_and_www() {
        assert_eq!(display_url("https://www.linkedin.com/in/jane"), "linkedin.com/in/jane");
        assert_eq!(display_url("http://jane.dev"), "jane.dev");
        assert_eq!(display_url("github.com/jane"), "github.com/jane");
        assert_eq!(display_url("ftp://x.y"), "ftp://x.y");
        // www. is only dropped together with a scheme
        assert_eq!(display_url("www.jane.dev"), "www.jane.dev");
        assert_eq!(strip_scheme("https://www.jane.dev"), "www.jane.dev");
    }

    #[test]
    fn test_palette_cycles_with_offset() {
        let names = ["red", "blue", "yellow"];
        let picked: Vec<_> = (0..4).map(|i| palette(names, i, 0)).collect();
        assert_eq!(picked, vec!["red", "blue", "yellow", "red"]);
        assert_eq!(palette(names, 0, 1), "blue");
    }

    #[test]
    fn test_title_with_subtitle() {
        assert_eq!(title_with_subtitle("A&B", "", " | "), "A&amp;B");
        assert_eq!(title_with_subtitle("Jane", "Dev", " | "), "Jane | Dev");
    }

    #[test]
    fn test_page_is_a_complete_document() {
        let html = Page {
            title: "Jane",
            head_links: "",
            styles: ".x { color: red; }",
            body: "<main></main>",
        }
        .into_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert!(html.contains("<title>Jane</title>"));
        assert!(html.contains(".x { color: red; }"));
        assert!(html.contains("box-sizing: border-box"));
    }
}
