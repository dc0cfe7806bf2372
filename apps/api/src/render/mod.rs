// Document Renderer: structured record + template + customization → one
// self-contained HTML document. Markup comes from `maud::html!`; no I/O.

pub mod cover_letter;
pub mod resume;

use std::fmt::Write as _;
use std::sync::Arc;

use maud::{html, Escaper, Markup, PreEscaped, Render, DOCTYPE};

pub use cover_letter::render_cover_letter_to_html;
pub use resume::render_resume_to_html;

use crate::pagination::PageGeometry;

/// A complete HTML document, created per export and never mutated.
///
/// Cloning shares the underlying buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument(Arc<str>);

impl RenderedDocument {
    pub fn new(html: String) -> Self {
        RenderedDocument(Arc::from(html))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a copy of the document with an extra `<style>` block appended
    /// right before `</head>`. The document itself is left untouched.
    pub fn with_head_style(&self, css: &str) -> String {
        let block = format!("<style data-export-override>\n{css}\n</style>\n");
        match self.0.find("</head>") {
            Some(idx) => {
                let mut html = String::with_capacity(self.0.len() + block.len());
                html.push_str(&self.0[..idx]);
                html.push_str(&block);
                html.push_str(&self.0[idx..]);
                html
            }
            None => format!("{block}{}", self.0),
        }
    }
}

/// Print hints every document embeds, so capture stays deterministic even
/// without an injected override.
pub(crate) fn print_base_css() -> String {
    format!("{}{PRINT_BASE}", PageGeometry::a4().page_css())
}

const PRINT_BASE: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
html, body {
  margin: 0;
  padding: 0;
  -webkit-print-color-adjust: exact;
  print-color-adjust: exact;
  color-adjust: exact;
}
body {
  background: var(--background-color, #ffffff);
  color: var(--text-color, #1f2937);
  -webkit-font-smoothing: antialiased;
  text-rendering: optimizeLegibility;
}
img { max-width: 100%; }
@media print {
  html, body { background: var(--background-color, #ffffff); }
  a { color: inherit; text-decoration: none; }
}
"#;

/// User text spliced into `html!`. maud escapes `& < > "`; this also
/// encodes `'` so no quote character ever reaches the output raw.
pub(crate) struct Text<'a>(pub &'a str);

impl Render for Text<'_> {
    fn render_to(&self, buffer: &mut String) {
        for (i, part) in self.0.split('\'').enumerate() {
            if i > 0 {
                buffer.push_str("&#39;");
            }
            let _ = Escaper::new(&mut *buffer).write_str(part);
        }
    }
}

/// Wraps a body fragment and stylesheet into a full document.
pub(crate) fn document_shell(title: &str, css: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (Text(title)) }
                style { (PreEscaped(css)) }
            }
            body { (body) }
        }
    }
    .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_is_complete_document() {
        let html = document_shell("A <b> title", "a > b { color: red; }", html! { p { "hi" } });
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>A &lt;b&gt; title</title>"));
        assert!(html.contains("<style>a > b { color: red; }</style>"));
        assert!(html.contains("<head>") && html.contains("</head>"));
        assert!(html.contains("<body><p>hi</p></body>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_text_escapes_quotes_and_markup() {
        let markup = html! { p title=(Text("it's")) { (Text(r#"<b>"Tom" & 'Jerry'</b>"#)) } };
        assert_eq!(
            markup.into_string(),
            r#"<p title="it&#39;s">&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;</p>"#
        );
        assert_eq!(html! { (Text("Zoë — São Paulo")) }.into_string(), "Zoë — São Paulo");
    }

    #[test]
    fn test_head_style_inserted_before_head_close() {
        let doc = RenderedDocument::new(document_shell("t", "", html! { p { "x" } }));
        let html = doc.with_head_style(".x { color: blue; }");
        let style_at = html.find("data-export-override").unwrap();
        let head_close = html.find("</head>").unwrap();
        assert!(style_at < head_close);
        // Original untouched.
        assert!(!doc.as_str().contains("data-export-override"));
    }

    #[test]
    fn test_head_style_without_head() {
        let doc = RenderedDocument::new("<p>bare</p>".to_string());
        assert!(doc.with_head_style("p{}").starts_with("<style"));
    }

    #[test]
    fn test_print_base_has_page_and_color_adjust() {
        let css = print_base_css();
        assert!(css.starts_with("@page"));
        assert!(css.contains("print-color-adjust: exact"));
    }
}
