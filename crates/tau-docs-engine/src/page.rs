//! Rewriting tau code blocks inside a static HTML page.
//!
//! A block is a `<code>` element whose `class` list contains the configured
//! code class (`language-tau` by default). Its text payload is what a browser
//! would report as `textContent`: tags stripped, entities decoded. Rewritten
//! blocks are tagged `data-highlighted="true"` and skipped on later runs.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::Highlighter;

pub const DEFAULT_CODE_CLASS: &str = "language-tau";
pub const PROCESSED_ATTR: &str = r#"data-highlighted="true""#;

fn code_element_regex() -> &'static Regex {
    static CODE_ELEMENT_REGEX: OnceLock<Regex> = OnceLock::new();
    CODE_ELEMENT_REGEX.get_or_init(|| {
        Regex::new(r"(?s)<code(?P<attrs>(?:\s[^>]*)?)>(?P<body>.*?)</code>")
            .expect("Invalid code element regex")
    })
}

fn class_attr_regex() -> &'static Regex {
    static CLASS_ATTR_REGEX: OnceLock<Regex> = OnceLock::new();
    CLASS_ATTR_REGEX.get_or_init(|| {
        Regex::new(r#"\bclass\s*=\s*"(?P<classes>[^"]*)""#).expect("Invalid class attribute regex")
    })
}

fn tag_regex() -> &'static Regex {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    TAG_REGEX.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"))
}

/// Result of rewriting a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutput {
    pub html: String,
    /// Blocks rewritten by this run
    pub highlighted: usize,
    /// Matching blocks already carrying the processed attribute
    pub skipped: usize,
}

/// Highlight every `<code class="... {code_class} ...">` block in `html`.
pub fn highlight_page(html: &str, highlighter: &Highlighter, code_class: &str) -> PageOutput {
    let mut highlighted = 0;
    let mut skipped = 0;

    let rewritten = code_element_regex()
        .replace_all(html, |caps: &Captures| {
            let attrs = &caps["attrs"];
            if !has_class(attrs, code_class) {
                return caps[0].to_string();
            }
            if attrs.contains(PROCESSED_ATTR) {
                skipped += 1;
                return caps[0].to_string();
            }

            let source = text_content(&caps["body"]);
            highlighted += 1;
            format!(
                "<code{attrs} {PROCESSED_ATTR}>{}</code>",
                highlighter.highlight(&source)
            )
        })
        .into_owned();

    log::info!("highlighted {highlighted} code block(s), {skipped} already processed");

    PageOutput {
        html: rewritten,
        highlighted,
        skipped,
    }
}

fn has_class(attrs: &str, wanted: &str) -> bool {
    class_attr_regex()
        .captures(attrs)
        .is_some_and(|caps| caps["classes"].split_whitespace().any(|c| c == wanted))
}

/// Text a browser would expose for an element body.
pub fn text_content(body: &str) -> String {
    let stripped = tag_regex().replace_all(body, "");
    html_escape::decode_html_entities(&stripped).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(html: &str) -> PageOutput {
        highlight_page(html, &Highlighter::default(), DEFAULT_CODE_CLASS)
    }

    #[test]
    fn rewrites_matching_block() {
        let out = run(r#"<pre><code class="language-tau">print(1)</code></pre>"#);
        assert_eq!(out.highlighted, 1);
        assert_eq!(
            out.html,
            concat!(
                r#"<pre><code class="language-tau" data-highlighted="true">"#,
                r#"<span class="keyword">print</span>(<span class="number">1</span>)"#,
                "</code></pre>"
            )
        );
    }

    #[test]
    fn entities_are_decoded_then_escaped_again() {
        let out = run(r#"<code class="language-tau">a &lt; b &amp;&amp; c</code>"#);
        assert_eq!(
            out.html,
            r#"<code class="language-tau" data-highlighted="true">a &lt; b &amp;&amp; c</code>"#
        );
    }

    #[test]
    fn other_languages_and_inline_code_are_untouched() {
        let html = r#"<code class="language-rust">let x = 1;</code> and <code>saccha</code>"#;
        let out = run(html);
        assert_eq!(out.highlighted, 0);
        assert_eq!(out.html, html);
    }

    #[test]
    fn class_lists_are_split_on_whitespace() {
        let out = run(r#"<code class="block language-tau wide">1</code>"#);
        assert_eq!(out.highlighted, 1);

        let out = run(r#"<code class="language-tauri">1</code>"#);
        assert_eq!(out.highlighted, 0);
    }

    #[test]
    fn processed_blocks_are_skipped() {
        let first = run(r#"<code class="language-tau">saccha</code>"#);
        let second = run(&first.html);

        assert_eq!(second.highlighted, 0);
        assert_eq!(second.skipped, 1);
        assert_eq!(second.html, first.html);
    }

    #[test]
    fn stray_markup_inside_block_is_reduced_to_text() {
        assert_eq!(text_content("<b>jab_tak</b> &quot;x&quot;"), "jab_tak \"x\"");
    }

    #[test]
    fn multiline_blocks() {
        let out = run("<code class=\"language-tau\">// a\nrok_diye;\n</code>");
        assert_eq!(
            out.html,
            concat!(
                "<code class=\"language-tau\" data-highlighted=\"true\">",
                "<span class=\"comment\">// a</span>\n",
                "<span class=\"keyword\">rok_diye</span>;\n",
                "</code>"
            )
        );
    }
}
