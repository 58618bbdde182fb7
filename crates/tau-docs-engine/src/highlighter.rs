use std::sync::{LazyLock, OnceLock};

use regex::Regex;
use tau_docs_syntax::{Keywords, TokenClass, lexer};

use crate::placeholder::StringPlaceholders;
use crate::render::render_tokens;
use crate::shield::wrap_unshielded;

/// Which implementation turns source text into markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HighlightMode {
    /// Ordered regex passes over the whole string
    #[default]
    Passes,
    /// Single-pass lexer followed by a renderer
    Lexer,
}

fn string_regex() -> &'static Regex {
    static STRING_REGEX: OnceLock<Regex> = OnceLock::new();
    STRING_REGEX.get_or_init(|| Regex::new(r#""[^"]*""#).expect("Invalid string regex"))
}

fn comment_regex() -> &'static Regex {
    static COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();
    COMMENT_REGEX.get_or_init(|| Regex::new(r"(?m)//.*$").expect("Invalid comment regex"))
}

fn number_regex() -> &'static Regex {
    static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
    NUMBER_REGEX.get_or_init(|| {
        Regex::new(r"(?-u:\b)[0-9]+(?-u:\b)").expect("Invalid number regex")
    })
}

static DEFAULT_HIGHLIGHTER: LazyLock<Highlighter> = LazyLock::new(Highlighter::default);

/// Highlight with the built-in keyword set using the regex passes.
pub fn highlight(raw_text: &str) -> String {
    DEFAULT_HIGHLIGHTER.highlight(raw_text)
}

/// Turns tau source text into HTML with classified spans.
///
/// The pass pipeline runs in a fixed order, each pass over the whole string:
///
/// 1. escape `&`, `<`, `>`
/// 2. swap string literals for `__STRING_<i>__` placeholders
/// 3. wrap `//` comments, line by line
/// 4. wrap keywords outside placeholders and inserted markup
/// 5. wrap digit runs, same exclusion
/// 6. restore the placeholders
///
/// Strings go first so their contents are never read as comments, keywords or
/// numbers; comments go before keywords so a comment stays a single span.
/// Output is not valid input: running it again would escape the inserted
/// tags. [`CodeBlock`](crate::CodeBlock) guards against that.
#[derive(Debug, Clone)]
pub struct Highlighter {
    keywords: Keywords,
    keyword_patterns: Vec<Regex>,
    mode: HighlightMode,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(Keywords::builtin(), HighlightMode::default())
    }
}

impl Highlighter {
    pub fn new(keywords: Keywords, mode: HighlightMode) -> Self {
        let keyword_patterns = keywords
            .iter()
            .map(|word| {
                Regex::new(&format!(r"(?-u:\b){}(?-u:\b)", regex::escape(word)))
                    .expect("Invalid keyword regex")
            })
            .collect();

        Self {
            keywords,
            keyword_patterns,
            mode,
        }
    }

    pub fn keywords(&self) -> &Keywords {
        &self.keywords
    }

    pub fn mode(&self) -> HighlightMode {
        self.mode
    }

    pub fn highlight(&self, raw_text: &str) -> String {
        match self.mode {
            HighlightMode::Passes => self.highlight_passes(raw_text),
            HighlightMode::Lexer => render_tokens(&lexer::lex(raw_text), &self.keywords),
        }
    }

    fn highlight_passes(&self, raw_text: &str) -> String {
        if raw_text.is_empty() {
            return String::new();
        }

        let escaped = html_escape::encode_text(raw_text);

        let mut placeholders = StringPlaceholders::new();
        let text = string_regex()
            .replace_all(&escaped, |caps: &regex::Captures| {
                placeholders.stash(TokenClass::String.wrap(&caps[0]))
            })
            .into_owned();

        let text = comment_regex()
            .replace_all(&text, |caps: &regex::Captures| {
                TokenClass::Comment.wrap(&caps[0])
            })
            .into_owned();

        let text = self.keyword_patterns.iter().fold(text, |text, pattern| {
            wrap_unshielded(&text, pattern, TokenClass::Keyword)
        });

        let text = wrap_unshielded(&text, number_regex(), TokenClass::Number);

        log::debug!(
            "highlighted {} bytes, {} string literal(s)",
            raw_text.len(),
            placeholders.len()
        );

        placeholders.restore(text)
    }
}
