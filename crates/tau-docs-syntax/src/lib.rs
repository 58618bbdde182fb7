//! # tau-docs-syntax
//!
//! Language knowledge for highlighting tau code samples: the keyword table,
//! the closed set of [`TokenClass`]es a span can be rendered as, and a
//! lossless [Logos] lexer.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ```
//! use tau_docs_syntax::{lexer::lex, Keywords, TokenClass};
//!
//! let keywords = Keywords::builtin();
//! let classes: Vec<_> = lex("saccha 7")
//!     .iter()
//!     .map(|t| t.class(&keywords))
//!     .collect();
//!
//! assert_eq!(
//!     classes,
//!     vec![TokenClass::Keyword, TokenClass::Plain, TokenClass::Number]
//! );
//! ```

pub mod keywords;
pub mod lexer;
pub mod token_class;

pub use keywords::{BUILTIN_KEYWORDS, KeywordError, KeywordRole, Keywords};
pub use lexer::{Token, TokenKind};
pub use token_class::TokenClass;

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    /// One line per token: `Kind@start..end "text"`.
    fn format_tokens(input: &str) -> String {
        lexer::lex_with_spans(input)
            .iter()
            .map(|(token, span)| format!("{:?}@{:?} {:?}", token.kind, span, token.text))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn snapshot_function_sample() {
        assert_snapshot!(format_tokens("tau_ka_jugaad f() { print(1) }"), @r#"
        Word@0..13 "tau_ka_jugaad"
        Whitespace@13..14 " "
        Word@14..15 "f"
        Punct@15..16 "("
        Punct@16..17 ")"
        Whitespace@17..18 " "
        Punct@18..19 "{"
        Whitespace@19..20 " "
        Word@20..25 "print"
        Punct@25..26 "("
        Word@26..27 "1"
        Punct@27..28 ")"
        Whitespace@28..29 " "
        Punct@29..30 "}"
        "#);
    }

    #[test]
    fn snapshot_comment_and_string_lines() {
        assert_snapshot!(format_tokens("// hi 1\n\"saccha 2\""), @r#"
        Comment@0..7 "// hi 1"
        Newline@7..8 "\n"
        String@8..18 "\"saccha 2\""
        "#);
    }
}
