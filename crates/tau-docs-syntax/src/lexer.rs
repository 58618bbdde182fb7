//! # Lexer - Tokenizing tau Source
//!
//! A single-pass alternative to the regex pass pipeline in the engine crate.
//! The source is broken into a flat sequence of tokens with [Logos]; a
//! renderer then wraps each token according to its [`TokenClass`].
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## The Lossless Guarantee
//!
//! Every byte in the input appears in exactly one token:
//!
//! ```
//! use tau_docs_syntax::lexer::lex;
//!
//! let input = "sun_liyo_tau x ne_bana_diye 42 // answer\n";
//! let tokens = lex(input);
//!
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! ## Words, Not Keywords
//!
//! The lexer does not know the keyword set. Identifier and digit runs are all
//! lexed as [`TokenKind::Word`] and classified afterwards by
//! [`Token::class`], so configured extra keywords need no lexer changes.
//! [`classify`] does the same for a whole stream and also looks at
//! neighbours: a word glued to a string literal, as in `print"x"`, has no
//! word boundary on that side and renders plain.
//!
//! String literals run to the next `"` with no escape sequences. An
//! unterminated `"` falls back to a lone [`TokenKind::Punct`].

use logos::Logos;

use crate::keywords::Keywords;
use crate::token_class::TokenClass;

/// Token kinds produced by the Logos lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `//` up to, not including, the line ending
    #[regex(r"//[^\n]*")]
    Comment,

    /// `"..."`, may span lines. Produced from [`TokenKind::Quote`] by [`lex`]
    String,

    /// Opening `"`; never appears in lexer output
    #[token("\"")]
    Quote,

    /// Identifier or digit run
    #[regex(r"[A-Za-z0-9_]+")]
    Word,

    /// Horizontal whitespace
    #[regex(r"[ \t\r]+")]
    Whitespace,

    #[token("\n")]
    Newline,

    /// Any other single character
    #[regex(r#"[^ \t\r\nA-Za-z0-9_"]"#)]
    Punct,
}

/// A lexed token with its kind and text slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl Token<'_> {
    /// Rendering class of this token under the given keyword set.
    pub fn class(&self, keywords: &Keywords) -> TokenClass {
        match self.kind {
            TokenKind::Comment => TokenClass::Comment,
            TokenKind::String => TokenClass::String,
            TokenKind::Word if keywords.contains(self.text) => TokenClass::Keyword,
            TokenKind::Word if self.text.bytes().all(|b| b.is_ascii_digit()) => {
                TokenClass::Number
            }
            _ => TokenClass::Plain,
        }
    }
}

/// Classes for a whole token stream, one per token.
///
/// A word directly next to a string literal is [`TokenClass::Plain`], the same
/// as when the literal is swapped for a `__STRING_<i>__` placeholder and the
/// word runs into its underscores.
pub fn classify(tokens: &[Token<'_>], keywords: &Keywords) -> Vec<TokenClass> {
    let is_string = |index: Option<usize>| {
        index
            .and_then(|i| tokens.get(i))
            .is_some_and(|t| t.kind == TokenKind::String)
    };

    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let glued = is_string(i.checked_sub(1)) || is_string(Some(i + 1));
            if token.kind == TokenKind::Word && glued {
                TokenClass::Plain
            } else {
                token.class(keywords)
            }
        })
        .collect()
}

/// Lex the input into a sequence of tokens.
///
/// Guarantees that all bytes from the input appear in the output tokens.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    lex_with_spans(input)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Lex with byte offset spans.
pub fn lex_with_spans(input: &str) -> Vec<(Token<'_>, std::ops::Range<usize>)> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let kind = match result {
            // Strings run to the next quote; a quote with no partner is just punctuation
            Ok(TokenKind::Quote) => match lexer.remainder().find('"') {
                Some(len) => {
                    lexer.bump(len + 1);
                    TokenKind::String
                }
                None => TokenKind::Punct,
            },
            Ok(kind) => kind,
            Err(()) => TokenKind::Punct,
        };
        tokens.push((Token { kind, text: lexer.slice() }, lexer.span()));
    }

    tokens
}
