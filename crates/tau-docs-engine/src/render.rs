use tau_docs_syntax::lexer::classify;
use tau_docs_syntax::{Keywords, Token};

/// Render a token stream as escaped HTML with classified spans.
///
/// Each token is escaped on its own, so no inserted markup is ever seen by a
/// later token.
pub fn render_tokens(tokens: &[Token<'_>], keywords: &Keywords) -> String {
    let mut out = String::new();
    for (token, class) in tokens.iter().zip(classify(tokens, keywords)) {
        let escaped = html_escape::encode_text(token.text);
        out.push_str(&class.wrap(&escaped));
    }
    out
}
