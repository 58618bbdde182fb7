/// Rendering category assigned to a lexical span.
///
/// Classes never nest or overlap. `Plain` text is emitted without a wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Comment,
    String,
    Keyword,
    Number,
    Plain,
}

impl TokenClass {
    /// CSS class name used in the generated markup, `None` for plain text.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            TokenClass::Comment => Some("comment"),
            TokenClass::String => Some("string"),
            TokenClass::Keyword => Some("keyword"),
            TokenClass::Number => Some("number"),
            TokenClass::Plain => None,
        }
    }

    /// Opening tag for this class, e.g. `<span class="keyword">`.
    pub fn open_tag(self) -> Option<String> {
        self.css_class().map(|class| format!("<span class=\"{class}\">"))
    }

    /// Wrap already-escaped markup in this class's span.
    pub fn wrap(self, escaped: &str) -> String {
        match self.open_tag() {
            Some(open) => format!("{open}{escaped}</span>"),
            None => escaped.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(TokenClass::Comment, "<span class=\"comment\">x</span>")]
    #[case(TokenClass::String, "<span class=\"string\">x</span>")]
    #[case(TokenClass::Keyword, "<span class=\"keyword\">x</span>")]
    #[case(TokenClass::Number, "<span class=\"number\">x</span>")]
    #[case(TokenClass::Plain, "x")]
    fn wrap_uses_fixed_class_names(#[case] class: TokenClass, #[case] expected: &str) {
        assert_eq!(class.wrap("x"), expected);
    }
}
