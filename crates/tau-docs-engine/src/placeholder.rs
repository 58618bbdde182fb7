/// Rendered string literals pulled out of the text during one highlight pass.
///
/// Entry `i` stands in the text as `__STRING_<i>__` until [`restore`] puts it
/// back. Tokens are plain word characters, so the `\b`-anchored keyword and
/// number patterns cannot match a fragment of one.
///
/// [`restore`]: StringPlaceholders::restore
#[derive(Debug, Default)]
pub struct StringPlaceholders {
    fragments: Vec<String>,
}

impl StringPlaceholders {
    pub const PREFIX: &'static str = "__STRING_";
    pub const SUFFIX: &'static str = "__";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(index: usize) -> String {
        format!("{}{index}{}", Self::PREFIX, Self::SUFFIX)
    }

    /// Remember `markup` and return the token to put in its place.
    pub fn stash(&mut self, markup: String) -> String {
        let token = Self::token(self.fragments.len());
        self.fragments.push(markup);
        token
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Replace every token with its fragment, in index order.
    pub fn restore(self, mut text: String) -> String {
        for (index, fragment) in self.fragments.iter().enumerate() {
            text = text.replace(&Self::token(index), fragment);
        }
        text
    }
}
