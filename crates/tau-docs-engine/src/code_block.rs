use crate::Highlighter;

/// Whether a block currently shows its source or rendered markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockState {
    Raw,
    Highlighted(String),
}

/// One code sample on the page.
///
/// The raw text is never overwritten, so [`reset`](Self::reset) always gets
/// back the exact original and highlighting again cannot double-escape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    raw: String,
    state: BlockState,
}

impl CodeBlock {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            state: BlockState::Raw,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn state(&self) -> &BlockState {
        &self.state
    }

    pub fn is_processed(&self) -> bool {
        matches!(self.state, BlockState::Highlighted(_))
    }

    pub fn markup(&self) -> Option<&str> {
        match &self.state {
            BlockState::Raw => None,
            BlockState::Highlighted(markup) => Some(markup),
        }
    }

    /// What the page shows: raw text, or markup once highlighted.
    pub fn display(&self) -> &str {
        self.markup().unwrap_or(&self.raw)
    }

    /// Render the block unless it already is. Returns whether work was done.
    pub fn highlight(&mut self, highlighter: &Highlighter) -> bool {
        if self.is_processed() {
            return false;
        }
        self.state = BlockState::Highlighted(highlighter.highlight(&self.raw));
        true
    }

    pub fn reset(&mut self) {
        self.state = BlockState::Raw;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_block_is_raw() {
        let block = CodeBlock::new("print(1)");
        assert_eq!(block.state(), &BlockState::Raw);
        assert_eq!(block.display(), "print(1)");
        assert_eq!(block.markup(), None);
    }

    #[test]
    fn highlight_is_guarded() {
        let highlighter = Highlighter::default();
        let mut block = CodeBlock::new("a < 1");

        assert!(block.highlight(&highlighter));
        let first = block.display().to_string();
        assert!(!block.highlight(&highlighter));

        assert_eq!(block.display(), first);
        assert_eq!(first, r#"a &lt; <span class="number">1</span>"#);
    }

    #[test]
    fn reset_restores_raw_text() {
        let highlighter = Highlighter::default();
        let mut block = CodeBlock::new("saccha & jhootha");
        block.highlight(&highlighter);
        assert!(block.is_processed());

        block.reset();

        assert!(!block.is_processed());
        assert_eq!(block.display(), "saccha & jhootha");
    }

    #[test]
    fn highlight_reset_highlight_is_deterministic() {
        let highlighter = Highlighter::default();
        let mut block = CodeBlock::new("sun_liyo_tau s ne_bana_diye \"<3\"; // 3");

        block.highlight(&highlighter);
        let first = block.display().to_string();
        block.reset();
        block.highlight(&highlighter);

        assert_eq!(block.display(), first);
    }
}
