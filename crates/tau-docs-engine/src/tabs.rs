use thiserror::Error;

use crate::{CodeBlock, Highlighter};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TabError {
    #[error("No tab named {0:?}")]
    UnknownTab(String),
    #[error("Example has no tabs")]
    NoTabs,
}

/// A named tab of example code, e.g. "Functions" or "Loops".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub name: String,
    pub blocks: Vec<CodeBlock>,
}

impl Tab {
    pub fn new<I, S>(name: impl Into<String>, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            blocks: sources.into_iter().map(CodeBlock::new).collect(),
        }
    }
}

/// Tabbed example panel with exactly one active tab.
#[derive(Debug, Clone)]
pub struct ExampleTabs {
    tabs: Vec<Tab>,
    active: usize,
}

impl ExampleTabs {
    /// The first tab starts active.
    pub fn new(tabs: Vec<Tab>) -> Result<Self, TabError> {
        if tabs.is_empty() {
            return Err(TabError::NoTabs);
        }
        Ok(Self { tabs, active: 0 })
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active(&self) -> &Tab {
        &self.tabs[self.active]
    }

    /// Highlight every block of the active tab that is still raw.
    pub fn highlight_active(&mut self, highlighter: &Highlighter) -> usize {
        let tab = &mut self.tabs[self.active];
        let rendered = tab
            .blocks
            .iter_mut()
            .map(|block| block.highlight(highlighter))
            .filter(|rendered| *rendered)
            .count();
        log::debug!("tab {:?}: highlighted {rendered} block(s)", tab.name);
        rendered
    }

    /// Switch to `name`, reset its blocks to raw text and highlight them again.
    pub fn activate(&mut self, name: &str, highlighter: &Highlighter) -> Result<usize, TabError> {
        let index = self
            .tabs
            .iter()
            .position(|tab| tab.name == name)
            .ok_or_else(|| TabError::UnknownTab(name.to_string()))?;

        self.active = index;
        for block in &mut self.tabs[index].blocks {
            block.reset();
        }
        Ok(self.highlight_active(highlighter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ExampleTabs {
        ExampleTabs::new(vec![
            Tab::new("Variables", ["sun_liyo_tau x ne_bana_diye 1;"]),
            Tab::new("Loops", ["jab_tak (saccha) { rok_diye; }", "// nothing"]),
        ])
        .unwrap()
    }

    #[test]
    fn empty_tab_list_is_rejected() {
        assert_eq!(ExampleTabs::new(vec![]).unwrap_err(), TabError::NoTabs);
    }

    #[test]
    fn page_load_highlights_first_tab_only() {
        let highlighter = Highlighter::default();
        let mut tabs = sample();

        assert_eq!(tabs.highlight_active(&highlighter), 1);
        assert_eq!(tabs.highlight_active(&highlighter), 0);
        assert!(tabs.tabs()[0].blocks[0].is_processed());
        assert!(!tabs.tabs()[1].blocks[0].is_processed());
    }

    #[test]
    fn activate_highlights_new_tab() {
        let highlighter = Highlighter::default();
        let mut tabs = sample();
        tabs.highlight_active(&highlighter);

        assert_eq!(tabs.activate("Loops", &highlighter), Ok(2));
        assert_eq!(tabs.active().name, "Loops");
        assert!(tabs.active().blocks.iter().all(CodeBlock::is_processed));
    }

    #[test]
    fn reactivating_rerenders_identically() {
        let highlighter = Highlighter::default();
        let mut tabs = sample();
        tabs.highlight_active(&highlighter);
        let before = tabs.active().blocks[0].display().to_string();

        tabs.activate("Loops", &highlighter).unwrap();
        assert_eq!(tabs.activate("Variables", &highlighter), Ok(1));

        assert_eq!(tabs.active().blocks[0].display(), before);
    }

    #[test]
    fn unknown_tab_leaves_state_alone() {
        let highlighter = Highlighter::default();
        let mut tabs = sample();

        assert_eq!(
            tabs.activate("Closures", &highlighter),
            Err(TabError::UnknownTab("Closures".to_string()))
        );
        assert_eq!(tabs.active().name, "Variables");
    }
}
