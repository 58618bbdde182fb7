//! # tau-docs-engine
//!
//! Turns tau code samples into HTML with `comment`, `string`, `keyword` and
//! `number` spans for the documentation site.
//!
//! ```
//! use tau_docs_engine::highlight;
//!
//! assert_eq!(
//!     highlight("saccha"),
//!     r#"<span class="keyword">saccha</span>"#
//! );
//! ```
//!
//! The [`Highlighter`] runs ordered regex passes by default; see
//! [`HighlightMode`] for the lexer-based alternative. [`CodeBlock`] and
//! [`ExampleTabs`] model the page's samples and their raw/highlighted
//! lifecycle, and [`page::highlight_page`] rewrites a whole HTML page.

pub mod code_block;
pub mod highlighter;
pub mod io;
pub mod page;
pub mod placeholder;
pub mod render;
pub mod shield;
pub mod tabs;

// Re-export key types for easier usage
pub use code_block::{BlockState, CodeBlock};
pub use highlighter::{HighlightMode, Highlighter, highlight};
pub use page::{DEFAULT_CODE_CLASS, PageOutput, highlight_page};
pub use tabs::{ExampleTabs, Tab, TabError};
pub use tau_docs_syntax::{KeywordError, Keywords, TokenClass};
