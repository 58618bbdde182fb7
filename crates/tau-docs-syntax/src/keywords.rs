//! The tau keyword vocabulary.
//!
//! Tau spells its keywords as Hindi phrases. Each built-in keyword carries the
//! role it plays in the language so tooling can describe it; highlighting only
//! cares about membership.

use thiserror::Error;

/// What a keyword does in tau source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordRole {
    Let,
    Function,
    If,
    Else,
    Return,
    True,
    False,
    While,
    Break,
    Continue,
    Assignment,
    Print,
}

/// Built-in keywords in the order the highlighter applies them.
///
/// `tau_ka_jugaad` and `rasoi_mein_bata_diye` are both accepted spellings of
/// the function keyword.
pub const BUILTIN_KEYWORDS: &[(&str, KeywordRole)] = &[
    ("sun_liyo_tau", KeywordRole::Let),
    ("tau_ka_jugaad", KeywordRole::Function),
    ("rasoi_mein_bata_diye", KeywordRole::Function),
    ("agar_maan_lo", KeywordRole::If),
    ("na_toh", KeywordRole::Else),
    ("laadle_ye_le", KeywordRole::Return),
    ("jab_tak", KeywordRole::While),
    ("rok_diye", KeywordRole::Break),
    ("jaan_de", KeywordRole::Continue),
    ("ne_bana_diye", KeywordRole::Assignment),
    ("saccha", KeywordRole::True),
    ("jhootha", KeywordRole::False),
    ("print", KeywordRole::Print),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeywordError {
    #[error("Keyword must be a non-empty identifier, got {0:?}")]
    NotAnIdentifier(String),
}

/// Ordered, duplicate-free keyword set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keywords {
    words: Vec<String>,
}

impl Default for Keywords {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Keywords {
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_KEYWORDS
                .iter()
                .map(|(word, _)| word.to_string())
                .collect(),
        }
    }

    /// Built-in keywords followed by `extra`, skipping duplicates.
    pub fn with_extra<I, S>(extra: I) -> Result<Self, KeywordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords = Self::builtin();
        for word in extra {
            keywords.insert(word.as_ref())?;
        }
        Ok(keywords)
    }

    /// Add a keyword. Returns `Ok(false)` if it was already present.
    pub fn insert(&mut self, word: &str) -> Result<bool, KeywordError> {
        if !is_identifier(word) {
            return Err(KeywordError::NotAnIdentifier(word.to_string()));
        }
        if self.contains(word) {
            return Ok(false);
        }
        self.words.push(word.to_string());
        Ok(true)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Role of a built-in keyword, `None` for anything else.
pub fn role_of(word: &str) -> Option<KeywordRole> {
    BUILTIN_KEYWORDS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, role)| *role)
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
