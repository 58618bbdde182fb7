//! Exclusion zones for the keyword and number passes.
//!
//! Once earlier passes have rewritten the text, some regions must not be
//! matched again: placeholder tokens, the entities produced by escaping, and
//! markup already inserted (the tag itself and the span's content). The `regex` crate has no lookaround, so
//! instead of a negative lookahead per pattern the zones are computed up front
//! and matches starting inside one are left alone.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;
use tau_docs_syntax::TokenClass;

fn protected_regex() -> &'static Regex {
    static PROTECTED_REGEX: OnceLock<Regex> = OnceLock::new();
    // Inserted spans never nest and their content is escaped text, so `[^<]*`
    // reaches exactly the closing tag.
    PROTECTED_REGEX.get_or_init(|| {
        Regex::new(r"__STRING_[0-9]+__|<span[^>]*>[^<]*</span>|&[A-Za-z]+;")
            .expect("Invalid protected regex")
    })
}

/// Sorted, non-overlapping byte ranges that later passes must not touch.
#[derive(Debug)]
pub struct Shield {
    zones: Vec<Range<usize>>,
}

impl Shield {
    pub fn scan(text: &str) -> Self {
        Self {
            zones: protected_regex()
                .find_iter(text)
                .map(|m| m.range())
                .collect(),
        }
    }

    pub fn covers(&self, pos: usize) -> bool {
        // Zones are sorted by start; find the last one starting at or before `pos`
        let idx = self.zones.partition_point(|zone| zone.start <= pos);
        idx > 0 && self.zones[idx - 1].contains(&pos)
    }

    pub fn zones(&self) -> &[Range<usize>] {
        &self.zones
    }
}

/// Wrap every match of `pattern` outside the shielded zones of `text` in a
/// `class` span.
pub fn wrap_unshielded(text: &str, pattern: &Regex, class: TokenClass) -> String {
    let shield = Shield::scan(text);
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for m in pattern.find_iter(text) {
        if shield.covers(m.start()) {
            continue;
        }
        out.push_str(&text[last..m.start()]);
        out.push_str(&class.wrap(m.as_str()));
        last = m.end();
    }

    out.push_str(&text[last..]);
    out
}
