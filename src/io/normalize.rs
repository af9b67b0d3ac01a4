use std::collections::HashMap;

use super::TextNormalizer;
use crate::types::Language;

/// Lower-case, strip punctuation, collapse whitespace.
///
/// Apostrophes inside words survive (`don't`), and so does a leading `/` so that
/// directives like `/lang sv` reach the detector intact.
pub fn basic(raw: &str) -> String {
    let trimmed = raw.trim_start();
    let directive = trimmed.starts_with('/');

    let mut cleaned = String::with_capacity(trimmed.len());
    if directive {
        cleaned.push('/');
    }
    let body = if directive { &trimmed[1..] } else { trimmed };

    for ch in body.chars() {
        match ch {
            '\u{2019}' | '\'' => cleaned.push('\''),
            c if c.is_alphanumeric() => cleaned.extend(c.to_lowercase()),
            _ => cleaned.push(' '),
        }
    }

    cleaned
        .split_whitespace()
        .map(|w| {
            if w.starts_with('/') {
                w
            } else {
                w.trim_matches('\'')
            }
        })
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Default normalizer: [`basic`] followed by whole-token corrections.
///
/// Corrections stand in for a spell checker; they are configured per language and
/// applied after lower-casing, so keys are expected in lower case.
#[derive(Debug, Default, Clone)]
pub struct BasicNormalizer {
    corrections: HashMap<Language, HashMap<String, String>>,
}

impl BasicNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_corrections(corrections: HashMap<Language, HashMap<String, String>>) -> Self {
        Self { corrections }
    }

    pub fn correction_count(&self, language: Language) -> usize {
        self.corrections.get(&language).map_or(0, HashMap::len)
    }
}

impl TextNormalizer for BasicNormalizer {
    fn normalize(&self, raw: &str, language: Language) -> String {
        let base = basic(raw);
        let Some(table) = self.corrections.get(&language).filter(|t| !t.is_empty()) else {
            return base;
        };

        base.split_whitespace()
            .map(|w| table.get(w).map(String::as_str).unwrap_or(w))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
