//! Lexical evidence for each language.

use crate::types::Language;

/// Words that, as the first token, point at one language.
pub const EN_STARTERS: &[&str] = &[
    "hello", "hi", "hey", "why", "because", "i", "can", "are", "what", "how", "english",
];

pub const SV_STARTERS: &[&str] = &[
    "hej", "jag", "varför", "slut", "hejdå", "adjö", "svenska",
];

/// High-frequency function words that do not occur as words in the other language.
/// Kept deliberately small; loan words and names are what make short turns ambiguous.
pub const EN_FUNCTION_WORDS: &[&str] = &[
    "the", "and", "you", "your", "my", "me", "am", "not", "don't", "can't", "i'm",
    "this", "that", "with", "about", "have", "what", "why", "english",
];

pub const SV_FUNCTION_WORDS: &[&str] = &[
    "och", "inte", "det", "att", "som", "jag", "du", "mig", "dig", "mitt",
    "ditt", "har", "vill", "vad", "hur", "varför", "svenska",
];

/// Characters only Swedish uses.
pub const SV_CHARACTERS: &[char] = &['å', 'ä', 'ö'];

/// Verbal language-switch phrases, in either language, with their target.
pub const SWITCH_PHRASES: &[(&str, Language)] = &[
    ("switch to english", Language::En),
    ("switch to swedish", Language::Sv),
    ("speak english", Language::En),
    ("speak swedish", Language::Sv),
    ("byt till engelska", Language::En),
    ("byt till svenska", Language::Sv),
    ("byta till engelska", Language::En),
    ("byta till svenska", Language::Sv),
    ("prata engelska", Language::En),
    ("prata svenska", Language::Sv),
];

/// Slash directives that take a language argument.
pub const DIRECTIVES: &[&str] = &["/lang", "/language"];

pub fn starters(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => EN_STARTERS,
        Language::Sv => SV_STARTERS,
    }
}

pub fn function_words(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => EN_FUNCTION_WORDS,
        Language::Sv => SV_FUNCTION_WORDS,
    }
}

/// True if `phrase` occurs in `text` on word boundaries. Both are normalized
/// (single spaces, lower case).
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    let padded = format!(" {text} ");
    padded.contains(&format!(" {phrase} "))
}
