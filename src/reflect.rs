use std::collections::HashMap;
use std::sync::OnceLock;

use crate::types::Language;

/// Pairs that swap in both directions.
const EN_PAIRS: &[(&str, &str)] = &[
    ("am", "are"),
    ("me", "you"),
    ("my", "your"),
    ("mine", "yours"),
    ("myself", "yourself"),
    ("i'm", "you're"),
    ("i've", "you've"),
    ("i'll", "you'll"),
    ("i'd", "you'd"),
];

/// Entries that only map one way. `i` and `you` cannot be a symmetric pair because
/// `you` already maps back to the object form `me`.
const EN_ONE_WAY: &[(&str, &str)] = &[("i", "you"), ("was", "were")];

const SV_PAIRS: &[(&str, &str)] = &[
    ("jag", "du"),
    ("mig", "dig"),
    ("min", "din"),
    ("mitt", "ditt"),
    ("mina", "dina"),
];

const SV_ONE_WAY: &[(&str, &str)] = &[];

/// Word-for-word perspective swap table for one language.
#[derive(Debug)]
pub struct ReflectionTable {
    language: Language,
    pairs: &'static [(&'static str, &'static str)],
    map: HashMap<&'static str, &'static str>,
}

impl ReflectionTable {
    fn build(
        language: Language,
        pairs: &'static [(&'static str, &'static str)],
        one_way: &'static [(&'static str, &'static str)],
    ) -> Self {
        let mut map = HashMap::new();
        for &(a, b) in pairs {
            map.insert(a, b);
            map.insert(b, a);
        }
        for &(from, to) in one_way {
            map.insert(from, to);
        }
        Self {
            language,
            pairs,
            map,
        }
    }

    /// The static table for a language.
    pub fn for_language(language: Language) -> &'static ReflectionTable {
        static EN: OnceLock<ReflectionTable> = OnceLock::new();
        static SV: OnceLock<ReflectionTable> = OnceLock::new();
        match language {
            Language::En => EN.get_or_init(|| Self::build(Language::En, EN_PAIRS, EN_ONE_WAY)),
            Language::Sv => SV.get_or_init(|| Self::build(Language::Sv, SV_PAIRS, SV_ONE_WAY)),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The symmetric pairs; reflecting either side twice gives it back.
    pub fn pairs(&self) -> &'static [(&'static str, &'static str)] {
        self.pairs
    }

    /// Look up the reflected form of a lower-case word.
    pub fn lookup(&self, word: &str) -> Option<&'static str> {
        self.map.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\''
}

/// Swap first- and second-person words in `clause`.
///
/// One left-to-right pass: each word is looked up once and never revisited, so `I` does
/// not turn into `you` and back again. Everything between words is copied through.
pub fn reflect(clause: &str, language: Language) -> String {
    let table = ReflectionTable::for_language(language);
    let mut out = String::with_capacity(clause.len() + 8);
    let mut word = String::new();

    let flush = |word: &mut String, out: &mut String| {
        if word.is_empty() {
            return;
        }
        match table.lookup(&word.to_lowercase()) {
            Some(swapped) => out.push_str(swapped),
            None => out.push_str(word),
        }
        word.clear();
    };

    for ch in clause.chars() {
        if is_word_char(ch) {
            word.push(ch);
        } else {
            flush(&mut word, &mut out);
            out.push(ch);
        }
    }
    flush(&mut word, &mut out);

    if clause.chars().next().is_some_and(char::is_uppercase) {
        capitalize_first(&out)
    } else {
        out
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
