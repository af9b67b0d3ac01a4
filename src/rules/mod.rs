pub mod english;
pub mod select;
pub mod swedish;

use std::fmt;

use crate::language::markers::contains_phrase;
use crate::types::{Language, Utterance};

pub use select::{Response, ResponseKind, ResponseSelector, RuleUsage};

/// Placeholder in templates for the reflected capture.
pub const CAPTURE_SLOT: &str = "{0}";

/// How a rule recognizes an utterance.
///
/// All phrases are lower case and matched against the normalized utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Utterance starts with the phrase. Captures the rest.
    Prefix(&'static str),
    /// Phrase appears anywhere on word boundaries. Captures what follows it.
    Literal(&'static str),
    /// Any token is one of the keywords; `word*` matches by prefix. Captures everything.
    KeywordSet(&'static [&'static str]),
    /// The raw utterance ended with a question mark. Captures everything.
    Question,
    /// Always matches. Captures everything.
    Any,
}

impl Trigger {
    /// Returns the captured clause (possibly empty) when the trigger matches.
    pub fn capture<'a>(&self, utterance: &'a Utterance) -> Option<&'a str> {
        let text = utterance.normalized.as_str();
        match *self {
            Trigger::Prefix(phrase) => {
                let rest = text.strip_prefix(phrase)?;
                if rest.is_empty() {
                    Some("")
                } else {
                    rest.strip_prefix(' ')
                }
            }
            Trigger::Literal(phrase) => {
                if !contains_phrase(text, phrase) {
                    return None;
                }
                let padded_phrase = format!(" {phrase} ");
                let padded = format!(" {text} ");
                let start = padded.find(&padded_phrase)? + padded_phrase.len();
                // `padded` is `text` shifted by one leading space.
                let offset = (start - 1).min(text.len());
                Some(text[offset..].trim_start())
            }
            Trigger::KeywordSet(words) => utterance
                .tokens()
                .any(|token| words.iter().any(|w| keyword_matches(w, token)))
                .then_some(text),
            Trigger::Question => utterance.is_question.then_some(text),
            Trigger::Any => Some(text),
        }
    }
}

fn keyword_matches(keyword: &str, token: &str) -> bool {
    match keyword.strip_suffix('*') {
        Some(stem) => token.starts_with(stem),
        None => token == keyword,
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prefix(p) => write!(f, "prefix:{p}"),
            Self::Literal(p) => write!(f, "literal:{p}"),
            Self::KeywordSet(words) => write!(f, "keywords:{}", words.join(",")),
            Self::Question => f.write_str("question"),
            Self::Any => f.write_str("any"),
        }
    }
}

/// A trigger set with the templates used to answer it.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub triggers: &'static [Trigger],
    pub templates: &'static [&'static str],
}

impl Rule {
    /// The capture of the first trigger that matches.
    pub fn capture<'a>(&self, utterance: &'a Utterance) -> Option<&'a str> {
        self.triggers.iter().find_map(|t| t.capture(utterance))
    }

    pub fn is_catch_all(&self) -> bool {
        self.triggers.contains(&Trigger::Any)
            && self.templates.iter().any(|t| !t.contains(CAPTURE_SLOT))
    }
}

/// Everything a language contributes besides its rules.
#[derive(Debug, Clone, Copy)]
pub struct Phrasebook {
    /// Exit words or phrases; any of them ends the session.
    pub exit_phrases: &'static [&'static str],
    pub farewells: &'static [&'static str],
    /// Reply to an explicit language switch into this language.
    pub acknowledgement: &'static str,
    pub greeting: &'static str,
    /// Last-resort reply if no template can be filled.
    pub fallback: &'static str,
}

/// Ordered rules for one language. List order is priority order.
#[derive(Debug, Clone)]
pub struct PatternBank {
    language: Language,
    rules: Vec<Rule>,
    phrasebook: Phrasebook,
}

const DEFAULT_CATCH_ALL: &[&str] = &["Please go on."];

impl PatternBank {
    /// Build a bank. If the last rule is not a usable catch-all, one is appended so
    /// every utterance gets an answer.
    pub fn new(language: Language, mut rules: Vec<Rule>, phrasebook: Phrasebook) -> Self {
        if !rules.last().is_some_and(Rule::is_catch_all) {
            rules.push(Rule {
                id: "catch_all",
                triggers: &[Trigger::Any],
                templates: match language {
                    Language::En => DEFAULT_CATCH_ALL,
                    Language::Sv => &["Fortsätt gärna."],
                },
            });
        }
        Self {
            language,
            rules,
            phrasebook,
        }
    }

    /// The built-in bank for a language.
    pub fn builtin(language: Language) -> Self {
        match language {
            Language::En => Self::new(language, english::RULES.to_vec(), english::PHRASEBOOK),
            Language::Sv => Self::new(language, swedish::RULES.to_vec(), swedish::PHRASEBOOK),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn phrasebook(&self) -> &Phrasebook {
        &self.phrasebook
    }

    /// First rule whose trigger matches, with its capture.
    pub fn find<'a>(&self, utterance: &'a Utterance) -> Option<(&Rule, &'a str)> {
        self.rules
            .iter()
            .find_map(|rule| rule.capture(utterance).map(|c| (rule, c)))
    }

    /// The exit phrase contained in the utterance, if any.
    pub fn exit_phrase(&self, utterance: &Utterance) -> Option<&'static str> {
        self.phrasebook
            .exit_phrases
            .iter()
            .find(|p| contains_phrase(&utterance.normalized, p))
            .copied()
    }

    /// Farewell for the session with the given ordinal (1-based).
    pub fn farewell(&self, ordinal: u64) -> &'static str {
        let farewells = self.phrasebook.farewells;
        if farewells.is_empty() {
            return self.phrasebook.fallback;
        }
        let index = (ordinal.saturating_sub(1) % farewells.len() as u64) as usize;
        farewells[index]
    }
}
