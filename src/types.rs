use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two conversation languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Sv,
}

impl Language {
    /// Two-letter ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Sv => "sv",
        }
    }

    /// BCP-47 tag handed to speech collaborators.
    pub fn bcp47(&self) -> &'static str {
        match self {
            Self::En => "en-US",
            Self::Sv => "sv-SE",
        }
    }

    /// The other language.
    pub fn other(&self) -> Self {
        match self {
            Self::En => Self::Sv,
            Self::Sv => Self::En,
        }
    }

    /// Parse a language code or name as typed by a user.
    ///
    /// Accepts codes and names in both languages: `en`, `eng`, `english`, `engelska`,
    /// `sv`, `swe`, `swedish`, `svenska`. Matching is case-insensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "en" | "eng" | "english" | "engelska" => Some(Self::En),
            "sv" | "swe" | "swedish" | "svenska" => Some(Self::Sv),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| {
            anyhow::anyhow!("unknown language '{s}': expected one of en, sv, english, svenska")
        })
    }
}

/// One user input for a single turn.
///
/// `normalized` is what every matcher sees. `raw` is kept for the transcript and for the
/// question check, since normalization strips the trailing `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub raw: String,
    pub normalized: String,
    pub is_question: bool,
}

impl Utterance {
    pub fn new(raw: impl Into<String>, normalized: impl Into<String>) -> Self {
        let raw = raw.into();
        let is_question = raw.trim_end().ends_with('?');
        Self {
            raw,
            normalized: normalized.into(),
            is_question,
        }
    }

    /// Build an utterance using the built-in normalization only.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = crate::io::normalize::basic(&raw);
        Self::new(raw, normalized)
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.trim().is_empty()
    }

    /// Word tokens of the normalized text.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.normalized.split_whitespace()
    }
}

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Bot,
}

/// A transcript entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub language: Language,
    pub text: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Turn {
    /// Create a turn with the current timestamp.
    pub fn new(speaker: Speaker, language: Language, text: impl Into<String>) -> Self {
        Self {
            speaker,
            language,
            text: text.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Capitalize the first letter and make sure the sentence ends with punctuation.
pub fn format_sentence(text: &str) -> String {
    let text = text.trim();
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out: String = first.to_uppercase().chain(chars).collect();
    if !out.ends_with(['.', '!', '?']) {
        out.push('.');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_tokens_in_both_languages() {
        assert_eq!(Language::from_token("EN"), Some(Language::En));
        assert_eq!(Language::from_token("engelska"), Some(Language::En));
        assert_eq!(Language::from_token("svenska"), Some(Language::Sv));
        assert_eq!(Language::from_token("Swedish"), Some(Language::Sv));
        assert_eq!(Language::from_token("fr"), None);
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn format_sentence_capitalizes_and_terminates() {
        assert_eq!(format_sentence("  hello there "), "Hello there.");
        assert_eq!(format_sentence("why?"), "Why?");
        assert_eq!(format_sentence("är du där!"), "Är du där!");
        assert_eq!(format_sentence("   "), "");
    }

    #[test]
    fn question_flag_follows_raw_text() {
        let u = Utterance::new("Are you real?", "are you real");
        assert!(u.is_question);
        let u = Utterance::new("I am real", "i am real");
        assert!(!u.is_question);
    }
}
