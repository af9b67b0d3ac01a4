pub mod markers;

use serde::Serialize;
use tracing::debug;

use crate::types::Language;

/// What one utterance says about the language the user is speaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "language", rename_all = "snake_case")]
pub enum DetectionSignal {
    /// `/lang sv`, "switch to english", ... Always honoured, even for the active language.
    ExplicitCommand(Language),
    /// Unambiguous character or vocabulary evidence for one language.
    StrongMarker(Language),
    /// No usable evidence; the active language stays.
    Ambiguous,
}

impl DetectionSignal {
    /// The language to continue in after this signal.
    pub fn apply(&self, current: Language) -> Language {
        match self {
            Self::ExplicitCommand(l) | Self::StrongMarker(l) => *l,
            Self::Ambiguous => current,
        }
    }
}

/// A signal together with the stage that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub signal: DetectionSignal,
    pub matched_by: &'static str,
}

/// Sticky language detector.
///
/// Stage priority: explicit command > Swedish characters > starter/function words >
/// ambiguous. The first stage that fires decides; later stages are not evaluated.
/// Short or mixed turns ("ok", names, numbers) fall through to `Ambiguous`, so the active
/// language does not flap on transcription noise.
#[derive(Debug, Default, Clone, Copy)]
pub struct LanguageDetector;

impl LanguageDetector {
    pub fn new() -> Self {
        Self
    }

    /// Classify a normalized utterance.
    pub fn resolve(&self, normalized: &str, current: Language) -> DetectionSignal {
        self.detect(normalized, current).signal
    }

    /// Like [`resolve`](Self::resolve), also reporting which stage matched.
    pub fn detect(&self, normalized: &str, current: Language) -> Detection {
        let text = normalized.trim();

        let detection = explicit_command(text)
            .map(|l| Detection {
                signal: DetectionSignal::ExplicitCommand(l),
                matched_by: "command",
            })
            .or_else(|| {
                has_swedish_characters(text).then_some(Detection {
                    signal: DetectionSignal::StrongMarker(Language::Sv),
                    matched_by: "characters",
                })
            })
            .or_else(|| {
                vocabulary_marker(text).map(|l| Detection {
                    signal: DetectionSignal::StrongMarker(l),
                    matched_by: "vocabulary",
                })
            })
            .unwrap_or(Detection {
                signal: DetectionSignal::Ambiguous,
                matched_by: "none",
            });

        debug!(
            %current,
            signal = ?detection.signal,
            matched_by = detection.matched_by,
            "language detection"
        );
        detection
    }
}

/// Parse `/lang <code>`, `/language <code>` or a verbal switch phrase.
pub fn explicit_command(text: &str) -> Option<Language> {
    let mut tokens = text.split_whitespace();
    if let Some(first) = tokens.next() {
        if markers::DIRECTIVES.contains(&first) {
            return tokens.next().and_then(Language::from_token);
        }
    }

    markers::SWITCH_PHRASES
        .iter()
        .find(|(phrase, _)| markers::contains_phrase(text, phrase))
        .map(|(_, language)| *language)
}

pub fn has_swedish_characters(text: &str) -> bool {
    text.chars().any(|c| markers::SV_CHARACTERS.contains(&c))
}

/// Starter-word and function-word check. Returns a language only when exactly one
/// language's markers are present.
pub fn vocabulary_marker(text: &str) -> Option<Language> {
    let en = has_vocabulary(text, Language::En);
    let sv = has_vocabulary(text, Language::Sv);
    match (en, sv) {
        (true, false) => Some(Language::En),
        (false, true) => Some(Language::Sv),
        _ => None,
    }
}

fn has_vocabulary(text: &str, language: Language) -> bool {
    let mut tokens = text.split_whitespace();
    let Some(first) = tokens.next() else {
        return false;
    };

    markers::starters(language).contains(&first)
        || std::iter::once(first)
            .chain(tokens)
            .any(|t| markers::function_words(language).contains(&t))
}
