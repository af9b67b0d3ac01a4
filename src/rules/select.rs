use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use super::{CAPTURE_SLOT, PatternBank, Rule, Trigger};
use crate::reflect::reflect;
use crate::session::Session;
use crate::types::{Language, Utterance, format_sentence};

/// Why a response was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    /// A specific rule matched.
    Rule,
    /// Only the catch-all matched.
    CatchAll,
    /// An exit phrase was recognized; the session ends.
    Farewell,
    /// Reply to an explicit language switch.
    Acknowledgement,
}

/// A reply ready to be shown and spoken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub text: String,
    pub language: Language,
    pub rule: &'static str,
    pub kind: ResponseKind,
}

impl Response {
    pub fn ends_session(&self) -> bool {
        self.kind == ResponseKind::Farewell
    }
}

/// Per-session template rotation, keyed by (language, rule id).
#[derive(Debug, Default, Clone)]
pub struct RuleUsage {
    cursors: HashMap<(Language, &'static str), usize>,
    hits: HashMap<(Language, &'static str), usize>,
}

impl RuleUsage {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the rule has answered in this session.
    pub fn uses(&self, language: Language, rule: &'static str) -> usize {
        self.hits.get(&(language, rule)).copied().unwrap_or(0)
    }

    /// Index of the template the rule tries first on its next answer. Advances past
    /// templates that were skipped.
    pub fn cursor(&self, language: Language, rule: &'static str) -> usize {
        self.cursors.get(&(language, rule)).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn clear(&mut self) {
        self.cursors.clear();
        self.hits.clear();
    }

    fn record(&mut self, language: Language, rule: &'static str, next: usize) {
        self.cursors.insert((language, rule), next);
        *self.hits.entry((language, rule)).or_default() += 1;
    }
}

/// Picks and fills a response from the bank of the session's language.
#[derive(Debug, Clone)]
pub struct ResponseSelector {
    en: PatternBank,
    sv: PatternBank,
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ResponseSelector {
    pub fn new(en: PatternBank, sv: PatternBank) -> Self {
        Self { en, sv }
    }

    pub fn builtin() -> Self {
        Self::new(
            PatternBank::builtin(Language::En),
            PatternBank::builtin(Language::Sv),
        )
    }

    pub fn bank(&self, language: Language) -> &PatternBank {
        match language {
            Language::En => &self.en,
            Language::Sv => &self.sv,
        }
    }

    /// Answer `utterance` in the session's active language.
    ///
    /// Exit phrases of either language are checked first. Then the first matching rule
    /// answers, rotating through its templates across the session. Never returns empty
    /// text.
    pub fn select(&self, utterance: &Utterance, session: &mut Session) -> Response {
        let language = session.language;
        let bank = self.bank(language);

        if let Some(phrase) = self.exit_phrase(utterance) {
            debug!(%language, phrase, "exit phrase recognized");
            return Response {
                text: format_sentence(bank.farewell(session.ordinal)),
                language,
                rule: "exit",
                kind: ResponseKind::Farewell,
            };
        }

        for rule in bank.rules() {
            let Some(capture) = rule.capture(utterance) else {
                continue;
            };
            let reflected = reflect(capture.trim(), language);
            if let Some(text) = fill(rule, &reflected, language, &mut session.usage) {
                let kind = if rule.triggers.contains(&Trigger::Any) {
                    ResponseKind::CatchAll
                } else {
                    ResponseKind::Rule
                };
                debug!(%language, rule = rule.id, ?kind, "rule matched");
                return Response {
                    text,
                    language,
                    rule: rule.id,
                    kind,
                };
            }
        }

        Response {
            text: bank.phrasebook().fallback.to_string(),
            language,
            rule: "fallback",
            kind: ResponseKind::CatchAll,
        }
    }

    /// Fixed reply to an explicit switch into `language`.
    pub fn acknowledge(&self, language: Language) -> Response {
        Response {
            text: self.bank(language).phrasebook().acknowledgement.to_string(),
            language,
            rule: "language_command",
            kind: ResponseKind::Acknowledgement,
        }
    }

    /// Exit phrase from either language's list.
    pub fn exit_phrase(&self, utterance: &Utterance) -> Option<&'static str> {
        self.en
            .exit_phrase(utterance)
            .or_else(|| self.sv.exit_phrase(utterance))
    }
}

/// Round-robin over the rule's templates starting at the session cursor. Templates with
/// a capture slot are skipped when there is nothing to put in it.
fn fill(rule: &Rule, reflected: &str, language: Language, usage: &mut RuleUsage) -> Option<String> {
    let count = rule.templates.len();
    let cursor = usage.cursor(language, rule.id);

    (0..count).find_map(|offset| {
        let template = rule.templates[(cursor + offset) % count];
        let needs_capture = template.contains(CAPTURE_SLOT);
        if needs_capture && reflected.is_empty() {
            return None;
        }
        usage.record(language, rule.id, (cursor + offset + 1) % count);
        Some(format_sentence(&template.replace(CAPTURE_SLOT, reflected)))
    })
}
