use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::config::{ConversationConfig, RestartLanguage};
use crate::language::{DetectionSignal, LanguageDetector};
use crate::rules::{Response, ResponseSelector, RuleUsage};
use crate::types::{Language, Speaker, Turn, Utterance};

/// One conversation, from start to an exit phrase.
///
/// Holds everything that changes per turn. Nothing here outlives the session except
/// the ordinal, which the next session continues from.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub ordinal: u64,
    pub language: Language,
    pub transcript: Vec<Turn>,
    pub usage: RuleUsage,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl Session {
    pub fn new(ordinal: u64, language: Language) -> Self {
        Self {
            id: Uuid::new_v4(),
            ordinal,
            language,
            transcript: Vec::new(),
            usage: RuleUsage::new(),
            started_at: chrono::Utc::now(),
        }
    }

    pub fn record(&mut self, speaker: Speaker, language: Language, text: impl Into<String>) {
        self.transcript.push(Turn::new(speaker, language, text));
    }

    /// Number of user turns so far.
    pub fn user_turns(&self) -> usize {
        self.transcript
            .iter()
            .filter(|t| t.speaker == Speaker::User)
            .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "language", rename_all = "snake_case")]
pub enum SessionState {
    Active(Language),
    Terminated,
}

/// Notifications for collaborators. Informational only; nothing in the engine
/// depends on them being consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    LanguageChanged { from: Language, to: Language },
    SessionEnded { ordinal: u64, user_turns: usize },
    SessionStarted { ordinal: u64, language: Language },
}

/// Result of one call to [`ConversationSession::handle`].
#[derive(Debug, Clone, Serialize)]
pub struct TurnOutcome {
    /// `None` when the utterance was empty after normalization.
    pub response: Option<Response>,
    pub signal: DetectionSignal,
    pub language: Language,
    pub events: Vec<SessionEvent>,
}

impl TurnOutcome {
    pub fn text(&self) -> Option<&str> {
        self.response.as_ref().map(|r| r.text.as_str())
    }

    pub fn ends_session(&self) -> bool {
        self.response.as_ref().is_some_and(Response::ends_session)
    }
}

/// Drives detection, selection and bookkeeping for a sequence of sessions.
pub struct ConversationSession {
    detector: LanguageDetector,
    selector: ResponseSelector,
    default_language: Language,
    restart: RestartLanguage,
    session: Session,
    state: SessionState,
}

impl ConversationSession {
    pub fn new(config: &ConversationConfig) -> Self {
        Self::with_selector(config, ResponseSelector::builtin())
    }

    pub fn with_selector(config: &ConversationConfig, selector: ResponseSelector) -> Self {
        let language = config.default_language;
        info!(ordinal = 1, %language, "session started");
        Self {
            detector: LanguageDetector::new(),
            selector,
            default_language: language,
            restart: config.restart_language,
            session: Session::new(1, language),
            state: SessionState::Active(language),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn language(&self) -> Language {
        self.session.language
    }

    pub fn ordinal(&self) -> u64 {
        self.session.ordinal
    }

    pub fn selector(&self) -> &ResponseSelector {
        &self.selector
    }

    /// Greeting shown when a session starts, in the session's language.
    pub fn greeting(&self) -> &'static str {
        self.selector
            .bank(self.session.language)
            .phrasebook()
            .greeting
    }

    /// Language the utterance would leave the session in, without changing anything.
    ///
    /// Lets the caller normalize once more with the target language's corrections before
    /// handing the turn over.
    pub fn resolve_language(&self, normalized: &str) -> Language {
        let current = self.session.language;
        self.detector.resolve(normalized, current).apply(current)
    }

    /// Process one utterance.
    ///
    /// Empty input leaves the session untouched. An exit phrase answers with a farewell
    /// and moves to `Terminated`; the next session starts on [`begin_next`](Self::begin_next)
    /// or implicitly on the next call.
    pub fn handle(&mut self, utterance: &Utterance) -> TurnOutcome {
        let mut events = Vec::new();
        if self.state == SessionState::Terminated {
            events.push(self.begin_next());
        }

        if utterance.is_empty() {
            return TurnOutcome {
                response: None,
                signal: DetectionSignal::Ambiguous,
                language: self.session.language,
                events,
            };
        }

        let current = self.session.language;
        let signal = self.detector.resolve(&utterance.normalized, current);
        let language = signal.apply(current);
        if language != current {
            info!(
                session = %self.session.id,
                from = %current,
                to = %language,
                "language changed"
            );
            events.push(SessionEvent::LanguageChanged {
                from: current,
                to: language,
            });
        }
        self.session.language = language;
        self.state = SessionState::Active(language);
        self.session
            .record(Speaker::User, language, utterance.raw.clone());

        let response = match signal {
            DetectionSignal::ExplicitCommand(target) => self.selector.acknowledge(target),
            _ => self.selector.select(utterance, &mut self.session),
        };
        self.session
            .record(Speaker::Bot, response.language, response.text.clone());

        if response.ends_session() {
            info!(
                session = %self.session.id,
                ordinal = self.session.ordinal,
                user_turns = self.session.user_turns(),
                "session ended"
            );
            events.push(SessionEvent::SessionEnded {
                ordinal: self.session.ordinal,
                user_turns: self.session.user_turns(),
            });
            self.state = SessionState::Terminated;
        }

        TurnOutcome {
            response: Some(response),
            signal,
            language,
            events,
        }
    }

    /// Discard the current session and start the next one.
    pub fn begin_next(&mut self) -> SessionEvent {
        let ordinal = self.session.ordinal + 1;
        let language = match self.restart {
            RestartLanguage::Default => self.default_language,
            RestartLanguage::Last => self.session.language,
        };

        self.session = Session::new(ordinal, language);
        self.state = SessionState::Active(language);
        info!(session = %self.session.id, ordinal, %language, "session started");

        SessionEvent::SessionStarted { ordinal, language }
    }
}
