use reflekt::config::{ConversationConfig, RestartLanguage};
use reflekt::language::DetectionSignal;
use reflekt::rules::ResponseKind;
use reflekt::session::{ConversationSession, SessionEvent, SessionState};
use reflekt::types::{Language, Speaker, Utterance};

fn conversation(language: Language) -> ConversationSession {
    ConversationSession::new(&ConversationConfig {
        default_language: language,
        ..Default::default()
    })
}

fn say(conv: &mut ConversationSession, raw: &str) -> reflekt::session::TurnOutcome {
    conv.handle(&Utterance::from_raw(raw))
}

#[test]
fn new_conversation_starts_first_session() {
    let conv = conversation(Language::Sv);
    assert_eq!(conv.ordinal(), 1);
    assert_eq!(conv.language(), Language::Sv);
    assert_eq!(conv.state(), SessionState::Active(Language::Sv));
    assert!(conv.session().transcript.is_empty());
    assert!(conv.greeting().contains("slut"));
}

#[test]
fn family_statement_gets_family_reply() {
    let mut conv = conversation(Language::En);
    let outcome = say(&mut conv, "I feel sad about my mother");

    let response = outcome.response.unwrap();
    assert_eq!(response.rule, "mother");
    assert_eq!(response.language, Language::En);
    assert!(response.text.contains("your mother"));
    assert_eq!(outcome.signal, DetectionSignal::StrongMarker(Language::En));
    assert!(outcome.events.is_empty());
}

#[test]
fn swedish_input_switches_bank() {
    let mut conv = conversation(Language::En);
    let outcome = say(&mut conv, "jag känner mig trött");

    assert_eq!(outcome.signal, DetectionSignal::StrongMarker(Language::Sv));
    assert_eq!(outcome.language, Language::Sv);
    assert_eq!(conv.language(), Language::Sv);
    assert_eq!(
        outcome.events,
        vec![SessionEvent::LanguageChanged {
            from: Language::En,
            to: Language::Sv,
        }]
    );

    let response = outcome.response.unwrap();
    assert_eq!(response.language, Language::Sv);
    assert_eq!(response.rule, "i_feel_self");
}

#[test]
fn directive_switches_and_acknowledges() {
    let mut conv = conversation(Language::En);
    let outcome = say(&mut conv, "/lang sv");

    assert_eq!(outcome.signal, DetectionSignal::ExplicitCommand(Language::Sv));
    assert_eq!(conv.language(), Language::Sv);
    let response = outcome.response.unwrap();
    assert_eq!(response.kind, ResponseKind::Acknowledgement);
    assert_eq!(response.text, "Okej, nu pratar vi svenska.");
    assert!(conv.session().usage.is_empty());
}

#[test]
fn directive_for_active_language_keeps_session_state() {
    let mut conv = conversation(Language::En);
    say(&mut conv, "I need sleep");
    let outcome = say(&mut conv, "/lang en");

    assert_eq!(outcome.response.unwrap().kind, ResponseKind::Acknowledgement);
    assert!(outcome.events.is_empty());
    assert_eq!(conv.ordinal(), 1);
    assert_eq!(conv.session().usage.uses(Language::En, "need"), 1);
    assert_eq!(conv.session().transcript.len(), 4);
}

#[test]
fn exit_phrase_ends_session_and_next_one_starts() {
    let mut conv = conversation(Language::En);
    say(&mut conv, "hello");
    let outcome = say(&mut conv, "quit");

    assert!(outcome.ends_session());
    assert_eq!(outcome.text(), Some("Goodbye!"));
    assert_eq!(conv.state(), SessionState::Terminated);
    assert!(outcome.events.contains(&SessionEvent::SessionEnded {
        ordinal: 1,
        user_turns: 2,
    }));

    let started = conv.begin_next();
    assert_eq!(
        started,
        SessionEvent::SessionStarted {
            ordinal: 2,
            language: Language::En,
        }
    );
    assert_eq!(conv.state(), SessionState::Active(Language::En));
    assert!(conv.session().transcript.is_empty());
    assert!(conv.session().usage.is_empty());

    let outcome = say(&mut conv, "bye");
    assert_eq!(outcome.text(), Some("Bye!"));
}

#[test]
fn sessions_get_fresh_ids() {
    let mut conv = conversation(Language::En);
    let first = conv.session().id;
    say(&mut conv, "goodbye");
    conv.begin_next();
    assert_ne!(conv.session().id, first);
}

#[test]
fn ambiguous_turn_stays_in_swedish() {
    let mut conv = conversation(Language::Sv);
    let outcome = say(&mut conv, "ok");

    assert_eq!(outcome.signal, DetectionSignal::Ambiguous);
    assert_eq!(outcome.language, Language::Sv);
    let response = outcome.response.unwrap();
    assert_eq!(response.language, Language::Sv);
    assert_eq!(response.kind, ResponseKind::CatchAll);
}

#[test]
fn other_language_exit_phrase_gets_active_language_farewell() {
    let mut conv = conversation(Language::Sv);
    let outcome = say(&mut conv, "bye");

    assert!(outcome.ends_session());
    assert_eq!(outcome.language, Language::Sv);
    assert_eq!(outcome.text(), Some("Hejdå!"));
}

#[test]
fn restart_returns_to_default_language() {
    let mut conv = conversation(Language::En);
    say(&mut conv, "/lang sv");
    say(&mut conv, "slut");
    assert_eq!(conv.state(), SessionState::Terminated);

    conv.begin_next();
    assert_eq!(conv.language(), Language::En);
}

#[test]
fn restart_can_keep_last_language() {
    let mut conv = ConversationSession::new(&ConversationConfig {
        restart_language: RestartLanguage::Last,
        ..Default::default()
    });
    say(&mut conv, "/lang sv");
    say(&mut conv, "slut");

    conv.begin_next();
    assert_eq!(conv.language(), Language::Sv);
    assert_eq!(conv.ordinal(), 2);
}

#[test]
fn transcript_records_both_speakers_with_language() {
    let mut conv = conversation(Language::En);
    say(&mut conv, "hello");
    say(&mut conv, "jag är glad");

    let transcript = &conv.session().transcript;
    assert_eq!(transcript.len(), 4);
    assert_eq!(transcript[0].speaker, Speaker::User);
    assert_eq!(transcript[0].text, "hello");
    assert_eq!(transcript[1].speaker, Speaker::Bot);
    assert_eq!(transcript[1].language, Language::En);
    assert_eq!(transcript[2].language, Language::Sv);
    assert_eq!(transcript[3].language, Language::Sv);
    assert_eq!(conv.session().user_turns(), 2);
}

#[test]
fn whitespace_only_input_changes_nothing() {
    let mut conv = conversation(Language::En);
    let outcome = say(&mut conv, "   ...  ");

    assert!(outcome.response.is_none());
    assert_eq!(outcome.text(), None);
    assert!(!outcome.ends_session());
    assert_eq!(conv.ordinal(), 1);
    assert!(conv.session().transcript.is_empty());
}

#[test]
fn outcome_serializes_to_json() {
    let mut conv = conversation(Language::En);
    let outcome = say(&mut conv, "/lang sv");
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["language"], "sv");
    assert_eq!(json["signal"]["kind"], "explicit_command");
    assert_eq!(json["signal"]["language"], "sv");
    assert_eq!(json["response"]["kind"], "acknowledgement");
    assert_eq!(json["events"][0]["event"], "language_changed");
}
