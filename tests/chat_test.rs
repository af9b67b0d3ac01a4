use std::sync::Mutex;

use async_trait::async_trait;
use reflekt::chat::{ChatSummary, run};
use reflekt::config::ConversationConfig;
use reflekt::io::{
    BasicNormalizer, Capture, CollaboratorError, ScriptInput, SpeechInput, SpeechOutput,
};
use reflekt::session::ConversationSession;
use reflekt::types::Language;

#[derive(Default)]
struct Recorder {
    spoken: Mutex<Vec<(String, Language)>>,
}

#[async_trait]
impl SpeechOutput for Recorder {
    async fn speak(&self, text: &str, language: Language) -> Result<(), CollaboratorError> {
        self.spoken.lock().unwrap().push((text.to_string(), language));
        Ok(())
    }
}

struct Mute;

#[async_trait]
impl SpeechOutput for Mute {
    async fn speak(&self, _text: &str, _language: Language) -> Result<(), CollaboratorError> {
        Err(CollaboratorError::Speech("no audio device".into()))
    }
}

/// Fails once, then behaves like a closed input.
struct Flaky {
    failed: bool,
}

#[async_trait]
impl SpeechInput for Flaky {
    async fn capture(&mut self, _language: Language) -> Result<Capture, CollaboratorError> {
        if self.failed {
            return Ok(Capture::Closed);
        }
        self.failed = true;
        Err(CollaboratorError::Capture("microphone unplugged".into()))
    }
}

fn conversation() -> ConversationSession {
    ConversationSession::new(&ConversationConfig::default())
}

#[tokio::test]
async fn scripted_conversation_speaks_in_turn_language() {
    let mut conv = conversation();
    let mut input = ScriptInput::new(["hello", "jag känner mig trött", "/lang en", "quit"]);
    let output = Recorder::default();

    let summary = run(&mut conv, &mut input, &output, &BasicNormalizer::new())
        .await
        .unwrap();

    assert_eq!(
        summary,
        ChatSummary {
            turns: 4,
            sessions_completed: 1,
            missed_inputs: 0,
        }
    );

    let spoken = output.spoken.lock().unwrap();
    let languages: Vec<Language> = spoken.iter().map(|(_, l)| *l).collect();
    assert_eq!(
        languages,
        vec![Language::En, Language::Sv, Language::En, Language::En]
    );
    assert_eq!(spoken[2].0, "Okay, let's speak English.");
    assert_eq!(spoken[3].0, "Goodbye!");
    assert_eq!(conv.ordinal(), 2);
}

#[tokio::test]
async fn blank_lines_count_as_missed_input() {
    let mut conv = conversation();
    let mut input = ScriptInput::new(["", "   ", "?!", "hello"]);
    let output = Recorder::default();

    let summary = run(&mut conv, &mut input, &output, &BasicNormalizer::new())
        .await
        .unwrap();

    assert_eq!(summary.turns, 1);
    assert_eq!(summary.missed_inputs, 3);
    assert_eq!(output.spoken.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn speech_failure_does_not_stop_the_loop() {
    let mut conv = conversation();
    let mut input = ScriptInput::new(["hello", "I need rest"]);

    let summary = run(&mut conv, &mut input, &Mute, &BasicNormalizer::new())
        .await
        .unwrap();

    assert_eq!(summary.turns, 2);
    assert_eq!(conv.session().user_turns(), 2);
}

#[tokio::test]
async fn capture_failure_is_retried() {
    let mut conv = conversation();
    let mut input = Flaky { failed: false };
    let output = Recorder::default();

    let summary = run(&mut conv, &mut input, &output, &BasicNormalizer::new())
        .await
        .unwrap();

    assert_eq!(summary.missed_inputs, 1);
    assert_eq!(summary.turns, 0);
    assert!(output.spoken.lock().unwrap().is_empty());
}

#[tokio::test]
async fn normalizer_corrections_reach_the_engine() {
    let mut conv = conversation();
    let mut input = ScriptInput::new(["cya"]);
    let output = Recorder::default();
    let normalizer = BasicNormalizer::with_corrections(
        [(
            Language::En,
            [("cya".to_string(), "bye".to_string())].into_iter().collect(),
        )]
        .into_iter()
        .collect(),
    );

    let summary = run(&mut conv, &mut input, &output, &normalizer)
        .await
        .unwrap();

    assert_eq!(summary.sessions_completed, 1);
    assert_eq!(output.spoken.lock().unwrap()[0].0, "Goodbye!");
}

#[tokio::test]
async fn switching_turn_uses_target_language_corrections() {
    let mut conv = conversation();
    let mut input = ScriptInput::new(["jag behover vila"]);
    let output = Recorder::default();
    let normalizer = BasicNormalizer::with_corrections(
        [(
            Language::Sv,
            [("behover".to_string(), "behöver".to_string())]
                .into_iter()
                .collect(),
        )]
        .into_iter()
        .collect(),
    );

    run(&mut conv, &mut input, &output, &normalizer)
        .await
        .unwrap();

    let spoken = output.spoken.lock().unwrap();
    assert_eq!(spoken[0], ("Varför behöver du vila?".to_string(), Language::Sv));
    assert_eq!(conv.session().usage.uses(Language::Sv, "need"), 1);
}

#[test]
fn utterance_keeps_current_corrections_without_switch() {
    let conv = conversation();
    let normalizer = BasicNormalizer::with_corrections(
        [(
            Language::En,
            [("dont".to_string(), "don't".to_string())].into_iter().collect(),
        )]
        .into_iter()
        .collect(),
    );

    let u = reflekt::chat::utterance(&conv, &normalizer, "I dont know".to_string());
    assert_eq!(u.normalized, "i don't know");
    assert_eq!(u.raw, "I dont know");
}
