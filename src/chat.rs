use tracing::{debug, info, warn};

use crate::io::{Capture, SpeechInput, SpeechOutput, TextNormalizer};
use crate::session::{ConversationSession, SessionEvent};
use crate::types::Utterance;

/// Totals reported when the loop ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChatSummary {
    pub turns: usize,
    pub sessions_completed: u64,
    pub missed_inputs: usize,
}

/// Run the conversation until the input closes or CTRL-C.
///
/// Collaborators are only touched here: capture, normalize, one engine turn, speak.
/// Capture and speech failures are logged and the loop carries on.
pub async fn run(
    conversation: &mut ConversationSession,
    input: &mut dyn SpeechInput,
    output: &dyn SpeechOutput,
    normalizer: &dyn TextNormalizer,
) -> anyhow::Result<ChatSummary> {
    let mut summary = ChatSummary::default();
    print_banner(conversation);

    loop {
        let language = conversation.language();
        let captured = tokio::select! {
            captured = input.capture(language) => captured,
            _ = tokio::signal::ctrl_c() => {
                info!("CTRL-C received; ending conversation");
                break;
            }
        };

        let raw = match captured {
            Ok(Capture::Text(raw)) => raw,
            Ok(Capture::NoInput) => {
                summary.missed_inputs += 1;
                continue;
            }
            Ok(Capture::Closed) => {
                debug!("input closed");
                break;
            }
            Err(e) => {
                warn!(error = %e, "capture failed");
                println!("(didn't catch that, try again)");
                summary.missed_inputs += 1;
                continue;
            }
        };

        let turn = utterance(conversation, normalizer, raw);
        let outcome = conversation.handle(&turn);

        let Some(response) = &outcome.response else {
            println!("(didn't catch that, try again)");
            summary.missed_inputs += 1;
            continue;
        };
        summary.turns += 1;

        for event in &outcome.events {
            if let SessionEvent::LanguageChanged { from, to } = event {
                debug!(%from, %to, "language switch notified");
            }
        }

        if let Err(e) = output.speak(&response.text, response.language).await {
            warn!(error = %e, "speech output failed");
        }

        if outcome.ends_session() {
            summary.sessions_completed += 1;
            conversation.begin_next();
            print_banner(conversation);
        }
    }

    info!(
        turns = summary.turns,
        sessions_completed = summary.sessions_completed,
        "conversation finished"
    );
    Ok(summary)
}

/// Normalize a captured line for the turn. If the text moves the conversation to the
/// other language, that language's corrections are used instead of the current ones.
pub fn utterance(
    conversation: &ConversationSession,
    normalizer: &dyn TextNormalizer,
    raw: String,
) -> Utterance {
    let current = conversation.language();
    let normalized = normalizer.normalize(&raw, current);
    let target = conversation.resolve_language(&normalized);
    if target == current {
        return Utterance::new(raw, normalized);
    }
    let normalized = normalizer.normalize(&raw, target);
    Utterance::new(raw, normalized)
}

fn print_banner(conversation: &ConversationSession) {
    println!("--- Session {} ---", conversation.ordinal());
    println!("{}", conversation.greeting());
}
