pub mod console;
pub mod normalize;
pub mod speech;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::Language;

pub use console::{ConsoleOutput, LineInput, ScriptInput};
pub use normalize::BasicNormalizer;
pub use speech::CommandSpeaker;

/// Failures raised by I/O collaborators. The conversation engine never sees these;
/// the chat loop logs them and degrades (re-prompt on capture, skip on speech).
#[derive(Error, Debug)]
pub enum CollaboratorError {
    #[error("capture failed: {0}")]
    Capture(String),

    #[error("speech failed: {0}")]
    Speech(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of asking an input collaborator for the next utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capture {
    Text(String),
    /// Nothing usable was captured (empty line, cancelled recording).
    NoInput,
    /// The input source is exhausted; the chat loop ends.
    Closed,
}

/// Source of user utterances (typed lines, recorded speech, scripted input).
#[async_trait]
pub trait SpeechInput: Send {
    /// Wait for the next utterance. `language` is a hint for recognizers.
    async fn capture(&mut self, language: Language) -> Result<Capture, CollaboratorError>;
}

/// Sink for bot replies.
#[async_trait]
pub trait SpeechOutput: Send + Sync {
    async fn speak(&self, text: &str, language: Language) -> Result<(), CollaboratorError>;
}

/// Pre-processing applied to raw input before detection and matching.
///
/// Implementations must not fail; on internal errors they fall back to the raw text.
pub trait TextNormalizer: Send + Sync {
    fn normalize(&self, raw: &str, language: Language) -> String;
}
