use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use super::{CollaboratorError, ConsoleOutput, SpeechOutput};
use crate::config::SpeechConfig;
use crate::types::Language;

/// Speaks replies by running an external TTS program (espeak-ng, say, piper, ...).
///
/// Arguments come from config and may contain the placeholders `{voice}`, `{rate}`,
/// `{lang}` and `{text}`. The voice is chosen per language, so English and Swedish replies
/// can use different installed voices.
pub struct CommandSpeaker {
    config: SpeechConfig,
    echo: Option<ConsoleOutput>,
}

impl CommandSpeaker {
    pub fn new(config: SpeechConfig) -> Self {
        Self { config, echo: None }
    }

    /// Also print each reply to stdout before speaking it.
    pub fn with_echo(mut self, name: impl Into<String>) -> Self {
        self.echo = Some(ConsoleOutput::new(name));
        self
    }

    /// Expand the configured argument list for one utterance.
    pub fn build_args(&self, text: &str, language: Language) -> Vec<String> {
        let voice = match language {
            Language::En => self.config.voices.en.as_str(),
            Language::Sv => self.config.voices.sv.as_str(),
        };
        let rate = self.config.rate.to_string();

        self.config
            .args
            .iter()
            .map(|arg| {
                arg.replace("{voice}", voice)
                    .replace("{rate}", &rate)
                    .replace("{lang}", language.bcp47())
                    .replace("{text}", text)
            })
            .collect()
    }
}

#[async_trait]
impl SpeechOutput for CommandSpeaker {
    async fn speak(&self, text: &str, language: Language) -> Result<(), CollaboratorError> {
        if let Some(echo) = &self.echo {
            echo.speak(text, language).await?;
        }

        let args = self.build_args(text, language);
        debug!(program = %self.config.command, ?args, "running tts command");

        let status = Command::new(&self.config.command)
            .args(&args)
            .kill_on_drop(true)
            .status()
            .await
            .map_err(|e| {
                CollaboratorError::Speech(format!("failed to run {}: {e}", self.config.command))
            })?;

        if !status.success() {
            warn!(program = %self.config.command, %status, "tts command exited unsuccessfully");
            return Err(CollaboratorError::Speech(format!(
                "{} exited with {status}",
                self.config.command
            )));
        }
        Ok(())
    }
}
