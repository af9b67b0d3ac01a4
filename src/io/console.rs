use std::collections::VecDeque;
use std::path::Path;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tracing::debug;

use super::{Capture, CollaboratorError, SpeechInput, SpeechOutput};
use crate::types::Language;

/// Bounded queue between the reader task and the chat loop.
const LINE_QUEUE_DEPTH: usize = 8;

/// Typed input, one utterance per line.
///
/// A reader task owns the underlying stream and feeds complete lines into a bounded
/// channel, so the loop only ever holds one utterance at a time.
pub struct LineInput {
    rx: mpsc::Receiver<Result<String, std::io::Error>>,
}

impl LineInput {
    /// Read lines from the process's stdin.
    pub fn stdin() -> Self {
        Self::from_reader(tokio::io::stdin())
    }

    /// Read lines from any async reader.
    pub fn from_reader<R>(reader: R) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(LINE_QUEUE_DEPTH);

        tokio::spawn(async move {
            let mut lines = BufReader::new(reader).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        if tx.send(Ok(line)).await.is_err() {
                            break;
                        }
                    }
                    Ok(None) => break,
                    Err(e) => {
                        let _ = tx.send(Err(e)).await;
                        break;
                    }
                }
            }
            debug!("line reader finished");
        });

        Self { rx }
    }
}

#[async_trait]
impl SpeechInput for LineInput {
    async fn capture(&mut self, _language: Language) -> Result<Capture, CollaboratorError> {
        match self.rx.recv().await {
            Some(Ok(line)) if line.trim().is_empty() => Ok(Capture::NoInput),
            Some(Ok(line)) => Ok(Capture::Text(line.trim().to_string())),
            Some(Err(e)) => Err(CollaboratorError::Io(e)),
            None => Ok(Capture::Closed),
        }
    }
}

/// Replays a fixed list of utterances, then reports the input as closed.
pub struct ScriptInput {
    lines: VecDeque<String>,
    echo: bool,
}

impl ScriptInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            echo: false,
        }
    }

    /// Load a script file. Lines starting with `#` are comments; blank lines are kept
    /// and replay as "no input".
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read script {}: {e}", path.display()))?;
        Ok(Self::new(
            content
                .lines()
                .filter(|l| !l.trim_start().starts_with('#'))
                .map(str::to_string),
        ))
    }

    /// Print each replayed line as if it had been typed.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

#[async_trait]
impl SpeechInput for ScriptInput {
    async fn capture(&mut self, _language: Language) -> Result<Capture, CollaboratorError> {
        let Some(line) = self.lines.pop_front() else {
            return Ok(Capture::Closed);
        };
        if self.echo {
            println!("> {line}");
        }
        if line.trim().is_empty() {
            Ok(Capture::NoInput)
        } else {
            Ok(Capture::Text(line.trim().to_string()))
        }
    }
}

/// Prints replies to stdout as `<name>: <text>`.
pub struct ConsoleOutput {
    name: String,
}

impl ConsoleOutput {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl SpeechOutput for ConsoleOutput {
    async fn speak(&self, text: &str, _language: Language) -> Result<(), CollaboratorError> {
        println!("{}: {text}", self.name);
        Ok(())
    }
}
