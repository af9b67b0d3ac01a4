use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use reflekt::config::{self, ReflektConfig};
use reflekt::io::{
    BasicNormalizer, CommandSpeaker, ConsoleOutput, LineInput, ScriptInput, SpeechInput,
    SpeechOutput,
};
use reflekt::rules::PatternBank;
use reflekt::session::ConversationSession;
use reflekt::types::Language;

#[derive(Parser)]
#[command(name = "reflekt")]
#[command(about = "A bilingual English/Swedish reflective dialogue engine")]
#[command(version)]
struct Cli {
    /// Config file (overrides REFLEKT_CONFIG and ~/.reflekt/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive conversation
    Chat {
        /// Starting language (en or sv)
        #[arg(short, long, env = "REFLEKT_LANGUAGE")]
        language: Option<Language>,

        /// Replay utterances from a file instead of reading stdin
        #[arg(long)]
        script: Option<PathBuf>,

        /// Speak replies with the configured TTS command
        #[arg(long)]
        speak: bool,
    },

    /// Answer a single utterance on a fresh session
    Reply {
        /// The utterance
        text: String,

        /// Active language before the utterance (en or sv)
        #[arg(short, long)]
        language: Option<Language>,

        /// Print the full turn outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// List rules in priority order
    Rules {
        #[arg(short, long, default_value = "en")]
        language: Language,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };

    match cli.command {
        Commands::Chat {
            language,
            script,
            speak,
        } => {
            if let Some(language) = language {
                config.conversation.default_language = language;
            }
            if speak {
                config.speech.enabled = true;
                config::validate(&config)?;
            }
            chat(config, script).await
        }
        Commands::Reply {
            text,
            language,
            json,
        } => {
            if let Some(language) = language {
                config.conversation.default_language = language;
            }
            let normalizer = normalizer(&config)?;
            let mut conversation = ConversationSession::new(&config.conversation);
            let utterance = reflekt::chat::utterance(&conversation, &normalizer, text);
            let outcome = conversation.handle(&utterance);

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else if let Some(reply) = outcome.text() {
                println!("{reply}");
            }
            Ok(())
        }
        Commands::Rules { language } => {
            let bank = PatternBank::builtin(language);
            for (i, rule) in bank.rules().iter().enumerate() {
                let triggers: Vec<String> = rule.triggers.iter().map(|t| t.to_string()).collect();
                println!(
                    "{:>3}  {:<14} {:<48} {} templates",
                    i + 1,
                    rule.id,
                    triggers.join(" | "),
                    rule.templates.len()
                );
            }
            Ok(())
        }
    }
}

async fn chat(config: ReflektConfig, script: Option<PathBuf>) -> anyhow::Result<()> {
    let normalizer = normalizer(&config)?;
    let mut conversation = ConversationSession::new(&config.conversation);

    let mut input: Box<dyn SpeechInput> = match script {
        Some(path) => Box::new(ScriptInput::from_file(&path)?.with_echo(true)),
        None => Box::new(LineInput::stdin()),
    };
    let output: Box<dyn SpeechOutput> = if config.speech.enabled {
        Box::new(
            CommandSpeaker::new(config.speech.clone())
                .with_echo(config.conversation.bot_name.clone()),
        )
    } else {
        Box::new(ConsoleOutput::new(config.conversation.bot_name.clone()))
    };

    reflekt::chat::run(
        &mut conversation,
        input.as_mut(),
        output.as_ref(),
        &normalizer,
    )
    .await?;
    Ok(())
}

fn normalizer(config: &ReflektConfig) -> anyhow::Result<BasicNormalizer> {
    let corrections = config.normalizer.corrections_by_language()?;
    Ok(BasicNormalizer::with_corrections(corrections))
}
