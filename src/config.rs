use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::types::Language;

/// Top-level configuration loaded from TOML.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ReflektConfig {
    pub conversation: ConversationConfig,
    pub speech: SpeechConfig,
    pub normalizer: NormalizerConfig,
}

/// Language to use when a new session starts after an exit phrase.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestartLanguage {
    /// Go back to `default_language`.
    #[default]
    Default,
    /// Keep the language that was active when the previous session ended.
    Last,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversationConfig {
    #[serde(default)]
    pub default_language: Language,
    #[serde(default)]
    pub restart_language: RestartLanguage,
    #[serde(default = "default_bot_name")]
    pub bot_name: String,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            restart_language: RestartLanguage::default(),
            bot_name: default_bot_name(),
        }
    }
}

fn default_bot_name() -> String {
    "ELIZA".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_speech_command")]
    pub command: String,
    #[serde(default = "default_speech_args")]
    pub args: Vec<String>,
    #[serde(default)]
    pub voices: VoiceConfig,
    #[serde(default = "default_speech_rate")]
    pub rate: u32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            command: default_speech_command(),
            args: default_speech_args(),
            voices: VoiceConfig::default(),
            rate: default_speech_rate(),
        }
    }
}

fn default_speech_command() -> String {
    "espeak-ng".into()
}
fn default_speech_args() -> Vec<String> {
    ["-v", "{voice}", "-s", "{rate}", "{text}"]
        .into_iter()
        .map(String::from)
        .collect()
}
fn default_speech_rate() -> u32 {
    175
}

/// Voice names handed to the TTS program, one per language.
#[derive(Debug, Clone, Deserialize)]
pub struct VoiceConfig {
    #[serde(default = "default_voice_en")]
    pub en: String,
    #[serde(default = "default_voice_sv")]
    pub sv: String,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            en: default_voice_en(),
            sv: default_voice_sv(),
        }
    }
}

fn default_voice_en() -> String {
    "en-us".into()
}
fn default_voice_sv() -> String {
    "sv".into()
}

/// Whole-token corrections applied after normalization, keyed by language code.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct NormalizerConfig {
    #[serde(default)]
    pub corrections: HashMap<String, HashMap<String, String>>,
}

impl NormalizerConfig {
    /// Corrections keyed by parsed language. Keys and replacements are lower-cased to
    /// match normalized text.
    pub fn corrections_by_language(
        &self,
    ) -> anyhow::Result<HashMap<Language, HashMap<String, String>>> {
        let mut out: HashMap<Language, HashMap<String, String>> = HashMap::new();
        for (code, table) in &self.corrections {
            let language: Language = code
                .parse()
                .map_err(|e| anyhow::anyhow!("normalizer.corrections.{code}: {e}"))?;
            let entry = out.entry(language).or_default();
            for (from, to) in table {
                entry.insert(from.to_lowercase(), to.to_lowercase());
            }
        }
        Ok(out)
    }
}

/// Load configuration from file or use defaults.
///
/// Search order:
/// 1. `REFLEKT_CONFIG` env var
/// 2. `~/.reflekt/config.toml`
/// 3. Zero-config defaults (no file needed)
pub fn load() -> anyhow::Result<ReflektConfig> {
    let path = config_path();

    if path.exists() {
        load_from_path(&path)
    } else {
        info!("no config file found, using zero-config defaults");
        Ok(ReflektConfig::default())
    }
}

/// Load and validate a specific config file.
pub fn load_from_path(path: &Path) -> anyhow::Result<ReflektConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let config: ReflektConfig = toml::from_str(&content)
        .map_err(|e| anyhow::anyhow!("invalid config at {}: {e}", path.display()))?;

    validate(&config).map_err(|e| anyhow::anyhow!("invalid config at {}: {e}", path.display()))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("REFLEKT_CONFIG") {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".reflekt").join("config.toml")
}

/// Validate the config and return clear error messages.
pub fn validate(config: &ReflektConfig) -> anyhow::Result<()> {
    if config.conversation.bot_name.trim().is_empty() {
        anyhow::bail!("conversation.bot_name must not be empty");
    }

    if config.speech.enabled {
        if config.speech.command.trim().is_empty() {
            anyhow::bail!("speech.command must be set when speech.enabled = true");
        }
        if !config.speech.args.iter().any(|a| a.contains("{text}")) {
            anyhow::bail!("speech.args must contain a {{text}} placeholder");
        }
        if config.speech.rate == 0 {
            anyhow::bail!("speech.rate must be > 0");
        }
    }

    config.normalizer.corrections_by_language()?;
    for (language, table) in &config.normalizer.corrections {
        for (from, to) in table {
            if from.trim().is_empty() || to.trim().is_empty() {
                anyhow::bail!("normalizer.corrections.{language} has an empty entry");
            }
            if from.split_whitespace().count() != 1 {
                anyhow::bail!(
                    "normalizer.corrections.{language}: '{from}' must be a single word"
                );
            }
        }
    }

    Ok(())
}
