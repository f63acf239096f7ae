use anyhow::anyhow;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_CEREBRAS_BASE_URL, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENROUTER_BASE_URL,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmSettings,
    pub models: ModelSettings,
    pub presets: PresetSettings,
    pub article: ArticleSettings,
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    pub api_key: String,
    pub timeout_secs: u64,
    pub base_url: String,
    pub user_agent: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    OpenRouter,
    Cerebras,
    OpenAi,
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmProvider::OpenRouter => write!(f, "openrouter"),
            LlmProvider::Cerebras => write!(f, "cerebras"),
            LlmProvider::OpenAi => write!(f, "openai"),
        }
    }
}

impl std::str::FromStr for LlmProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openrouter" => Ok(LlmProvider::OpenRouter),
            "cerebras" => Ok(LlmProvider::Cerebras),
            "openai" => Ok(LlmProvider::OpenAi),
            other => Err(anyhow!("Unknown LLM provider '{other}'")),
        }
    }
}

impl LlmProvider {
    pub const ALL: [LlmProvider; 3] = [
        LlmProvider::OpenRouter,
        LlmProvider::Cerebras,
        LlmProvider::OpenAi,
    ];

    pub fn default_base_url(self) -> &'static str {
        match self {
            LlmProvider::OpenRouter => DEFAULT_OPENROUTER_BASE_URL,
            LlmProvider::Cerebras => DEFAULT_CEREBRAS_BASE_URL,
            LlmProvider::OpenAi => DEFAULT_OPENAI_BASE_URL,
        }
    }

    pub fn api_key_env_var(self) -> &'static str {
        match self {
            LlmProvider::OpenRouter => "OPENROUTER_API_KEY",
            LlmProvider::Cerebras => "CEREBRAS_API_KEY",
            LlmProvider::OpenAi => "OPENAI_API_KEY",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            LlmProvider::OpenRouter => "OpenRouter",
            LlmProvider::Cerebras => "Cerebras",
            LlmProvider::OpenAi => "OpenAI",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModelSettings {
    pub writer: String,
}

/// Word budget and sampling temperature for one class of generation call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationPreset {
    pub max_words: u32,
    pub temperature: f32,
}

impl GenerationPreset {
    pub const fn new(max_words: u32, temperature: f32) -> Self {
        Self {
            max_words,
            temperature,
        }
    }
}

/// `points` drives list-shaped responses (outline, talking points); `prose` drives paragraphs
/// and full articles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetSettings {
    pub points: GenerationPreset,
    pub prose: GenerationPreset,
}

/// How the final article text is produced once the talking points are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssemblyStrategy {
    /// One paragraph per talking point plus an introduction and a conclusion.
    Stepwise,
    /// A single call that writes the whole article.
    SingleCall,
}

impl fmt::Display for AssemblyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssemblyStrategy::Stepwise => write!(f, "stepwise"),
            AssemblyStrategy::SingleCall => write!(f, "single-call"),
        }
    }
}

impl std::str::FromStr for AssemblyStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stepwise" | "paragraphs" => Ok(AssemblyStrategy::Stepwise),
            "single-call" | "single" | "article" => Ok(AssemblyStrategy::SingleCall),
            other => Err(anyhow!("Unknown assembly strategy '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleSettings {
    pub sections: u32,
    pub strategy: AssemblyStrategy,
    pub output_dir: PathBuf,
}

// File configuration types
#[derive(Debug, Default, Deserialize)]
pub(super) struct FileConfig {
    #[serde(default)]
    pub llm: Option<FileLlmSettings>,
    #[serde(default)]
    pub models: Option<FileModelSettings>,
    #[serde(default)]
    pub presets: Option<FilePresetSettings>,
    #[serde(default)]
    pub article: Option<FileArticleSettings>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FileLlmSettings {
    pub provider: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FileModelSettings {
    pub writer: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FilePresetSettings {
    pub points: Option<GenerationPreset>,
    pub prose: Option<GenerationPreset>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FileArticleSettings {
    pub sections: Option<u32>,
    pub strategy: Option<AssemblyStrategy>,
    pub output_dir: Option<PathBuf>,
}

// Serialization helpers
#[derive(Serialize)]
pub(super) struct PersistedConfig<'a> {
    pub llm: PersistedLlm<'a>,
    pub models: PersistedModels<'a>,
    pub presets: PersistedPresets,
    pub article: PersistedArticle<'a>,
}

#[derive(Serialize)]
pub(super) struct PersistedLlm<'a> {
    pub provider: LlmProvider,
    pub api_key: &'a str,
    pub timeout_secs: u64,
    pub base_url: &'a str,
    pub user_agent: &'a str,
}

#[derive(Serialize)]
pub(super) struct PersistedModels<'a> {
    pub writer: &'a str,
}

#[derive(Serialize)]
pub(super) struct PersistedPresets {
    pub points: GenerationPreset,
    pub prose: GenerationPreset,
}

#[derive(Serialize)]
pub(super) struct PersistedArticle<'a> {
    pub sections: u32,
    pub strategy: AssemblyStrategy,
    pub output_dir: &'a std::path::Path,
}

impl<'a> From<&'a Config> for PersistedConfig<'a> {
    fn from(config: &'a Config) -> Self {
        PersistedConfig {
            llm: PersistedLlm {
                provider: config.llm.provider,
                api_key: &config.llm.api_key,
                timeout_secs: config.llm.timeout_secs,
                base_url: &config.llm.base_url,
                user_agent: &config.llm.user_agent,
            },
            models: PersistedModels {
                writer: &config.models.writer,
            },
            presets: PersistedPresets {
                points: config.presets.points,
                prose: config.presets.prose,
            },
            article: PersistedArticle {
                sections: config.article.sections,
                strategy: config.article.strategy,
                output_dir: &config.article.output_dir,
            },
        }
    }
}
