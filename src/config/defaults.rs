use std::path::PathBuf;

use super::constants::*;
use super::types::{
    ArticleSettings, AssemblyStrategy, GenerationPreset, LlmProvider, LlmSettings, ModelSettings,
    PresetSettings,
};

pub fn default_user_agent() -> String {
    format!("articlegen/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for LlmSettings {
    fn default() -> Self {
        let provider = LlmProvider::OpenRouter;
        Self {
            provider,
            api_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            base_url: provider.default_base_url().to_string(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            writer: DEFAULT_WRITER_MODEL.to_string(),
        }
    }
}

impl Default for PresetSettings {
    fn default() -> Self {
        Self {
            points: GenerationPreset::new(POINTS_MAX_WORDS, POINTS_TEMPERATURE),
            prose: GenerationPreset::new(PROSE_MAX_WORDS, PROSE_TEMPERATURE),
        }
    }
}

impl Default for ArticleSettings {
    fn default() -> Self {
        Self {
            sections: DEFAULT_SECTIONS,
            strategy: AssemblyStrategy::Stepwise,
            output_dir: PathBuf::from("."),
        }
    }
}
