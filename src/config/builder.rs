use anyhow::Result;

use super::types::{ArticleSettings, Config, LlmSettings, ModelSettings, PresetSettings};

#[derive(Debug)]
pub struct ConfigBuilder {
    pub(super) llm: LlmSettings,
    pub(super) models: ModelSettings,
    pub(super) presets: PresetSettings,
    pub(super) article: ArticleSettings,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            llm: LlmSettings::default(),
            models: ModelSettings::default(),
            presets: PresetSettings::default(),
            article: ArticleSettings::default(),
        }
    }

    pub fn with_llm<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut LlmSettings),
    {
        update(&mut self.llm);
        self
    }

    pub fn with_models<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut ModelSettings),
    {
        update(&mut self.models);
        self
    }

    pub fn with_presets<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut PresetSettings),
    {
        update(&mut self.presets);
        self
    }

    pub fn with_article<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut ArticleSettings),
    {
        update(&mut self.article);
        self
    }

    pub fn build(self) -> Result<Config> {
        Ok(Config {
            llm: self.llm,
            models: self.models,
            presets: self.presets,
            article: self.article,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
