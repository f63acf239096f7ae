use anyhow::{Context, Result};
use dirs::home_dir;
use std::{fs, path::Path};

use super::Config;
use super::builder::ConfigBuilder;
use super::environment::apply_env_overrides;
use super::types::{FileConfig, LlmProvider, PersistedConfig};
use super::validation::validate;

impl Config {
    pub fn config_path() -> Result<std::path::PathBuf> {
        let mut path = home_dir().context("Could not determine home directory")?;
        path.push(".articlegen/config");
        Ok(path)
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub fn load() -> Result<Self> {
        let config = Self::load_unvalidated()?;
        validate(&config)?;
        Ok(config)
    }

    /// Loads file and environment layers without requiring an API key, for the setup and
    /// config commands that exist to fill one in.
    pub fn load_unvalidated() -> Result<Self> {
        let path = Self::config_path()?;
        let mut builder = ConfigBuilder::new();

        if path.exists() {
            builder = Self::apply_file(builder, &path)?;
        }

        builder = apply_env_overrides(builder)?;
        builder.build()
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Unable to create config directory {}", parent.display())
            })?;
        }

        let payload = PersistedConfig::from(self);
        let json = serde_json::to_string_pretty(&payload)
            .context("Failed to serialize configuration to JSON")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validate(self)
    }

    fn apply_file(builder: ConfigBuilder, path: &Path) -> Result<ConfigBuilder> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed reading config at {}", path.display()))?;

        if contents.trim().is_empty() {
            return Ok(builder);
        }

        let raw: FileConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed parsing JSON config at {}", path.display()))?;

        raw.apply(builder)
    }
}

impl FileConfig {
    pub fn apply(self, mut builder: ConfigBuilder) -> Result<ConfigBuilder> {
        if let Some(llm_file) = self.llm {
            let provider = llm_file
                .provider
                .as_deref()
                .map(str::parse::<LlmProvider>)
                .transpose()
                .context("Invalid provider in config file")?;

            builder = builder.with_llm(|llm| {
                if let Some(parsed) = provider {
                    if llm.provider != parsed {
                        llm.provider = parsed;
                        llm.base_url = parsed.default_base_url().to_string();
                    }
                }
                if let Some(api_key) = llm_file.api_key {
                    llm.api_key = api_key;
                }
                if let Some(timeout) = llm_file.timeout_secs {
                    llm.timeout_secs = timeout;
                }
                if let Some(base_url) = llm_file.base_url {
                    llm.base_url = base_url;
                }
                if let Some(user_agent) = llm_file.user_agent {
                    llm.user_agent = user_agent;
                }
            });
        }

        if let Some(models_file) = self.models {
            builder = builder.with_models(|models| {
                if let Some(writer) = models_file.writer {
                    models.writer = writer;
                }
            });
        }

        if let Some(presets_file) = self.presets {
            builder = builder.with_presets(|presets| {
                if let Some(points) = presets_file.points {
                    presets.points = points;
                }
                if let Some(prose) = presets_file.prose {
                    presets.prose = prose;
                }
            });
        }

        if let Some(article_file) = self.article {
            builder = builder.with_article(|article| {
                if let Some(sections) = article_file.sections {
                    article.sections = sections;
                }
                if let Some(strategy) = article_file.strategy {
                    article.strategy = strategy;
                }
                if let Some(output_dir) = article_file.output_dir {
                    article.output_dir = output_dir;
                }
            });
        }

        Ok(builder)
    }
}
