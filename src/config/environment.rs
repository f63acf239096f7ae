use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::PathBuf;

use super::builder::ConfigBuilder;
use super::types::{AssemblyStrategy, LlmProvider};

pub fn apply_env_overrides(mut builder: ConfigBuilder) -> Result<ConfigBuilder> {
    if let Some(provider_raw) = env_string("ARTICLEGEN_PROVIDER")? {
        let provider = provider_raw
            .parse::<LlmProvider>()
            .with_context(|| format!("Failed to parse ARTICLEGEN_PROVIDER value '{provider_raw}'"))?;
        builder = builder.with_llm(|llm| {
            if llm.provider != provider {
                llm.provider = provider;
                llm.base_url = provider.default_base_url().to_string();
            }
        });
    }

    if let Some(base_url) = env_string("ARTICLEGEN_BASE_URL")? {
        builder = builder.with_llm(|llm| llm.base_url = base_url);
    }

    for provider in LlmProvider::ALL {
        if let Some(api_key) = env_string(provider.api_key_env_var())? {
            builder = builder.with_llm(|llm| {
                if llm.provider == provider {
                    llm.api_key = api_key;
                }
            });
        }
    }

    if let Some(timeout) = env_u64("ARTICLEGEN_TIMEOUT_SECS")? {
        builder = builder.with_llm(|llm| llm.timeout_secs = timeout);
    }

    if let Some(writer) = env_string("ARTICLEGEN_MODEL")? {
        builder = builder.with_models(|models| models.writer = writer);
    }

    if let Some(strategy_raw) = env_string("ARTICLEGEN_STRATEGY")? {
        let strategy = strategy_raw
            .parse::<AssemblyStrategy>()
            .with_context(|| format!("Failed to parse ARTICLEGEN_STRATEGY value '{strategy_raw}'"))?;
        builder = builder.with_article(|article| article.strategy = strategy);
    }

    if let Some(sections) = env_u32("ARTICLEGEN_SECTIONS")? {
        builder = builder.with_article(|article| article.sections = sections);
    }

    if let Some(output_dir) = env_string("ARTICLEGEN_OUTPUT_DIR")? {
        builder = builder.with_article(|article| article.output_dir = PathBuf::from(output_dir));
    }

    Ok(builder)
}

pub fn env_string(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(anyhow!("{key} contains invalid UTF-8")),
    }
}

pub fn env_u64(key: &str) -> Result<Option<u64>> {
    if let Some(value) = env_string(key)? {
        let parsed = value
            .parse::<u64>()
            .with_context(|| format!("Failed to parse {key} as u64"))?;
        Ok(Some(parsed))
    } else {
        Ok(None)
    }
}

pub fn env_u32(key: &str) -> Result<Option<u32>> {
    if let Some(value) = env_string(key)? {
        let parsed = value
            .parse::<u32>()
            .with_context(|| format!("Failed to parse {key} as u32"))?;
        Ok(Some(parsed))
    } else {
        Ok(None)
    }
}
