use anyhow::{Result, anyhow, bail};

use super::types::{Config, GenerationPreset};

pub fn validate(config: &Config) -> Result<()> {
    if config.llm.api_key.trim().is_empty() {
        let provider = config.llm.provider;
        let env_var = provider.api_key_env_var();
        return Err(anyhow!(
            "{} API key not found. Set {} or add it to {}",
            provider.display_name(),
            env_var,
            Config::config_path()?.display()
        ));
    }

    if config.article.sections == 0 {
        bail!("Article section count must be at least 1");
    }

    validate_preset("points", &config.presets.points)?;
    validate_preset("prose", &config.presets.prose)?;
    Ok(())
}

fn validate_preset(name: &str, preset: &GenerationPreset) -> Result<()> {
    if preset.max_words == 0 {
        bail!("The {name} preset needs a positive max_words");
    }
    if !(0.0..=2.0).contains(&preset.temperature) {
        bail!(
            "The {name} preset temperature {} is outside 0.0..=2.0",
            preset.temperature
        );
    }
    Ok(())
}
