use anyhow::{Context, Result, bail};

use crate::config::{Config, LlmProvider};

use super::args::ConfigArgs;
use super::setup::provider_summary;
use super::util::{mask_api_key, resolve_strategy};

pub(crate) fn handle_config(args: &ConfigArgs, config: &mut Config) -> Result<()> {
    if args.provider.as_deref().is_some_and(|p| p.eq_ignore_ascii_case("list")) {
        println!("🌐 Available providers:");
        for line in provider_summary(Some(config.llm.provider)) {
            println!("{line}");
        }
        return Ok(());
    }

    let mut changed = false;

    if let Some(ref provider_raw) = args.provider {
        let provider = provider_raw
            .parse::<LlmProvider>()
            .context("Use 'articlegen config --provider list' to see supported providers")?;
        if config.llm.provider != provider {
            config.llm.provider = provider;
            config.llm.base_url = provider.default_base_url().to_string();
        }
        changed = true;
    }

    if let Some(ref api_key) = args.api_key {
        config.llm.api_key = api_key.clone();
        changed = true;
    }

    if let Some(timeout) = args.timeout {
        if timeout == 0 {
            bail!("Timeout must be a positive number of seconds");
        }
        config.llm.timeout_secs = timeout;
        changed = true;
    }

    if let Some(ref model) = args.model {
        config.models.writer = model.clone();
        changed = true;
    }

    if let Some(ref strategy) = args.strategy {
        config.article.strategy = resolve_strategy(Some(strategy), config.article.strategy)?;
        changed = true;
    }

    if let Some(sections) = args.sections {
        if sections == 0 {
            bail!("Section count must be at least 1");
        }
        config.article.sections = sections;
        changed = true;
    }

    if let Some(ref output_dir) = args.output_dir {
        config.article.output_dir = output_dir.clone();
        changed = true;
    }

    if changed {
        config.save()?;
        println!(
            "✅ Configuration saved to {}",
            Config::config_path()?.display()
        );
    } else if !args.show {
        println!("ℹ️  Nothing to change. Use --show to print the current configuration.");
        return Ok(());
    }

    print_config(config);
    Ok(())
}

fn print_config(config: &Config) {
    println!("📋 Current configuration:");
    println!(
        "   Provider: {} ({})",
        config.llm.provider,
        config.llm.provider.display_name()
    );
    println!("   API Key: {}", mask_api_key(&config.llm.api_key));
    println!("   Base URL: {}", config.llm.base_url);
    println!("   Timeout: {}s", config.llm.timeout_secs);
    println!("   Writer Model: {}", config.models.writer);
    println!(
        "   Points preset: {} words @ {}",
        config.presets.points.max_words, config.presets.points.temperature
    );
    println!(
        "   Prose preset: {} words @ {}",
        config.presets.prose.max_words, config.presets.prose.temperature
    );
    println!("   Sections: {}", config.article.sections);
    println!("   Strategy: {}", config.article.strategy);
    println!("   Output dir: {}", config.article.output_dir.display());

    if config.llm.api_key.trim().is_empty() {
        println!(
            "⚠️  {} API key is not configured. Set {} or run 'articlegen --setup'.",
            config.llm.provider.display_name(),
            config.llm.provider.api_key_env_var()
        );
    }
}
