use anyhow::{Result, bail};
use std::io::{self, BufRead, Write};

use crate::config::{Config, DEFAULT_TIMEOUT_SECS, LlmProvider};

use super::util::{
    mask_api_key, prompt_string_with_default, prompt_timeout, resolve_strategy,
};

pub(crate) async fn run_setup() -> Result<()> {
    println!("🚀 Welcome to articlegen setup!");
    println!("Let's configure your AI provider.\n");

    let mut config = Config::load_unvalidated()?;

    let provider = {
        let mut input = io::stdin().lock();
        let mut output = io::stdout();
        choose_provider(&mut input, &mut output, config.llm.provider)?
    };
    let keep_existing = config.llm.provider == provider && !config.llm.api_key.is_empty();
    let api_key = prompt_api_key(provider, keep_existing.then_some(config.llm.api_key.as_str()))?;
    let timeout = prompt_timeout(DEFAULT_TIMEOUT_SECS)?;

    if config.llm.provider != provider {
        config.llm.provider = provider;
        config.llm.base_url = provider.default_base_url().to_string();
    }
    config.llm.api_key = api_key;
    config.llm.timeout_secs = timeout;

    let default_model = config.models.writer.clone();
    config.models.writer = prompt_string_with_default("🤖 Enter writer model ID", &default_model)?;

    let default_strategy = config.article.strategy.to_string();
    let strategy = prompt_string_with_default(
        "🧩 Assembly strategy (stepwise or single-call)",
        &default_strategy,
    )?;
    config.article.strategy = resolve_strategy(Some(&strategy), config.article.strategy)?;

    config.validate()?;
    config.save()?;

    println!(
        "\n✅ Configuration saved to {}",
        Config::config_path()?.display()
    );
    println!("📋 Your configuration:");
    println!(
        "   Provider: {} ({})",
        config.llm.provider,
        config.llm.provider.display_name()
    );
    println!("   API Key: {}", mask_api_key(&config.llm.api_key));
    println!("   Base URL: {}", config.llm.base_url);
    println!("   Timeout: {}s", config.llm.timeout_secs);
    println!("   Writer Model: {}", config.models.writer);
    println!("   Strategy: {}", config.article.strategy);
    println!("\n🎉 Setup complete! Try:");
    println!("   articlegen write --title 'A Guide to Testing'\n");

    Ok(())
}

/// One line per provider: config name, display name, endpoint and the env var holding its key.
pub(crate) fn provider_summary(current: Option<LlmProvider>) -> Vec<String> {
    LlmProvider::ALL
        .iter()
        .enumerate()
        .map(|(idx, provider)| {
            let marker = if Some(*provider) == current {
                " (current)"
            } else {
                ""
            };
            format!(
                "  {}. {} ({}){} - {} [key: {}]",
                idx + 1,
                provider,
                provider.display_name(),
                marker,
                provider.default_base_url(),
                provider.api_key_env_var()
            )
        })
        .collect()
}

/// Accepts a list number or a provider name. A blank answer keeps `current`; three invalid
/// answers in a row abort setup.
fn choose_provider<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    current: LlmProvider,
) -> Result<LlmProvider> {
    writeln!(output, "🌐 Available providers:")?;
    for line in provider_summary(Some(current)) {
        writeln!(output, "{line}")?;
    }

    for _ in 0..3 {
        write!(
            output,
            "Select provider (1-{}, default: {}): ",
            LlmProvider::ALL.len(),
            current
        )?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            return Ok(current);
        }
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(current);
        }

        let chosen = match answer.parse::<usize>() {
            Ok(number) => number
                .checked_sub(1)
                .and_then(|idx| LlmProvider::ALL.get(idx).copied()),
            Err(_) => answer.parse::<LlmProvider>().ok(),
        };
        match chosen {
            Some(provider) => return Ok(provider),
            None => writeln!(output, "❌ '{answer}' is not one of the listed providers.")?,
        }
    }

    bail!("No valid provider selected");
}

fn prompt_api_key(provider: LlmProvider, existing: Option<&str>) -> Result<String> {
    let hint = if existing.is_some() {
        " (leave blank to keep current)"
    } else {
        ""
    };

    loop {
        print!("🔑 Enter your {} API key{hint}: ", provider.display_name());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let key = input.trim();

        match (key.is_empty(), existing) {
            (false, _) => return Ok(key.to_string()),
            (true, Some(existing)) => return Ok(existing.to_string()),
            (true, None) => println!(
                "❌ API key cannot be empty. You can also set {} instead.",
                provider.api_key_env_var()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn choose(script: &str, current: LlmProvider) -> Result<LlmProvider> {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        choose_provider(&mut input, &mut output, current)
    }

    #[test]
    fn provider_chosen_by_number_or_name() {
        assert_eq!(choose("2\n", LlmProvider::OpenRouter).unwrap(), LlmProvider::Cerebras);
        assert_eq!(choose("openai\n", LlmProvider::OpenRouter).unwrap(), LlmProvider::OpenAi);
    }

    #[test]
    fn blank_answer_keeps_current_provider() {
        assert_eq!(choose("\n", LlmProvider::Cerebras).unwrap(), LlmProvider::Cerebras);
        assert_eq!(choose("", LlmProvider::OpenAi).unwrap(), LlmProvider::OpenAi);
    }

    #[test]
    fn invalid_answers_are_retried_then_rejected() {
        assert_eq!(choose("0\nmistral\n1\n", LlmProvider::OpenAi).unwrap(), LlmProvider::OpenRouter);
        assert!(choose("9\nx\n4\n", LlmProvider::OpenAi).is_err());
    }

    #[test]
    fn summary_lists_endpoint_and_key_variable() {
        let lines = provider_summary(Some(LlmProvider::Cerebras));
        assert_eq!(lines.len(), LlmProvider::ALL.len());
        assert!(lines[1].contains("(current)"));
        assert!(lines[1].contains("CEREBRAS_API_KEY"));
        assert!(lines[2].contains(LlmProvider::OpenAi.default_base_url()));
    }
}
