use anyhow::{Result, bail};
use std::io::{self, Write};
use std::str::FromStr;

use crate::config::AssemblyStrategy;

fn read_trimmed_line() -> Result<String> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub(crate) fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    read_trimmed_line()
}

pub(crate) fn prompt_required(prompt: &str) -> Result<String> {
    for _ in 0..3 {
        let value = prompt_line(prompt)?;
        if !value.is_empty() {
            return Ok(value);
        }
        println!("❌ A value is required.");
    }
    bail!("No value entered for required prompt '{}'", prompt.trim());
}

pub(crate) fn prompt_timeout(default: u64) -> Result<u64> {
    loop {
        print!("⏱️  Enter timeout in seconds (default: {default}): ");
        io::stdout().flush()?;

        let timeout_str = read_trimmed_line()?;
        if timeout_str.is_empty() {
            return Ok(default);
        }

        match timeout_str.parse::<u64>() {
            Ok(timeout) if timeout > 0 => return Ok(timeout),
            Ok(_) => println!("❌ Timeout must be a positive number."),
            Err(_) => println!("❌ Please enter a valid number."),
        }
    }
}

pub(crate) fn prompt_string_with_default(prompt: &str, default: &str) -> Result<String> {
    print!("{prompt} (default: {default}): ");
    io::stdout().flush()?;

    let trimmed = read_trimmed_line()?;
    if trimmed.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(trimmed)
    }
}

pub(crate) fn resolve_strategy(
    raw: Option<&str>,
    fallback: AssemblyStrategy,
) -> Result<AssemblyStrategy> {
    match raw {
        Some(value) => AssemblyStrategy::from_str(value),
        None => Ok(fallback),
    }
}

pub(crate) fn mask_api_key(key: &str) -> String {
    if key.is_empty() {
        return "(not set)".to_string();
    }

    let visible: String = key.chars().take(8).collect();
    format!("{visible}***")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_api_key_keeps_prefix_only() {
        assert_eq!(mask_api_key(""), "(not set)");
        assert_eq!(mask_api_key("sk-or-v1-abcdef"), "sk-or-v1***");
        assert_eq!(mask_api_key("short"), "short***");
    }

    #[test]
    fn resolve_strategy_falls_back_to_config() {
        assert_eq!(
            resolve_strategy(None, AssemblyStrategy::Stepwise).unwrap(),
            AssemblyStrategy::Stepwise
        );
        assert_eq!(
            resolve_strategy(Some("single-call"), AssemblyStrategy::Stepwise).unwrap(),
            AssemblyStrategy::SingleCall
        );
        assert!(resolve_strategy(Some("sonnet"), AssemblyStrategy::Stepwise).is_err());
    }
}
