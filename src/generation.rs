use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use tracing::debug;

use crate::client::{
    AIClient, ChatCompletionRequest, ChatMessage, ChatMessageRole, DynLlmClient,
};
use crate::config::{Config, GenerationPreset};

/// Rough English tokens-per-word ratio used to turn a word budget into `max_tokens`.
const TOKENS_PER_WORD_NUM: u32 = 4;
const TOKENS_PER_WORD_DEN: u32 = 3;

/// The text-generation capability the article pipeline depends on.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, preset: &GenerationPreset) -> Result<String>;
}

pub type DynTextGenerator = dyn TextGenerator;

pub fn words_to_tokens(max_words: u32) -> u32 {
    max_words
        .saturating_mul(TOKENS_PER_WORD_NUM)
        .div_ceil(TOKENS_PER_WORD_DEN)
}

/// Generator backed by a chat-completions model. Each prompt is sent as a single user message.
pub struct ChatGenerator {
    client: Arc<DynLlmClient>,
    model: String,
}

impl ChatGenerator {
    pub fn new(client: Arc<DynLlmClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = AIClient::shared(&config.llm)?;
        Ok(Self::new(client, config.models.writer.clone()))
    }
}

#[async_trait]
impl TextGenerator for ChatGenerator {
    async fn generate(&self, prompt: &str, preset: &GenerationPreset) -> Result<String> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: ChatMessageRole::User,
                content: prompt.to_string(),
            }],
            max_tokens: Some(words_to_tokens(preset.max_words)),
            temperature: Some(preset.temperature),
        };

        let response = self
            .client
            .chat_completion(request)
            .await
            .context("Text generation call failed")?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Model returned no choices"))?;

        debug!(
            chars = choice.message.content.len(),
            finish_reason = ?choice.finish_reason,
            "generation finished"
        );
        Ok(choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::config::{LlmProvider, LlmSettings};

    fn generator(base_url: String) -> ChatGenerator {
        let settings = LlmSettings {
            provider: LlmProvider::Cerebras,
            api_key: "test-key".to_string(),
            timeout_secs: 5,
            base_url,
            user_agent: "articlegen/test".to_string(),
        };
        ChatGenerator::new(AIClient::shared(&settings).unwrap(), "writer/model")
    }

    #[test]
    fn word_budget_converts_to_tokens() {
        assert_eq!(words_to_tokens(150), 200);
        assert_eq!(words_to_tokens(300), 400);
        assert_eq!(words_to_tokens(1), 2);
        assert_eq!(words_to_tokens(0), 0);
    }

    #[tokio::test]
    async fn generate_sends_preset_and_returns_first_choice() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .json_body(json!({
                        "model": "writer/model",
                        "messages": [{ "role": "user", "content": "Generate four headers" }],
                        "max_tokens": 200,
                        "temperature": 0.75
                    }));
                then.status(200).json_body(json!({
                    "choices": [
                        { "finish_reason": "stop", "message": { "role": "assistant", "content": "1. Intro\n2. Body" } },
                        { "finish_reason": "stop", "message": { "role": "assistant", "content": "ignored" } }
                    ]
                }));
            })
            .await;

        let text = generator(server.base_url())
            .generate("Generate four headers", &GenerationPreset::new(150, 0.75))
            .await
            .unwrap();

        assert_eq!(text, "1. Intro\n2. Body");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn generate_errors_without_choices() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200).json_body(json!({ "choices": [] }));
            })
            .await;

        let err = generator(server.base_url())
            .generate("anything", &GenerationPreset::new(300, 0.3))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("no choices"));
    }

    #[tokio::test]
    async fn generate_wraps_transport_failures() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(503);
            })
            .await;

        let err = generator(server.base_url())
            .generate("anything", &GenerationPreset::new(300, 0.3))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Text generation call failed"));
        assert!(format!("{err:#}").contains("temporarily unavailable"));
    }
}
