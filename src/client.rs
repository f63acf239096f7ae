use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::{LlmProvider, LlmSettings};

/// Anything that can answer an OpenAI-style chat completion request.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn chat_completion(&self, request: ChatCompletionRequest)
    -> Result<ChatCompletionResponse>;
}

pub type DynLlmClient = dyn LlmClient;

#[derive(Debug, Clone)]
pub struct AIClient {
    http: Client,
    base_url: String,
    api_key: String,
    user_agent: String,
    provider: LlmProvider,
}

impl AIClient {
    pub fn new(settings: &LlmSettings) -> Result<Self> {
        let timeout = Duration::from_secs(settings.timeout_secs);
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            user_agent: settings.user_agent.clone(),
            provider: settings.provider,
        })
    }

    pub fn shared(settings: &LlmSettings) -> Result<Arc<DynLlmClient>> {
        Ok(Arc::new(Self::new(settings)?))
    }
}

#[async_trait]
impl LlmClient for AIClient {
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(
            provider = %self.provider,
            model = %request.model,
            max_tokens = ?request.max_tokens,
            temperature = ?request.temperature,
            "sending chat completion request"
        );
        if let Some(message) = request.messages.last() {
            trace!(prompt = %message.content, "chat completion prompt");
        }

        let mut req_builder = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("User-Agent", &self.user_agent)
            .header("Content-Type", "application/json")
            .json(&request);

        if matches!(self.provider, LlmProvider::OpenRouter) {
            req_builder = req_builder.header("X-Title", "articlegen");
        }

        let response = req_builder
            .send()
            .await
            .context("Failed to send request to chat completions endpoint")?;

        let status = response.status();
        debug!(%status, "chat completion response received");

        match status {
            reqwest::StatusCode::OK => response
                .json::<ChatCompletionResponse>()
                .await
                .context("Failed to parse chat completion response JSON"),
            reqwest::StatusCode::TOO_MANY_REQUESTS => {
                let error_text = response.text().await.unwrap_or_default();
                let error_msg = if error_text.contains("per second") {
                    "Rate limit exceeded. Please wait a moment and try again."
                } else if error_text.contains("quota") {
                    "Usage quota exhausted for this API key."
                } else {
                    "Too many requests. Please wait before trying again."
                };
                Err(anyhow!("{} (API response: {})", error_msg, error_text))
            }
            reqwest::StatusCode::UNAUTHORIZED => Err(anyhow!(
                "Invalid {} API key. Please check your API key configuration.",
                self.provider.display_name()
            )),
            reqwest::StatusCode::BAD_REQUEST => {
                let error_text = response.text().await.unwrap_or_default();
                Err(anyhow!("Invalid request: {}", error_text))
            }
            reqwest::StatusCode::INTERNAL_SERVER_ERROR
            | reqwest::StatusCode::SERVICE_UNAVAILABLE => Err(anyhow!(
                "Service is temporarily unavailable. Please try again later."
            )),
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(anyhow!("API error (status {}): {}", status, error_text))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatMessageRole,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMessageRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
    pub finish_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn settings(base_url: String) -> LlmSettings {
        LlmSettings {
            provider: LlmProvider::OpenRouter,
            api_key: "test-key".to_string(),
            timeout_secs: 5,
            base_url,
            user_agent: "articlegen/test".to_string(),
        }
    }

    fn user_request(content: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: "writer/model".to_string(),
            messages: vec![ChatMessage {
                role: ChatMessageRole::User,
                content: content.to_string(),
            }],
            max_tokens: Some(200),
            temperature: Some(0.75),
        }
    }

    #[tokio::test]
    async fn chat_completion_posts_bearer_request() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .header("Authorization", "Bearer test-key")
                    .header("User-Agent", "articlegen/test")
                    .json_body(json!({
                        "model": "writer/model",
                        "messages": [{ "role": "user", "content": "hello" }],
                        "max_tokens": 200,
                        "temperature": 0.75
                    }));
                then.status(200).json_body(json!({
                    "choices": [{
                        "index": 0,
                        "finish_reason": "stop",
                        "message": { "role": "assistant", "content": "hi there" }
                    }]
                }));
            })
            .await;

        let client = AIClient::new(&settings(server.base_url())).unwrap();
        let response = client.chat_completion(user_request("hello")).await.unwrap();

        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].message.content, "hi there");
        assert_eq!(response.choices[0].finish_reason.as_deref(), Some("stop"));
        mock.assert_async().await;
    }

    #[test]
    fn message_roles_use_lowercase_wire_names() {
        let user = serde_json::to_value(ChatMessage {
            role: ChatMessageRole::User,
            content: "hi".to_string(),
        })
        .unwrap();
        assert_eq!(user["role"], "user");

        let reply: ChatMessage =
            serde_json::from_value(json!({ "role": "assistant", "content": "ok" })).unwrap();
        assert!(matches!(reply.role, ChatMessageRole::Assistant));
    }

    #[tokio::test]
    async fn unauthorized_maps_to_api_key_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(401).body("nope");
            })
            .await;

        let client = AIClient::new(&settings(server.base_url())).unwrap();
        let err = client.chat_completion(user_request("hello")).await.unwrap_err();
        assert!(err.to_string().contains("Invalid OpenRouter API key"));
    }

    #[tokio::test]
    async fn rate_limit_includes_api_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(429).body("limit: 1 request per second");
            })
            .await;

        let client = AIClient::new(&settings(server.base_url())).unwrap();
        let err = client.chat_completion(user_request("hello")).await.unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Rate limit exceeded"));
        assert!(message.contains("1 request per second"));
    }

    #[tokio::test]
    async fn unexpected_status_reports_code() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(418).body("teapot");
            })
            .await;

        let client = AIClient::new(&settings(format!("{}/", server.base_url()))).unwrap();
        let err = client.chat_completion(user_request("hello")).await.unwrap_err();
        assert!(err.to_string().contains("418"));
        assert!(err.to_string().contains("teapot"));
    }
}
