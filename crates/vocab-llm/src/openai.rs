//! OpenAI-compatible chat completions provider.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use vocab_config::OpenAiConfig;

use crate::error::{LlmError, LlmResult};
use crate::generator::{CompletionRequest, TextGenerator};
use crate::http::ensure_success;

/// Chat completions client for OpenAI and API-compatible endpoints.
pub struct OpenAiProvider {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl OpenAiProvider {
    /// Create a provider with an explicit key, model, and endpoint.
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Config` if the key is blank, or `LlmError::Http` if
    /// the HTTP client cannot be built.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> LlmResult<Self> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(LlmError::Config("OpenAI API key is empty".into()));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            api_key,
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Create a provider from the `[openai]` configuration section.
    ///
    /// # Errors
    ///
    /// Same as [`OpenAiProvider::new`].
    pub fn from_config(config: &OpenAiConfig) -> LlmResult<Self> {
        Self::new(
            config.api_key.as_str(),
            config.model.as_str(),
            config.base_url.as_str(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Model identifier sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl std::fmt::Debug for OpenAiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("api_key", &"***")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TextGenerator for OpenAiProvider {
    async fn complete(&self, request: &CompletionRequest) -> LlmResult<String> {
        let body = ChatRequest {
            model: &self.model,
            temperature: request.temperature,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
        };

        tracing::debug!(
            model = %self.model,
            temperature = request.temperature,
            prompt_len = request.prompt.len(),
            "openai: sending chat completion"
        );

        let resp = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let resp = ensure_success(resp).await?;
        let text = resp.text().await?;
        parse_completion(&text)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}

/// Pull the first choice's message content out of a chat completion body.
fn parse_completion(body: &str) -> LlmResult<String> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| LlmError::Parse(e.to_string()))?;
    parsed
        .choices
        .into_iter()
        .find_map(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or(LlmError::EmptyCompletion)
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}
