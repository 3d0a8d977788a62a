//! Provider abstraction for generative text services.
//!
//! A provider takes one instructional prompt and returns the model's raw
//! answer. The answer is untrusted free text; structure is recovered by
//! [`crate::extract`], not by the provider.

use async_trait::async_trait;

use crate::error::LlmResult;

/// One prompt sent to a generative text service.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub temperature: f32,
}

impl CompletionRequest {
    #[must_use]
    pub fn new(prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            prompt: prompt.into(),
            temperature,
        }
    }
}

/// Generic trait for generative text providers.
///
/// Implementations are constructed once at process start and shared across
/// invocations, so they must be `Send + Sync`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send `request` and return the raw completion text.
    ///
    /// # Errors
    ///
    /// Returns `LlmError` on transport, status, or envelope decoding failure.
    async fn complete(&self, request: &CompletionRequest) -> LlmResult<String>;

    /// Name of this provider, for logging.
    fn provider_name(&self) -> &str;
}
