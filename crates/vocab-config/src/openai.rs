//! OpenAI-compatible chat completions configuration.

use serde::{Deserialize, Serialize};

fn default_model() -> String {
    String::from("gpt-4o-mini")
}

fn default_base_url() -> String {
    String::from("https://api.openai.com/v1")
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Clone, Deserialize, Serialize)]
pub struct OpenAiConfig {
    /// API key. Also read from the bare `OPENAI_API_KEY` variable.
    #[serde(default)]
    pub api_key: String,

    /// Chat model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL for OpenAI-compatible endpoints, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Seconds before a request times out.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OpenAiConfig {
    /// Check if an API key is present.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"***")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
