//! Failures talking to a generative text service.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    /// The request never got a response (connect, TLS, timeout).
    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a failure status.
    #[error("completion service returned {status}: {message}")]
    Api { status: u16, message: String },

    /// HTTP 429; `retry_after_secs` comes from `Retry-After`.
    #[error("completion service is rate limiting, retry in {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// The body was not a chat completion envelope.
    #[error("unexpected completion body: {0}")]
    Parse(String),

    /// The provider cannot be built from the given settings.
    #[error("provider misconfigured: {0}")]
    Config(String),

    /// The completion had no message text.
    #[error("completion contained no text")]
    EmptyCompletion,

    /// Failure scripted by [`crate::MockGenerator`].
    #[error("{0}")]
    Other(String),
}

pub type LlmResult<T> = Result<T, LlmError>;
