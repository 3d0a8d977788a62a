//! Status handling for chat completion responses.

use reqwest::Response;
use reqwest::header::RETRY_AFTER;

use crate::error::LlmError;

/// Back-off reported when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Turn a non-2xx completion response into an [`LlmError`].
///
/// A 429 becomes [`LlmError::RateLimited`]; any other failure status becomes
/// [`LlmError::Api`] carrying the body the service sent back.
pub async fn ensure_success(resp: Response) -> Result<Response, LlmError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status.as_u16() == 429 {
        return Err(LlmError::RateLimited {
            retry_after_secs: retry_after_secs(&resp),
        });
    }
    let message = resp.text().await.unwrap_or_default();
    Err(LlmError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Seconds from a delta-seconds `Retry-After` header.
fn retry_after_secs(resp: &Response) -> u64 {
    resp.headers()
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
