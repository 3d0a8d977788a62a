//! # vocab-llm
//!
//! Generative text service plumbing for vocab-mate.
//!
//! - [`TextGenerator`]: provider abstraction, one prompt in, free text out
//! - [`OpenAiProvider`]: OpenAI-compatible chat completions over `reqwest`
//! - [`MockGenerator`]: scripted, network-free double for tests
//! - [`prompts`]: pair generation and translation prompt templates
//! - [`extract`]: best-effort recovery of a JSON array from untrusted
//!   model output (surrounding prose, markdown fences)

pub mod extract;
pub mod generator;
pub mod mock;
pub mod openai;
pub mod prompts;

mod error;
mod http;

pub use error::{LlmError, LlmResult};
pub use extract::{extract_json_array, extract_records};
pub use generator::{CompletionRequest, TextGenerator};
pub use mock::{MockGenerator, MockReply};
pub use openai::OpenAiProvider;
