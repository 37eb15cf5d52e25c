//! textsum LLM integration
//!
//! Workers AI client, prompt construction and the summarizer

mod client;
mod llm_trait;
mod prompts;
mod summarize;
mod types;

pub use client::WorkersAiClient;
pub use llm_trait::InferenceClient;
pub use prompts::{format_directive, system_prompt, tone_directive, BASE_PROMPT};
pub use summarize::{Summarizer, CACHE_TTL, EMPTY_RESPONSE_MESSAGE, MAX_TOKENS, TEMPERATURE};
pub use types::{ChatMessage, GatewayOptions, InferenceRequest, InferenceResponse, Role};
