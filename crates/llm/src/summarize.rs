use std::sync::Arc;
use textsum_common::{GenerateSummaryRequest, InferenceSettings, Result, TextsumError};
use tracing::{debug, info};

use crate::llm_trait::InferenceClient;
use crate::prompts::system_prompt;
use crate::types::{ChatMessage, GatewayOptions, InferenceRequest};

/// Sampling temperature for every summary
pub const TEMPERATURE: f32 = 0.7;

/// Maximum tokens the model may produce
pub const MAX_TOKENS: u32 = 2048;

/// Gateway cache lifetime
pub const CACHE_TTL: u64 = 3_600_000;

/// Message reported when the model produced no text
pub const EMPTY_RESPONSE_MESSAGE: &str = "No response received from AI";

/// Single-shot summarizer over a hosted model
pub struct Summarizer {
    client: Arc<dyn InferenceClient>,
    model: String,
    gateway_id: String,
}

impl Summarizer {
    /// Create new summarizer
    pub fn new(
        client: Arc<dyn InferenceClient>,
        model: impl Into<String>,
        gateway_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            model: model.into(),
            gateway_id: gateway_id.into(),
        }
    }

    /// Create summarizer using the model and gateway from `settings`
    pub fn from_settings(client: Arc<dyn InferenceClient>, settings: &InferenceSettings) -> Self {
        Self::new(client, settings.model.clone(), settings.gateway_id.clone())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the two-message exchange for `request`
    pub fn build_request(&self, request: &GenerateSummaryRequest) -> InferenceRequest {
        InferenceRequest {
            messages: vec![
                ChatMessage::system(system_prompt(request.format(), request.tone())),
                ChatMessage::user(request.user_input.clone()),
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }

    fn gateway_options(&self) -> GatewayOptions {
        GatewayOptions {
            id: self.gateway_id.clone(),
            skip_cache: false,
            cache_ttl: CACHE_TTL,
        }
    }

    /// Summarize `request` with one inference call
    ///
    /// The model reply is returned verbatim. A missing or blank reply is an
    /// [`TextsumError::EmptyResponse`].
    pub async fn summarize(&self, request: &GenerateSummaryRequest) -> Result<String> {
        if request.user_input.trim().is_empty() {
            return Err(TextsumError::invalid_input("userInput must not be empty"));
        }

        info!(
            "Starting summarization - Input length: {} chars, Format: {}, Tone: {}",
            request.user_input.len(),
            request.format(),
            request.tone()
        );

        let inference_request = self.build_request(request);
        let response = self
            .client
            .run(&self.model, &inference_request, &self.gateway_options())
            .await?;

        match response.response {
            Some(text) if !text.trim().is_empty() => {
                debug!("Summary received - Length: {} chars", text.len());
                Ok(text)
            }
            _ => Err(TextsumError::empty_response(EMPTY_RESPONSE_MESSAGE)),
        }
    }
}
