use std::sync::Arc;
use textsum_common::{AppConfig, Result, TextsumError};
use textsum_llm::{InferenceClient, Summarizer, WorkersAiClient};
use tracing::warn;

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Inference backend, absent while credentials are missing
    inference: Option<Arc<dyn InferenceClient>>,
}

impl AppState {
    /// Create new application state
    ///
    /// Missing credentials do not prevent startup; every summary request
    /// fails with a configuration error instead.
    pub fn new(config: AppConfig) -> Result<Self> {
        let inference: Option<Arc<dyn InferenceClient>> = match config.inference_settings() {
            Ok(settings) => Some(Arc::new(WorkersAiClient::new(&settings)?)),
            Err(e) => {
                warn!("Inference disabled: {}", e);
                None
            }
        };

        Ok(Self { config, inference })
    }

    /// Create application state around an existing inference backend
    pub fn with_client(config: AppConfig, client: Arc<dyn InferenceClient>) -> Self {
        Self {
            config,
            inference: Some(client),
        }
    }

    /// Summarizer for one request, or a configuration error
    pub fn summarizer(&self) -> Result<Summarizer> {
        let settings = self.config.inference_settings()?;
        let client = self
            .inference
            .clone()
            .ok_or_else(|| TextsumError::config("Inference client is not initialized"))?;

        Ok(Summarizer::from_settings(client, &settings))
    }
}
