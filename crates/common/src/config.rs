use crate::error::TextsumError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default Workers AI model used for summaries
pub const DEFAULT_AI_MODEL: &str = "@cf/meta/llama-3.1-70b-instruct";

/// Default AI Gateway endpoint
pub const DEFAULT_GATEWAY_BASE_URL: &str = "https://gateway.ai.cloudflare.com/v1";

/// textsum application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,

    /// Cloudflare account owning the Workers AI binding
    pub account_id: Option<String>,

    /// API token for Workers AI
    #[serde(skip_serializing)]
    pub api_token: Option<String>,

    /// AI Gateway identifier
    pub gateway_id: Option<String>,

    /// Model used for summarization
    pub ai_model: String,

    /// AI Gateway base URL
    pub gateway_base_url: String,
}

/// Settings required before any inference call is attempted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceSettings {
    pub account_id: String,
    pub api_token: String,
    pub gateway_id: String,
    pub model: String,
    pub gateway_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
            account_id: None,
            api_token: None,
            gateway_id: None,
            ai_model: DEFAULT_AI_MODEL.to_string(),
            gateway_base_url: DEFAULT_GATEWAY_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, TextsumError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self {
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            log_dir: Self::get_env_path("LOG_DIR")
                .unwrap_or_else(|| PathBuf::from("./log")),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
            account_id: Self::get_env_value("CLOUDFLARE_ACCOUNT_ID"),
            api_token: Self::get_env_value("CLOUDFLARE_API_TOKEN"),
            gateway_id: Self::get_env_value("CLOUDFLARE_GATEWAY_ID"),
            ai_model: std::env::var("AI_MODEL")
                .unwrap_or_else(|_| DEFAULT_AI_MODEL.to_string()),
            gateway_base_url: std::env::var("AI_GATEWAY_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GATEWAY_BASE_URL.to_string()),
        };

        config.validate()?;

        Ok(config)
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    /// Get a non-blank value from environment variable
    fn get_env_value(key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Whether every inference setting is present
    pub fn is_inference_configured(&self) -> bool {
        self.inference_settings().is_ok()
    }

    /// Collect the settings needed for an inference call
    ///
    /// Fails with a configuration error when credentials or the gateway id
    /// are absent.
    pub fn inference_settings(&self) -> Result<InferenceSettings, TextsumError> {
        match (&self.account_id, &self.api_token, &self.gateway_id) {
            (Some(account_id), Some(api_token), Some(gateway_id)) => Ok(InferenceSettings {
                account_id: account_id.clone(),
                api_token: api_token.clone(),
                gateway_id: gateway_id.clone(),
                model: self.ai_model.clone(),
                gateway_base_url: self.gateway_base_url.trim_end_matches('/').to_string(),
            }),
            _ => Err(TextsumError::config(
                "Required environment variables are not set",
            )),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), TextsumError> {
        if self.ai_model.is_empty() {
            return Err(TextsumError::config("AI model name cannot be empty"));
        }

        if !self.gateway_base_url.starts_with("http://")
            && !self.gateway_base_url.starts_with("https://") {
            return Err(TextsumError::config(
                "AI Gateway base URL must start with http:// or https://"
            ));
        }

        // Validate port range
        if self.server_port == 0 {
            return Err(TextsumError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}
