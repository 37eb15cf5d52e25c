use serde::{Deserialize, Serialize};

/// Chat message author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Workers AI text generation input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InferenceRequest {
    /// Conversation (system instruction first)
    pub messages: Vec<ChatMessage>,

    /// Sampling temperature
    pub temperature: f32,

    /// Maximum tokens to generate
    pub max_tokens: u32,
}

/// AI Gateway routing options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayOptions {
    /// Gateway identifier
    pub id: String,

    /// Bypass cached replies
    pub skip_cache: bool,

    /// Cache lifetime, passed through unchanged
    pub cache_ttl: u64,
}

/// Workers AI text generation output
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InferenceResponse {
    /// Generated text
    #[serde(default)]
    pub response: Option<String>,
}

/// Cloudflare REST API envelope
#[derive(Debug, Clone, Deserialize)]
pub struct CloudflareEnvelope {
    #[serde(default)]
    pub result: Option<InferenceResponse>,

    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub errors: Vec<CloudflareMessage>,
}

/// Error or info entry of the envelope
#[derive(Debug, Clone, Deserialize)]
pub struct CloudflareMessage {
    #[serde(default)]
    pub code: Option<i64>,

    pub message: String,
}
