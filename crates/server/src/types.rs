use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,

    /// Inference credentials and gateway are present
    pub configured: bool,

    /// Model used for summaries
    pub model: String,
}
