/// textsum error types
#[derive(Debug, thiserror::Error)]
pub enum TextsumError {
    /// Required configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Inference service answered without usable text
    #[error("Empty response: {0}")]
    EmptyResponse(String),

    /// Network/HTTP or upstream service error
    #[error("Transport error: {0}")]
    Transport(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TextsumError {
    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create empty response error
    pub fn empty_response<S: Into<String>>(msg: S) -> Self {
        Self::EmptyResponse(msg.into())
    }

    /// Create transport error
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        Self::Transport(msg.into())
    }

    /// Underlying message without the category prefix
    pub fn detail(&self) -> String {
        match self {
            Self::Config(msg)
            | Self::InvalidInput(msg)
            | Self::EmptyResponse(msg)
            | Self::Transport(msg) => msg.clone(),
            Self::Io(e) => e.to_string(),
            Self::Json(e) => e.to_string(),
            Self::Other(e) => e.to_string(),
        }
    }
}
