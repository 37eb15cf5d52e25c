pub mod api;
pub mod config;
pub mod error;
pub mod logger;

// Re-export commonly used types
pub use api::{
    ErrorResponse, GenerateSummaryRequest, GenerateSummaryResponse, SummaryFormat,
    SummaryLength, SummaryTone,
};
pub use config::{AppConfig, InferenceSettings};
pub use error::TextsumError;
pub type Result<T> = std::result::Result<T, TextsumError>;
