use async_trait::async_trait;
use reqwest::Client;
use textsum_common::api::GENERATE_SUMMARY_PATH;
use textsum_common::{GenerateSummaryRequest, GenerateSummaryResponse, Result, TextsumError};
use tracing::debug;

/// Way of reaching the summary proxy
#[async_trait]
pub trait SummaryTransport: Send + Sync {
    /// Send one summary request; any non-success status is an error
    async fn generate(&self, request: &GenerateSummaryRequest) -> Result<GenerateSummaryResponse>;
}

/// HTTP transport against a running textsum server
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
    client: Client,
}

impl HttpTransport {
    /// Create transport for the server at `base_url`
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            endpoint: format!("{}{}", base_url.as_ref().trim_end_matches('/'), GENERATE_SUMMARY_PATH),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SummaryTransport for HttpTransport {
    async fn generate(&self, request: &GenerateSummaryRequest) -> Result<GenerateSummaryResponse> {
        debug!("POST {} - Input length: {}", self.endpoint, request.user_input.len());

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| TextsumError::transport(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TextsumError::transport(format!(
                "Failed to generate summary: {} {}",
                status, body
            )));
        }

        response
            .json::<GenerateSummaryResponse>()
            .await
            .map_err(|e| TextsumError::transport(format!("Failed to parse response: {}", e)))
    }
}
