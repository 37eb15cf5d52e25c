use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use textsum_common::{InferenceSettings, Result, TextsumError};
use tracing::{debug, info};

use crate::llm_trait::InferenceClient;
use crate::types::{CloudflareEnvelope, GatewayOptions, InferenceRequest, InferenceResponse};

const SKIP_CACHE_HEADER: &str = "cf-aig-skip-cache";
const CACHE_TTL_HEADER: &str = "cf-aig-cache-ttl";

/// Workers AI client routed through a Cloudflare AI Gateway
#[derive(Debug, Clone)]
pub struct WorkersAiClient {
    base_url: String,
    account_id: String,
    api_token: String,
    client: Client,
}

impl WorkersAiClient {
    /// Create new Workers AI client
    pub fn new(settings: &InferenceSettings) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!(
            "Workers AI client initialized: {}/{}",
            settings.gateway_base_url, settings.account_id
        );

        Ok(Self {
            base_url: settings.gateway_base_url.clone(),
            account_id: settings.account_id.clone(),
            api_token: settings.api_token.clone(),
            client,
        })
    }

    /// Gateway URL for `model`
    pub fn endpoint(&self, gateway_id: &str, model: &str) -> String {
        format!(
            "{}/{}/{}/workers-ai/{}",
            self.base_url,
            self.account_id,
            gateway_id,
            model.trim_start_matches('/')
        )
    }

    fn unwrap_envelope(status: StatusCode, body: &str) -> Result<InferenceResponse> {
        let envelope: Option<CloudflareEnvelope> = serde_json::from_str(body).ok();

        match envelope {
            Some(envelope) if status.is_success() && envelope.success => {
                Ok(envelope.result.unwrap_or_default())
            }
            Some(envelope) if !envelope.errors.is_empty() => {
                let messages: Vec<String> = envelope
                    .errors
                    .iter()
                    .map(|e| match e.code {
                        Some(code) => format!("{} ({})", e.message, code),
                        None => e.message.clone(),
                    })
                    .collect();
                Err(TextsumError::transport(messages.join("; ")))
            }
            _ if status.is_success() => Err(TextsumError::transport(format!(
                "Unexpected Workers AI response: {}",
                body
            ))),
            _ => Err(TextsumError::transport(format!(
                "Workers AI request failed with status {}",
                status
            ))),
        }
    }
}

#[async_trait]
impl InferenceClient for WorkersAiClient {
    async fn run(
        &self,
        model: &str,
        request: &InferenceRequest,
        gateway: &GatewayOptions,
    ) -> Result<InferenceResponse> {
        let url = self.endpoint(&gateway.id, model);

        debug!(
            "Sending inference request - Model: {}, Messages: {}, Gateway: {}",
            model,
            request.messages.len(),
            gateway.id
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .header(SKIP_CACHE_HEADER, gateway.skip_cache.to_string())
            .header(CACHE_TTL_HEADER, gateway.cache_ttl.to_string())
            .json(request)
            .send()
            .await
            .map_err(|e| TextsumError::transport(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TextsumError::transport(format!("Failed to read response body: {}", e)))?;

        debug!("Received inference response - Status: {}, Length: {}", status, body.len());

        Self::unwrap_envelope(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatMessage;
    use httpmock::prelude::*;
    use serde_json::json;

    const MODEL: &str = "@cf/meta/llama-3.1-70b-instruct";

    fn settings(base_url: &str) -> InferenceSettings {
        InferenceSettings {
            account_id: "acct".to_string(),
            api_token: "secret".to_string(),
            gateway_id: "gw".to_string(),
            model: MODEL.to_string(),
            gateway_base_url: base_url.to_string(),
        }
    }

    fn gateway() -> GatewayOptions {
        GatewayOptions {
            id: "gw".to_string(),
            skip_cache: false,
            cache_ttl: 3_600_000,
        }
    }

    fn request() -> InferenceRequest {
        InferenceRequest {
            messages: vec![ChatMessage::system("sys"), ChatMessage::user("hello")],
            temperature: 0.7,
            max_tokens: 2048,
        }
    }

    #[test]
    fn test_endpoint() {
        let client = WorkersAiClient::new(&settings("https://gateway.ai.cloudflare.com/v1")).unwrap();
        assert_eq!(
            client.endpoint("gw", MODEL),
            "https://gateway.ai.cloudflare.com/v1/acct/gw/workers-ai/@cf/meta/llama-3.1-70b-instruct"
        );
    }

    #[tokio::test]
    async fn test_run_success() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(Method::POST)
                    .path("/v1/acct/gw/workers-ai/@cf/meta/llama-3.1-70b-instruct")
                    .header("authorization", "Bearer secret")
                    .header("cf-aig-skip-cache", "false")
                    .header("cf-aig-cache-ttl", "3600000")
                    .body_includes(r#""max_tokens":2048"#);
                then.status(200).json_body(json!({
                    "result": { "response": "a summary" },
                    "success": true,
                    "errors": [],
                    "messages": []
                }));
            })
            .await;

        let client = WorkersAiClient::new(&settings(&server.url("/v1"))).unwrap();
        let response = client.run(MODEL, &request(), &gateway()).await.unwrap();

        assert_eq!(response.response.as_deref(), Some("a summary"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_run_reports_api_errors() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(Method::POST).path("/v1/acct/gw/workers-ai/@cf/unknown");
                then.status(400).json_body(json!({
                    "result": null,
                    "success": false,
                    "errors": [{ "code": 5006, "message": "Invalid model" }]
                }));
            })
            .await;

        let client = WorkersAiClient::new(&settings(&server.url("/v1"))).unwrap();
        let err = client
            .run("@cf/unknown", &request(), &gateway())
            .await
            .unwrap_err();

        assert!(matches!(err, TextsumError::Transport(_)));
        assert_eq!(err.detail(), "Invalid model (5006)");
        mock.assert_async().await;
    }

    #[test]
    fn test_unwrap_envelope_non_json_error() {
        let err = WorkersAiClient::unwrap_envelope(StatusCode::BAD_GATEWAY, "<html>").unwrap_err();
        assert_eq!(err.detail(), "Workers AI request failed with status 502 Bad Gateway");
    }

    #[test]
    fn test_unwrap_envelope_missing_response() {
        let response =
            WorkersAiClient::unwrap_envelope(StatusCode::OK, r#"{"result":{},"success":true}"#).unwrap();
        assert_eq!(response.response, None);
    }
}
