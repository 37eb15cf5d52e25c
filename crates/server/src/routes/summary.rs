use actix_web::{post, web, HttpResponse};
use futures::StreamExt;
use textsum_common::api::GENERATE_ERROR_MESSAGE;
use textsum_common::{
    ErrorResponse, GenerateSummaryRequest, GenerateSummaryResponse, Result, TextsumError,
};
use tracing::{error, info};

use crate::state::AppState;

/// Largest accepted request body
pub const MAX_PAYLOAD_BYTES: usize = 2 * 1024 * 1024;

/// POST /api/generate-summary
///
/// Every failure is answered with status 500 and `{ error, details }`.
#[post("/generate-summary")]
pub async fn generate_summary(
    payload: web::Payload,
    state: web::Data<std::sync::Arc<AppState>>,
) -> HttpResponse {
    match summarize_payload(payload, &state).await {
        Ok(summary) => HttpResponse::Ok().json(GenerateSummaryResponse {
            ai_response: summary,
        }),
        Err(e) => {
            error!("Error in generate-summary: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: GENERATE_ERROR_MESSAGE.to_string(),
                details: e.detail(),
            })
        }
    }
}

async fn summarize_payload(payload: web::Payload, state: &AppState) -> Result<String> {
    // Configuration is checked before the body is even read
    let summarizer = state.summarizer()?;

    let body = read_body(payload, MAX_PAYLOAD_BYTES).await?;
    let request: GenerateSummaryRequest = serde_json::from_slice(&body)?;
    let summary = summarizer.summarize(&request).await?;

    info!("Summary generated - Model: {}, Length: {} chars", summarizer.model(), summary.len());

    Ok(summary)
}

/// Collect the request body, failing once it grows past `limit` bytes
async fn read_body(mut payload: web::Payload, limit: usize) -> Result<web::BytesMut> {
    let mut body = web::BytesMut::new();

    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| {
            TextsumError::invalid_input(format!("Failed to read request body: {}", e))
        })?;

        if body.len() + chunk.len() > limit {
            return Err(TextsumError::invalid_input(format!(
                "Request body exceeds {} bytes",
                limit
            )));
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::configure;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use textsum_common::AppConfig;
    use textsum_llm::{GatewayOptions, InferenceClient, InferenceRequest, InferenceResponse};

    enum Behavior {
        Reply(Option<String>),
        Fail(String),
    }

    struct StubClient {
        behavior: Behavior,
        calls: AtomicUsize,
    }

    impl StubClient {
        fn new(behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                behavior,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl InferenceClient for StubClient {
        async fn run(
            &self,
            _model: &str,
            _request: &InferenceRequest,
            _gateway: &GatewayOptions,
        ) -> textsum_common::Result<InferenceResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.behavior {
                Behavior::Reply(response) => Ok(InferenceResponse {
                    response: response.clone(),
                }),
                Behavior::Fail(msg) => Err(TextsumError::transport(msg.clone())),
            }
        }
    }

    fn configured() -> AppConfig {
        AppConfig {
            account_id: Some("acct".to_string()),
            api_token: Some("token".to_string()),
            gateway_id: Some("gw".to_string()),
            ..AppConfig::default()
        }
    }

    async fn send(
        state: AppState,
        body: serde_json::Value,
    ) -> (StatusCode, Option<String>, serde_json::Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(state)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate-summary")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        let json: serde_json::Value = test::read_body_json(resp).await;
        (status, content_type, json)
    }

    #[actix_web::test]
    async fn test_bullets_casual_end_to_end() {
        let stub = StubClient::new(Behavior::Reply(Some("• point one\n• point two".to_string())));
        let state = AppState::with_client(configured(), stub.clone());

        let (status, content_type, json) = send(
            state,
            serde_json::json!({
                "userInput": "The quick brown fox...",
                "format": "bullets",
                "tone": "casual"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(json, serde_json::json!({ "aiResponse": "• point one\n• point two" }));
        assert_eq!(stub.calls(), 1);
    }

    #[actix_web::test]
    async fn test_missing_config_never_calls_inference() {
        let stub = StubClient::new(Behavior::Reply(Some("unused".to_string())));
        let mut config = configured();
        config.gateway_id = None;
        let state = AppState::with_client(config, stub.clone());

        let (status, _, json) = send(state, serde_json::json!({ "userInput": "text" })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], GENERATE_ERROR_MESSAGE);
        assert_eq!(json["details"], "Required environment variables are not set");
        assert_eq!(stub.calls(), 0);
    }

    #[actix_web::test]
    async fn test_unconfigured_state_rejects_every_request() {
        let state = AppState::new(AppConfig::default()).unwrap();

        let (status, content_type, json) =
            send(state, serde_json::json!({ "userInput": "text", "tone": "academic" })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(json["details"], "Required environment variables are not set");
    }

    #[actix_web::test]
    async fn test_inference_failure_reports_message() {
        let stub = StubClient::new(Behavior::Fail("upstream timed out".to_string()));
        let state = AppState::with_client(configured(), stub.clone());

        let (status, _, json) = send(state, serde_json::json!({ "userInput": "text" })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json,
            serde_json::json!({
                "error": "Failed to generate response",
                "details": "upstream timed out"
            })
        );
        assert_eq!(stub.calls(), 1);
    }

    #[actix_web::test]
    async fn test_missing_response_field() {
        let stub = StubClient::new(Behavior::Reply(None));
        let state = AppState::with_client(configured(), stub.clone());

        let (status, _, json) = send(state, serde_json::json!({ "userInput": "text" })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["details"], "No response received from AI");
    }

    #[actix_web::test]
    async fn test_malformed_body_is_uniform_error() {
        let stub = StubClient::new(Behavior::Reply(Some("unused".to_string())));
        let state = AppState::with_client(configured(), stub.clone());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(state)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate-summary")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{\"userInput\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"], GENERATE_ERROR_MESSAGE);
        assert!(!json["details"].as_str().unwrap_or_default().is_empty());
        assert_eq!(stub.calls(), 0);
    }

    #[actix_web::test]
    async fn test_unknown_format_is_uniform_error() {
        let stub = StubClient::new(Behavior::Reply(Some("unused".to_string())));
        let state = AppState::with_client(configured(), stub.clone());

        let (status, _, json) =
            send(state, serde_json::json!({ "userInput": "text", "format": "sonnet" })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["details"].as_str().unwrap_or_default().contains("sonnet"));
        assert_eq!(stub.calls(), 0);
    }

    async fn send_raw(state: AppState, body: Vec<u8>) -> (StatusCode, Option<String>, serde_json::Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(state)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate-summary")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        let json: serde_json::Value = test::read_body_json(resp).await;
        (status, content_type, json)
    }

    fn oversized_body() -> Vec<u8> {
        let text = "a".repeat(3 * 1024 * 1024);
        serde_json::to_vec(&serde_json::json!({ "userInput": text })).unwrap()
    }

    #[actix_web::test]
    async fn test_oversized_body_without_config_reports_config_error() {
        let state = AppState::new(AppConfig::default()).unwrap();

        let (status, content_type, json) = send_raw(state, oversized_body()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(json["error"], GENERATE_ERROR_MESSAGE);
        assert_eq!(json["details"], "Required environment variables are not set");
    }

    #[actix_web::test]
    async fn test_oversized_body_is_uniform_error() {
        let stub = StubClient::new(Behavior::Reply(Some("unused".to_string())));
        let state = AppState::with_client(configured(), stub.clone());

        let (status, content_type, json) = send_raw(state, oversized_body()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(json["error"], GENERATE_ERROR_MESSAGE);
        assert_eq!(
            json["details"],
            format!("Request body exceeds {} bytes", MAX_PAYLOAD_BYTES)
        );
        assert_eq!(stub.calls(), 0);
    }
}
