use actix_web::{get, web, HttpResponse};

use crate::state::AppState;
use crate::types::HealthResponse;

/// Liveness check
#[get("/health")]
pub async fn health(state: web::Data<std::sync::Arc<AppState>>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        configured: state.config.is_inference_configured(),
        model: state.config.ai_model.clone(),
    })
}

#[cfg(test)]
mod tests {
    use crate::routes::configure;
    use crate::state::AppState;
    use actix_web::{test, web, App};
    use std::sync::Arc;
    use textsum_common::AppConfig;

    #[actix_web::test]
    async fn test_health_reports_missing_configuration() {
        let state = AppState::new(AppConfig::default()).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(state)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(json["status"], "ok");
        assert_eq!(json["configured"], false);
        assert_eq!(json["model"], "@cf/meta/llama-3.1-70b-instruct");
    }
}
