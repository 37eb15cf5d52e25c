//! textsum HTTP server
//!
//! Actix-web 기반 요약 프록시 서버

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use textsum_common::{AppConfig, Result};
use tracing::info;
use tracing_actix_web::TracingLogger;

pub mod routes;
pub mod state;
pub mod types;

pub use state::AppState;

/// Run the HTTP server until it is stopped
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_addr = config.server_bind_address();
    let state = Arc::new(AppState::new(config)?);

    info!("HTTP server listening on http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("HTTP server stopped");

    Ok(())
}
