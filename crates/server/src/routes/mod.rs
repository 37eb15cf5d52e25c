use actix_web::web;

pub mod summary;
pub mod system;

/// Register every `/api` route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(summary::generate_summary)
            .service(system::health),
    );
}
