// src/api/routes.rs
use actix_web::{error, web, HttpResponse};
use super::handlers;
use super::types::ErrorResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Password generator, evaluation and strengthening
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .route("/generate", web::post().to(handlers::generator::generate_password))
            .route("/evaluate", web::post().to(handlers::generator::evaluate_password))
            .route("/strengthen", web::post().to(handlers::generator::strengthen_password))
    );
}

// Malformed or missing JSON bodies answer with a JSON error instead of plain text
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected API request body: {}", err);
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ErrorResponse::invalid_request()),
        )
        .into()
    })
}
