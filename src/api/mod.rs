// src/api/mod.rs
use std::net::TcpListener;
use std::path::PathBuf;

use actix_web::dev::Server;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use handlers::static_files::{serve_static, StaticFiles};

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::evaluate_password,
        crate::api::handlers::generator::strengthen_password
    ),
    components(
        schemas(
            crate::api::types::GenerateRequest,
            crate::api::types::GenerateResponse,
            crate::api::types::EvaluateRequest,
            crate::api::types::EvaluateResponse,
            crate::api::types::StrengthenRequest,
            crate::api::types::StrengthenResponse,
            crate::api::types::ErrorResponse
        )
    ),
    tags(
        (name = "Generator", description = "Password generation, evaluation and strengthening")
    ),
    info(
        title = "Heslo API",
        version = "0.1.0",
        description = "Password generator and strength evaluation API",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(address: &str, port: u16, static_dir: PathBuf) -> std::io::Result<()> {
    log::info!("Starting Heslo API server on {}:{}", address, port);
    log::info!("Serving frontend from {}", static_dir.display());

    let listener = TcpListener::bind((address, port))?;
    build_server(listener, static_dir)?.await
}

/// Builds the server on an already bound listener so callers can pick an
/// ephemeral port.
pub fn build_server(listener: TcpListener, static_dir: PathBuf) -> std::io::Result<Server> {
    let static_files = web::Data::new(StaticFiles::new(static_dir));

    let server = HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec!["Content-Type"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::new("%r %s %Dms"))
            .app_data(static_files.clone())
            .service(web::resource("/api-docs/openapi.json").route(web::get().to(openapi_json)))
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
            .default_service(web::to(serve_static))
    })
    .listen(listener)?
    .run();

    Ok(server)
}

async fn openapi_json() -> web::Json<utoipa::openapi::OpenApi> {
    web::Json(ApiDoc::openapi())
}

pub mod types;
pub mod routes;
pub mod handlers;
