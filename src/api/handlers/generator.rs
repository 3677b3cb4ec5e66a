// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use log::{debug, info};
use crate::models::{PasswordGenerationOptions, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, STRONG_PASSWORD_LENGTH};
use crate::generators::{evaluate_password_strength, PasswordGenerator};
use crate::api::types::{
    ErrorResponse, EvaluateRequest, EvaluateResponse, GenerateRequest, GenerateResponse,
    StrengthenRequest, StrengthenResponse,
};

/// Generate a password
///
/// Generates a random password from the selected character classes and
/// scores it. Lengths outside 8..=128 fall back to 12.
#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "Generator",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated password", body = GenerateResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn generate_password(generation_req: web::Json<GenerateRequest>) -> impl Responder {
    let options = generation_options(&generation_req);
    debug!("Generating password with {:?}", options);

    let generator = PasswordGenerator::new();
    let password = match generator.generate_password(&options) {
        Ok(pwd) => pwd,
        Err(e) => {
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: format!("Failed to generate password: {}", e),
            });
        }
    };

    let strength = evaluate_password_strength(&password);
    info!("Generated {}-character password (score {})", options.length, strength.score);

    HttpResponse::Ok().json(GenerateResponse {
        password,
        score: strength.score,
        feedback: strength.feedback,
    })
}

/// Evaluate a password
///
/// Scores the supplied password and returns recommendations.
#[utoipa::path(
    post,
    path = "/api/evaluate",
    tag = "Generator",
    request_body = EvaluateRequest,
    responses(
        (status = 200, description = "Password evaluation", body = EvaluateResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse)
    )
)]
pub async fn evaluate_password(evaluate_req: web::Json<EvaluateRequest>) -> impl Responder {
    let strength = evaluate_password_strength(&evaluate_req.password);
    info!("Evaluated password (score {}, strong: {})", strength.score, strength.is_strong);

    HttpResponse::Ok().json(EvaluateResponse {
        score: strength.score,
        feedback: strength.feedback,
    })
}

/// Strengthen a password
///
/// Adds the missing character classes, pads to 12 characters, shuffles and
/// cuts the result to 12 characters.
#[utoipa::path(
    post,
    path = "/api/strengthen",
    tag = "Generator",
    request_body = StrengthenRequest,
    responses(
        (status = 200, description = "Strengthened password", body = StrengthenResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse)
    )
)]
pub async fn strengthen_password(strengthen_req: web::Json<StrengthenRequest>) -> impl Responder {
    let generator = PasswordGenerator::new();
    let strong_password = generator.strengthen_password(&strengthen_req.password);
    info!(
        "Strengthened password from {} to {} characters",
        strengthen_req.password.chars().count(),
        strong_password.chars().count()
    );

    HttpResponse::Ok().json(StrengthenResponse { strong_password })
}

fn generation_options(req: &GenerateRequest) -> PasswordGenerationOptions {
    let length = req
        .length
        .and_then(|length| usize::try_from(length).ok())
        .filter(|length| (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(length))
        .unwrap_or(STRONG_PASSWORD_LENGTH);

    PasswordGenerationOptions {
        length,
        include_uppercase: req.include_uppercase != 0,
        include_lowercase: req.include_lowercase != 0,
        include_numbers: req.include_numbers != 0,
        include_symbols: req.include_symbols != 0,
    }
}
