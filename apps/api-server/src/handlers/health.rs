//! Liveness, banner and fallback endpoints.

use actix_web::HttpResponse;

use scribe_shared::MessageResponse;

use crate::middleware::error::{AppError, AppResult, RESOURCE_NOT_FOUND};

/// Health check endpoint - returns server status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, body = MessageResponse))
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("Server is running"))
}

pub async fn banner() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("API is running on /api"))
}

/// Fallback for every unmatched route.
pub async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::NotFound(RESOURCE_NOT_FOUND.to_string()))
}
