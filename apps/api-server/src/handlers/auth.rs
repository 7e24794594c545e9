//! Authentication handlers.

use actix_session::Session;
use actix_web::{HttpResponse, web};

use scribe_shared::ErrorResponse;
use scribe_shared::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::validate::ValidatedJson;
use crate::observability::RequestId;
use crate::state::AppState;

/// Session key holding the logged-in user's id.
pub const SESSION_USER_ID: &str = "user_id";

fn remember(session: &Session, user_id: i32) -> AppResult<()> {
    session
        .insert(SESSION_USER_ID, user_id)
        .map_err(|e| AppError::from_framework(e.to_string()))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 201, body = AuthResponse),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn login(
    state: web::Data<AppState>,
    session: Session,
    request_id: RequestId,
    body: ValidatedJson<LoginRequest>,
) -> AppResult<HttpResponse> {
    let auth = state.auth.login(body.into_inner().into()).await?;
    remember(&session, auth.user.id)?;
    tracing::info!(request_id = request_id.as_str(), user_id = auth.user.id, "User logged in");

    Ok(HttpResponse::Created().json(AuthResponse::from(auth)))
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, body = AuthResponse),
        (status = 400, description = "Invalid body or email already taken", body = ErrorResponse)
    )
)]
pub async fn register(
    state: web::Data<AppState>,
    session: Session,
    request_id: RequestId,
    body: ValidatedJson<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let auth = state.auth.register(body.into_inner().into()).await?;
    remember(&session, auth.user.id)?;
    tracing::info!(request_id = request_id.as_str(), user_id = auth.user.id, "Session started");

    Ok(HttpResponse::Created().json(AuthResponse::from(auth)))
}

/// The user behind the bearer token.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, body = UserResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let user = state.auth.current_user(identity.user_id).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
