//! Users resource.

use actix_web::{HttpResponse, web};

use scribe_shared::dto::{CreateUserRequest, DeletedUserResponse, UpdateUserRequest, UserResponse};
use scribe_shared::{ErrorResponse, MessageResponse};

use crate::middleware::error::AppResult;
use crate::middleware::validate::ValidatedJson;
use crate::state::AppState;

/// List every user.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 404, description = "No users found", body = ErrorResponse)
    )
)]
pub async fn list_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users: Vec<UserResponse> = state
        .users
        .list()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(users))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(state: web::Data<AppState>, id: web::Path<i32>) -> AppResult<HttpResponse> {
    let user = state.users.get(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, body = UserResponse),
        (status = 400, description = "Missing name or email", body = ErrorResponse)
    )
)]
pub async fn create_user(
    state: web::Data<AppState>,
    body: ValidatedJson<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let user = state.users.create(body.into_inner().into()).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// Change only the fields present in the body.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, body = UserResponse),
        (status = 400, description = "No field to update", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn update_user(
    state: web::Data<AppState>,
    id: web::Path<i32>,
    body: ValidatedJson<UpdateUserRequest>,
) -> AppResult<HttpResponse> {
    let user = state
        .users
        .update(id.into_inner(), body.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, body = DeletedUserResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn delete_user(state: web::Data<AppState>, id: web::Path<i32>) -> AppResult<HttpResponse> {
    let deleted = state.users.delete(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(DeletedUserResponse::from(deleted)))
}

#[utoipa::path(
    delete,
    path = "/api/users",
    tag = "users",
    responses((status = 200, body = MessageResponse))
)]
pub async fn delete_all_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let message = state.users.delete_all().await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(message)))
}
