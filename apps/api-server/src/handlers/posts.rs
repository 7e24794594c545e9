//! Posts resource.

use actix_web::{HttpResponse, web};

use scribe_shared::ErrorResponse;
use scribe_shared::dto::{CreatePostRequest, PostResponse};

use crate::middleware::error::AppResult;
use crate::middleware::validate::ValidatedJson;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    responses(
        (status = 200, body = [PostResponse]),
        (status = 404, description = "No posts found", body = ErrorResponse)
    )
)]
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<PostResponse> = state
        .posts
        .list()
        .await?
        .into_iter()
        .map(PostResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, body = PostResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    )
)]
pub async fn get_post(state: web::Data<AppState>, id: web::Path<i32>) -> AppResult<HttpResponse> {
    let post = state.posts.get(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// Create a post for an existing author, named by id or email.
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, body = PostResponse),
        (status = 400, description = "Invalid post or unknown author", body = ErrorResponse)
    )
)]
pub async fn create_post(
    state: web::Data<AppState>,
    body: ValidatedJson<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(body.into_inner().into()).await?;

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}
