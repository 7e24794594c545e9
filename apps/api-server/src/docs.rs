//! OpenAPI document, served as `/docs.json` and rendered by Swagger UI at
//! `/docs/`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use scribe_shared::dto::{
    AuthResponse, CreatePostRequest, CreateUserRequest, DeletedUserResponse, LoginRequest,
    PostResponse, RegisterRequest, UpdateUserRequest, UserResponse,
};
use scribe_shared::{ErrorResponse, MessageResponse};

use crate::handlers::{auth, health, posts, users};

/// Registers the JWT bearer scheme used by `/api/auth/me`.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Scribe API",
        description = "Users, posts and authentication.",
        license(name = "MIT")
    ),
    paths(
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        users::delete_all_users,
        posts::list_posts,
        posts::get_post,
        posts::create_post,
        auth::login,
        auth::register,
        auth::me,
        health::health_check,
    ),
    components(schemas(
        UserResponse,
        PostResponse,
        DeletedUserResponse,
        AuthResponse,
        CreateUserRequest,
        UpdateUserRequest,
        CreatePostRequest,
        LoginRequest,
        RegisterRequest,
        ErrorResponse,
        MessageResponse,
    )),
    tags(
        (name = "users", description = "User management"),
        (name = "posts", description = "Blog posts"),
        (name = "auth", description = "Login and registration"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_resource() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/users",
            "/api/users/{id}",
            "/api/posts",
            "/api/posts/{id}",
            "/api/auth/login",
            "/api/auth/register",
            "/api/auth/me",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");

        assert!(components.security_schemes.contains_key("bearer_auth"));
        assert!(components.schemas.contains_key("ErrorResponse"));
    }
}
