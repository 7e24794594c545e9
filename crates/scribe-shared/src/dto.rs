//! Data Transfer Objects - request/response types for the API.
//!
//! Request bodies carry their validation schema as `validator` rules; the
//! api-server checks them before any handler runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use scribe_core::domain::{
    AuthSession, AuthorRef, CreatePost, CreateUser, Credentials, Post, Registration, User,
    UserChanges,
};
use scribe_core::services::DeletedUser;

/// Request to create a user. Presence of `name` and `email` is enforced by
/// the user service so the client gets a single combined message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "John Doe")]
    pub name: Option<String>,
    #[schema(example = "Doe")]
    pub last_name: Option<String>,
    #[schema(example = "john@email.com")]
    pub email: Option<String>,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            name: req.name,
            last_name: req.last_name,
            email: req.email,
        }
    }
}

/// Partial update of a user; only the fields sent are changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub last_name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            name: req.name,
            last_name: req.last_name,
            email: req.email,
        }
    }
}

/// Request to create a post. The author is named by id (`authorId`, or
/// `id` for older clients) or by email; the id wins when both are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[validate(required(message = "Title is required"))]
    #[schema(example = "My first post")]
    pub title: Option<String>,
    #[validate(required(message = "Content is required"))]
    #[schema(example = "This is my first post")]
    pub content: Option<String>,
    #[serde(alias = "id")]
    #[schema(example = 1)]
    pub author_id: Option<i32>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

impl From<CreatePostRequest> for CreatePost {
    fn from(req: CreatePostRequest) -> Self {
        let author = match (req.author_id, req.email) {
            (Some(id), _) => Some(AuthorRef::Id(id)),
            (None, Some(email)) => Some(AuthorRef::Email(email)),
            (None, None) => None,
        };
        Self {
            title: req.title,
            content: req.content,
            author,
        }
    }
}

/// Request to login.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(
        required(message = "Email is required"),
        email(message = "Invalid email format")
    )]
    #[schema(example = "johndoe@gmail.com")]
    pub email: Option<String>,
    #[validate(
        required(message = "Password is required"),
        length(min = 6, message = "Password must be at least 6 characters")
    )]
    #[schema(example = "password123")]
    pub password: Option<String>,
}

impl From<LoginRequest> for Credentials {
    fn from(req: LoginRequest) -> Self {
        Self {
            email: req.email.unwrap_or_default(),
            password: req.password.unwrap_or_default(),
        }
    }
}

/// Request to register a new user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(
        required(message = "Email is required"),
        email(message = "Invalid email format")
    )]
    #[schema(example = "johndoe@gmail.com")]
    pub email: Option<String>,
    #[validate(
        required(message = "Name is required"),
        length(min = 3, message = "Name must be at least 3 characters")
    )]
    #[schema(example = "John Doe")]
    pub name: Option<String>,
    #[validate(
        required(message = "Password is required"),
        length(min = 6, message = "Password must be at least 6 characters")
    )]
    #[schema(example = "password123")]
    pub password: Option<String>,
}

impl From<RegisterRequest> for Registration {
    fn from(req: RegisterRequest) -> Self {
        Self {
            email: req.email.unwrap_or_default(),
            name: req.name.unwrap_or_default(),
            password: req.password.unwrap_or_default(),
        }
    }
}

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub last_name: Option<String>,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub view_count: i32,
    pub author_id: i32,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            published: post.published,
            created_at: post.created_at,
            updated_at: post.updated_at,
            view_count: post.view_count,
            author_id: post.author_id,
        }
    }
}

/// Confirmation of a single delete, echoing the removed user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeletedUserResponse {
    #[schema(example = "User deleted")]
    pub message: String,
    pub user: UserResponse,
}

impl From<DeletedUser> for DeletedUserResponse {
    fn from(deleted: DeletedUser) -> Self {
        Self {
            message: deleted.message.to_string(),
            user: deleted.user.into(),
        }
    }
}

/// Response to a successful login or registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

impl From<AuthSession> for AuthResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            token: session.token,
            user: session.user.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_response_omits_password() {
        let user = User {
            id: 1,
            name: "John Doe".to_string(),
            last_name: None,
            email: "john@email.com".to_string(),
            password_hash: Some("$argon2id$...".to_string()),
        };

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "John Doe",
                "last_name": null,
                "email": "john@email.com"
            })
        );
    }

    #[test]
    fn post_request_accepts_legacy_id_field() {
        let req: CreatePostRequest = serde_json::from_value(serde_json::json!({
            "title": "My first post",
            "content": "This is my first post",
            "id": 1
        }))
        .unwrap();

        let post = CreatePost::from(req);
        assert_eq!(post.author, Some(AuthorRef::Id(1)));
    }

    #[test]
    fn post_request_falls_back_to_author_email() {
        let req = CreatePostRequest {
            title: Some("t".to_string()),
            content: Some("c".to_string()),
            author_id: None,
            email: Some("john@email.com".to_string()),
        };

        let post = CreatePost::from(req);
        assert_eq!(post.author, Some(AuthorRef::Email("john@email.com".to_string())));
    }

    #[test]
    fn post_response_uses_camel_case() {
        let json = serde_json::to_value(PostResponse {
            id: 1,
            title: "t".to_string(),
            content: "c".to_string(),
            published: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            view_count: 0,
            author_id: 1,
        })
        .unwrap();

        assert!(json.get("viewCount").is_some());
        assert!(json.get("authorId").is_some());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn login_schema_rejects_short_password() {
        let req = LoginRequest {
            email: Some("john@email.com".to_string()),
            password: Some("123".to_string()),
        };

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn register_schema_reports_missing_fields() {
        let errors = RegisterRequest::default().validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn update_schema_allows_absent_email() {
        assert!(UpdateUserRequest::default().validate().is_ok());

        let bad = UpdateUserRequest {
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }
}
