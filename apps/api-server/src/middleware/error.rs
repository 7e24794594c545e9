//! Error translation - every failure leaves the server as `{"message": ...}`.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error, http::StatusCode};
use std::fmt;

use scribe_core::error::{DomainError, RepoError};
use scribe_shared::ErrorResponse;

pub const UNKNOWN_ERROR: &str = "An unknown error occurred";
pub const RESOURCE_NOT_FOUND: &str = "Resource not found";

/// Application-level error type, the only place a status code is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    /// Server-side fault; the detail is logged, never sent.
    Internal(String),
}

impl AppError {
    /// Failure of the framework itself, reported with its own message.
    pub fn from_framework(message: String) -> Self {
        if message.trim().is_empty() {
            Self::BadRequest(UNKNOWN_ERROR.to_string())
        } else {
            Self::BadRequest(message)
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(msg) | Self::BadRequest(msg) | Self::Unauthorized(msg) => msg,
            Self::Internal(_) => UNKNOWN_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            AppError::Internal(detail) => {
                tracing::error!(status = status.as_u16(), detail = %detail, "Internal error");
            }
            _ => tracing::warn!(status = status.as_u16(), message = %self.message(), "Request failed"),
        }

        HttpResponse::build(status).json(ErrorResponse::new(self.message()))
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Unauthorized(msg) => AppError::Unauthorized(msg),
            DomainError::Repository(RepoError::NotFound) => {
                AppError::NotFound(RESOURCE_NOT_FOUND.to_string())
            }
            DomainError::Repository(other) => {
                tracing::error!(error = %other, "Repository failure");
                AppError::BadRequest(other.to_string())
            }
            DomainError::Auth(e) => AppError::BadRequest(e.to_string()),
        }
    }
}

/// Routes JSON body failures (malformed JSON, wrong types) to the translator.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::from_framework(err.to_string()).into()
}

/// Routes path parameter failures (e.g. a non-numeric id) to the translator.
pub fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::from_framework(err.to_string()).into()
}

pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::from_framework(err.to_string()).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_core::ports::AuthError;

    #[test]
    fn domain_errors_keep_their_messages() {
        assert_eq!(
            AppError::from(DomainError::not_found("User not found")),
            AppError::NotFound("User not found".to_string())
        );
        assert_eq!(
            AppError::from(DomainError::validation("Please provide a name and an email")),
            AppError::BadRequest("Please provide a name and an email".to_string())
        );
        assert_eq!(
            AppError::from(DomainError::unauthorized("Invalid credentials")),
            AppError::Unauthorized("Invalid credentials".to_string())
        );
    }

    #[test]
    fn unmapped_store_not_found_is_generic_404() {
        let err = AppError::from(DomainError::Repository(RepoError::NotFound));

        assert_eq!(err, AppError::NotFound(RESOURCE_NOT_FOUND.to_string()));
    }

    #[test]
    fn other_failures_are_400_with_their_message() {
        let constraint = AppError::from(DomainError::Repository(RepoError::Constraint(
            "Unique constraint failed on the fields: (`email`)".to_string(),
        )));
        let auth = AppError::from(DomainError::Auth(AuthError::HashingError(
            "bad salt".to_string(),
        )));

        assert_eq!(constraint.status_code(), StatusCode::BAD_REQUEST);
        assert!(constraint.message().contains("Unique constraint failed"));
        assert_eq!(auth.status_code(), StatusCode::BAD_REQUEST);
        assert!(auth.message().contains("bad salt"));
    }

    #[test]
    fn translated_status_agrees_with_domain_status() {
        let errors = [
            DomainError::not_found("Post not found"),
            DomainError::validation("Title is required"),
            DomainError::unauthorized("Invalid credentials"),
            DomainError::Repository(RepoError::NotFound),
            DomainError::Repository(RepoError::Connection("refused".to_string())),
            DomainError::Auth(AuthError::TokenExpired),
        ];

        for err in errors {
            let expected = err.status();
            assert_eq!(AppError::from(err).status_code().as_u16(), expected);
        }
    }

    #[test]
    fn internal_faults_are_500_without_detail() {
        let err = AppError::Internal("AppState not registered".to_string());

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), UNKNOWN_ERROR);
    }

    #[test]
    fn empty_framework_message_becomes_unknown_error() {
        assert_eq!(
            AppError::from_framework("  ".to_string()),
            AppError::BadRequest(UNKNOWN_ERROR.to_string())
        );
        assert_eq!(
            AppError::from_framework("Json deserialize error".to_string()).message(),
            "Json deserialize error"
        );
    }
}
