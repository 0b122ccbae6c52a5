//! Application error type and its mapping to wire responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use devlink_core::error::{LikeError, RepoError};
use devlink_shared::{ErrorResponse, FieldError};

/// Application-level error - everything a handler can fail with.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Unauthorized(String),
    Forbidden(String),
    Conflict(String),
    AlreadyLiked,
    NotLiked,
    Internal(String),
    Validation(Vec<FieldError>),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::AlreadyLiked => write!(f, "Post already liked"),
            AppError::NotLiked => write!(f, "Post has not yet been liked"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // Validation, conflicts, and like-state errors all surface as 400
            // with an itemized body.
            AppError::Conflict(_)
            | AppError::AlreadyLiked
            | AppError::NotLiked
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::Conflict(msg) => ErrorResponse::message(msg.clone()),
            AppError::AlreadyLiked => ErrorResponse::message("Post already liked"),
            AppError::NotLiked => ErrorResponse::message("Post has not yet been liked"),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorResponse::message("Internal server error")
            }
            AppError::Validation(errors) => ErrorResponse::new(errors.clone()),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Constraint(msg) => AppError::Conflict(msg),
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<LikeError> for AppError {
    fn from(err: LikeError) -> Self {
        match err {
            LikeError::PostNotFound => AppError::NotFound("Post not found".to_string()),
            LikeError::AlreadyLiked => AppError::AlreadyLiked,
            LikeError::NotLiked => AppError::NotLiked,
            LikeError::Repo(e) => e.into(),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
