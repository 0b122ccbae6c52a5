//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Failures of the like/unlike toggle on a post.
///
/// The membership check has to happen inside the store's atomic update, so
/// the repository reports these alongside plain repository failures.
#[derive(Debug, Error)]
pub enum LikeError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Post already liked")]
    AlreadyLiked,

    #[error("Post has not yet been liked")]
    NotLiked,

    #[error(transparent)]
    Repo(#[from] RepoError),
}
