//! Application state - shared across all handlers.

use std::sync::Arc;

use sea_orm::DbConn;

use devlink_core::ports::{
    PasswordService, PostRepository, ProfileRepository, TokenService, UserRepository,
};
use devlink_infra::auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
use devlink_infra::database::{
    PostgresPostRepository, PostgresProfileRepository, PostgresUserRepository,
};

/// Shared application state.
///
/// Everything in here is immutable after startup; per-request state lives in
/// the request itself.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
}

impl AppState {
    /// Build the application state over a live database connection.
    pub fn new(db: DbConn, jwt: JwtConfig) -> Self {
        Self {
            users: Arc::new(PostgresUserRepository::new(db.clone())),
            profiles: Arc::new(PostgresProfileRepository::new(db.clone())),
            posts: Arc::new(PostgresPostRepository::new(db)),
            tokens: Arc::new(JwtTokenService::new(jwt)),
            passwords: Arc::new(Argon2PasswordService::new()),
        }
    }
}
