//! # Devlink Infrastructure
//!
//! Concrete implementations of the ports defined in `devlink-core`:
//! SeaORM-backed Postgres repositories, the JWT token service, Argon2
//! password hashing, and avatar derivation.

pub mod auth;
pub mod avatar;
pub mod database;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use database::{
    DatabaseConfig, DatabaseConnections, PostgresPostRepository, PostgresProfileRepository,
    PostgresUserRepository,
};
