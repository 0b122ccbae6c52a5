//! # Devlink Core
//!
//! The domain layer of the Devlink social network backend.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{LikeError, RepoError};
